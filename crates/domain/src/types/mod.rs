//! Domain types and models

pub mod clock;
pub mod date_key;
pub mod document;
pub mod shift;
pub mod shift_type;
pub mod user;
pub mod view;

pub use clock::ClockTime;
pub use date_key::{
    at_local_noon, date_key_from_local, ensure_keyable, from_date_key, is_keyable, local_today,
    parse_date_key, to_date_key, DateKey, MAX_KEY_YEAR, MIN_KEY_YEAR,
};
pub use document::{DocumentPatch, UserDocument};
pub use shift::{check_shift_keys, ShiftMap, ShiftRecord};
pub use shift_type::{ShiftType, ShiftTypeId, ShiftTypeMap};
pub use user::{AuthState, UserId};
pub use view::{Step, ViewMode};
