//! User session: explicit state, reducer and the persistence coordinator

pub mod ports;
pub mod service;
pub mod state;

pub use ports::{DocumentStore, IdentityProvider};
pub use service::ScheduleService;
pub use state::{Action, AppState};
