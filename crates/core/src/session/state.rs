//! Explicit application state and its reducer
//!
//! Every user action is an [`Action`]; [`AppState::apply`] turns the current
//! state into the next one without I/O. The coordinator owns persistence.

use chrono::NaiveDate;
use shiftcal_domain::constants::default_shift_types;
use shiftcal_domain::{
    ensure_keyable, AuthState, Result, ShiftTypeId, Step, UserDocument, UserId, ViewMode,
};
use tracing::debug;

use crate::calendar::{go_to_today, navigate, select_month, select_year, CalendarGrid};
use crate::registry::ShiftTypeRegistry;
use crate::schedule::ShiftSchedule;

/// User-triggered transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Step),
    GoToToday(NaiveDate),
    /// Show the month or week containing a given date.
    SetAnchor(NaiveDate),
    SelectMonth(u32),
    SelectYear(i32),
    SetView(ViewMode),
    SelectDate(Option<NaiveDate>),
    AssignShift {
        start: NaiveDate,
        end: Option<NaiveDate>,
        type_id: ShiftTypeId,
        notes: String,
    },
    DeleteShift(NaiveDate),
    ReplaceShiftTypes(ShiftTypeRegistry),
    /// Document fetched for a freshly signed-in user (`None` when absent).
    LoadDocument {
        user: UserId,
        document: Option<UserDocument>,
    },
    /// Identity still resolving.
    AwaitIdentity,
    SignOut,
}

/// Everything the calendar screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub session: AuthState,
    pub anchor: NaiveDate,
    pub view_mode: ViewMode,
    pub shift_types: ShiftTypeRegistry,
    pub schedule: ShiftSchedule,
    pub selected_date: Option<NaiveDate>,
    pub loading: bool,
}

impl AppState {
    /// Initial state: identity unresolved, calendar on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            session: AuthState::Loading,
            anchor: today,
            view_mode: ViewMode::default(),
            shift_types: ShiftTypeRegistry::new(),
            schedule: ShiftSchedule::new(),
            selected_date: None,
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&UserId> {
        self.session.user()
    }

    /// Grid for the current anchor and view mode.
    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::new(self.anchor, self.view_mode)
    }

    /// Next state after `action`.
    ///
    /// Fails only on invalid input (inverted range, bad month, a date outside
    /// the years a key can carry); the state is
    /// consumed either way, so callers apply to a clone when they need to
    /// keep the previous one.
    pub fn apply(mut self, action: Action) -> Result<Self> {
        debug!(action = action_label(&action), "applying action");

        match action {
            Action::Navigate(step) => self.anchor = navigate(self.anchor, self.view_mode, step),
            Action::GoToToday(today) => self.anchor = go_to_today(ensure_keyable(today)?),
            Action::SetAnchor(date) => self.anchor = ensure_keyable(date)?,
            Action::SelectMonth(month) => self.anchor = select_month(self.anchor, month)?,
            Action::SelectYear(year) => self.anchor = select_year(self.anchor, year)?,
            Action::SetView(mode) => self.view_mode = mode,
            Action::SelectDate(date) => self.selected_date = date,
            Action::AssignShift { start, end, type_id, notes } => {
                // Editing a day that already has a shift saves that day only.
                let end = if self.schedule.contains(start) { None } else { end };
                self.schedule = self.schedule.assign_range(start, end, &type_id, &notes)?;
                self.selected_date = None;
            }
            Action::DeleteShift(date) => {
                self.schedule = self.schedule.delete_at(date);
                self.selected_date = None;
            }
            Action::ReplaceShiftTypes(registry) => self.shift_types = registry,
            Action::LoadDocument { user, document } => {
                let document = document.unwrap_or_default();
                self.shift_types =
                    ShiftTypeRegistry::from_map(document.shift_types.unwrap_or_else(default_shift_types));
                self.schedule = ShiftSchedule::from_map(document.shifts.unwrap_or_default());
                self.session = AuthState::SignedIn(user);
                self.loading = false;
            }
            Action::AwaitIdentity => {
                self.session = AuthState::Loading;
                self.loading = true;
            }
            Action::SignOut => {
                self.session = AuthState::SignedOut;
                self.shift_types = ShiftTypeRegistry::new();
                self.schedule = ShiftSchedule::new();
                self.selected_date = None;
                self.loading = false;
            }
        }

        Ok(self)
    }
}

fn action_label(action: &Action) -> &'static str {
    match action {
        Action::Navigate(_) => "navigate",
        Action::GoToToday(_) => "go_to_today",
        Action::SetAnchor(_) => "set_anchor",
        Action::SelectMonth(_) => "select_month",
        Action::SelectYear(_) => "select_year",
        Action::SetView(_) => "set_view",
        Action::SelectDate(_) => "select_date",
        Action::AssignShift { .. } => "assign_shift",
        Action::DeleteShift(_) => "delete_shift",
        Action::ReplaceShiftTypes(_) => "replace_shift_types",
        Action::LoadDocument { .. } => "load_document",
        Action::AwaitIdentity => "await_identity",
        Action::SignOut => "sign_out",
    }
}
