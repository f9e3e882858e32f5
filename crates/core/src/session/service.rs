//! Schedule coordinator - session, edits and persistence
//!
//! Owns the [`AppState`] and is the only place that awaits the ports. Local
//! state is updated before the write is issued; a failed write is reported
//! but not rolled back, so local state may run ahead of the stored document
//! until the next successful write or reload.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use shiftcal_domain::constants::default_shift_types;
use shiftcal_domain::{
    AuthState, DocumentPatch, Result, ShiftCalError, ShiftMap, Step, UserId, ViewMode,
};
use tracing::{info, warn};

use super::ports::{DocumentStore, IdentityProvider};
use super::state::{Action, AppState};
use crate::calendar::{build_cells, CalendarCell};
use crate::registry::ShiftTypeRegistry;
use crate::schedule::ShiftSchedule;

/// Application state coordinator
pub struct ScheduleService {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,
    state: RwLock<AppState>,
}

impl ScheduleService {
    /// Create a coordinator with the calendar anchored on `today`.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        today: NaiveDate,
    ) -> Self {
        Self { store, identity, state: RwLock::new(AppState::new(today)) }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Apply a local-only transition (navigation, view, selection).
    ///
    /// Transitions that must reach the store go through the dedicated
    /// methods instead.
    pub fn dispatch(&self, action: Action) -> Result<AppState> {
        let mut guard = self.state.write();
        let next = guard.clone().apply(action)?;
        *guard = next.clone();
        Ok(next)
    }

    /// Previous/next month or week, depending on the view mode.
    pub fn navigate(&self, step: Step) -> Result<AppState> {
        self.dispatch(Action::Navigate(step))
    }

    pub fn set_view(&self, mode: ViewMode) -> Result<AppState> {
        self.dispatch(Action::SetView(mode))
    }

    pub fn select_date(&self, date: Option<NaiveDate>) -> Result<AppState> {
        self.dispatch(Action::SelectDate(date))
    }

    /// Resolve the identity and load the user's document.
    ///
    /// A user without a stored document gets the default shift types and an
    /// empty shift mapping, written back as their initial document.
    pub async fn load_session(&self) -> Result<AppState> {
        let user = match self.identity.current().await? {
            AuthState::Loading => return self.dispatch(Action::AwaitIdentity),
            AuthState::SignedOut => return self.dispatch(Action::SignOut),
            AuthState::SignedIn(user) => user,
        };

        let document = self.store.read(&user).await.map_err(persistence_error)?;

        if document.is_none() {
            info!(user = %user, "no stored document, writing defaults");
            self.store
                .write(&user, DocumentPatch::full(default_shift_types(), ShiftMap::new()))
                .await
                .map_err(persistence_error)?;
        }

        let state = self.dispatch(Action::LoadDocument { user: user.clone(), document })?;
        info!(
            user = %user,
            shift_types = state.shift_types.len(),
            shifts = state.schedule.len(),
            "session loaded"
        );
        Ok(state)
    }

    /// Set (or with an empty `type_id`, clear) the shift on every day of
    /// `[start, end]` and persist the shift mapping.
    pub async fn assign_shift(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
        type_id: &str,
        notes: &str,
    ) -> Result<ShiftSchedule> {
        let action = Action::AssignShift {
            start,
            end,
            type_id: type_id.to_string(),
            notes: notes.to_string(),
        };
        self.update_schedule(action).await
    }

    /// Remove the shift on `date` and persist the shift mapping.
    pub async fn delete_shift(&self, date: NaiveDate) -> Result<ShiftSchedule> {
        self.update_schedule(Action::DeleteShift(date)).await
    }

    /// Replace the registry with `registry` minus blank-named types and
    /// persist the shift-type mapping.
    pub async fn save_shift_types(&self, registry: &ShiftTypeRegistry) -> Result<ShiftTypeRegistry> {
        let user = self.require_user()?;
        let sanitized = registry.sanitize_for_save();

        self.dispatch(Action::ReplaceShiftTypes(sanitized.clone()))?;
        self.persist(&user, DocumentPatch::shift_types(sanitized.as_map().clone())).await?;

        Ok(sanitized)
    }

    /// End the session and clear the in-memory data.
    pub async fn sign_out(&self) -> Result<AppState> {
        self.identity.sign_out().await?;
        let state = self.dispatch(Action::SignOut)?;
        info!("signed out");
        Ok(state)
    }

    /// Render model for the current anchor and view mode.
    pub fn calendar_cells(&self, today: NaiveDate) -> Vec<CalendarCell> {
        let state = self.state.read();
        build_cells(&state.grid(), today, &state.schedule, &state.shift_types)
    }

    /// Current shift types, for editing.
    pub fn shift_types(&self) -> ShiftTypeRegistry {
        self.state.read().shift_types.clone()
    }

    async fn update_schedule(&self, action: Action) -> Result<ShiftSchedule> {
        let user = self.require_user()?;
        let schedule = self.dispatch(action)?.schedule;
        self.persist(&user, DocumentPatch::shifts(schedule.as_map().clone())).await?;
        Ok(schedule)
    }

    async fn persist(&self, user: &UserId, patch: DocumentPatch) -> Result<()> {
        let fields = patch_fields(&patch);
        match self.store.write(user, patch).await {
            Ok(()) => {
                info!(user = %user, fields, "document saved");
                Ok(())
            }
            Err(err) => {
                warn!(user = %user, fields, error = %err, "document write failed, local state kept");
                Err(persistence_error(err))
            }
        }
    }

    fn require_user(&self) -> Result<UserId> {
        self.state
            .read()
            .user()
            .cloned()
            .ok_or_else(|| ShiftCalError::Unauthenticated("sign in to save changes".into()))
    }
}

fn patch_fields(patch: &DocumentPatch) -> &'static str {
    match (&patch.shift_types, &patch.shifts) {
        (Some(_), Some(_)) => "shiftTypes,shifts",
        (Some(_), None) => "shiftTypes",
        (None, Some(_)) => "shifts",
        (None, None) => "",
    }
}

fn persistence_error(err: ShiftCalError) -> ShiftCalError {
    match err {
        ShiftCalError::Persistence(_) => err,
        other => ShiftCalError::Persistence(other.to_string()),
    }
}

