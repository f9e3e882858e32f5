//! Calendar view commands

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use shiftcal_core::{Action, CalendarCell};
use shiftcal_domain::{
    local_today, month_name, to_date_key, DateKey, Result, Step, ViewMode, SHORT_WEEK_DAYS,
    WEEK_DAYS,
};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Everything needed to draw the calendar screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    /// Month name and year of the anchor, e.g. `Marzo 2024`.
    pub title: String,
    pub view_mode: ViewMode,
    pub anchor: DateKey,
    pub week_days: [&'static str; 7],
    pub short_week_days: [&'static str; 7],
    /// Rows of seven cells, Monday first.
    pub weeks: Vec<Vec<CalendarCell>>,
    pub selected_date: Option<DateKey>,
}

impl CalendarView {
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }
}

/// Previous/next month or week
pub async fn navigate_calendar(ctx: &AppContext, step: Step) -> Result<CalendarView> {
    execute_command("calendar::navigate_calendar", || async move {
        ctx.schedule.navigate(step)?;
        Ok(build_view(ctx, local_today()))
    })
    .await
}

/// Jump back to today
pub async fn go_to_today(ctx: &AppContext) -> Result<CalendarView> {
    execute_command("calendar::go_to_today", || async move {
        let today = local_today();
        ctx.schedule.dispatch(Action::GoToToday(today))?;
        Ok(build_view(ctx, today))
    })
    .await
}

/// Show the month or week containing `date`
pub async fn show_date(ctx: &AppContext, date: NaiveDate) -> Result<CalendarView> {
    execute_command("calendar::show_date", || async move {
        ctx.schedule.dispatch(Action::SetAnchor(date))?;
        Ok(build_view(ctx, local_today()))
    })
    .await
}

/// Show `month` (1-12) of the current year
pub async fn select_month(ctx: &AppContext, month: u32) -> Result<CalendarView> {
    execute_command("calendar::select_month", || async move {
        ctx.schedule.dispatch(Action::SelectMonth(month))?;
        Ok(build_view(ctx, local_today()))
    })
    .await
}

/// Show the current month of `year`
pub async fn select_year(ctx: &AppContext, year: i32) -> Result<CalendarView> {
    execute_command("calendar::select_year", || async move {
        ctx.schedule.dispatch(Action::SelectYear(year))?;
        Ok(build_view(ctx, local_today()))
    })
    .await
}

/// Switch between month and week layout
pub async fn set_view_mode(ctx: &AppContext, mode: ViewMode) -> Result<CalendarView> {
    execute_command("calendar::set_view_mode", || async move {
        ctx.schedule.set_view(mode)?;
        Ok(build_view(ctx, local_today()))
    })
    .await
}

/// Mark a day as selected (or clear the selection)
pub async fn select_date(ctx: &AppContext, date: Option<NaiveDate>) -> Result<CalendarView> {
    execute_command("calendar::select_date", || async move {
        ctx.schedule.select_date(date)?;
        Ok(build_view(ctx, local_today()))
    })
    .await
}

fn build_view(ctx: &AppContext, today: NaiveDate) -> CalendarView {
    let state = ctx.schedule.snapshot();
    let cells = ctx.schedule.calendar_cells(today);

    CalendarView {
        title: view_title(state.anchor),
        view_mode: state.view_mode,
        anchor: to_date_key(state.anchor),
        week_days: WEEK_DAYS,
        short_week_days: SHORT_WEEK_DAYS,
        weeks: cells.chunks(WEEK_DAYS.len()).map(<[CalendarCell]>::to_vec).collect(),
        selected_date: state.selected_date.map(to_date_key),
    }
}

fn view_title(anchor: NaiveDate) -> String {
    let month = month_name(anchor.month()).unwrap_or_default();
    format!("{month} {}", anchor.year())
}
