//! Calendar layout mode

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Layout of the calendar grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

impl_domain_status_conversions!(ViewMode {
    Month => "month",
    Week => "week",
});

/// Direction of a previous/next navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    /// `-1` for previous, `+1` for next.
    pub fn signum(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

impl_domain_status_conversions!(Step {
    Previous => "previous",
    Next => "next",
});
