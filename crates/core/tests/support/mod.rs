//! Shared test helpers for `shiftcal-core` integration tests.

#![allow(dead_code)]

pub mod repositories;

use std::sync::Arc;

use chrono::NaiveDate;
use shiftcal_core::ScheduleService;
use shiftcal_domain::UserId;

pub use repositories::{MockDocumentStore, MockIdentityProvider};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn test_user() -> UserId {
    UserId::new("uid-test").expect("valid user id")
}

/// Service over the given mocks, anchored on 15 March 2024.
pub fn service_with(store: &MockDocumentStore, identity: &MockIdentityProvider) -> ScheduleService {
    ScheduleService::new(Arc::new(store.clone()), Arc::new(identity.clone()), ymd(2024, 3, 15))
}
