// ABOUTME: Shared helpers for integration tests

pub mod axum_test;
pub mod state;
