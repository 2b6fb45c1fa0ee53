//! Integration test harness.

mod helpers;

mod card_test;
mod health_test;
mod sources_test;
