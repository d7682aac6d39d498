//! HTTP-level tests against the full router with in-memory stores.

mod export_test;
mod health_test;
mod helpers;
mod users_test;
