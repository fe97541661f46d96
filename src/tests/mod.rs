//! integrated tests
pub mod toolkit;

mod event;
