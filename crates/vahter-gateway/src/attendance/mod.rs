//! Attendance page: form handlers and HTML rendering.

pub mod handler;
pub mod page;

pub use handler::{index, submit, AttendanceForm};
