//! The two smoke checks
//!
//! Each check prints its own report section and returns whether it passed.
//! No error escapes a check.

pub mod json_parse;
pub mod suggestion;
