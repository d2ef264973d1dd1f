//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, repository, issue, and URL resolution tests
//! - `workflow_settings`: Label and template settings tests

mod field_resolution;
mod helpers;
