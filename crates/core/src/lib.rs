//! # Shiftboard Core
//!
//! Domain types shared by the Shiftboard client and console.
//!
//! - **Models**: wire records of the shift-request API and client-side validation
//! - **Dates**: inclusive date ranges and display helpers
//! - **Grid**: the availability grid derived from a request's entries
//! - **Errors**: the error type every fallible operation returns

/// Calendar ranges and formatting
pub mod dates;
/// Error types
pub mod errors;
/// Availability grid construction
pub mod grid;
/// API records
pub mod models;
