//! # Shiftboard Client
//!
//! Async client for the shift-request REST API.
//!
//! ## Architecture
//!
//! - **Api**: the [`api::ShiftApi`] trait, one method per endpoint
//! - **Client**: [`client::ApiClient`], the `reqwest` implementation that
//!   attaches the session cookie to every call
//! - **Response**: maps error statuses and bodies to `ShiftError`
//! - **Mock**: a `mockall` double of the trait for tests

/// Endpoint trait
pub mod api;
/// HTTP implementation
pub mod client;
/// Mock implementation for tests
pub mod mock;
/// Status and error-body mapping
pub mod response;

pub use api::ShiftApi;
pub use client::{ApiClient, SESSION_COOKIE};
