//! Training Plan - a terminal view of the rowing training schedule.
//!
//! This crate fetches the training sessions from the training plan server once
//! per mount and renders them as a table with today's session highlighted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases.
pub mod application;
/// Domain layer containing entities, errors, view state and port definitions.
pub mod domain;
/// Infrastructure layer containing the HTTP adapter and configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "training-plan";
