//! Application layer with use cases.

/// Use case implementations.
pub mod use_cases;

pub use use_cases::LoadScheduleUseCase;
