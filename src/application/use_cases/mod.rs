//! Use case implementations.

mod load_schedule_use_case;

pub use load_schedule_use_case::LoadScheduleUseCase;
