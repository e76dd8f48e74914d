//! Training data HTTP client.

mod client;
mod dto;

pub use client::{TRAINING_DATA_PATH, TrainingDataClient};
pub use dto::TrainingSessionRecord;
