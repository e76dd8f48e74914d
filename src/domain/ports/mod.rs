mod training_data_port;

pub use training_data_port::TrainingDataPort;
