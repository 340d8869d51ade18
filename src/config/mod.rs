mod settings;

pub use settings::{QueueConfig, ServerConfig, Settings, ValidationConfig};
