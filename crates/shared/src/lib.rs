pub mod config;
pub mod error;
pub mod model;
pub mod utils;

pub use config::{Capabilities, FirebaseIdentity, WorkerConfig};
pub use error::{ConfigError, PayloadError};
