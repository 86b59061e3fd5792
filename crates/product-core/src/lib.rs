pub mod config;
pub mod types;

pub use config::{ConfigError, ExclusionList, ProcessorConfig};
pub use types::{Attribute, Product};
