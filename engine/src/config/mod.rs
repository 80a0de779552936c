mod config_format;
mod config_source;
mod config_store;
mod validate;

pub use config_format::{ConfigFormat, YamlConfigFormat};
pub use config_source::{ConfigSource, FileConfigSource};
pub use config_store::ConfigStore;
pub use validate::Validate;
