mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{Config, ConvertConfig, DEFAULT_CONFIG_TEMPLATE, ParserConfig};
