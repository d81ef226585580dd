mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{ColumnConfig, Config, InputConfig, OutputConfig};
pub use validation::validate_config_semantics;
