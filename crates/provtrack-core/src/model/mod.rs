pub mod data_key;
pub mod launch_mode;
pub mod parameters;
pub mod record;

pub use data_key::DataKey;
pub use launch_mode::LaunchMode;
pub use parameters::{ParameterPath, ParameterSet, ParameterValue, Scalar};
pub use record::{Dependency, Executable, PlatformInformation, Record, Repository};
