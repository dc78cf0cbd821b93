pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{engine::PlannerEngine, pipeline::UnfollowPipeline};
pub use crate::core::{ConfigProvider, Pipeline, Plan, RunReport, Storage, Username, UsernameList};
pub use crate::utils::error::{PlannerError, Result};
