pub mod engine;
pub mod pipeline;
pub mod planner;
pub mod reader;
pub mod report;
pub mod writer;

pub use crate::domain::model::{ExtractedLists, Plan, RunReport, Username, UsernameList};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
