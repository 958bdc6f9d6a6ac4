#![allow(unused_imports)]

pub mod config;
pub mod error;

pub use config::EngineSettings;
pub use error::{AppError, Result};
