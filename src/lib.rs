pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use config::CliConfig;
pub use core::{AgeBracket, FormInput, PageState, ProfileCard, ValidationErrors};
pub use utils::error::{AppError, Result};
