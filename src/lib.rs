// pitchZY contact API library

pub mod api;
pub mod config;
pub mod domain;
pub mod email;
pub mod errors;
pub mod observability;
pub mod rate_limit;

pub use self::config::Config;
pub use errors::{AppError, Result};
