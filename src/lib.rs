// src/lib.rs

pub mod api;
pub mod apod;
pub mod config;
pub mod error;
pub mod mesostic;
pub mod store;
pub mod tasks;

pub use error::{Error, Result};
pub use mesostic::build_mesostic;
