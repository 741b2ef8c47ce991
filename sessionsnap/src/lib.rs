// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod config;
pub mod report;
pub mod utils;

pub use config::*;
