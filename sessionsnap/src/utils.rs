pub mod log;
pub mod signals;
