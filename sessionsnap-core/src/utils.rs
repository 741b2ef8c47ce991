//! Various helpers shared by the core modules.
pub mod child_process;
pub mod helpers;
pub mod process_info;
