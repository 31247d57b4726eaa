pub mod analyze;
pub mod config;
pub mod employees;
pub mod flow;
pub mod logging;
pub mod utils;
