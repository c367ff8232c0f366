pub mod config;
pub mod modules;
pub mod utils;
