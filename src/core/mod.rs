pub mod config;
pub mod constants;
pub mod display;
pub mod geo;
