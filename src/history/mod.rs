pub mod analytics;
pub mod log;
