pub mod engine;
pub mod key;
