pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{connect, health_check};
