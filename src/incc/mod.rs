pub mod engine;
pub mod store;

pub use engine::{EscalationEngine, EscalationError};
pub use store::{IndexLoadError, IndexSeriesStore};
