//! Running a configured simulation

pub mod report;
pub mod session;

pub use report::{GenerationRecord, RunReport};
pub use session::Simulation;
