//! Five-stage in-order pipeline: control signals, inter-stage latches,
//! hazard resolution, and the stage transformers themselves.

pub mod hazards;
pub mod latches;
pub mod signals;
pub mod stages;
