//! Cycle-accurate five-stage RV32I pipeline simulator.
//!
//! This crate models an in-order pipelined processor for the RV32I base
//! integer instruction set:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback),
//!    register file, instruction and data memory, ALU and comparator.
//! 2. **Hazards:** RAW forwarding from EX/MEM and MEM/WB, load-use stalls,
//!    and flushes on taken branches and jumps.
//! 3. **ISA:** Decoding, immediate generation, and disassembly for RV32I.
//! 4. **Simulation:** Driver, program-image loader, configuration, and
//!    statistics collection.

/// Common constants and fault definitions.
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Processor core (register file, memories, functional units, pipeline).
pub mod core;
/// Instruction set (decode, instruction fields, disassembly).
pub mod isa;
/// Simulator driver and program-image loader.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main driver type; owns all architectural and pipeline state.
pub use crate::sim::simulator::{ExitReason, Simulator};
