//! The five pipeline stages.
//!
//! Each stage is a function over the simulator: it reads the latch its
//! upstream neighbour produced in the previous cycle and publishes its own.
//! The driver runs them in reverse order (WB, MEM, EX, ID, IF) so in-place
//! latches behave like clocked registers.

mod decode;
mod execute;
mod fetch;
mod memory;
mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
