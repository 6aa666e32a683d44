//! Instruction Fetch (IF) stage.

use crate::common::constants::{INSTRUCTION_BYTES, PC_ALIGN_MASK};
use crate::common::Fault;
use crate::core::pipeline::latches::IfIdEntry;
use crate::sim::simulator::Simulator;

/// Fetches the instruction at the current program counter and publishes it
/// to the IF/ID latch, advancing the counter by one word.
///
/// At end-of-IMEM a bubble is published and the counter holds; the driver
/// terminates once the in-flight instructions drain. After a halt has been
/// decoded, fetch also publishes bubbles so nothing younger than the
/// EBREAK enters the pipeline.
pub fn fetch_stage(sim: &mut Simulator) -> Result<(), Fault> {
    if sim.halt_pending {
        sim.if_id = None;
        return Ok(());
    }

    if sim.pc & PC_ALIGN_MASK != 0 {
        return Err(Fault::MisalignedFetch { pc: sim.pc });
    }

    match sim.imem.fetch(sim.pc) {
        Some(inst) => {
            if sim.trace {
                eprintln!("IF  pc={:#010x} inst={:#010x}", sim.pc, inst);
            }
            sim.if_id = Some(IfIdEntry { pc: sim.pc, inst });
            sim.pc = sim.pc.wrapping_add(INSTRUCTION_BYTES);
        }
        None => sim.if_id = None,
    }

    Ok(())
}
