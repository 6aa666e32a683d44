//! Memory (MEM) stage.

use crate::common::Fault;
use crate::core::pipeline::latches::MemWbEntry;
use crate::sim::simulator::Simulator;

/// Performs the data-memory access for loads and stores.
///
/// The ALU result from Execute is the byte address; sub-word accesses are
/// little-endian. Bubbles and non-memory instructions pass through without
/// touching memory. With a configured memory bound, out-of-range accesses
/// are fatal from this cycle.
pub fn mem_stage(sim: &mut Simulator) -> Result<(), Fault> {
    let Some(ex) = sim.ex_mem else {
        sim.mem_wb = None;
        return Ok(());
    };

    let addr = ex.alu;
    let mut load_data = 0;

    if ex.ctrl.mem_read {
        if !sim.dmem.in_bounds(addr, ex.ctrl.width.bytes()) {
            return Err(Fault::LoadAccessFault { pc: ex.pc, addr });
        }
        load_data = sim.dmem.load(addr, ex.ctrl.width, ex.ctrl.signed_load);
        if sim.trace {
            eprintln!(
                "MEM pc={:#010x} load  [{:#010x}] -> {:#010x}",
                ex.pc, addr, load_data
            );
        }
    } else if ex.ctrl.mem_write {
        if !sim.dmem.in_bounds(addr, ex.ctrl.width.bytes()) {
            return Err(Fault::StoreAccessFault { pc: ex.pc, addr });
        }
        sim.dmem.store(addr, ex.ctrl.width, ex.store_data);
        if sim.trace {
            eprintln!(
                "MEM pc={:#010x} store [{:#010x}] <- {:#010x}",
                ex.pc, addr, ex.store_data
            );
        }
    }

    sim.mem_wb = Some(MemWbEntry {
        pc: ex.pc,
        inst: ex.inst,
        rd: ex.rd,
        alu: ex.alu,
        load_data,
        ctrl: ex.ctrl,
    });

    Ok(())
}
