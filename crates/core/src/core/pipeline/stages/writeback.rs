//! Writeback (WB) stage.

use crate::sim::simulator::{ExitReason, Simulator};

/// Commits the oldest in-flight instruction: writes the register file when
/// enabled and rd is not x0, and counts the retirement.
///
/// A retiring EBREAK sets the exit state; the driver ends the tick
/// immediately afterwards, so nothing younger commits in the same cycle.
pub fn wb_stage(sim: &mut Simulator) {
    let Some(wb) = sim.mem_wb else {
        return;
    };

    if sim.trace {
        eprintln!("WB  pc={:#010x} inst={:#010x}", wb.pc, wb.inst);
    }

    sim.stats.instructions_retired += 1;
    if wb.ctrl.mem_read {
        sim.stats.inst_load += 1;
    } else if wb.ctrl.mem_write {
        sim.stats.inst_store += 1;
    } else if wb.ctrl.branch || wb.ctrl.jump {
        sim.stats.inst_branch += 1;
    } else if wb.ctrl.halt {
        sim.stats.inst_system += 1;
    } else {
        sim.stats.inst_alu += 1;
    }

    if wb.ctrl.reg_write && wb.rd != 0 {
        sim.regs.write(wb.rd, wb.writeback_value());
    }

    if wb.ctrl.halt {
        sim.exit = Some(ExitReason::Breakpoint { pc: wb.pc });
    }
}
