//! Instruction Decode (ID) stage.

use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::signals::{self, ControlSignals};
use crate::isa::{decoder, disasm};
use crate::sim::simulator::Simulator;

/// Decodes the fetched instruction, reads the register file, derives the
/// control signals, and publishes everything to the ID/EX latch.
///
/// Register reads return committed values; forwarding from in-flight
/// producers happens in Execute. A decode miss does not stop the pipeline
/// here: the fault rides the latch so it can be reported in the cycle the
/// instruction would have executed, and dies quietly if a flush kills the
/// entry first.
pub fn decode_stage(sim: &mut Simulator) {
    let Some(fetched) = sim.if_id else {
        sim.id_ex = None;
        return;
    };

    let d = decoder::decode(fetched.inst);

    if sim.trace {
        eprintln!(
            "ID  pc={:#010x} {}",
            fetched.pc,
            disasm::disassemble(fetched.inst)
        );
    }

    let (ctrl, fault) = match signals::derive(&d, fetched.pc) {
        Ok(c) => (c, None),
        Err(f) => (ControlSignals::default(), Some(f)),
    };

    if ctrl.halt {
        sim.halt_pending = true;
    }

    sim.id_ex = Some(IdExEntry {
        pc: fetched.pc,
        inst: fetched.inst,
        rs1: d.rs1,
        rs2: d.rs2,
        rd: d.rd,
        imm: d.imm,
        rv1: sim.regs.read(d.rs1),
        rv2: sim.regs.read(d.rs2),
        ctrl,
        fault,
    });
}
