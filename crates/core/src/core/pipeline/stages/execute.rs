//! Execute (EX) stage.

use crate::common::Fault;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::signals::{OpASrc, OpBSrc};
use crate::core::units::alu::alu;
use crate::core::units::cmp::cmp;
use crate::sim::simulator::Simulator;

/// Runs the ALU and comparator over forwarded operands and resolves
/// control flow.
///
/// Returns the redirect target for a taken branch or jump; the driver
/// applies it after Fetch has run, flushing the two wrong-path
/// instructions fetched and decoded this cycle. A decode fault riding the
/// ID/EX latch is surfaced here, at the end of the cycle that would have
/// executed the instruction.
pub fn execute_stage(sim: &mut Simulator) -> Result<Option<u32>, Fault> {
    let Some(id) = sim.id_ex else {
        sim.ex_mem = None;
        return Ok(None);
    };

    if let Some(fault) = id.fault {
        return Err(fault);
    }

    let (fwd_a, fwd_b) = hazards::forward_rs(&id, &sim.ex_mem, &sim.wb_done);

    let op_a = match id.ctrl.a_src {
        OpASrc::Reg1 => fwd_a,
        OpASrc::Pc => id.pc,
        OpASrc::Zero => 0,
    };
    let op_b = match id.ctrl.b_src {
        OpBSrc::Reg2 => fwd_b,
        OpBSrc::Imm => id.imm as u32,
    };

    let alu_out = alu(id.ctrl.alu, op_a, op_b);

    let mut redirect = None;
    if id.ctrl.branch {
        if cmp(id.ctrl.cmp, fwd_a, fwd_b) {
            redirect = Some(id.pc.wrapping_add(id.imm as u32));
        }
    } else if id.ctrl.jump {
        let target = if id.ctrl.indirect {
            // JALR: target from rs1, bit 0 cleared per the ISA.
            fwd_a.wrapping_add(id.imm as u32) & !1
        } else {
            id.pc.wrapping_add(id.imm as u32)
        };
        redirect = Some(target);
    }

    if sim.trace {
        eprintln!(
            "EX  pc={:#010x} a={:#010x} b={:#010x} alu={:#010x}{}",
            id.pc,
            op_a,
            op_b,
            alu_out,
            match redirect {
                Some(t) => format!(" -> redirect {:#010x}", t),
                None => String::new(),
            }
        );
    }

    sim.ex_mem = Some(ExMemEntry {
        pc: id.pc,
        inst: id.inst,
        rd: id.rd,
        alu: alu_out,
        store_data: fwd_b,
        ctrl: id.ctrl,
    });

    Ok(redirect)
}
