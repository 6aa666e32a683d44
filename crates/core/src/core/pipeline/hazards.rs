//! Data hazard detection and operand forwarding.
//!
//! Read-after-write hazards are resolved without stalling by bypassing the
//! register file: the freshest in-flight value for a source register is
//! taken from the EX/MEM or MEM/WB latch. The one case forwarding cannot
//! cover is a load immediately followed by a consumer of its destination,
//! since the loaded value does not exist until Memory has run; that costs
//! one stall cycle.

use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// True when the opcode's format reads rs1.
fn uses_rs1(opcode: u32) -> bool {
    matches!(
        opcode,
        opcodes::OP_REG
            | opcodes::OP_IMM
            | opcodes::OP_LOAD
            | opcodes::OP_STORE
            | opcodes::OP_BRANCH
            | opcodes::OP_JALR
    )
}

/// True when the opcode's format reads rs2.
fn uses_rs2(opcode: u32) -> bool {
    matches!(
        opcode,
        opcodes::OP_REG | opcodes::OP_STORE | opcodes::OP_BRANCH
    )
}

/// Checks whether a load-use hazard requires a one-cycle stall.
///
/// `id_ex` holds the instruction currently in Execute; `if_id` holds the
/// instruction about to be decoded. A stall is needed when the former is a
/// load whose destination matches a source register the latter actually
/// uses. Source fields are only compared for formats that carry them, so
/// immediate bits aliasing the rs2 field never cost a spurious cycle.
pub fn need_stall_load_use(id_ex: &Option<IdExEntry>, if_id: &Option<IfIdEntry>) -> bool {
    let Some(ex) = id_ex else {
        return false;
    };
    if !ex.ctrl.mem_read || ex.rd == 0 {
        return false;
    }
    let Some(id) = if_id else {
        return false;
    };

    let opcode = id.inst.opcode();
    (uses_rs1(opcode) && ex.rd == id.inst.rs1()) || (uses_rs2(opcode) && ex.rd == id.inst.rs2())
}

/// Forwards source operand values for the instruction entering Execute.
///
/// Starts from the register-file values read in Decode and overlays newer
/// in-flight results: first the instruction that just committed (MEM/WB),
/// then the one a single cycle ahead (EX/MEM), so the newest producer wins.
/// EX/MEM loads are skipped: their data arrives only after Memory, and the
/// load-use stall guarantees they are never needed from there.
///
/// Returns the resolved `(rs1, rs2)` values.
pub fn forward_rs(
    id: &IdExEntry,
    ex_mem: &Option<ExMemEntry>,
    mem_wb: &Option<MemWbEntry>,
) -> (u32, u32) {
    let mut a = id.rv1;
    let mut b = id.rv2;

    if let Some(wb) = mem_wb {
        if wb.ctrl.reg_write && wb.rd != 0 {
            let val = wb.writeback_value();
            if wb.rd == id.rs1 {
                a = val;
            }
            if wb.rd == id.rs2 {
                b = val;
            }
        }
    }

    if let Some(ex) = ex_mem {
        if ex.ctrl.reg_write && ex.rd != 0 && !ex.ctrl.mem_read {
            let val = ex.result();
            if ex.rd == id.rs1 {
                a = val;
            }
            if ex.rd == id.rs2 {
                b = val;
            }
        }
    }

    (a, b)
}
