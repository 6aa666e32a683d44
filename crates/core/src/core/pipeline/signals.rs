//! Control-signal derivation.
//!
//! The control unit maps a decoded instruction onto the flags that steer
//! every downstream stage: ALU and comparator operations, operand muxes,
//! memory width, write enables, and control-flow kind. A decode miss is a
//! fatal illegal-instruction fault carried to the execute stage.

use crate::common::Fault;
use crate::core::mem::MemWidth;
use crate::core::units::alu::AluOp;
use crate::core::units::cmp::CmpOp;
use crate::isa::instruction::Decoded;
use crate::isa::{funct3, funct7, opcodes, EBREAK};

/// Source of ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Forwarded rs1 value.
    #[default]
    Reg1,
    /// Program counter of the instruction (AUIPC).
    Pc,
    /// Constant zero (LUI).
    Zero,
}

/// Source of ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Sign-extended immediate.
    #[default]
    Imm,
    /// Forwarded rs2 value.
    Reg2,
}

/// Per-instruction control flags, derived once in Decode and carried down
/// the pipeline unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Writeback stage writes rd.
    pub reg_write: bool,
    /// Memory stage performs a load.
    pub mem_read: bool,
    /// Memory stage performs a store.
    pub mem_write: bool,
    /// Conditional branch; taken iff the comparator agrees.
    pub branch: bool,
    /// Unconditional control transfer (JAL/JALR); rd receives PC+4.
    pub jump: bool,
    /// Jump target comes from rs1 (JALR) rather than the PC.
    pub indirect: bool,
    /// EBREAK: retiring this instruction halts the simulation.
    pub halt: bool,
    /// Sub-word loads sign-extend.
    pub signed_load: bool,
    /// Access width for loads and stores.
    pub width: MemWidth,
    /// ALU operation.
    pub alu: AluOp,
    /// Comparator operation (meaningful only when `branch` is set).
    pub cmp: CmpOp,
    /// Operand-A mux.
    pub a_src: OpASrc,
    /// Operand-B mux.
    pub b_src: OpBSrc,
}

/// Derives the control signals for a decoded instruction.
///
/// Returns an [`Fault::IllegalInstruction`] for opcodes outside the RV32I
/// subset or malformed funct fields within it.
pub fn derive(d: &Decoded, pc: u32) -> Result<ControlSignals, Fault> {
    let mut c = ControlSignals::default();
    let illegal = Fault::IllegalInstruction { pc, inst: d.raw };

    match d.opcode {
        opcodes::OP_LUI => {
            c.reg_write = true;
            c.a_src = OpASrc::Zero;
        }
        opcodes::OP_AUIPC => {
            c.reg_write = true;
            c.a_src = OpASrc::Pc;
        }
        opcodes::OP_JAL => {
            c.reg_write = true;
            c.jump = true;
        }
        opcodes::OP_JALR => {
            if d.funct3 != 0 {
                return Err(illegal);
            }
            c.reg_write = true;
            c.jump = true;
            c.indirect = true;
        }
        opcodes::OP_BRANCH => {
            c.branch = true;
            c.b_src = OpBSrc::Reg2;
            c.cmp = match d.funct3 {
                funct3::BEQ => CmpOp::Eq,
                funct3::BNE => CmpOp::Ne,
                funct3::BLT => CmpOp::Lt,
                funct3::BGE => CmpOp::Ge,
                funct3::BLTU => CmpOp::Ltu,
                funct3::BGEU => CmpOp::Geu,
                _ => return Err(illegal),
            };
        }
        opcodes::OP_LOAD => {
            c.reg_write = true;
            c.mem_read = true;
            let (width, signed) = match d.funct3 {
                funct3::LB => (MemWidth::Byte, true),
                funct3::LH => (MemWidth::Half, true),
                funct3::LW => (MemWidth::Word, true),
                funct3::LBU => (MemWidth::Byte, false),
                funct3::LHU => (MemWidth::Half, false),
                _ => return Err(illegal),
            };
            c.width = width;
            c.signed_load = signed;
        }
        opcodes::OP_STORE => {
            c.mem_write = true;
            c.width = match d.funct3 {
                funct3::SB => MemWidth::Byte,
                funct3::SH => MemWidth::Half,
                funct3::SW => MemWidth::Word,
                _ => return Err(illegal),
            };
        }
        opcodes::OP_IMM => {
            c.reg_write = true;
            c.alu = match d.funct3 {
                funct3::ADD_SUB => AluOp::Add,
                funct3::SLT => AluOp::Slt,
                funct3::SLTU => AluOp::Sltu,
                funct3::XOR => AluOp::Xor,
                funct3::OR => AluOp::Or,
                funct3::AND => AluOp::And,
                // Shift-immediate encodings reuse the funct7 bits of the
                // immediate field; anything else there is malformed.
                funct3::SLL if d.funct7 == funct7::BASE => AluOp::Sll,
                funct3::SRL_SRA if d.funct7 == funct7::BASE => AluOp::Srl,
                funct3::SRL_SRA if d.funct7 == funct7::SRA => AluOp::Sra,
                _ => return Err(illegal),
            };
        }
        opcodes::OP_REG => {
            c.reg_write = true;
            c.b_src = OpBSrc::Reg2;
            c.alu = match (d.funct3, d.funct7) {
                (funct3::ADD_SUB, funct7::BASE) => AluOp::Add,
                (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
                (funct3::SLL, funct7::BASE) => AluOp::Sll,
                (funct3::SLT, funct7::BASE) => AluOp::Slt,
                (funct3::SLTU, funct7::BASE) => AluOp::Sltu,
                (funct3::XOR, funct7::BASE) => AluOp::Xor,
                (funct3::SRL_SRA, funct7::BASE) => AluOp::Srl,
                (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
                (funct3::OR, funct7::BASE) => AluOp::Or,
                (funct3::AND, funct7::BASE) => AluOp::And,
                _ => return Err(illegal),
            };
        }
        opcodes::OP_SYSTEM => {
            // Only EBREAK from the system group is supported.
            if d.raw != EBREAK {
                return Err(illegal);
            }
            c.halt = true;
        }
        _ => return Err(illegal),
    }

    Ok(c)
}
