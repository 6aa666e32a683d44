//! Instruction disassembler for RV32I.
//!
//! Converts a 32-bit encoding into a human-readable mnemonic string for
//! debug tracing, logging, and test diagnostics.

use crate::isa::decoder::decode;
use crate::isa::{funct3, funct7, opcodes, EBREAK};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit RV32I instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown"` for
/// unrecognised encodings.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let (rd, rs1, rs2) = (xreg(d.rd), xreg(d.rs1), xreg(d.rs2));

    match d.opcode {
        opcodes::OP_LUI => format!("lui {}, {:#x}", rd, (d.imm as u32) >> 12),
        opcodes::OP_AUIPC => format!("auipc {}, {:#x}", rd, (d.imm as u32) >> 12),
        opcodes::OP_JAL => format!("jal {}, {}", rd, d.imm),
        opcodes::OP_JALR => format!("jalr {}, {}({})", rd, d.imm, rs1),
        opcodes::OP_BRANCH => {
            let mnemonic = match d.funct3 {
                funct3::BEQ => "beq",
                funct3::BNE => "bne",
                funct3::BLT => "blt",
                funct3::BGE => "bge",
                funct3::BLTU => "bltu",
                funct3::BGEU => "bgeu",
                _ => return "unknown".into(),
            };
            format!("{} {}, {}, {}", mnemonic, rs1, rs2, d.imm)
        }
        opcodes::OP_LOAD => {
            let mnemonic = match d.funct3 {
                funct3::LB => "lb",
                funct3::LH => "lh",
                funct3::LW => "lw",
                funct3::LBU => "lbu",
                funct3::LHU => "lhu",
                _ => return "unknown".into(),
            };
            format!("{} {}, {}({})", mnemonic, rd, d.imm, rs1)
        }
        opcodes::OP_STORE => {
            let mnemonic = match d.funct3 {
                funct3::SB => "sb",
                funct3::SH => "sh",
                funct3::SW => "sw",
                _ => return "unknown".into(),
            };
            format!("{} {}, {}({})", mnemonic, rs2, d.imm, rs1)
        }
        opcodes::OP_IMM => {
            let shamt = d.imm & 0x1F;
            match d.funct3 {
                funct3::ADD_SUB => format!("addi {}, {}, {}", rd, rs1, d.imm),
                funct3::SLT => format!("slti {}, {}, {}", rd, rs1, d.imm),
                funct3::SLTU => format!("sltiu {}, {}, {}", rd, rs1, d.imm),
                funct3::XOR => format!("xori {}, {}, {}", rd, rs1, d.imm),
                funct3::OR => format!("ori {}, {}, {}", rd, rs1, d.imm),
                funct3::AND => format!("andi {}, {}, {}", rd, rs1, d.imm),
                funct3::SLL => format!("slli {}, {}, {}", rd, rs1, shamt),
                funct3::SRL_SRA if d.funct7 == funct7::SRA => {
                    format!("srai {}, {}, {}", rd, rs1, shamt)
                }
                funct3::SRL_SRA => format!("srli {}, {}, {}", rd, rs1, shamt),
                _ => "unknown".into(),
            }
        }
        opcodes::OP_REG => {
            let mnemonic = match (d.funct3, d.funct7) {
                (funct3::ADD_SUB, funct7::BASE) => "add",
                (funct3::ADD_SUB, funct7::SUB) => "sub",
                (funct3::SLL, funct7::BASE) => "sll",
                (funct3::SLT, funct7::BASE) => "slt",
                (funct3::SLTU, funct7::BASE) => "sltu",
                (funct3::XOR, funct7::BASE) => "xor",
                (funct3::SRL_SRA, funct7::BASE) => "srl",
                (funct3::SRL_SRA, funct7::SRA) => "sra",
                (funct3::OR, funct7::BASE) => "or",
                (funct3::AND, funct7::BASE) => "and",
                _ => return "unknown".into(),
            };
            format!("{} {}, {}, {}", mnemonic, rd, rs1, rs2)
        }
        opcodes::OP_SYSTEM if inst == EBREAK => "ebreak".into(),
        _ => "unknown".into(),
    }
}
