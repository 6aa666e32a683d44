//! RV32I instruction decoder.
//!
//! Splits a 32-bit encoding into its component fields and reconstructs the
//! sign-extended immediate for each instruction format:
//!
//! - I: `imm[11:0] | rs1 | funct3 | rd | opcode`
//! - S: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
//! - B: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
//! - U: `imm[31:12] | rd | opcode`
//! - J: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
//!
//! B and J immediates are even byte offsets (bit 0 is implicit zero).

use crate::isa::instruction::{Decoded, Format, InstructionBits};

/// Decodes a 32-bit instruction into its component fields.
///
/// Never fails: an unknown opcode yields `format: None` and a zero
/// immediate, and the control unit reports the illegal encoding.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let format = Format::of_opcode(opcode);

    let imm = match format {
        Some(Format::I) => i_type_imm(inst),
        Some(Format::S) => s_type_imm(inst),
        Some(Format::B) => b_type_imm(inst),
        Some(Format::U) => u_type_imm(inst),
        Some(Format::J) => j_type_imm(inst),
        Some(Format::R) | None => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        format,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    }
}

/// I-type immediate: bits 31:20, sign-extended from 12 bits.
fn i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> 20
}

/// S-type immediate: `{[31:25], [11:7]}`, sign-extended from 12 bits.
fn s_type_imm(inst: u32) -> i32 {
    let low = (inst >> 7) & 0x1F;
    let high = (inst >> 25) & 0x7F;
    sign_extend((high << 5) | low, 12)
}

/// B-type immediate: `{[31], [7], [30:25], [11:8], 0}`, sign-extended from
/// 13 bits.
fn b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> 7) & 0x1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bit_12 = (inst >> 31) & 0x1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, 13)
}

/// U-type immediate: bits 31:12 in place, low 12 bits zero.
fn u_type_imm(inst: u32) -> i32 {
    (inst & 0xFFFF_F000) as i32
}

/// J-type immediate: `{[31], [19:12], [20], [30:21], 0}`, sign-extended from
/// 21 bits.
fn j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 0x1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = (inst >> 31) & 0x1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, 21)
}

/// Sign extends the low `bits` bits of `val` to a full 32-bit value.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((val << shift) as i32) >> shift
}
