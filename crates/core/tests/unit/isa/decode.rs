//! Decoder tests: field extraction and immediate reconstruction for every
//! instruction format, checked against hand-assembled encodings.

use crate::common::builder::inst;
use rv32sim_core::isa::decoder::decode;
use rv32sim_core::isa::instruction::Format;
use rv32sim_core::isa::opcodes;

#[test]
fn decodes_addi_fields() {
    // addi x1, x0, 5 == 0x00500093
    let d = decode(0x0050_0093);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.format, Some(Format::I));
    assert_eq!(d.rd, 1);
    assert_eq!(d.rs1, 0);
    assert_eq!(d.funct3, 0);
    assert_eq!(d.imm, 5);
}

#[test]
fn decodes_negative_i_immediate() {
    let d = decode(inst().addi(1, 1, -3).build());
    assert_eq!(d.imm, -3);
    assert_eq!(d.rs1, 1);
}

#[test]
fn i_immediate_covers_full_range() {
    assert_eq!(decode(inst().addi(1, 0, 2047).build()).imm, 2047);
    assert_eq!(decode(inst().addi(1, 0, -2048).build()).imm, -2048);
}

#[test]
fn decodes_r_type_fields() {
    let d = decode(inst().sub(3, 1, 2).build());
    assert_eq!(d.opcode, opcodes::OP_REG);
    assert_eq!(d.format, Some(Format::R));
    assert_eq!(d.rd, 3);
    assert_eq!(d.rs1, 1);
    assert_eq!(d.rs2, 2);
    assert_eq!(d.funct7, 0b0100000);
    assert_eq!(d.imm, 0, "R format carries no immediate");
}

#[test]
fn decodes_s_type_immediate() {
    // sw x2, 0(x0) == 0x00202023
    let d = decode(0x0020_2023);
    assert_eq!(d.format, Some(Format::S));
    assert_eq!(d.rs1, 0);
    assert_eq!(d.rs2, 2);
    assert_eq!(d.imm, 0);

    let d = decode(inst().sw(5, 6, -20).build());
    assert_eq!(d.imm, -20);
    let d = decode(inst().sw(5, 6, 2047).build());
    assert_eq!(d.imm, 2047);
}

#[test]
fn decodes_b_type_immediate() {
    // beq x1, x2, +8 == 0x00208463
    let d = decode(0x0020_8463);
    assert_eq!(d.format, Some(Format::B));
    assert_eq!(d.rs1, 1);
    assert_eq!(d.rs2, 2);
    assert_eq!(d.imm, 8);

    let d = decode(inst().bne(1, 0, -4).build());
    assert_eq!(d.imm, -4);

    // Extremes of the 13-bit even offset.
    assert_eq!(decode(inst().beq(0, 0, 4094).build()).imm, 4094);
    assert_eq!(decode(inst().beq(0, 0, -4096).build()).imm, -4096);
}

#[test]
fn decodes_u_type_immediate() {
    // lui x1, 0x12345 == 0x123450b7
    let d = decode(0x1234_50B7);
    assert_eq!(d.format, Some(Format::U));
    assert_eq!(d.rd, 1);
    assert_eq!(d.imm, 0x1234_5000);

    // The upper immediate is MSB-aligned, not sign-extended.
    let d = decode(inst().lui(1, 0xFFFFF).build());
    assert_eq!(d.imm as u32, 0xFFFF_F000);
}

#[test]
fn decodes_j_type_immediate() {
    // jal x1, +8 == 0x008000ef
    let d = decode(0x0080_00EF);
    assert_eq!(d.format, Some(Format::J));
    assert_eq!(d.rd, 1);
    assert_eq!(d.imm, 8);

    let d = decode(inst().jal(0, -8).build());
    assert_eq!(d.imm, -8);

    // Extremes of the 21-bit even offset.
    assert_eq!(decode(inst().jal(0, 1_048_574).build()).imm, 1_048_574);
    assert_eq!(decode(inst().jal(0, -1_048_576).build()).imm, -1_048_576);
}

#[test]
fn unknown_opcode_has_no_format() {
    let d = decode(0xFFFF_FFFF);
    assert_eq!(d.format, None);
    assert_eq!(d.imm, 0);
}

#[test]
fn register_fields_extracted_for_all_indices() {
    for r in 0..32u32 {
        let d = decode(inst().add(r, r, r).build());
        assert_eq!(d.rd, r as usize);
        assert_eq!(d.rs1, r as usize);
        assert_eq!(d.rs2, r as usize);
    }
}
