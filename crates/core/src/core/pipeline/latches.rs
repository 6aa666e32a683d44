//! Pipeline latch entries for inter-stage communication.
//!
//! Each latch between adjacent stages holds an `Option<Entry>`: `Some` is a
//! valid in-flight instruction, `None` is a bubble. Encoding validity in
//! the type keeps bubbles out of every commit path.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::Fault;
use crate::core::pipeline::signals::ControlSignals;

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug, Default)]
pub struct IfIdEntry {
    /// Program counter the instruction was fetched at.
    pub pc: u32,
    /// Raw 32-bit encoding.
    pub inst: u32,
}

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit encoding.
    pub inst: u32,
    /// First source register index, kept for forwarding.
    pub rs1: usize,
    /// Second source register index, kept for forwarding.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Sign-extended immediate.
    pub imm: i32,
    /// rs1 value as read from the register file.
    pub rv1: u32,
    /// rs2 value as read from the register file.
    pub rv2: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// Decode fault, surfaced when the instruction would execute.
    pub fault: Option<Fault>,
}

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result; doubles as the address for loads and stores.
    pub alu: u32,
    /// Forwarded rs2 value, the data for stores.
    pub store_data: u32,
    /// Control signals.
    pub ctrl: ControlSignals,
}

impl ExMemEntry {
    /// Value this instruction will eventually write back, as far as it is
    /// known before Memory runs. Loads have no result here and must not be
    /// forwarded from this latch.
    pub fn result(&self) -> u32 {
        if self.ctrl.jump {
            self.pc.wrapping_add(INSTRUCTION_BYTES)
        } else {
            self.alu
        }
    }
}

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit encoding.
    pub inst: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result (for non-load instructions).
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Control signals.
    pub ctrl: ControlSignals,
}

impl MemWbEntry {
    /// Selects the register writeback value: loaded data for loads, the
    /// link address for jumps, the ALU result otherwise.
    pub fn writeback_value(&self) -> u32 {
        if self.ctrl.mem_read {
            self.load_data
        } else if self.ctrl.jump {
            self.pc.wrapping_add(INSTRUCTION_BYTES)
        } else {
            self.alu
        }
    }
}
