//! Fault definitions.
//!
//! A [`Fault`] is a fatal condition detected by the pipeline. The simulator
//! stops at the end of the cycle that raised it and preserves all state for
//! inspection; nothing is recovered internally. Bubbles, stalls, and flushes
//! are ordinary pipeline events and are not faults.

use std::fmt;

/// Fatal simulation faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Unknown opcode or illegal funct combination.
    ///
    /// Raised when the instruction reaches Execute; carries the program
    /// counter and the raw encoding of the offending word.
    IllegalInstruction { pc: u32, inst: u32 },

    /// Instruction fetch from a program counter that is not 4-byte aligned.
    ///
    /// Reachable through a computed JALR target or a branch offset that is
    /// an odd multiple of two.
    MisalignedFetch { pc: u32 },

    /// Load from an address outside the configured data-memory bound.
    LoadAccessFault { pc: u32, addr: u32 },

    /// Store to an address outside the configured data-memory bound.
    StoreAccessFault { pc: u32, addr: u32 },
}

impl Fault {
    /// Program counter of the instruction that raised the fault.
    pub fn pc(&self) -> u32 {
        match *self {
            Fault::IllegalInstruction { pc, .. }
            | Fault::MisalignedFetch { pc }
            | Fault::LoadAccessFault { pc, .. }
            | Fault::StoreAccessFault { pc, .. } => pc,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Fault::IllegalInstruction { pc, inst } => {
                write!(f, "illegal instruction {:#010x} at pc={:#010x}", inst, pc)
            }
            Fault::MisalignedFetch { pc } => {
                write!(f, "misaligned instruction fetch at pc={:#010x}", pc)
            }
            Fault::LoadAccessFault { pc, addr } => {
                write!(f, "load access fault at addr={:#010x} (pc={:#010x})", addr, pc)
            }
            Fault::StoreAccessFault { pc, addr } => {
                write!(f, "store access fault at addr={:#010x} (pc={:#010x})", addr, pc)
            }
        }
    }
}

impl std::error::Error for Fault {}
