//! Branch comparator.
//!
//! Evaluates the six RV32I conditional-branch predicates. Kept separate
//! from the ALU: the ALU result and the branch decision are produced in the
//! same cycle from the same operands.

/// Comparison operations for conditional branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CmpOp {
    #[default]
    Eq,
    Ne,
    Lt,
    Ge,
    Ltu,
    Geu,
}

/// Evaluates `op` over two 32-bit operands.
pub fn cmp(op: CmpOp, a: u32, b: u32) -> bool {
    match op {
        CmpOp::Eq => a == b,
        CmpOp::Ne => a != b,
        CmpOp::Lt => (a as i32) < (b as i32),
        CmpOp::Ge => (a as i32) >= (b as i32),
        CmpOp::Ltu => a < b,
        CmpOp::Geu => a >= b,
    }
}
