//! Branch comparator tests.

use rv32sim_core::core::units::cmp::{cmp, CmpOp};

#[test]
fn equality() {
    assert!(cmp(CmpOp::Eq, 3, 3));
    assert!(!cmp(CmpOp::Eq, 3, 4));
    assert!(cmp(CmpOp::Ne, 3, 4));
    assert!(!cmp(CmpOp::Ne, 3, 3));
}

#[test]
fn signed_ordering() {
    // 0xFFFF_FFFF is -1 under a signed interpretation.
    assert!(cmp(CmpOp::Lt, 0xFFFF_FFFF, 0));
    assert!(!cmp(CmpOp::Lt, 0, 0xFFFF_FFFF));
    assert!(cmp(CmpOp::Ge, 0, 0xFFFF_FFFF));
    assert!(cmp(CmpOp::Ge, 5, 5));
}

#[test]
fn unsigned_ordering() {
    assert!(!cmp(CmpOp::Ltu, 0xFFFF_FFFF, 0));
    assert!(cmp(CmpOp::Ltu, 0, 0xFFFF_FFFF));
    assert!(cmp(CmpOp::Geu, 0xFFFF_FFFF, 0));
    assert!(cmp(CmpOp::Geu, 7, 7));
}
