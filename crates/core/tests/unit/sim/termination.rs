//! Termination and fault reporting tests.

use crate::common::builder::{ebreak, inst};
use crate::common::harness::TestContext;
use rv32sim_core::common::Fault;
use rv32sim_core::{Config, ExitReason};

#[test]
fn ebreak_reports_its_own_pc() {
    let mut ctx = TestContext::new(&[inst().nop().build(), ebreak()]);
    assert_eq!(ctx.run_to_exit(), ExitReason::Breakpoint { pc: 4 });
}

#[test]
fn ebreak_alone_drains_the_pipeline_first() {
    let mut ctx = TestContext::new(&[ebreak()]);
    assert_eq!(ctx.run_to_exit(), ExitReason::Breakpoint { pc: 0 });
    assert_eq!(ctx.sim.stats.cycles, 5, "fetch to writeback is 5 cycles");
    assert_eq!(ctx.sim.stats.instructions_retired, 1);
}

#[test]
fn nothing_younger_than_ebreak_commits() {
    let mut ctx = TestContext::new(&[
        inst().addi(1, 0, 9).build(),
        ebreak(),
        inst().sw(0, 1, 0).build(),
        inst().addi(2, 0, 5).build(),
    ]);
    ctx.run_to_exit();
    assert_eq!(ctx.reg(1), 9, "older instruction retires normally");
    assert_eq!(ctx.reg(2), 0, "younger register write must not land");
    assert_eq!(ctx.sim.dmem.read_u32(0), 0, "younger store must not land");
}

#[test]
fn running_off_the_end_drains_and_exits() {
    let mut ctx = TestContext::new(&[inst().addi(1, 0, 7).build()]);
    assert_eq!(ctx.run_to_exit(), ExitReason::OutOfProgram { pc: 4 });
    assert_eq!(ctx.reg(1), 7, "the last instruction still retires");
    assert_eq!(ctx.sim.stats.cycles, 5);
}

#[test]
fn empty_program_exits_immediately() {
    let mut ctx = TestContext::new(&[]);
    assert_eq!(ctx.run_to_exit(), ExitReason::OutOfProgram { pc: 0 });
    assert_eq!(ctx.sim.stats.cycles, 1);
    assert_eq!(ctx.sim.stats.instructions_retired, 0);
}

#[test]
fn cycle_budget_reports_nontermination() {
    let mut config = Config::default();
    config.general.max_cycles = Some(50);
    // jal x0, 0 spins on itself forever.
    let mut ctx = TestContext::with_config(&[inst().jal(0, 0).build()], &config);
    assert!(matches!(
        ctx.run_to_exit(),
        ExitReason::CycleLimit { .. }
    ));
    assert!(ctx.sim.stats.cycles <= 50);
}

// ══════════════════════════════════════════════════════════
// Faults
// ══════════════════════════════════════════════════════════

#[test]
fn unknown_opcode_faults_with_pc_and_encoding() {
    let mut ctx = TestContext::new(&[0xFFFF_FFFF]);
    let fault = ctx.run_expect_fault();
    assert_eq!(
        fault,
        Fault::IllegalInstruction {
            pc: 0,
            inst: 0xFFFF_FFFF
        }
    );
    assert_eq!(ctx.sim.stats.cycles, 3, "reported when it would execute");
}

#[test]
fn ecall_is_not_supported() {
    let mut ctx = TestContext::new(&[0x0000_0073]);
    assert!(matches!(
        ctx.run_expect_fault(),
        Fault::IllegalInstruction { pc: 0, .. }
    ));
}

#[test]
fn illegal_funct_combination_faults() {
    // R-type add with a reserved funct7 bit set.
    let encoding = inst().add(1, 2, 3).build() | (0x10 << 25);
    let mut ctx = TestContext::new(&[encoding]);
    assert!(matches!(
        ctx.run_expect_fault(),
        Fault::IllegalInstruction { pc: 0, .. }
    ));
}

#[test]
fn wrong_path_garbage_is_never_reported() {
    // The taken branch skips over a garbage word; the flush must kill the
    // decode fault along with the wrong-path entry.
    let mut ctx = TestContext::new(&[
        inst().addi(1, 0, 1).build(),
        inst().bne(1, 0, 8).build(),
        0xFFFF_FFFF,
        ebreak(),
    ]);
    assert_eq!(ctx.run_to_exit(), ExitReason::Breakpoint { pc: 12 });
}

#[test]
fn state_is_preserved_after_a_fault() {
    let mut ctx = TestContext::new(&[
        inst().addi(1, 0, 42).build(),
        inst().nop().build(),
        inst().nop().build(),
        inst().nop().build(),
        0xFFFF_FFFF,
    ]);
    ctx.run_expect_fault();
    assert_eq!(ctx.reg(1), 42, "committed state survives the fault");
}

#[test]
fn load_beyond_the_memory_bound_faults() {
    let mut config = Config::default();
    config.memory.dmem_limit = Some(16);
    let mut ctx = TestContext::with_config(
        &[
            inst().addi(1, 0, 32).build(),
            inst().lw(2, 1, 0).build(),
            ebreak(),
        ],
        &config,
    );
    assert_eq!(
        ctx.run_expect_fault(),
        Fault::LoadAccessFault { pc: 4, addr: 32 }
    );
}

#[test]
fn store_straddling_the_memory_bound_faults() {
    let mut config = Config::default();
    config.memory.dmem_limit = Some(16);
    let mut ctx = TestContext::with_config(
        &[
            inst().addi(1, 0, 15).build(),
            inst().sw(1, 1, 0).build(),
            ebreak(),
        ],
        &config,
    );
    assert_eq!(
        ctx.run_expect_fault(),
        Fault::StoreAccessFault { pc: 4, addr: 15 }
    );
}

#[test]
fn in_bounds_accesses_pass_with_a_limit_configured() {
    let mut config = Config::default();
    config.memory.dmem_limit = Some(16);
    let mut ctx = TestContext::with_config(
        &[
            inst().addi(1, 0, 20).build(),
            inst().sw(0, 1, 12).build(),
            inst().lw(2, 0, 12).build(),
            ebreak(),
        ],
        &config,
    );
    ctx.run_to_exit();
    assert_eq!(ctx.reg(2), 20);
}

#[test]
fn misaligned_jalr_target_faults_at_fetch() {
    let mut ctx = TestContext::new(&[
        inst().addi(1, 0, 6).build(),
        inst().jalr(0, 1, 0).build(),
        ebreak(),
    ]);
    assert_eq!(ctx.run_expect_fault(), Fault::MisalignedFetch { pc: 6 });
}
