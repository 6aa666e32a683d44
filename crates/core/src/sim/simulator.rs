//! Simulator driver.
//!
//! Owns every piece of architectural and pipeline state: the program
//! counter, register file, instruction and data memory, the four
//! inter-stage latches, and the statistics counters. One call to [`tick`]
//! is one clock cycle.
//!
//! Ordering discipline: stages run in reverse order (WB, MEM, EX, ID, IF)
//! over in-place latches, so each stage observes what its upstream
//! neighbour produced in the previous cycle. Hazard decisions recorded
//! during the tick (the load-use stall and the taken-branch redirect) are
//! applied around Decode/Fetch, after the older stages have run.
//!
//! [`tick`]: Simulator::tick

use crate::common::constants::PC_ALIGN_MASK;
use crate::common::Fault;
use crate::config::Config;
use crate::core::mem::{DataMem, InstrMem};
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::regfile::RegisterFile;
use crate::stats::SimStats;

/// Flushing a taken branch or jump costs two wrong-path cycles.
const FLUSH_PENALTY: u64 = 2;

/// Why a simulation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// An EBREAK retired; `pc` is its address.
    Breakpoint { pc: u32 },
    /// Fetch ran past the end of instruction memory and the pipeline
    /// drained; `pc` is the end-of-program fetch address.
    OutOfProgram { pc: u32 },
    /// The configured cycle budget was exhausted before the program
    /// terminated.
    CycleLimit { pc: u32 },
}

/// Cycle-accurate five-stage pipeline simulator.
pub struct Simulator {
    /// Architectural register file, written only by Writeback.
    pub regs: RegisterFile,
    /// Byte-address program counter seen by Fetch; always 4-byte aligned.
    pub pc: u32,
    /// Read-only instruction memory.
    pub imem: InstrMem,
    /// Byte-addressable data memory, written only by the Memory stage.
    pub dmem: DataMem,

    /// IF/ID latch; `None` is a bubble.
    pub if_id: Option<IfIdEntry>,
    /// ID/EX latch.
    pub id_ex: Option<IdExEntry>,
    /// EX/MEM latch.
    pub ex_mem: Option<ExMemEntry>,
    /// MEM/WB latch.
    pub mem_wb: Option<MemWbEntry>,
    /// The entry that committed this cycle, kept as a forwarding source so
    /// Execute can see same-cycle writeback results.
    pub wb_done: Option<MemWbEntry>,

    /// Simulation statistics.
    pub stats: SimStats,
    /// Per-cycle stage tracing on stderr.
    pub trace: bool,
    /// Set once a halt has been decoded; fetch publishes bubbles until the
    /// EBREAK retires (or a flush proves it was wrong-path).
    pub halt_pending: bool,
    /// Set when the simulation has finished.
    pub exit: Option<ExitReason>,

    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator over a program image loaded at IMEM offset zero.
    ///
    /// # Panics
    ///
    /// Panics if the configured start PC is not 4-byte aligned.
    pub fn new(program: Vec<u32>, config: &Config) -> Self {
        assert!(
            config.general.start_pc & PC_ALIGN_MASK == 0,
            "start pc {:#010x} is not 4-byte aligned",
            config.general.start_pc
        );

        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            imem: InstrMem::new(program),
            dmem: DataMem::new(config.memory.dmem_limit),
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            wb_done: None,
            stats: SimStats::default(),
            trace: config.general.trace,
            halt_pending: false,
            exit: None,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// A returned fault ends the simulation at this cycle with all state
    /// preserved for inspection.
    pub fn tick(&mut self) -> Result<(), Fault> {
        if self.trace {
            self.print_pipeline_diagram();
        }

        self.stats.cycles += 1;

        wb_stage(self);
        if self.exit.is_some() {
            // EBREAK completed writeback; abandon the younger stages.
            return Ok(());
        }
        self.wb_done = self.mem_wb;

        mem_stage(self)?;
        let redirect = execute_stage(self)?;

        if hazards::need_stall_load_use(&self.id_ex, &self.if_id) {
            // Load-use: bubble into EX, hold IF/ID and the PC for a cycle.
            self.id_ex = None;
            self.stats.stalls_data += 1;
        } else {
            decode_stage(self);
            fetch_stage(self)?;
        }

        if let Some(target) = redirect {
            // Taken branch or jump: kill the two wrong-path instructions
            // fetched and decoded this cycle and steer fetch to the target.
            self.if_id = None;
            self.id_ex = None;
            self.halt_pending = false;
            self.pc = target;
            self.stats.stalls_control += FLUSH_PENALTY;
        }

        if self.exit.is_none() && self.drained() {
            self.exit = Some(ExitReason::OutOfProgram { pc: self.pc });
        }

        Ok(())
    }

    /// Runs the simulation to completion.
    ///
    /// Returns the exit reason, or the fault that stopped the pipeline.
    /// With a configured cycle budget, exceeding it reports
    /// [`ExitReason::CycleLimit`]; nontermination is not a fault.
    pub fn run(&mut self) -> Result<ExitReason, Fault> {
        loop {
            if let Some(max) = self.max_cycles {
                if self.stats.cycles >= max {
                    let reason = ExitReason::CycleLimit { pc: self.pc };
                    self.exit = Some(reason);
                    return Ok(reason);
                }
            }
            self.tick()?;
            if let Some(reason) = self.exit {
                return Ok(reason);
            }
        }
    }

    /// True when fetch is past the last instruction and no instruction is
    /// left in flight.
    fn drained(&self) -> bool {
        self.imem.is_end(self.pc)
            && self.if_id.is_none()
            && self.id_ex.is_none()
            && self.ex_mem.is_none()
            && self.mem_wb.is_none()
    }

    /// Prints a one-line occupancy diagram of the five stages.
    pub fn print_pipeline_diagram(&self) {
        fn slot(pc: Option<u32>) -> String {
            match pc {
                Some(pc) => format!("[{:08x}]", pc),
                None => format!("[{:^8}]", "--"),
            }
        }

        eprintln!(
            "{} -> {} -> {} -> {} -> {}",
            slot(self.if_id.map(|e| e.pc)),
            slot(self.id_ex.map(|e| e.pc)),
            slot(self.ex_mem.map(|e| e.pc)),
            slot(self.mem_wb.map(|e| e.pc)),
            slot(self.wb_done.map(|e| e.pc)),
        );
    }

    /// Dumps the program counter and full register state to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc);
        let r = self.regs.snapshot();
        for i in (0..r.len()).step_by(2) {
            println!(
                "x{:<2} = {:#010x}    x{:<2} = {:#010x}",
                i,
                r[i],
                i + 1,
                r[i + 1]
            );
        }
    }
}
