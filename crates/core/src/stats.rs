//! Simulation statistics.

/// Counters collected over a run.
#[derive(Default, Debug)]
pub struct SimStats {
    /// Total clock cycles.
    pub cycles: u64,
    /// Instructions that completed writeback.
    pub instructions_retired: u64,

    /// Cycles lost to load-use stalls.
    pub stalls_data: u64,
    /// Cycles lost to taken-branch and jump flushes.
    pub stalls_control: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_system: u64,
}

impl SimStats {
    /// Prints a summary report to stdout.
    pub fn print(&self) {
        println!("\n=========================================================");

        println!("\n[General]");
        println!("  Cycles:               {}", self.cycles);
        println!("  Instructions Retired: {}", self.instructions_retired);

        let ipc = if self.cycles > 0 {
            self.instructions_retired as f64 / self.cycles as f64
        } else {
            0.0
        };
        println!("  IPC:                  {:.4}", ipc);

        println!("\n[Pipeline Stalls]");
        let total_stalls = self.stalls_data + self.stalls_control;
        if total_stalls > 0 {
            println!("  Total Stalled Cycles: {}", total_stalls);
            println!(
                "    Data Hazards:       {:<10} ({:.2}%)",
                self.stalls_data,
                (self.stalls_data as f64 / total_stalls as f64) * 100.0
            );
            println!(
                "    Control Hazards:    {:<10} ({:.2}%)",
                self.stalls_control,
                (self.stalls_control as f64 / total_stalls as f64) * 100.0
            );
        } else {
            println!("  Total Stalled Cycles: 0");
        }

        println!("\n[Instruction Mix]");
        let total_inst = self.instructions_retired as f64;
        if total_inst > 0.0 {
            let line = |name: &str, count: u64| {
                println!(
                    "  {:<21} {:<10} ({:.2}%)",
                    name,
                    count,
                    (count as f64 / total_inst) * 100.0
                );
            };
            line("ALU Operations:", self.inst_alu);
            line("Loads:", self.inst_load);
            line("Stores:", self.inst_store);
            line("Branches/Jumps:", self.inst_branch);
            line("System:", self.inst_system);
        }

        println!("=========================================================\n");
    }
}
