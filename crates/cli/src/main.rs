//! RV32I pipeline simulator CLI.
//!
//! This binary provides the entry points for the simulator:
//! 1. **Run:** Execute a raw program image and report final state.
//! 2. **Disasm:** Print a word-per-line disassembly of an image.

use clap::{Parser, Subcommand};
use std::{fs, process};

use rv32sim_core::config::Config;
use rv32sim_core::isa::disasm::disassemble;
use rv32sim_core::sim::loader;
use rv32sim_core::{ExitReason, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-accurate five-stage RV32I pipeline simulator",
    long_about = "Run a raw program image (little-endian 32-bit instruction words, \
loaded at address 0) through a five-stage in-order pipeline.\n\nExamples:\n  \
sim run -f program.bin\n  sim run -f program.bin --trace --max-cycles 100000\n  \
sim disasm -f program.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image to completion.
    Run {
        /// Program image to execute.
        #[arg(short, long)]
        file: String,

        /// Print the per-cycle pipeline diagram and stage traces.
        #[arg(long)]
        trace: bool,

        /// Cycle budget; exceeding it reports nontermination.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// JSON configuration file (flags override it).
        #[arg(long)]
        config: Option<String>,
    },

    /// Disassemble a program image.
    Disasm {
        /// Program image to disassemble.
        #[arg(short, long)]
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            trace,
            max_cycles,
            config,
        } => cmd_run(file, trace, max_cycles, config),
        Commands::Disasm { file } => cmd_disasm(file),
    }
}

/// Loads the configuration file if given, then folds the CLI flags in.
fn build_config(path: Option<String>, trace: bool, max_cycles: Option<u64>) -> Config {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error reading config {}: {}", path, e);
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {}: {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if trace {
        config.general.trace = true;
    }
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    config
}

/// Runs the simulator to completion and reports final state and statistics.
///
/// Exits with the process code 0 on a clean halt or drain, and 1 on a
/// fault or when the cycle budget is exhausted.
fn cmd_run(file: String, trace: bool, max_cycles: Option<u64>, config_path: Option<String>) {
    let config = build_config(config_path, trace, max_cycles);

    let program = loader::load_image(&file).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", file, e);
        process::exit(1);
    });

    println!("[*] Executing: {} ({} instructions)", file, program.len());

    let mut sim = Simulator::new(program, &config);

    match sim.run() {
        Ok(reason) => {
            match reason {
                ExitReason::Breakpoint { pc } => {
                    println!("\n[*] Halted at ebreak (pc={:#010x})", pc)
                }
                ExitReason::OutOfProgram { pc } => {
                    println!("\n[*] Ran off the end of the program (pc={:#010x})", pc)
                }
                ExitReason::CycleLimit { pc } => {
                    println!("\n[!] Cycle budget exhausted (pc={:#010x})", pc)
                }
            }
            sim.dump_state();
            sim.stats.print();
            if matches!(reason, ExitReason::CycleLimit { .. }) {
                process::exit(1);
            }
        }
        Err(fault) => {
            eprintln!("\n[!] FATAL: {}", fault);
            sim.dump_state();
            sim.stats.print();
            process::exit(1);
        }
    }
}

/// Prints a word-per-line disassembly of the image.
fn cmd_disasm(file: String) {
    let program = loader::load_image(&file).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", file, e);
        process::exit(1);
    });

    for (i, inst) in program.iter().enumerate() {
        println!("{:08x}:  {:08x}  {}", i * 4, inst, disassemble(*inst));
    }
}
