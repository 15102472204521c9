//! Cache Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, configuration loading, and the run-and-report flow.
//!
//! # Usage
//!
//! Settings come from a TOML configuration file; individual values can be
//! overridden on the command line:
//!
//! ```text
//! cachesim --config configs/default.toml --pattern mid-repeat --blocks 2048
//! ```

use clap::Parser;
use std::process;

extern crate cachesim;

use cachesim::config::Config;
use cachesim::sim::{Runner, SimulationReport};
use cachesim::workload::{self, Pattern};

/// Command-line arguments for the cache simulator.
///
/// Flags override the corresponding configuration-file values; the merged
/// configuration is validated before the run starts.
#[derive(Parser, Debug)]
#[command(author, version, about = "8-way set-associative MRU cache simulator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Total memory blocks (minimum 1024).
    #[arg(short, long)]
    blocks: Option<u64>,

    /// Access pattern to simulate.
    #[arg(short, long, value_enum)]
    pattern: Option<Pattern>,

    /// RNG seed for the Random pattern.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the per-access trace log.
    #[arg(long)]
    trace: bool,
}

/// Main entry point for the cache simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments, loads the TOML
///    configuration file, applies flag overrides, and validates.
/// 2. **Workload**: Generates the address sequence for the selected pattern.
/// 3. **Run**: Feeds the sequence through the runner.
/// 4. **Report**: Prints the optional trace, the final cache snapshot, and
///    the statistics summary.
fn main() {
    let args = Args::parse();

    let mut config = Config::load(&args.config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });

    if let Some(blocks) = args.blocks {
        config.workload.total_blocks = blocks;
    }
    if let Some(pattern) = args.pattern {
        config.workload.pattern = pattern;
    }
    if let Some(seed) = args.seed {
        config.workload.seed = Some(seed);
    }

    if let Err(e) = config.validate() {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    }

    println!("Global Configuration");
    println!("--------------------");
    println!("Workload:");
    println!("  Total Blocks:       {}", config.workload.total_blocks);
    println!("  Pattern:            {}", config.workload.pattern);
    println!(
        "  Seed:               {}",
        match config.workload.seed {
            Some(seed) => seed.to_string(),
            None => "entropy".to_string(),
        }
    );
    println!("Timing:");
    println!("  Hit Time:           {} units", config.timing.hit_time);
    println!("  Miss Penalty:       {} units", config.timing.miss_penalty);
    println!("--------------------");

    let addresses = workload::generate(&config.workload).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });
    println!("[*] Generated {} accesses", addresses.len());

    let runner = Runner::new(config.timing.clone());
    let report = runner.run(&addresses).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    });

    if args.trace {
        print_trace(&report);
    }
    print_snapshot(&report);
    report.stats.print();
}

/// Prints one log entry per access, in sequence order.
fn print_trace(report: &SimulationReport) {
    println!("\nSimulation Log");
    println!("--------------");
    for record in &report.records {
        for line in record.log_lines() {
            println!("{}", line);
        }
    }
}

/// Prints the final per-set cache contents.
fn print_snapshot(report: &SimulationReport) {
    println!("\nCache Snapshot");
    println!("--------------");
    for (set_index, set) in report.final_snapshot.iter().enumerate() {
        println!("Set {}:", set_index);
        for (tag, last_used) in set {
            println!("  Block: {}, Last Access: {}", tag, last_used);
        }
    }
}
