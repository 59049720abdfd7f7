//! Sum of the integers `1..=n`, computed iteratively, in closed form and
//! recursively.
//!
//! With no arguments, prints the three results for `n = 5`, one per line.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use sumton::commands::{init_config, run_methods};
use sumton::core::method::Method;
use sumton::exit_codes;
use sumton::io::config::{CONFIG_FILE, load_config};
use sumton::logging;
use sumton::verify::verify_range;

#[derive(Parser)]
#[command(
    name = "sumton",
    version,
    about = "Sum 1..=n iteratively, in closed form and recursively"
)]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sum for each method, one per line.
    Run {
        /// Upper bound of the range (defaults to `n` from config).
        #[arg(short, allow_negative_numbers = true)]
        n: Option<i64>,
        /// Method to run; repeat to select several. Defaults to all three.
        #[arg(short, long = "method")]
        methods: Vec<Method>,
    },
    /// Check every method against the closed form for 0..=upto.
    Verify {
        /// Upper bound (defaults to `verify_upto` from config).
        #[arg(long, allow_negative_numbers = true)]
        upto: Option<i64>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write the default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            // Nothing left to report to if stderr itself is gone.
            err.print().ok();
            std::process::exit(code);
        }
    };
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let command = cli.command.unwrap_or(Command::Run {
        n: None,
        methods: Vec::new(),
    });
    match command {
        Command::Run { n, methods } => cmd_run(&cli.config, n, &methods),
        Command::Verify { upto, json } => cmd_verify(&cli.config, upto, json),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn cmd_run(config: &Path, n: Option<i64>, methods: &[Method]) -> Result<i32> {
    let cfg = load_config(config)?;
    let n = n.unwrap_or(cfg.n);
    for (_, sum) in run_methods(n, methods, &cfg.limits())? {
        println!("{}", sum);
    }
    Ok(exit_codes::OK)
}

fn cmd_verify(config: &Path, upto: Option<i64>, json: bool) -> Result<i32> {
    let cfg = load_config(config)?;
    let report = verify_range(upto.unwrap_or(cfg.verify_upto), &cfg.limits())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "verify: upto={} checked={} mismatches={}",
            report.upto,
            report.checked,
            report.mismatches.len()
        );
        for mismatch in &report.mismatches {
            eprintln!(
                "mismatch: method={} n={} expected={} actual={}",
                mismatch.method, mismatch.n, mismatch.expected, mismatch.actual
            );
        }
    }
    if report.passed() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::MISMATCH)
    }
}

fn cmd_init(config: &Path, force: bool) -> Result<i32> {
    if init_config(config, force)? {
        println!("init: wrote {}", config.display());
    } else {
        println!("init: {} exists (use --force to overwrite)", config.display());
    }
    Ok(exit_codes::OK)
}
