//! VSM simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Default run:** Read the program and its input from stdin, run, and dump.
//! 2. **File run:** Same, reading tokens from a file, with config and run-limit overrides.
//! 3. **Disassembly:** Print a listing of a program without running it.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vsm_core::config::Config;
use vsm_core::isa::disasm;
use vsm_core::sim::{Simulator, loader};
use vsm_core::soc::StreamConsole;
use vsm_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "vsm",
    author,
    version,
    about = "Very Simple Machine simulator",
    long_about = "Load a program of 16-bit binary words, run it until HALT, and dump the machine state.\n\nProgram words and READ input share one whitespace-separated token stream; the program\nends at the first all-zero word.\n\nExamples:\n  vsm < prog.txt\n  vsm run prog.txt --stats\n  vsm run prog.txt --config vsm.json --max-steps 10000\n  vsm disasm prog.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and run a program, then print the register and memory dump.
    Run(RunArgs),

    /// Print a listing of a program without running it.
    Disasm {
        /// Program file (stdin when omitted).
        file: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Program and input token file (stdin when omitted).
    file: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Log every executed instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Print run statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Print only these statistics sections (implies --stats).
    #[arg(
        long,
        value_name = "SECTION",
        num_args = 1..,
        value_delimiter = ',',
        value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats_sections: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Some(Commands::Run(args)) => cmd_run(&args),
        Some(Commands::Disasm { file }) => cmd_disasm(file.as_ref()),
        None => cmd_run(&RunArgs::default()),
    };
    process::exit(code);
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over instruction tracing.
fn init_tracing(trace: bool) {
    let default = if trace { "vsm_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

/// Opens `file`, or stdin when it is `None`.
fn open_input(file: Option<&PathBuf>) -> io::Result<Box<dyn BufRead>> {
    match file {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Runs a program and prints the dump; returns the process exit code.
///
/// Machine faults still print the dump of the state at the fault.
fn cmd_run(args: &RunArgs) -> i32 {
    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}: {e}", path.display());
                return 1;
            }
        },
        None => Config::default(),
    };
    if args.max_steps.is_some() {
        config.general.max_steps = args.max_steps;
    }
    if args.trace {
        config.general.trace_instructions = true;
    }
    init_tracing(config.general.trace_instructions);

    let input = match args.file.as_ref() {
        Some(path) => loader::open_program(path).map(|r| Box::new(r) as Box<dyn BufRead>),
        None => open_input(None).map_err(Into::into),
    };
    let input = match input {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    let mut sim = Simulator::new(&config, StreamConsole::new(input, io::stdout()));
    let outcome = sim.load_and_run();

    let mut code = 0;
    if let Err(e) = &outcome {
        eprintln!("error: {e}");
        code = 1;
        if !e.is_machine_fault() {
            return code;
        }
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = sim.write_dump(&mut stdout) {
        eprintln!("error: {e}");
        return 1;
    }
    if args.stats || !args.stats_sections.is_empty() {
        let _ = stdout.flush();
        let report = sim
            .cpu
            .stats
            .write_sections(&mut io::stderr(), &args.stats_sections);
        if let Err(e) = report {
            eprintln!("error: {e}");
            return 1;
        }
    }
    code
}

/// Prints a listing of the program words up to the load sentinel.
fn cmd_disasm(file: Option<&PathBuf>) -> i32 {
    init_tracing(false);

    let input = match open_input(file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let mut console = StreamConsole::new(input, io::sink());
    match loader::read_program(&mut console) {
        Ok(words) => {
            print!("{}", disasm::listing(&words));
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}
