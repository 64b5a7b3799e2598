//! Exact Logic Minimizer - Command Line Interface
//!
//! Reads a single-output PLA file, minimizes it with Quine-McCluskey and
//! Petrick's method, and writes the minimal cover as a PLA.

use clap::{ArgAction, Parser, ValueEnum};
use qm_logic::report::{PrimeList, Report};
use qm_logic::{Cover, CoverType, ImplicantGenerator, MinimizerConfig, PLAReader, PLAWriter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Exact minimization (default)
    Exact,
    /// Echo the PLA without modification
    Echo,
    /// Print statistics about the PLA
    Stats,
    /// List the prime implicants
    Primes,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputType {
    /// ON-set only
    F,
    /// ON-set and don't-care set
    Fd,
    /// ON-set and OFF-set
    Fr,
    /// ON-set, don't-care set, and OFF-set
    Fdr,
}

impl From<OutputType> for CoverType {
    fn from(val: OutputType) -> Self {
        match val {
            OutputType::F => CoverType::F,
            OutputType::Fd => CoverType::FD,
            OutputType::Fr => CoverType::FR,
            OutputType::Fdr => CoverType::FDR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "qm")]
#[command(about = "Exact two-level logic minimizer (Quine-McCluskey + Petrick)", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file (required)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "exact")]
    command: Command,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "f")]
    output_format: OutputType,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Print every minimization step
    #[arg(short = 't', long = "trace")]
    trace: bool,

    /// Suppress printing of solution
    #[arg(short = 'x', long = "no-output")]
    no_output: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Give up when Petrick's expansion exceeds this many terms
    #[arg(long = "max-terms", value_name = "N")]
    max_terms: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let config = MinimizerConfig {
        max_petrick_terms: args.max_terms,
        trace: args.trace,
        ..MinimizerConfig::default()
    };

    let cover = Cover::from_pla_file(&args.input).map_err(|e| {
        let err = io::Error::from(e);
        io::Error::new(
            err.kind(),
            format!("reading PLA file '{}': {}", args.input.display(), err),
        )
    })?;

    if args.summary {
        eprintln!(
            "Input: {} input(s), {} cube(s), {} literal(s)",
            cover.num_inputs(),
            cover.num_cubes(),
            cover.literal_count()
        );
    }

    let result = match args.command {
        Command::Exact => {
            let start = Instant::now();
            let (minimized, minimization) = cover.minimize_with_trace(&config)?;
            if args.trace {
                print!("{}", Report::new(&minimization));
                println!();
            }
            if args.summary {
                eprintln!(
                    "Minimized: {} prime implicant(s), {} PIs, {} literals in {:?}",
                    minimization.prime_implicants().len(),
                    minimized.num_cubes(),
                    minimized.literal_count(),
                    start.elapsed()
                );
            }
            minimized
        }
        Command::Echo => cover,
        Command::Stats => {
            let on_set = cover.on_set_minterms()?;
            let dont_cares = cover.dont_care_minterms()?;
            println!("PLA Statistics:");
            println!("  Inputs:              {}", cover.num_inputs());
            println!("  Cubes:               {}", cover.num_cubes());
            println!("  Literals:            {}", cover.literal_count());
            println!("  ON-set minterms:     {}", on_set.len());
            println!("  Don't-care minterms: {}", dont_cares.len());
            cover
        }
        Command::Primes => {
            let primes = ImplicantGenerator::new(cover.num_inputs())?
                .find_prime_implicants(&cover.on_set_minterms()?, &cover.dont_care_minterms()?)?;
            print!("{}", PrimeList(primes.as_slice()));
            return Ok(());
        }
    };

    if args.no_output {
        return Ok(());
    }

    let output_type = CoverType::from(args.output_format.clone());
    match &args.output_file {
        Some(path) => {
            result.to_pla_file(path, output_type)?;
            if args.summary {
                eprintln!("Wrote output to: {}", path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            result.write_pla(&mut handle, output_type)?;
            handle.flush()?;
        }
    }
    Ok(())
}
