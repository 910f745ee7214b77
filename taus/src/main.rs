mod batch;
mod format;

use anyhow::{Context, Result};
use batch::{parse_seed_triples, run_batch, BatchConfig};
use clap::Parser;
use format::{write_column, write_row, OutputFormat};
use std::io::{self, BufWriter, Read, Write};
use tausrandom::host::parse_scalar;
use tausrandom::HostArgs;

#[derive(Parser, Debug)]
#[command(name = "taus")]
#[command(about = "Three-component Tausworthe 32-bit word generator", long_about = None)]
struct Args {
    /// First register seed (decimal or 0x hex)
    #[arg(value_name = "SEED0", value_parser = parse_seed, required_unless_present = "batch")]
    seed0: Option<u32>,

    /// Second register seed
    #[arg(value_name = "SEED1", value_parser = parse_seed, required_unless_present = "batch")]
    seed1: Option<u32>,

    /// Third register seed
    #[arg(value_name = "SEED2", value_parser = parse_seed, required_unless_present = "batch")]
    seed2: Option<u32>,

    /// Number of words to produce
    #[arg(short = 'n', long = "count", default_value = "10")]
    count: u32,

    /// Discard this many words before output starts
    #[arg(long = "skip", default_value = "0")]
    skip: u64,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Dec)]
    format: OutputFormat,

    /// Suppress the seed trace and statistics on stderr
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Read seed triples from stdin (one per line) and generate each in parallel
    #[arg(long = "batch", conflicts_with_all = ["seed0", "seed1", "seed2"])]
    batch: bool,

    /// Worker threads for --batch (default: auto-detect)
    #[arg(short = 't', long = "threads", requires = "batch")]
    threads: Option<usize>,
}

fn parse_seed(s: &str) -> Result<u32, String> {
    parse_scalar(s).ok_or_else(|| format!("{:?} is not an unsigned 32-bit value", s))
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let generated = if args.batch {
        run_batch_mode(args, io::stdin().lock(), &mut out)?
    } else {
        run_single(args, &mut out)?
    };

    out.flush().context("failed to flush output")?;

    // Statistics go to stderr so stdout carries only words
    if !args.quiet {
        eprintln!("Generated {} words", generated);
    }

    Ok(())
}

fn run_single<W: Write>(args: &Args, out: &mut W) -> Result<u64> {
    // clap enforces all three seeds outside --batch
    let (Some(seed0), Some(seed1), Some(seed2)) = (args.seed0, args.seed1, args.seed2) else {
        anyhow::bail!("three seeds are required");
    };

    let words = HostArgs::new(seed0, seed1, seed2, args.count)
        .with_skip(args.skip)
        .with_trace(!args.quiet)
        .invoke()?;

    write_column(out, &words, args.format).context("failed to write output")?;

    Ok(words.len() as u64)
}

fn run_batch_mode<R: Read, W: Write>(args: &Args, mut reader: R, out: &mut W) -> Result<u64> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("failed to read seed triples")?;

    let triples = parse_seed_triples(&input)?;

    let config = BatchConfig {
        num_threads: args.threads.unwrap_or(0),
        count: args.count,
        skip: args.skip,
        trace: !args.quiet,
    };

    if !args.quiet {
        eprintln!(
            "Running {} seed triples on {} threads",
            triples.len(),
            config.actual_threads()
        );
    }

    let results = run_batch(&triples, &config)?;

    let mut generated = 0u64;
    for result in &results {
        write_row(out, &result.words, args.format).context("failed to write output")?;
        generated += result.words.len() as u64;
    }

    Ok(generated)
}
