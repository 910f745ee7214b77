//! Parallel generation over many independent seed triples.
//!
//! Each triple owns its registers outright, so workers share nothing mutable.
//! Results come back in input order regardless of how many threads ran them.

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tausrandom::host::parse_scalar;
use tausrandom::{HostArgs, TausError};

/// Configuration for parallel execution.
#[derive(Clone, Debug, Default)]
pub struct BatchConfig {
    /// Number of worker threads (0 = auto-detect)
    pub num_threads: usize,
    /// Words to produce per triple
    pub count: u32,
    /// Words to discard at the start of every stream
    pub skip: u64,
    /// Print each stream's seed trace as a worker starts it. Lines follow
    /// worker scheduling, not input order.
    pub trace: bool,
}

impl BatchConfig {
    /// Get the actual number of threads to use.
    pub fn actual_threads(&self) -> usize {
        if self.num_threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.num_threads
        }
    }
}

/// One finished stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Position of the triple in the input
    pub index: usize,
    pub seeds: [u32; 3],
    pub words: Vec<u32>,
}

/// Parse seed triples, one per line. Blank lines and `#` comments are skipped.
pub fn parse_seed_triples(input: &str) -> Result<Vec<[u32; 3]>> {
    let mut triples = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            bail!(
                "line {}: expected 3 seeds, found {}",
                line_no + 1,
                fields.len()
            );
        }

        let mut seeds = [0u32; 3];
        for (seed, field) in seeds.iter_mut().zip(&fields) {
            *seed = parse_scalar(field)
                .with_context(|| format!("line {}: invalid seed {:?}", line_no + 1, field))?;
        }
        triples.push(seeds);
    }

    Ok(triples)
}

/// Generate every stream on a dedicated rayon pool.
pub fn run_batch(triples: &[[u32; 3]], config: &BatchConfig) -> Result<Vec<BatchResult>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.actual_threads())
        .build()
        .context("failed to build worker pool")?;

    let results = pool.install(|| {
        triples
            .par_iter()
            .enumerate()
            .map(|(index, &seeds)| {
                let words = HostArgs::new(seeds[0], seeds[1], seeds[2], config.count)
                    .with_skip(config.skip)
                    .with_trace(config.trace)
                    .invoke()?;
                Ok(BatchResult {
                    index,
                    seeds,
                    words,
                })
            })
            .collect::<Result<Vec<_>, TausError>>()
    })?;

    Ok(results)
}
