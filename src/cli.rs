// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line arguments and the record-processing loop behind `kpolyext`.

use crate::config::ExtensionOptions;
use crate::extension::Extender;
use crate::lattice::Polymatroid;
use crate::state::Statistics;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Enumerate single-element extensions of k-polymatroids up to isomorphism
#[derive(Parser, Debug, Clone)]
#[command(name = "kpolyext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Only write the canonical label of each input record
    #[arg(long, conflicts_with = "all")]
    pub label: bool,

    /// Write every valid extension, without isomorphism checks
    #[arg(long)]
    pub all: bool,

    /// Largest rank the new element may add to any flat
    #[arg(short = 'c', long = "max-rank", value_name = "N", default_value_t = 1)]
    pub max_rank: u32,

    /// Drop extensions whose total rank exceeds this bound
    #[arg(long, value_name = "R")]
    pub max_total_rank: Option<u32>,

    /// Report per-record progress on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Input file, one record per line (default: stdin)
    #[arg(value_name = "INFILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(value_name = "OUTFILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The extension options these arguments select.
    pub fn options(&self) -> ExtensionOptions {
        ExtensionOptions::default()
            .emit_all(self.all)
            .max_new_rank(self.max_rank)
            .max_total_rank(self.max_total_rank)
    }

    /// Open the input and output named on the command line and process every record.
    pub fn run(&self) -> Result<Statistics> {
        let input: Box<dyn BufRead> = match &self.input {
            Some(path) => Box::new(BufReader::new(
                File::open(path).with_context(|| format!("cannot open input {}", path.display()))?,
            )),
            None => Box::new(io::stdin().lock()),
        };
        let output: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("cannot create output {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        self.process(input, output)
    }

    /// Process every record of `input`, writing results to `output`.
    ///
    /// Blank lines are skipped. Returns the counters summed over all records.
    pub fn process<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<Statistics> {
        let extender = Extender::new(self.options());
        let mut totals = Statistics::new();

        for (index, line) in input.lines().enumerate() {
            let line_number = index + 1;
            let line = line.with_context(|| format!("cannot read line {}", line_number))?;
            if line.trim().is_empty() {
                continue;
            }
            let p: Polymatroid = line
                .parse()
                .with_context(|| format!("line {}: cannot parse '{}'", line_number, line.trim()))?;

            if self.label {
                writeln!(output, "{}", extender.canonicalize(&p))?;
                continue;
            }

            let stats = extender
                .extend(&p, |e| Ok(writeln!(output, "{}", e)?))
                .with_context(|| format!("line {}: cannot extend '{}'", line_number, line.trim()))?;
            if self.verbose {
                eprintln!("[Extender] line {}: {}", line_number, stats);
            }
            totals.merge(&stats);
        }

        output.flush()?;
        if self.verbose {
            eprintln!("[Extender] total: {}", totals);
        }
        Ok(totals)
    }
}
