//! CSV tables written after a sweep
//!
//! Every row starts with the cutoff and search of its pair. Rows carry no header.

use crate::commands::SweepReport;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const SUCCESSES_FILE: &str = "wordle_successes.csv";
pub const HISTOGRAM_FILE: &str = "wordle_guess.csv";
pub const MISSED_FILE: &str = "wordle_missed.csv";
pub const BUDGET_FILE: &str = "wordle_maxturns.csv";

/// `cutoff,search,successes`
pub fn write_successes<W: Write>(mut out: W, report: &SweepReport) -> io::Result<()> {
    for stats in &report.stats {
        writeln!(out, "{},{},{}", stats.cutoff, stats.search, stats.successes)?;
    }
    out.flush()
}

/// `cutoff,search` then wins at turns `1..=max_turns`, then later wins
pub fn write_histogram<W: Write>(mut out: W, report: &SweepReport) -> io::Result<()> {
    for stats in &report.stats {
        write!(out, "{},{}", stats.cutoff, stats.search)?;
        for count in &stats.histogram {
            write!(out, ",{count}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// `cutoff,search` then every missed word
pub fn write_missed<W: Write>(mut out: W, report: &SweepReport) -> io::Result<()> {
    for stats in &report.stats {
        write!(out, "{},{}", stats.cutoff, stats.search)?;
        for miss in &stats.missed {
            write!(out, ",{}", miss.word)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// `cutoff,search,budget`
pub fn write_budgets<W: Write>(mut out: W, report: &SweepReport) -> io::Result<()> {
    for stats in &report.stats {
        writeln!(out, "{},{},{}", stats.cutoff, stats.search, stats.budget.turns)?;
    }
    out.flush()
}

type TableWriter = fn(BufWriter<File>, &SweepReport) -> io::Result<()>;

/// Write all four tables into `dir`, creating it if needed
///
/// # Errors
/// Returns an error if the directory or any file cannot be written.
pub fn write_tables(dir: &Path, report: &SweepReport) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let tables: [(&str, TableWriter); 4] = [
        (SUCCESSES_FILE, write_successes),
        (HISTOGRAM_FILE, write_histogram),
        (MISSED_FILE, write_missed),
        (BUDGET_FILE, write_budgets),
    ];

    let mut written = Vec::with_capacity(tables.len());
    for (name, write) in tables {
        let path = dir.join(name);
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        write(BufWriter::new(file), report)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
