//! # parenscan
//!
//! Reports parenthesis balance in a text file, line by line. Useful for
//! locating the unmatched parenthesis in generated scripts where a normal
//! syntax checker is unavailable (batch files, templated config, ...).
//!
//! Prints the total open/close counts, one report line for every source
//! line that contains a parenthesis or drives the running balance negative,
//! and finally whether the balance returned to zero. The input file is only
//! ever read.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use argh::FromArgs;

/// Report parenthesis balance of a text file, line by line.
#[derive(FromArgs)]
struct Args {
    /// path of the file to scan
    #[argh(positional)]
    path: PathBuf,
}

/// One reported source line.
#[derive(Debug, PartialEq, Eq)]
struct LineEntry<'a> {
    number: usize,
    balance: i64,
    opens: usize,
    closes: usize,
    text: &'a str,
}

/// Full scan result over one text.
#[derive(Debug)]
struct ScanReport<'a> {
    open_total: usize,
    close_total: usize,
    final_balance: i64,
    lines: Vec<LineEntry<'a>>,
}

fn scan(text: &str) -> ScanReport<'_> {
    let open_total = text.matches('(').count();
    let close_total = text.matches(')').count();

    let mut balance = 0_i64;
    let mut lines = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let opens = line.matches('(').count();
        let closes = line.matches(')').count();
        balance += opens as i64 - closes as i64;
        if opens > 0 || closes > 0 || balance < 0 {
            lines.push(LineEntry {
                number: i + 1,
                balance,
                opens,
                closes,
                text: line,
            });
        }
    }

    ScanReport {
        open_total,
        close_total,
        final_balance: balance,
        lines,
    }
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let report = scan(&text);
    println!(
        "TOTAL open={} close={}",
        report.open_total, report.close_total
    );
    for entry in &report.lines {
        println!(
            "{:04}: bal={:>4} (+{}/-{}) {}",
            entry.number, entry.balance, entry.opens, entry.closes, entry.text
        );
    }
    if report.final_balance != 0 {
        println!("FINAL BALANCE non-zero: {}", report.final_balance);
    } else {
        println!("FINAL BALANCE zero");
    }

    Ok(())
}
