//! Reads `day month / year / hour minute second` entries from stdin until
//! `0 0`, prints the weekday of each accepted entry, then prints the entries
//! sorted by date and by time.
//!
//! ```text
//! printf '10 5\n2024\n18 0 0\n1 1\n2023\n9 30 0\n0 0\n' | cargo run --example sort_entries
//! ```
//!
//! Set `RUST_LOG=civtime=debug` to see rejections and sort activity.

use std::io::{self, BufWriter, Write};
use std::process;

use civtime::{DateTimeList, Entry, EntryReader, ReadError};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("civtime=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ReadError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut list = DateTimeList::new();
    for entry in EntryReader::new(stdin.lock()) {
        match entry? {
            Entry::Accepted(datetime) => {
                writeln!(out, "{datetime}: {}", datetime.weekday())?;
                list.add(datetime);
            }
            Entry::Rejected { datetime, error } => {
                writeln!(out, "{datetime}: rejected ({error})")?;
            }
            Entry::End => break,
        }
    }

    list.sort_by_date();
    writeln!(out, "\nSorted by date:")?;
    for datetime in &list {
        writeln!(out, "{datetime}")?;
    }

    list.sort_by_time();
    writeln!(out, "\nSorted by time:")?;
    for datetime in &list {
        writeln!(out, "{datetime}")?;
    }

    out.flush()?;
    Ok(())
}
