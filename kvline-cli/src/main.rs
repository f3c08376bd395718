//! kvline CLI
//!
//! Reads `key=value;...` lines from a file or stdin and prints the entries.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use kvline_core::{Delimiters, LineParser, MalformedPolicy, ParserOptions};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "kvline")]
#[command(author, version, about = "Split key=value;... lines into entries", long_about = None)]
struct Cli {
    /// Input file (stdin if omitted)
    input: Option<PathBuf>,

    /// Separator between pairs
    #[arg(long, default_value_t = ';')]
    pair_sep: char,

    /// Separator between key and value
    #[arg(long, default_value_t = '=')]
    kv_sep: char,

    /// Drop malformed segments instead of stopping at them
    #[arg(long, conflicts_with = "strict")]
    skip_malformed: bool,

    /// Fail on the first malformed segment
    #[arg(long)]
    strict: bool,

    /// Print only the number of entries
    #[arg(long)]
    count: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("kvline: {e:#}");
        std::process::exit(1);
    }
}

/// Parser configuration selected by the command-line flags.
fn parser_options(cli: &Cli) -> Result<ParserOptions> {
    let delimiters = Delimiters::new(cli.pair_sep, cli.kv_sep).context("invalid separators")?;
    let policy = if cli.skip_malformed {
        MalformedPolicy::Skip
    } else {
        MalformedPolicy::Truncate
    };
    Ok(ParserOptions::default()
        .with_delimiters(delimiters)
        .with_policy(policy))
}

fn run(cli: &Cli) -> Result<()> {
    let options = parser_options(cli)?;
    debug!(?options, "parser options");

    let mut reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut total = 0usize;
    let mut line = Vec::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).context("reading input")? == 0 {
            break;
        }
        line_no += 1;
        let text = trim_line_ending(&line);
        total += emit_line(text, line_no, options, cli, &mut out)?;
    }

    if cli.count {
        writeln!(out, "{total}")?;
    }
    out.flush()?;
    info!(lines = line_no, entries = total, "done");
    Ok(())
}

/// Parse one line and write its entries. Returns the number of entries.
fn emit_line(
    text: &[u8],
    line_no: usize,
    options: ParserOptions,
    cli: &Cli,
    out: &mut impl Write,
) -> Result<usize> {
    let mut parser = LineParser::with_options(text, options);
    let mut entries = 0;

    loop {
        let entry = if cli.strict {
            match parser.try_next_entry() {
                Ok(entry) => entry,
                Err(e) => bail!("line {line_no}: {e}"),
            }
        } else {
            parser.next_entry()
        };
        let Some(entry) = entry else { break };
        entries += 1;
        if !cli.count {
            out.write_all(entry.key)?;
            out.write_all(b"\t")?;
            out.write_all(entry.value)?;
            out.write_all(b"\n")?;
        }
    }

    if let Some(err) = parser.malformed() {
        warn!(line = line_no, %err, "malformed segment");
    }
    Ok(entries)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
