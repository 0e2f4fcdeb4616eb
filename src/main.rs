use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use criteria_jsonlogic::context::Options;
use criteria_jsonlogic::Converter;
use itertools::Itertools;
use tracing::{debug, error, info, Level};

/// Convert a criteria expression into JSONLogic.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Criteria expression. Prompted for on stdin when omitted.
    criteria: Option<String>,
    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
    /// Print the token list instead of converting
    #[arg(long)]
    tokens: bool,
    /// Do not strip enclosing double quotes from the input
    #[arg(long)]
    keep_quotes: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> Options {
        let mut opts = Options::default();
        if self.compact { opts = opts.compact(); }
        if self.keep_quotes { opts = opts.keep_quotes(); }
        opts
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let criteria = match args.criteria.clone() {
        Some(c) => c,
        None => match prompt() {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "failed to read criteria from stdin");
                eprintln!("Cannot read input: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let converter = Converter::new(args.options());

    // Token dump.
    if args.tokens {
        let tokens = converter.tokens(&criteria);
        return match serde_json::to_string_pretty(&tokens) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    // Blank input is not converted.
    if criteria.trim().is_empty() {
        println!("Result: ");
        return ExitCode::SUCCESS;
    }

    if tracing::enabled!(Level::DEBUG) {
        let tokens = converter.tokens(&criteria).iter().map(|t| t.as_str()).join(" | ");
        debug!(%tokens, "tokenized");
    }

    match converter.convert(&criteria) {
        Ok(json) => {
            info!(bytes = json.len(), "converted");
            println!("Result: {json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, criteria = %criteria, "conversion failed");
            println!("Error converting criteria string.");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Interactive mode: banner, prompt, one line from stdin, echoed back.
fn prompt() -> io::Result<String> {
    println!("Criteria Syntax Language To JSON Logic");
    print!("Enter a criteria string:");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']).to_string();
    println!("{line}");
    Ok(line)
}
