// Binary entry point: parse or format durations given on the command line.

use std::process::exit;

use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use humandur::cli;
use humandur::{format_duration, is_parseable, parse, parse_lenient, DurationValue};

/// What gets printed per input in `--json` mode.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    canonical: String,
    millis: f64,
    secs: f64,
    parseable: bool,
}

/// Initialize the tracing subscriber (fmt layer to stderr, `RUST_LOG` filter).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("humandur=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let args = cli::parse_args();

    // --- Check Mode ---
    // Report scan-level parseability only and exit; structural errors are
    // the parser's business.
    if args.check {
        let mut all_ok = true;
        for input in &args.inputs {
            let ok = is_parseable(input);
            all_ok &= ok;
            println!("{input}\t{}", if ok { "ok" } else { "garbage" });
        }
        exit(i32::from(!all_ok));
    }

    // --- Format Mode ---
    if args.from_millis {
        for input in &args.inputs {
            let millis: f64 = match input.parse() {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("Error: not a millisecond value '{input}': {e}");
                    exit(2);
                }
            };
            println!("{}", format_duration(DurationValue::from_millis(millis)));
        }
        return;
    }

    // --- Parse Mode ---
    for input in &args.inputs {
        let result = if args.lenient {
            parse_lenient(input)
        } else {
            parse(input)
        };
        let value = match result {
            Ok(v) => v,
            Err(e) => {
                eprintln!("Error: {e}");
                exit(1);
            }
        };
        debug!(input, millis = value.as_millis(), "parsed duration");

        if args.json {
            let report = Report {
                input,
                canonical: format_duration(value),
                millis: value.as_millis(),
                secs: value.as_secs(),
                parseable: is_parseable(input),
            };
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Error serializing report: {e}");
                    exit(3);
                }
            }
        } else {
            println!("{}\t{}", format_duration(value), value.as_millis());
        }
    }
}
