use clap::Parser;

/// Parse human-readable duration strings (e.g. "1h30m500ms") into a signed
/// millisecond magnitude, or format raw millisecond values back into the
/// canonical string form.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Duration strings to parse (or raw millisecond values with --from-millis).
    #[arg(value_name = "DURATION", required = true)]
    pub inputs: Vec<String>,

    /// Silently drop unrecognized characters and unknown unit symbols
    /// instead of failing.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub lenient: bool,

    /// Only check the inputs for scan-level garbage; exit non-zero if any
    /// input contains a character that cannot appear in a duration.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub check: bool,

    /// Treat inputs as raw millisecond values and print their canonical
    /// duration form.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub from_millis: bool,

    /// Emit one JSON object per input instead of plain text.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
