use clap::Parser;

/// Chime — a frameless desktop clock.
#[derive(Parser, Debug)]
#[command(name = "chime", version, about)]
pub struct Args {
    /// Log level override (e.g. "chime=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Development mode: enable webview devtools.
    #[arg(long)]
    pub dev: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
