use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shroud")]
#[command(about = "Redact sensitive information from text or files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to redact (optional). If not provided, reads from stdin.
    pub file: Option<PathBuf>,

    /// Output file to write to. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print per-rule redaction counts as JSON to stderr
    #[arg(long)]
    pub report: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "SHROUD_CONFIG")]
    pub config: Option<PathBuf>,

    /// List the active redaction rules and exit
    #[arg(long)]
    pub list_rules: bool,
}
