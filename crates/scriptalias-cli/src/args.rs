use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the scriptalias binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "scriptalias",
    version,
    about = "Generate build-script alias definitions from alias descriptors"
)]
pub struct CliArgs {
    /// JSON file holding an array of alias descriptors, or `-` for stdin.
    pub input: PathBuf,

    /// Write the generated definitions here instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Path to a scriptalias.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Formatting Overrides ====================
    /// Spaces per indentation level.
    #[arg(long)]
    pub indent: Option<u32>,

    /// Terminate lines with CRLF.
    #[arg(long)]
    pub crlf: bool,

    /// Render well-known System types as C# keywords.
    #[arg(long = "type-keywords")]
    pub type_keywords: bool,

    /// Render every descriptor even when an identical one was already rendered.
    #[arg(long = "no-cache")]
    pub no_cache: bool,
}
