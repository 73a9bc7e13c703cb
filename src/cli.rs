//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::file_reader::{EncodingStrategy, FileReadConfig, FsReader, DEFAULT_MAX_FILE_SIZE};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::sink::StdoutSink;
use crate::core::util::{set_color_enabled, Diagnostics};
use crate::flows::runner::Runner;

/// vowelscan - list the unique all-vowel words of a text file.
#[derive(Parser, Debug)]
#[command(name = "vowelscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"vowelscan reads one text file and prints the words made only of vowels.

Tokens are split on whitespace and , . ! ? | ( ) $ = -
Every character that is not an ASCII letter is then stripped from a token.
A token is kept when it is non-empty and all of its letters are a, e, i, o or u
(either case). Each exact word is printed once, in the order it first appears.

Failures (missing file, unreadable file) are reported as a single line and
the process still exits with status 0.

Examples:
    vowelscan notes.txt
    vowelscan notes.txt --format json --pretty
    VOWELSCAN_FILE=notes.txt vowelscan
"#
)]
pub struct Cli {
    /// Text file to scan.
    #[arg(
        value_name = "FILE",
        env = "VOWELSCAN_FILE",
        default_value = "input.txt",
        long_help = "Text file to scan.\n\n\
Falls back to $VOWELSCAN_FILE, then to input.txt in the current directory."
    )]
    pub file: PathBuf,

    /// Output format (text/json/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): the file content followed by the filtered words, one per line\n\
- json: a single JSON object with path, content, words and stats\n\
- jsonl: one JSON object per filtered word"
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Treat invalid UTF-8 as a read error instead of replacing it.
    #[arg(long)]
    pub strict_utf8: bool,

    /// Refuse to read files larger than this many bytes.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_bytes: u64,

    /// Verbose mode (diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    fn read_config(&self) -> FileReadConfig {
        FileReadConfig {
            max_file_size: self.max_bytes,
            encoding: if self.strict_utf8 {
                EncodingStrategy::Strict
            } else {
                EncodingStrategy::Lossy
            },
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    set_color_enabled(!cli.no_color);

    let format: OutputFormat = cli.format.parse().map_err(anyhow::Error::msg)?;
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let diag = Diagnostics::new(cli.verbose);

    let reader = FsReader::new(cli.read_config());
    diag.debug(format!(
        "scanning {} (format: {:?}, limit: {} bytes, encoding: {:?})",
        cli.file.display(),
        format,
        reader.config().max_file_size,
        reader.config().encoding
    ));

    let runner = Runner::new(reader).with_diagnostics(diag);
    runner.run_with_config(&cli.file, render_config, StdoutSink);

    Ok(())
}
