use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;

use wildfind::{Config, Mode, Request, WildError};

/// wildfind: filter stdin lines with a `*`/`?` glob.
/// Whole-line match, leftmost-shortest find, or search-box query.
#[derive(Parser)]
#[command(name = "wildfind", version, about)]
struct Cli {
    /// Glob pattern (`*` any run, `?` one char, `\` escapes), or a query in query mode.
    pattern: Option<String>,

    /// How each line is tested. Overrides the config file.
    #[arg(long, value_enum)]
    mode: Option<CliMode>,

    /// Compare case-insensitively.
    #[arg(short, long)]
    ignore_case: bool,

    /// Treat `*`, `?` and `\` as ordinary characters.
    #[arg(long)]
    literal: bool,

    /// Byte range within each line, e.g. "0..8" or "4..".
    #[arg(long, value_name = "START..END")]
    range: Option<String>,

    /// Machine-readable JSON output.
    #[arg(long)]
    json: bool,

    /// TOML file with defaults (ignore_case, literal, mode, json).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliMode {
    Match,
    Find,
    Query,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Match => Mode::Match,
            CliMode::Find => Mode::Find,
            CliMode::Query => Mode::Query,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "wildfind", &mut io::stdout());
        return;
    }

    wildfind::logging::init(cli.verbose);

    let Some(pattern) = cli.pattern.as_deref() else {
        eprintln!("usage: wildfind <PATTERN> [--mode match|find|query] [--ignore-case] < input");
        process::exit(3);
    };

    if let Err(e) = execute(&cli, pattern) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}

fn execute(cli: &Cli, pattern: &str) -> Result<(), WildError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    // Flags only switch things on; the mode flag replaces the configured one
    config.ignore_case |= cli.ignore_case;
    config.literal |= cli.literal;
    config.json |= cli.json;
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    tracing::debug!(?config, "effective config");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|source| WildError::IoError {
            path: PathBuf::from("<stdin>"),
            source,
        })?;

    let request = Request {
        pattern,
        config,
        range: cli.range.as_deref(),
    };
    let output = wildfind::run(&request, &input)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
