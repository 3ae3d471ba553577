mod debug_report;

use clap::{Parser, Subcommand, ValueEnum};
use debug_report::ansi::Palette;
use rb2py::{Options, translate_verbose_with};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing` directives).
const LOG_ENV: &str = "RB2PY_LOG";
/// Path standing for stdin (input) or stdout (output).
const STDIO: &str = "-";

/// Line-by-line Ruby to Python transliterator.
#[derive(Debug, Parser)]
#[command(name = "rb2py", version, about, long_about = None)]
struct Cli {
    /// Show each conversion step
    #[arg(long, global = true)]
    verbose: bool,

    /// Show detailed internal debug information (shows internal translation steps)
    #[arg(long, global = true)]
    debug: bool,

    /// Color diagnostics output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    color: ColorWhen,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn enabled(self, terminal: bool) -> bool {
        match self {
            ColorWhen::Auto => terminal && std::env::var_os("NO_COLOR").is_none(),
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a Ruby file (INPUT) into a Python file (OUTPUT)
    Convert(ConvertArgs),
}

#[derive(Debug, clap::Args)]
struct ConvertArgs {
    /// Ruby source file, or `-` for stdin
    input: PathBuf,

    /// Python file to write, or `-` for stdout
    output: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Error: Input file '{}' does not exist.", .0.display())]
    MissingInput(PathBuf),

    #[error("Error: failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: failed to print diagnostics: {0}")]
    Report(#[source] io::Error),
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let options = Options { verbose: cli.verbose, debug: cli.debug };

    let result = match &cli.command {
        Commands::Convert(args) => run_convert(args, &options, cli.color),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run_convert(args: &ConvertArgs, options: &Options, color: ColorWhen) -> Result<(), CliError> {
    let source = read_input(&args.input)?;
    let res = translate_verbose_with(&source, options);
    let to_stdout = is_stdio(&args.output);

    if let Some(mode) = res.details.mode {
        // Keep diagnostics off stdout when stdout carries the translation.
        let report = if to_stdout {
            let palette = Palette::new(color.enabled(io::stderr().is_terminal()));
            debug_report::print_run(&mut io::stderr().lock(), &res.details, mode, &palette)
        } else {
            let palette = Palette::new(color.enabled(io::stdout().is_terminal()));
            debug_report::print_run(&mut io::stdout().lock(), &res.details, mode, &palette)
        };
        report.map_err(CliError::Report)?;
    }

    write_output(&args.output, &res.text())?;

    if to_stdout {
        eprintln!("✅ Successfully wrote Python code to stdout");
    } else {
        println!("✅ Successfully wrote Python code to {}", args.output.display());
    }
    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if is_stdio(path) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
        return Ok(buffer);
    }

    if !path.exists() {
        return Err(CliError::MissingInput(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    let result = if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush())
    } else {
        fs::write(path, text)
    };
    result.map_err(|source| CliError::Write { path: path.to_path_buf(), source })
}
