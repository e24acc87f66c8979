//! CLI entry point for listgen.
//!
//! Turns every list file in a directory into a Go string-array constant and
//! writes them all to one generated file.
//!
//! # Usage
//!
//! ```bash
//! # Run inside the lists directory: writes ./static-lists.go
//! listgen
//!
//! # Point at another directory and package
//! listgen --dir static --package wordlists
//!
//! # Fail if the generated file is stale (for CI)
//! listgen --check
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use listgen_compiler::ListCompiler;
use listgen_core::{CompileConfig, Config, ContainerShape, WriteMode};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Generate Go string-array constants from a directory of line lists.
///
/// Each file becomes one constant named after the file (`user-agents.txt`
/// becomes `UserAgents`), holding the file's lines in order.
#[derive(Parser)]
#[command(name = "listgen", version, about, long_about = None)]
struct Cli {
    /// Directory holding the list files. Defaults to the current directory.
    #[arg(short, long, env = "LISTGEN_DIR")]
    dir: Option<Utf8PathBuf>,

    /// Name of the generated file, written inside the lists directory.
    #[arg(short, long, env = "LISTGEN_OUTPUT")]
    output: Option<String>,

    /// Go package declared at the top of the generated file.
    #[arg(short, long, env = "LISTGEN_PACKAGE")]
    package: Option<String>,

    /// JSON configuration file. Command-line flags take precedence.
    #[arg(short, long, env = "LISTGEN_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// File names to skip, in addition to the output file.
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Append to the output instead of replacing it.
    #[arg(long)]
    append: bool,

    /// Wrap lines in quotes verbatim instead of escaping them.
    #[arg(long)]
    raw: bool,

    /// Keep the directory listing order instead of sorting by name.
    #[arg(long)]
    no_sort: bool,

    /// Allow two lists to derive the same identifier.
    #[arg(long)]
    allow_collisions: bool,

    /// Emit `[]string` slices instead of fixed-size arrays.
    #[arg(long)]
    slices: bool,

    /// Exit with an error if the output is not up to date. Writes nothing.
    #[arg(long, conflicts_with_all = ["stdout", "append"])]
    check: bool,

    /// Print the generated source to stdout instead of writing the file.
    #[arg(long)]
    stdout: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects `RUST_LOG` if set; otherwise logs at `info`, or `debug` with
/// `--verbose`. Logs go to stderr so `--stdout` output stays clean.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},ignore=warn,globset=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds a [`CompileConfig`] from the optional config file and CLI flags.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded.
fn build_config(cli: &Cli) -> color_eyre::Result<CompileConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path, "Loading configuration");
            Config::load(path)?.compile
        }
        None => Config::default().compile,
    };

    if let Some(dir) = &cli.dir {
        config.dir.clone_from(dir);
    }
    if let Some(output) = &cli.output {
        config.output_file.clone_from(output);
    }
    if let Some(package) = &cli.package {
        config.package_name.clone_from(package);
    }
    config.excluded.extend(cli.exclude.iter().cloned());

    if cli.append {
        config.write_mode = WriteMode::Append;
    }
    if cli.raw {
        config.escape = false;
    }
    if cli.no_sort {
        config.sort = false;
    }
    if cli.allow_collisions {
        config.detect_collisions = false;
    }
    if cli.slices {
        config.container = ContainerShape::Slice;
    }

    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Generates the output file.
fn run_generate(compiler: &ListCompiler) -> color_eyre::Result<()> {
    let summary = compiler.run()?;

    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    writeln!(
        handle,
        "Wrote {} lists ({} elements) to {}",
        summary.lists, summary.elements, summary.output
    )?;
    Ok(())
}

/// Prints the generated source to stdout.
fn run_stdout(compiler: &ListCompiler) -> color_eyre::Result<()> {
    let rendered = compiler.render()?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", rendered.source)?;
    Ok(())
}

/// Fails if the output file differs from what would be generated.
fn run_check(compiler: &ListCompiler) -> color_eyre::Result<()> {
    let output = compiler.config().output_path();
    if compiler.check()? {
        info!(output = %output, "Output is up to date");
        Ok(())
    } else {
        Err(color_eyre::eyre::eyre!(
            "{output} is out of date; rerun listgen to regenerate it"
        ))
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to the requested mode
    let config = build_config(&cli)?;
    let compiler = ListCompiler::new(config)?;

    if cli.check {
        run_check(&compiler)
    } else if cli.stdout {
        run_stdout(&compiler)
    } else {
        run_generate(&compiler)
    }
}
