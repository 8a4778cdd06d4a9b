use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use observe_expr::config::Config;
use observe_expr::output::{render, render_error, OutputFormat};

/// observe-expr - Parse and inspect observe expressions
#[derive(Parser, Debug)]
#[command(name = "observe-expr")]
#[command(version)]
#[command(about = "Parse and inspect observe expressions", long_about = None)]
struct Cli {
    /// Expressions to parse (omit to read one per line from stdin)
    expressions: Vec<String>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a config file (default: ~/.config/observe-expr/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop at the first invalid expression
    #[arg(long)]
    fail_fast: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    // CLI flags override config
    let format = cli.format.unwrap_or(config.format);
    let fail_fast = cli.fail_fast || config.fail_fast;

    let expressions = if cli.expressions.is_empty() {
        if io::stdin().is_terminal() {
            log::warn!("no expressions given, reading from terminal (Ctrl-D to finish)");
        }
        read_expressions(io::stdin().lock()).context("Failed to read expressions from stdin")?
    } else {
        cli.expressions
    };

    let mut failures = 0usize;
    for expression in &expressions {
        match observe_expr::parse(expression) {
            Ok(ast) => println!("{}", render(&ast, format, config.indent_size)?),
            Err(err) => {
                failures += 1;
                eprintln!("{}", render_error(expression, &err));
                if fail_fast {
                    break;
                }
            }
        }
    }

    log::info!(
        "{} expression(s) processed, {} invalid",
        expressions.len(),
        failures
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Reads one expression per non-blank line.
fn read_expressions(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }
    Ok(expressions)
}

fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
