use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use calcbrain::calculator::Keypad;
use calcbrain::config::Config;
use calcbrain::logging;
use calcbrain::session::{Flow, feed_line, write_display};

/// Left-to-right calculator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Evaluate the given keys and exit, e.g. "2 + 3 × 4 =".
    #[arg(short, long, value_name = "KEYS")]
    eval: Option<String>,

    /// Path to the config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Group thousands in the output.
    #[arg(long, overrides_with = "no_grouping")]
    grouping: bool,

    /// Don't group thousands in the output.
    #[arg(long, overrides_with = "grouping")]
    no_grouping: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let (config, config_path) = match &args.config {
        Some(path) => {
            let config = Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (config, path.clone())
        }
        None => (
            Config::load().context("Failed to load default config")?,
            Config::config_path(),
        ),
    };

    let mut format = config.display_format();
    if args.grouping && format.grouping_separator.is_none() {
        format.grouping_separator = Some(if format.decimal_separator == ',' { '.' } else { ',' });
    }
    if args.no_grouping {
        format.grouping_separator = None;
    }

    let mut keypad = Keypad::new(format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(keys) = args.eval {
        feed_line(&mut keypad, &keys, &mut out)?;
        write_display(&keypad, &mut out)?;
        return Ok(());
    }

    info!(config = %config_path.display(), "Starting interactive session");
    run_repl(&mut keypad, &mut out)
}

fn run_repl(keypad: &mut Keypad, out: &mut impl Write) -> Result<()> {
    write_display(keypad, out)?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        if feed_line(keypad, &line, out)? == Flow::Quit {
            break;
        }
        write_display(keypad, out)?;
        out.flush()?;
    }

    Ok(())
}
