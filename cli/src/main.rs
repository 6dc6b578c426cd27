//! Line-oriented front end: every stdin line is treated as the new contents
//! of the search box.

mod render;

use anyhow::Context;
use clap::Parser;
use glossa_core::load_dir;
use glossa_core::types::GlossaConfig;
use glossa_search::{EventSink, Resolved, SearchSession, SessionEvent};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const SELECT_COMMAND: &str = ":select ";

#[derive(Parser)]
#[command(name = "glossa")]
#[command(author, version, about = "As-you-type alias lookup over a text corpus", long_about = None)]
struct Cli {
    /// Path to the config file [default: ./glossa.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus directory, overrides the config file
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "glossa=debug,glossa_core=debug,glossa_search=debug"
    } else {
        "glossa=info,glossa_core=info,glossa_search=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Everything the printer thread writes, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Output {
    Event(SessionEvent),
    Selected(Resolved),
}

/// Dispatches one stdin line: `:select <alias>` is a direct lookup, anything
/// else replaces the search input.
fn handle_line(
    session: &SearchSession,
    line: &str,
    output: &Sender<Output>,
) -> Option<JoinHandle<bool>> {
    match line.strip_prefix(SELECT_COMMAND) {
        Some(alias) => {
            let resolved = session.on_candidate_selected(alias);
            if let Err(e) = output.send(Output::Selected(resolved)) {
                debug!(error = %e, "output closed, dropping selection");
            }
            None
        }
        None => session.on_input_changed(line),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => GlossaConfig::path(
            &env::current_dir().context("failed to resolve the working directory")?,
        ),
    };
    let config = GlossaConfig::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    for problem in config.validate() {
        warn!(%problem, "invalid config value, using default");
    }
    let mut config = config.with_defaults_for_invalid();
    if let Some(corpus) = cli.corpus {
        config.corpus.path = corpus;
    }

    let (index, report) = load_dir(&config.corpus.path, &config.corpus);
    if index.is_empty() {
        warn!(path = %config.corpus.path.display(), "corpus produced an empty index");
    }
    let overwrites = report.overwrites().count();
    if overwrites > 0 {
        warn!(overwrites, "some aliases are claimed by more than one entry");
    }
    info!(units = report.units, aliases = index.len(), "ready");

    let (output_tx, output_rx) = mpsc::channel::<Output>();
    let session = SearchSession::new(
        Arc::new(index),
        config.search.clone(),
        event_sink(output_tx.clone()),
    );

    let printer = thread::spawn(move || -> io::Result<()> {
        for output in output_rx {
            let text = match &output {
                Output::Event(event) => render::event(event),
                Output::Selected(resolved) => render::resolved(resolved),
            };
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")?;
            stdout.flush()?;
        }
        Ok(())
    });

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        handle_line(&session, &line, &output_tx);
    }

    // In-flight searches hold clones of the sink; the printer exits once
    // they have all finished.
    drop(output_tx);
    drop(session);
    printer
        .join()
        .map_err(|_| anyhow::anyhow!("output thread panicked"))?
        .context("failed to write results")?;

    Ok(())
}

fn event_sink(output: Sender<Output>) -> EventSink {
    Arc::new(move |event| {
        if let Err(e) = output.send(Output::Event(event)) {
            debug!(error = %e, "output closed, dropping session event");
        }
    })
}

#[cfg(test)]
mod tests;
