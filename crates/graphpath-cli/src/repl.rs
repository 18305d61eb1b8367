//! Interactive session loop.
//!
//! The session owns a single [`WeightedGraph`] for its whole lifetime and
//! passes it to each command handler; nothing is persisted.

use colored::Colorize;
use graphpath_core::{DisplayConfig, OutputFormat, WeightedGraph};
use instant::Instant;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::repl_commands::{handle_command, CommandResult};

const PROMPT: &str = "graphpath> ";

/// Mutable session settings.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Precision, infinity symbol, format and color.
    pub display: DisplayConfig,
    /// Print elapsed time after each command.
    pub timing: bool,
}

impl ReplConfig {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            display,
            timing: false,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.display.format
    }
}

fn print_banner() {
    println!(
        "{} {}",
        "GraphPath".bold().cyan(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!("Type {} for commands, {} to exit.\n", ".help".yellow(), ".quit".yellow());
}

/// Runs the read-eval-print loop until `.quit` or end of input.
pub fn run(mut config: ReplConfig) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut graph = WeightedGraph::new();

    print_banner();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                let start = Instant::now();
                match handle_command(&mut graph, line, &mut config) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(msg) => {
                        eprintln!("{} {}\n", "Error:".red().bold(), msg);
                    }
                }
                if config.timing {
                    let elapsed = start.elapsed();
                    println!(
                        "{}",
                        format!("Time: {:.3}ms\n", elapsed.as_secs_f64() * 1000.0).dimmed()
                    );
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "Session ended"
    );
    println!("Bye!");
    Ok(())
}
