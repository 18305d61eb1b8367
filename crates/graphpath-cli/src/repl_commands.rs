//! REPL command handlers.
//!
//! Each command is implemented as a separate function taking the session
//! graph by reference.

#![allow(clippy::doc_markdown)]

use colored::Colorize;
use graphpath_core::graph::render::{
    connection_rows, describe_path, distance_rows, format_weight, weight_rows,
};
use graphpath_core::{Error, OutputFormat, WeightedGraph};
use serde_json::json;

use crate::repl::ReplConfig;
use crate::table::{build_table, build_table_with_header};

/// Result of a REPL command execution.
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

impl From<Error> for CommandResult {
    fn from(err: Error) -> Self {
        Self::Error(format!("[{}] {}", err.code(), err))
    }
}

/// Handle a REPL command (line starting with '.')
pub fn handle_command(graph: &mut WeightedGraph, line: &str, config: &mut ReplConfig) -> CommandResult {
    let args = match split_args(line) {
        Ok(args) => args,
        Err(msg) => return CommandResult::Error(msg),
    };
    let parts: Vec<&str> = args.iter().map(String::as_str).collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        ".quit" | ".exit" | ".q" => CommandResult::Quit,
        ".help" | ".h" => {
            print_help();
            CommandResult::Continue
        }
        ".arc" | ".a" => cmd_arc(graph, config, &parts),
        ".node" => cmd_node(graph, &parts),
        ".rename" => cmd_rename(graph, &parts),
        ".weight" | ".w" => cmd_weight(graph, config, &parts),
        ".path" | ".p" => cmd_path(graph, config, &parts),
        ".reach" => cmd_reach(graph, config, &parts),
        ".matrix" | ".show" | ".m" => cmd_matrix(graph, config),
        ".nodes" => cmd_nodes(graph, config),
        ".format" => cmd_format(config, &parts),
        ".timing" => cmd_timing(config, &parts),
        ".clear" => cmd_clear(),
        _ => CommandResult::Error(format!("Unknown command: {cmd} (type .help)")),
    }
}

/// Splits a command line on whitespace. Double quotes group words, so node
/// names may contain spaces: `.arc "New York" Boston 3`.
fn split_args(line: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if quoted {
        return Err("Unterminated quote".to_string());
    }
    if pending {
        args.push(current);
    }
    Ok(args)
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn parse_weight(raw: &str) -> Result<f64, CommandResult> {
    raw.parse::<f64>()
        .map_err(|_| CommandResult::Error(format!("'{raw}' is not a number")))
}

fn print_json(value: &serde_json::Value) -> CommandResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}\n");
            CommandResult::Continue
        }
        Err(err) => Error::from(err).into(),
    }
}

fn cmd_arc(graph: &mut WeightedGraph, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() != 4 {
        println!("Usage: .arc <origin> <destination> <weight>\n");
        return CommandResult::Continue;
    }
    let (origin, destination) = (parts[1], parts[2]);
    let weight = match parse_weight(parts[3]) {
        Ok(w) => w,
        Err(err) => return err,
    };

    match graph.add_arc(origin, destination, weight) {
        Ok(inserted) => {
            for name in &inserted.created {
                println!("Node '{}' did not exist and was added.", name.green());
            }
            println!(
                "Arc {} -> {} with weight {} added.\n",
                origin.green(),
                destination.green(),
                format_weight(weight, config.display.precision, &config.display.infinity_symbol)
            );
            CommandResult::Continue
        }
        Err(err) => err.into(),
    }
}

fn cmd_node(graph: &mut WeightedGraph, parts: &[&str]) -> CommandResult {
    if parts.len() != 2 {
        println!("Usage: .node <name>\n");
        return CommandResult::Continue;
    }
    let name = parts[1];
    if graph.contains_node(name) {
        println!("Node '{}' already exists.\n", name.green());
    } else {
        let id = graph.add_node(name);
        println!("Node '{}' added with index {id}.\n", name.green());
    }
    CommandResult::Continue
}

fn cmd_rename(graph: &mut WeightedGraph, parts: &[&str]) -> CommandResult {
    if parts.len() != 3 {
        println!("Usage: .rename <old_name> <new_name>\n");
        return CommandResult::Continue;
    }
    match graph.rename_node(parts[1], parts[2]) {
        Ok(_) => {
            println!("Node '{}' renamed to '{}'.\n", parts[1], parts[2].green());
            CommandResult::Continue
        }
        Err(err) => err.into(),
    }
}

fn cmd_weight(graph: &mut WeightedGraph, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() != 4 {
        println!("Usage: .weight <origin> <destination> <new_weight>\n");
        return CommandResult::Continue;
    }
    let weight = match parse_weight(parts[3]) {
        Ok(w) => w,
        Err(err) => return err,
    };

    match graph.set_arc_weight(parts[1], parts[2], weight) {
        Ok(previous) => {
            let precision = config.display.precision;
            let symbol = &config.display.infinity_symbol;
            println!(
                "Arc {} -> {} weight changed from {} to {}.\n",
                parts[1].green(),
                parts[2].green(),
                format_weight(previous, precision, symbol),
                format_weight(weight, precision, symbol).bold()
            );
            CommandResult::Continue
        }
        Err(err) => err.into(),
    }
}

fn cmd_path(graph: &WeightedGraph, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() != 3 {
        println!("Usage: .path <origin> <destination>\n");
        if !graph.is_empty() {
            println!("Nodes: {}\n", graph.nodes().join(", "));
        }
        return CommandResult::Continue;
    }

    let path = match graph.shortest_path(parts[1], parts[2]) {
        Ok(path) => path,
        Err(err) => return err.into(),
    };

    match config.format() {
        OutputFormat::Json => print_json(&json!(path)),
        OutputFormat::Table => {
            let precision = config.display.precision;
            println!(
                "Shortest distance from {} to {} is {}.",
                path.origin.green(),
                path.destination.green(),
                format!("{:.precision$}", path.distance).bold()
            );
            println!("{}\n", describe_path(&path, precision));
            CommandResult::Continue
        }
    }
}

fn cmd_reach(graph: &WeightedGraph, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() != 2 {
        println!("Usage: .reach <origin>\n");
        return CommandResult::Continue;
    }
    let table = match graph.shortest_distances(parts[1]) {
        Ok(table) => table,
        Err(err) => return err.into(),
    };
    let rows = distance_rows(graph.nodes(), &table, &config.display);

    match config.format() {
        OutputFormat::Json => {
            let entries: Vec<_> = graph
                .nodes()
                .iter()
                .enumerate()
                .map(|(id, name)| {
                    let distance = table.distance(id);
                    json!({
                        "node": name,
                        "distance": distance.is_finite().then_some(distance),
                        "path": table.path_to(id).map(|ids| {
                            ids.iter().map(|&i| graph.nodes()[i].clone()).collect::<Vec<_>>()
                        }),
                    })
                })
                .collect();
            print_json(&json!({ "origin": parts[1], "reach": entries }))
        }
        OutputFormat::Table => {
            println!("{}", build_table_with_header(&["Node", "Distance", "Path"], rows));
            println!();
            CommandResult::Continue
        }
    }
}

fn cmd_matrix(graph: &WeightedGraph, config: &ReplConfig) -> CommandResult {
    let snapshot = graph.snapshot();
    match config.format() {
        OutputFormat::Json => match snapshot.to_json_pretty() {
            Ok(text) => {
                println!("{text}\n");
                CommandResult::Continue
            }
            Err(err) => err.into(),
        },
        OutputFormat::Table => {
            if snapshot.nodes.is_empty() {
                println!("Graph is empty. Add arcs with {}\n", ".arc <origin> <destination> <weight>".yellow());
                return CommandResult::Continue;
            }
            println!("{}", "Adjacency Matrix - Connection".bold().underline());
            println!("{}\n", build_table(&connection_rows(&snapshot)));
            println!("{}", "Adjacency Matrix - Weight".bold().underline());
            println!("{}\n", build_table(&weight_rows(&snapshot, &config.display)));
            CommandResult::Continue
        }
    }
}

fn cmd_nodes(graph: &WeightedGraph, config: &ReplConfig) -> CommandResult {
    if config.format() == OutputFormat::Json {
        return print_json(&json!(graph.nodes()));
    }
    if graph.is_empty() {
        println!("No nodes yet.\n");
    } else {
        println!("{}", "Nodes:".bold());
        for (id, name) in graph.nodes().iter().enumerate() {
            println!("  {id:>3}  {}", name.green());
        }
        println!();
    }
    CommandResult::Continue
}

fn cmd_format(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Format is {:?}\n", config.display.format);
        return CommandResult::Continue;
    }
    match parts[1].parse::<OutputFormat>() {
        Ok(format) => {
            config.display.format = format;
            println!("Format: {}\n", parts[1].to_lowercase());
            CommandResult::Continue
        }
        Err(_) => CommandResult::Error("Use: .format table|json".to_string()),
    }
}

fn cmd_timing(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if let Some(raw) = parts.get(1) {
        let Some(enabled) = parse_toggle(raw) else {
            return CommandResult::Error(format!("'{raw}' is not on or off"));
        };
        config.timing = enabled;
    }
    let state = if config.timing { "on" } else { "off" };
    println!("Elapsed time display is {}.\n", state.bold());
    CommandResult::Continue
}

fn cmd_clear() -> CommandResult {
    print!("\x1B[2J\x1B[1;1H");
    CommandResult::Continue
}

/// Print help text for REPL commands
pub fn print_help() {
    println!("\n{}", "GraphPath Commands".bold().underline());
    println!();
    println!("  {}  Add arc, creating missing nodes", ".arc <origin> <dest> <weight>".yellow());
    println!("  {}                    Add a node", ".node <name>".yellow());
    println!("  {}              Rename a node", ".rename <old> <new>".yellow());
    println!("  {} Change an arc weight", ".weight <origin> <dest> <weight>".yellow());
    println!("  {}         Shortest path (Dijkstra)", ".path <origin> <dest>".yellow());
    println!("  {}                Distances to every node", ".reach <origin>".yellow());
    println!("  {}                         Show connection and weight matrices", ".matrix".yellow());
    println!("  {}                          List nodes", ".nodes".yellow());
    println!("  {}              Set output format", ".format table|json".yellow());
    println!("  {}                  Toggle timing display", ".timing on|off".yellow());
    println!("  {}                          Clear screen", ".clear".yellow());
    println!("  {}                           Exit", ".quit".yellow());
    println!();
    println!("{}", "Rules:".bold().underline());
    println!();
    println!("  Weights must be non-negative numbers.");
    println!("  Quote names that contain spaces: .node \"New York\"");
    println!("  Only one direction may exist between two nodes.");
    println!();
}
