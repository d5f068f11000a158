//! trellis CLI — driving adapter for the path-template tree.
//!
//! Subcommands:
//! - `search <config> <path>` — print every template matching the path
//! - `check <config>` — validate that the route table loads

use std::process;

use trellis::{Params, PathTree, RouteSetConfig};

/// Route payloads are free-form JSON values; the tree does not interpret them.
type Payload = serde_json::Value;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "search" => cmd_search(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_search(args: &[String]) -> Result<(), String> {
    let [config_path, path] = args else {
        return Err("search requires a config file path and one path to match".into());
    };

    let tree = load_tree(config_path)?;
    let results = tree.search(path);

    if results.is_empty() {
        println!("(no match)");
        return Ok(());
    }

    for m in &results {
        println!("{}{}", render_payload(m.payload), render_params(&m.params));
    }

    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    let [config_path] = args else {
        return Err("check requires a config file path".into());
    };

    let tree = load_tree(config_path)?;
    println!("Config valid: {} template(s)", tree.len());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_tree(path: &str) -> Result<PathTree<Payload>, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    let is_json = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: RouteSetConfig<Payload> = if is_json {
        serde_json::from_str(&content).map_err(|e| format!("JSON parse error: {e}"))?
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))?
    };

    Ok(config.build())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Output rendering
// ═══════════════════════════════════════════════════════════════════════════════

fn render_payload(payload: &Payload) -> String {
    match payload {
        Payload::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_params(params: &Params) -> String {
    if params.is_empty() {
        return String::new();
    }

    let mut pairs: Vec<_> = params.iter().collect();
    pairs.sort_unstable();

    let rendered: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("  [{}]", rendered.join(", "))
}

fn print_usage() {
    eprintln!(
        "trellis — multi-match path-template tree

USAGE:
    trellis search <config> <path>    Print every template matching <path>
    trellis check <config>            Validate that the route table loads

CONFIG:
    A YAML or JSON route table:

        routes:
          - path: /users/:id
            payload: Get a user by id

MATCHING:
    All matching templates are printed, literal matches before wildcard
    matches; wildcard bindings follow each payload as [name=value, ...]."
    );
}
