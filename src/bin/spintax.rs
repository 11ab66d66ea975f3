//! Command-line interface for spintax
//! This binary is used to spin, inspect and analyze spintax templates.
//!
//! Usage:
//!   spintax spin `<path>` [--template `<s>`] [--count `<n>`]      - Generate spuns
//!   spintax tree `<path>` [--format `<format>`]                 - Print the parsed tree
//!   spintax analyze `<path>` [--iterations `<n>`]               - Score output diversity

use clap::{Arg, ArgMatches, Command};
use std::path::Path;

use spintax::spintax::analysis::duplicate_evolution;
use spintax::Spin;

fn main() {
    let matches = Command::new("spintax")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for spinning and inspecting spintax templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("spin")
                .about("Generate spuns from a masterspin")
                .arg(path_arg())
                .arg(template_arg())
                .arg(delimiter_arg())
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Number of spuns to generate")
                        .default_value("1"),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the tree representation of a masterspin")
                .arg(path_arg())
                .arg(template_arg())
                .arg(delimiter_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'outline', 'json', 'yaml')")
                        .default_value("outline"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Generate spuns and report their pairwise similarity")
                .arg(path_arg())
                .arg(template_arg())
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .short('i')
                        .help("Number of spuns to generate and compare")
                        .default_value("25"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'table', 'json')")
                        .default_value("table"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("spin", spin_matches)) => handle_spin_command(spin_matches),
        Some(("tree", tree_matches)) => handle_tree_command(tree_matches),
        Some(("analyze", analyze_matches)) => handle_analyze_command(analyze_matches),
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the masterspin file")
        .index(1)
}

fn template_arg() -> Arg {
    Arg::new("template")
        .long("template")
        .short('t')
        .help("Inline masterspin (takes precedence over the path)")
}

fn delimiter_arg() -> Arg {
    Arg::new("delimiter")
        .long("delimiter")
        .short('d')
        .help("Perforation delimiter (single character)")
        .default_value("|")
}

/// Build the Spin from the chosen source, exiting on error
fn load_spin(matches: &ArgMatches) -> Spin {
    let template = matches.get_one::<String>("template").map(|s| s.as_str());
    let path = matches.get_one::<String>("path").map(Path::new);
    Spin::from_options(template, path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn delimiter_of(matches: &ArgMatches) -> char {
    let raw = matches
        .get_one::<String>("delimiter")
        .expect("delimiter has a default");
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            eprintln!("Error: delimiter must be a single character, got {:?}", raw);
            std::process::exit(1);
        }
    }
}

fn count_of(matches: &ArgMatches, name: &str) -> usize {
    let raw = matches.get_one::<String>(name).expect("argument has a default");
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Error: {} must be a number, got {:?}", name, raw);
        std::process::exit(1);
    })
}

/// Handle the spin command
fn handle_spin_command(matches: &ArgMatches) {
    let spin = load_spin(matches);
    let delimiter = delimiter_of(matches);
    let count = count_of(matches, "count");
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        println!("{}", spin.unspin_with(delimiter, &mut rng));
    }
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) {
    let spin = load_spin(matches);
    let delimiter = delimiter_of(matches);
    let format = matches.get_one::<String>("format").expect("format has a default");

    let tree = spin.tree_with_delimiter(delimiter).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let formatted = match format.as_str() {
        "outline" => tree.render_outline(),
        "json" => {
            let value = serde_json::Value::Object(tree.to_map());
            serde_json::to_string_pretty(&value).unwrap_or_else(|e| {
                eprintln!("Error formatting tree: {}", e);
                std::process::exit(1);
            })
        }
        "yaml" => {
            let value = serde_json::Value::Object(tree.to_map());
            serde_yaml::to_string(&value).unwrap_or_else(|e| {
                eprintln!("Error formatting tree: {}", e);
                std::process::exit(1);
            })
        }
        other => {
            eprintln!("Format '{}' not supported for tree output", other);
            eprintln!("Available formats: outline, json, yaml");
            std::process::exit(1);
        }
    };

    println!("{}", formatted);
}

/// Handle the analyze command
fn handle_analyze_command(matches: &ArgMatches) {
    let spin = load_spin(matches);
    let iterations = count_of(matches, "iterations");
    let format = matches.get_one::<String>("format").expect("format has a default");

    let mut rng = rand::thread_rng();
    let report = duplicate_evolution(&spin, iterations, &mut rng);

    let formatted = match format.as_str() {
        "table" => report.render_table(),
        "json" => serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            eprintln!("Error formatting report: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Format '{}' not supported for analyze output", other);
            eprintln!("Available formats: table, json");
            std::process::exit(1);
        }
    };

    print!("{}", formatted);
    if !formatted.ends_with('\n') {
        println!();
    }
}
