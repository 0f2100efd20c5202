use anyhow::Result;
use richmark_config::Config;
use richmark_engine::{Node, ParseFlags, parse_with_flags, serialize};
use std::{env, fs, process};

enum Output {
    Tree,
    Json,
    Markdown,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut path = None;
    let mut output = Output::Tree;
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => output = Output::Json,
            "--markdown" => output = Output::Markdown,
            other if !other.starts_with('-') && path.is_none() => {
                path = Some(other.to_owned());
            }
            other => {
                eprintln!("Unrecognized argument: {other}");
                usage(&args[0]);
            }
        }
    }
    let Some(path) = path else {
        usage(&args[0]);
    };

    // Default flags come from the config file when one exists; a broken
    // config is reported but never blocks parsing.
    let mut flags = ParseFlags::default();
    match Config::load() {
        Ok(Some(config)) => flags.underline = config.underline,
        Ok(None) => {}
        Err(e) => eprintln!("Warning: ignoring config file: {e}"),
    }

    let markdown = fs::read_to_string(&path)?;
    let tree = parse_with_flags(&markdown, flags);

    match output {
        Output::Tree => print_tree(&tree, 0),
        Output::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        Output::Markdown => print!("{}", serialize::children_to_markdown(&tree)),
    }

    Ok(())
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <file.md> [--json | --markdown]");
    process::exit(1);
}

fn print_tree(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}{:?}", node.kind);
    if !node.content.is_empty() {
        line.push_str(&format!(" {:?}", node.content));
    }
    for (key, value) in &node.attributes {
        line.push_str(&format!(" {key}={value:?}"));
    }
    println!("{line}");
    for child in &node.children {
        print_tree(child, depth + 1);
    }
}
