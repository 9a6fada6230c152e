//! Command-line interface for bibleref
//! Inspect how a shorthand reference is parsed, list the catalog, or filter
//! the known Bible versions.
//!
//! Usage:
//!   bibleref parse <reference>                          - Parse and validate a reference
//!   bibleref books                                      - List canonical abbreviations
//!   bibleref versions [--language <l>]... [--server <s>] [--name <n>]...

use clap::{Arg, ArgAction, Command};

use bibleref::{BookCatalog, ReferenceParser, VersionRegistry};

fn main() {
    let matches = Command::new("bibleref")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and validating shorthand scripture references")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse and validate a reference")
                .arg(
                    Arg::new("reference")
                        .help("The reference to parse, e.g. 'Gen1.1-2.6' or 'jud3'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("books").about("List the canonical book abbreviations"))
        .subcommand(
            Command::new("versions")
                .about("List known Bible versions, optionally filtered")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .action(ArgAction::Append)
                        .help("Select specific versions by name (wins over other filters)"),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .action(ArgAction::Append)
                        .help("Filter by language code, e.g. 'de'"),
                )
                .arg(
                    Arg::new("server")
                        .long("server")
                        .short('s')
                        .help("Filter by hosting server name"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let reference = parse_matches.get_one::<String>("reference").unwrap();
            handle_parse_command(reference);
        }
        Some(("books", _)) => {
            handle_books_command();
        }
        Some(("versions", version_matches)) => {
            let names: Vec<String> = version_matches
                .get_many::<String>("name")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            let languages: Vec<String> = version_matches
                .get_many::<String>("language")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            let server = version_matches.get_one::<String>("server");
            handle_versions_command(&names, &languages, server.map(|s| s.as_str()));
        }
        _ => unreachable!(),
    }
}

fn load_catalog() -> BookCatalog {
    BookCatalog::bundled().unwrap_or_else(|e| {
        eprintln!("Error loading book catalog: {}", e);
        std::process::exit(1);
    })
}

/// Handle the parse command
fn handle_parse_command(reference: &str) {
    let catalog = load_catalog();
    let parser = ReferenceParser::new(&catalog);
    let parsed = parser.parse(reference);

    println!("normalized: {}", parsed.normalized);
    match parsed.grammar_type {
        Some(tag) => println!("type:       {}", tag),
        None => println!("type:       (no pattern matched)"),
    }
    if !parsed.from_book.is_empty() {
        println!("from book:  {}", parsed.from_book);
    }
    if !parsed.to_book.is_empty() {
        println!("to book:    {}", parsed.to_book);
    }
    if parsed.from_chapter != 0 {
        println!("chapter:    {}", parsed.from_chapter);
    }
    if parsed.to_chapter != 0 {
        println!("to chapter: {}", parsed.to_chapter);
    }
    if parsed.from_verse != 0 {
        println!("verse:      {}", parsed.from_verse);
    }
    if parsed.to_verse != 0 {
        println!("to verse:   {}", parsed.to_verse);
    }

    if parsed.passed {
        println!("passed");
    } else {
        for message in &parsed.messages {
            eprintln!("{}", message);
        }
        std::process::exit(1);
    }
}

/// Handle the books command
fn handle_books_command() {
    let catalog = load_catalog();
    for (abbrev, readable) in catalog
        .canonical_abbreviations()
        .iter()
        .zip(catalog.readable_abbreviations())
    {
        println!("{:<8} {}", abbrev, readable);
    }
}

/// Handle the versions command
fn handle_versions_command(names: &[String], languages: &[String], server: Option<&str>) {
    let registry = VersionRegistry::bundled().unwrap_or_else(|e| {
        eprintln!("Error loading version registry: {}", e);
        std::process::exit(1);
    });

    for version in registry.filter(names, languages, server) {
        println!(
            "{:<6} {:<4} {:<8} {}",
            version.name, version.language, version.server, version.fullname
        );
    }
}
