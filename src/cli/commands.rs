//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Synthesize types and instances from JSON documents
#[derive(Parser, Debug)]
#[command(name = "keystone-types")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Provider configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize a type from a JSON object and print it
    Shape(DocumentArgs),

    /// Materialize an instance from a JSON object and print it
    Instance(DocumentArgs),

    /// Print every type registered from the config seeds and the given files
    Catalog {
        /// Additional types as NAME=PATH (repeatable)
        #[arg(long = "file", value_parser = parse_named_file)]
        files: Vec<(String, PathBuf)>,
    },
}

/// A type name plus one JSON document source
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Type name (defaults to the configured default type name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Inline JSON text
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,

    /// JSON file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
    /// GraphQL SDL (types only)
    Sdl,
}

/// Parse a `NAME=PATH` argument
fn parse_named_file(s: &str) -> std::result::Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_command() {
        let cli = Cli::try_parse_from([
            "keystone-types",
            "shape",
            "--name",
            "Person",
            "--json",
            r#"{"Id": 1}"#,
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Shape(args) => {
                assert_eq!(args.name.as_deref(), Some("Person"));
                assert_eq!(args.json.as_deref(), Some(r#"{"Id": 1}"#));
                assert!(args.file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_json_and_file_conflict() {
        let result = Cli::try_parse_from([
            "keystone-types",
            "instance",
            "--json",
            "{}",
            "--file",
            "a.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_catalog_files() {
        let cli = Cli::try_parse_from([
            "keystone-types",
            "-f",
            "sdl",
            "catalog",
            "--file",
            "User=user.json",
            "--file",
            "Order=data/order.json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Sdl);
        match cli.command {
            Commands::Catalog { files } => {
                assert_eq!(
                    files,
                    vec![
                        ("User".to_string(), PathBuf::from("user.json")),
                        ("Order".to_string(), PathBuf::from("data/order.json")),
                    ]
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_named_file_rejects_malformed() {
        assert!(parse_named_file("no-separator").is_err());
        assert!(parse_named_file("=path").is_err());
        assert!(parse_named_file("Name=").is_err());
    }
}
