//! Unit tests for command-line parsing and overrides.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use clap::Parser;

use crate::{
    DocgenError,
    cli::{Cli, Commands},
    config::{DEFAULT_CONFIG_FILE, DocgenConfig},
};

#[test]
fn parses_generate_with_default_config_path() {
    let cli = Cli::try_parse_from(["confdoc", "generate"]).unwrap();

    assert_eq!(cli.command, Commands::Generate);
    assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    assert!(!cli.overrides.no_format);
}

#[test]
fn parses_print_json_flag() {
    let cli = Cli::try_parse_from(["confdoc", "print", "--json"]).unwrap();

    assert_eq!(cli.command, Commands::Print { json: true });
}

#[test]
fn parses_schema_output() {
    let cli = Cli::try_parse_from(["confdoc", "schema", "-o", "schemas/confdoc.json"]).unwrap();

    assert_eq!(
        cli.command,
        Commands::Schema {
            output: Some(PathBuf::from("schemas/confdoc.json"))
        }
    );
}

#[test]
fn global_flags_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "confdoc",
        "check",
        "--config",
        "docs/confdoc.toml",
        "--root-type",
        "AppConfig",
    ])
    .unwrap();

    assert_eq!(cli.command, Commands::Check);
    assert_eq!(cli.config, PathBuf::from("docs/confdoc.toml"));
    assert_eq!(cli.overrides.root_type.as_deref(), Some("AppConfig"));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["confdoc"]).is_err());
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["confdoc", "publish"]).is_err());
}

#[test]
fn overrides_replace_configured_values() {
    let cli = Cli::try_parse_from([
        "confdoc",
        "generate",
        "--source-root",
        "target/schemas",
        "--document",
        "docs/CONFIG.md",
        "--example",
        "docs/example.toml",
        "--no-format",
    ])
    .unwrap();
    let mut config = DocgenConfig::default();

    cli.overrides.apply(&mut config);

    assert_eq!(config.source.root, PathBuf::from("target/schemas"));
    assert_eq!(config.document.path, PathBuf::from("docs/CONFIG.md"));
    assert_eq!(config.document.example, PathBuf::from("docs/example.toml"));
    assert!(!config.formatter.is_enabled());
    assert_eq!(config.source.root_type, "Config");
}

#[test]
fn absent_overrides_leave_config_untouched() {
    let cli = Cli::try_parse_from(["confdoc", "list"]).unwrap();
    let mut config = DocgenConfig::default();

    cli.overrides.apply(&mut config);

    assert_eq!(config, DocgenConfig::default());
}

#[test]
fn serialization_errors_say_serialize() {
    let err = DocgenError::serialization("key must be a string", "extracted sections");

    assert_eq!(
        err.to_string(),
        "failed to serialize extracted sections: key must be a string"
    );
}
