// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::ops::Backend;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["hubwrite", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "hubwrite",
        "-l",
        "5",
        "--dry",
        "--token",
        "ghp_test",
        "options",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.dry);
    assert_eq!(cli.global.token.as_deref(), Some("ghp_test"));
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn test_parse_update_with_target() {
    let cli = Cli::try_parse_from([
        "hubwrite",
        "update",
        "README.md",
        "--owner",
        "octocat",
        "--repo",
        "hello-world",
        "-b",
        "main",
        "--content",
        "# hello",
        "--via",
        "rest",
    ])
    .unwrap();
    let Some(Command::Update(args)) = cli.command else {
        panic!("expected update command");
    };
    assert_eq!(args.path.as_deref(), Some("README.md"));
    assert_eq!(args.target.owner.as_deref(), Some("octocat"));
    assert_eq!(args.target.repo.as_deref(), Some("hello-world"));
    assert_eq!(args.target.branch.as_deref(), Some("main"));
    assert_eq!(args.content.as_deref(), Some("# hello"));
    assert_eq!(args.via, Backend::Rest);
}

#[test]
fn test_parse_update_defaults_to_client() {
    let cli = Cli::try_parse_from(["hubwrite", "update", "README.md", "--content", "x"]).unwrap();
    let Some(Command::Update(args)) = cli.command else {
        panic!("expected update command");
    };
    assert_eq!(args.via, Backend::Client);
}

#[test]
fn test_parse_update_rejects_content_and_file() {
    let result = Cli::try_parse_from([
        "hubwrite",
        "update",
        "README.md",
        "--content",
        "x",
        "--file",
        "./local.md",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_binary_requires_file() {
    let result = Cli::try_parse_from(["hubwrite", "update", "logo.png", "--binary"]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from([
        "hubwrite",
        "update",
        "logo.png",
        "--file",
        "./logo.png",
        "--binary",
    ])
    .unwrap();
    let Some(Command::Update(args)) = cli.command else {
        panic!("expected update command");
    };
    assert!(args.binary);
}

#[test]
fn test_parse_batch_requires_files() {
    assert!(Cli::try_parse_from(["hubwrite", "batch"]).is_err());

    let cli = Cli::try_parse_from([
        "hubwrite",
        "batch",
        "--file",
        "a.txt=./a.txt",
        "--file",
        "b.txt=./b.txt",
    ])
    .unwrap();
    let Some(Command::Batch(args)) = cli.command else {
        panic!("expected batch command");
    };
    assert_eq!(args.files, ["a.txt=./a.txt", "b.txt=./b.txt"]);
}

#[test]
fn test_parse_commit_changes() {
    let cli = Cli::try_parse_from([
        "hubwrite",
        "commit",
        "--add",
        "a.txt=./a.txt",
        "--rm",
        "old.txt",
        "-m",
        "swap files",
    ])
    .unwrap();
    let Some(Command::Commit(args)) = cli.command else {
        panic!("expected commit command");
    };
    assert_eq!(args.additions, ["a.txt=./a.txt"]);
    assert_eq!(args.deletions, ["old.txt"]);
    assert_eq!(args.message.as_deref(), Some("swap files"));
}

#[test]
fn test_parse_compare() {
    let cli = Cli::try_parse_from(["hubwrite", "compare", "README.md"]).unwrap();
    let Some(Command::Compare(args)) = cli.command else {
        panic!("expected compare command");
    };
    assert_eq!(args.path.as_deref(), Some("README.md"));
}

#[test]
fn test_parse_multiple_configs() {
    let cli = Cli::try_parse_from([
        "hubwrite",
        "-c",
        "base.toml",
        "-c",
        "override.toml",
        "version",
    ])
    .unwrap();
    assert_eq!(cli.global.configs.len(), 2);
}

#[test]
fn test_config_overrides_fall_back_file_level() {
    let cli = Cli::try_parse_from(["hubwrite", "-l", "4", "version"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&("global.output_log_level".to_string(), "4".to_string())));
    assert!(overrides.contains(&("global.file_log_level".to_string(), "4".to_string())));
}
