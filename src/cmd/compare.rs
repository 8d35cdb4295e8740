// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Comparison runner: the same update through all three paths.
//!
//! ```text
//! Test 1: client library  -> update PATH, timed
//! Test 2: direct REST     -> update PATH, timed
//! Test 3: GraphQL         -> file1-3.txt in one atomic commit, timed
//!         |
//!         v
//! fixed evaluation summary (pros/cons/recommendation)
//! ```
//!
//! A failed test is logged and the run continues; the summary always
//! prints.

use std::time::Instant;
use tracing::error;

use crate::cli::ops::CompareArgs;
use crate::config::Config;
use crate::error::Result;
use crate::github::FileChange;

use super::{Target, graphql_client, octo_client, resolve_path, resolve_target, rest_client};

/// Handler for `compare`.
///
/// # Errors
///
/// Returns an error only if argument resolution fails; failures of the
/// individual tests are logged, not propagated.
pub async fn run_compare(args: &CompareArgs, config: &Config, token: &str) -> Result<()> {
    let target = resolve_target(&args.target, config)?;
    let path = resolve_path(args.path.as_deref())?;

    println!("GitHub API spike - comparing three approaches");
    println!("=============================================");

    if config.global.dry {
        println!("[DRY-RUN] Would update {path} on {target} via the client");
        println!("[DRY-RUN] library and REST, then commit file1.txt, file2.txt");
        println!("[DRY-RUN] and file3.txt atomically via GraphQL.");
        print_evaluation_summary();
        return Ok(());
    }

    println!("\n--- Test 1: client library (octocrab) ---");
    run_client_test(config, token, &target, &path).await;

    println!("\n--- Test 2: direct REST (reqwest) ---");
    run_rest_test(config, token, &target, &path).await;

    println!("\n--- Test 3: GraphQL (atomic multi-file) ---");
    run_graphql_test(config, token, &target).await;

    print_evaluation_summary();
    Ok(())
}

async fn run_client_test(config: &Config, token: &str, target: &Target, path: &str) {
    let client = match octo_client(config, token) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "client library test failed");
            return;
        }
    };
    if let Err(e) = client.rate_limit().await {
        error!(error = %e, "rate limit check failed");
    }

    let content = format!("Updated via client library at {}", unix_millis());

    let start = Instant::now();
    let result = client
        .update_file(&target.owner, &target.repo, path, &target.branch, &content)
        .await;
    let elapsed = start.elapsed();

    match result {
        Ok(commit) => {
            println!("Success! Commit: {commit}");
            println!("  Duration: {}ms", elapsed.as_millis());
            println!("  No checkout required");
        }
        Err(e) => error!(error = %e, "client library test failed"),
    }
}

async fn run_rest_test(config: &Config, token: &str, target: &Target, path: &str) {
    let client = rest_client(config, token);
    if let Err(e) = client.rate_limit().await {
        error!(error = %e, "rate limit check failed");
    }

    let content = format!("Updated via REST at {}", unix_millis());

    let start = Instant::now();
    let result = client
        .update_file(&target.owner, &target.repo, path, &target.branch, &content)
        .await;
    let elapsed = start.elapsed();

    match result {
        Ok(commit) => {
            println!("Success! Commit: {commit}");
            println!("  Duration: {}ms", elapsed.as_millis());
            println!("  No checkout required, full control over the requests");
        }
        Err(e) => error!(error = %e, "REST test failed"),
    }
}

async fn run_graphql_test(config: &Config, token: &str, target: &Target) {
    let now = unix_millis();
    let changes: Vec<FileChange> = (1..=3)
        .map(|i| {
            FileChange::write(
                format!("file{i}.txt"),
                format!("Content of file {i}\nUpdated at: {now}"),
            )
        })
        .collect();

    println!("Updating 3 files in a single atomic commit");
    println!("(the single-file paths would need 3 separate commits)");

    let start = Instant::now();
    let result = graphql_client(config, token)
        .create_commit_on_branch(
            &target.owner,
            &target.repo,
            &target.branch,
            "Update multiple files atomically via GraphQL",
            &changes,
        )
        .await;
    let elapsed = start.elapsed();

    match result {
        Ok(commit) => {
            println!("Success! All {} files in one commit: {commit}", changes.len());
            println!("  Duration: {}ms", elapsed.as_millis());
        }
        Err(e) => error!(error = %e, "GraphQL test failed"),
    }
}

fn unix_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

fn print_evaluation_summary() {
    println!();
    println!("===============================================");
    println!("EVALUATION SUMMARY");
    println!("===============================================");
    println!();
    println!("1. CLIENT LIBRARY (octocrab)");
    println!("   Pros:");
    println!("   - High-level abstraction, easy to use");
    println!("   - Single-file updates without a checkout");
    println!("   - Actively maintained");
    println!("   Cons:");
    println!("   - One API call per file for multi-file updates");
    println!("   - Less control over raw HTTP details");
    println!("   Recommendation: BEST for most use cases");
    println!();
    println!("2. DIRECT REST (reqwest)");
    println!("   Pros:");
    println!("   - Maximum control and flexibility");
    println!("   - No dependency on client-library bugs");
    println!("   - Room for custom retry/rate-limit logic");
    println!("   Cons:");
    println!("   - More boilerplate");
    println!("   - API changes must be tracked by hand");
    println!("   Recommendation: Good for edge cases or custom needs");
    println!();
    println!("3. GRAPHQL API");
    println!("   Pros:");
    println!("   - Atomic multi-file commits (single operation)");
    println!("   - More efficient for batch operations");
    println!("   - Better rate-limit utilization");
    println!("   Cons:");
    println!("   - More involved query construction");
    println!("   - Overkill for single-file updates");
    println!("   Recommendation: Use for multi-file operations");
    println!();
    println!("CONCLUSION:");
    println!("All three approaches update files WITHOUT checking out");
    println!("the repository:");
    println!("- client library for general use");
    println!("- GraphQL for batch file operations");
    println!("- direct REST for maximum control");
}
