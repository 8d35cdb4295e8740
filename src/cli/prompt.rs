// hubwrite: commit files to GitHub without a local checkout
//
// SPDX-FileCopyrightText: 2026 hubwrite contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive prompts for values not given by flags or configuration.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Prompt for a required value on stdin. Re-asks while the input is empty.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn prompt(label: &str) -> Result<String> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    loop {
        match ask(&mut input, &mut std::io::stdout(), label, None)? {
            Some(line) if !line.is_empty() => return Ok(line),
            Some(_) => {}
            None => anyhow::bail!("stdin closed while prompting for {label}"),
        }
    }
}

/// Prompt for a value with a default used when the input is empty.
///
/// # Errors
///
/// Returns an error if stdin or stdout fails.
pub fn prompt_or(label: &str, default: &str) -> Result<String> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let line = ask(&mut input, &mut std::io::stdout(), label, Some(default))?;
    match line {
        Some(line) if !line.is_empty() => Ok(line),
        _ => Ok(default.to_string()),
    }
}

/// One prompt round against arbitrary streams (unit-testable).
/// Returns `None` when the input stream is exhausted.
pub(crate) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    match default {
        Some(default) => write!(output, "{label} [{default}]: ")?,
        None => write!(output, "{label}: ")?,
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
