//! Compute the max area from the command line

use anyhow::Result;
use clap::Args;
use maxarea_common::{evaluate, Limits, Outcome};
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::output::{render_outcome, OutputFormat};

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Comma-separated heights, e.g. "1,8,6,2,5,4,8,3,7". Reads stdin when
    /// omitted or "-".
    pub heights: Option<String>,
}

/// Returns `false` when the input was rejected.
pub async fn execute(args: ComputeArgs, limits: Limits, format: OutputFormat) -> Result<bool> {
    let input = match args.heights.as_deref() {
        None | Some("-") => read_stdin().await?,
        Some(s) => s.to_string(),
    };

    let outcome = compute(&input, &limits);
    let rendered = render_outcome(&outcome, format);
    if outcome.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("{}", rendered);
    }

    Ok(outcome.is_success())
}

/// Evaluate one line of input. A trailing newline from stdin is not a token.
pub fn compute(input: &str, limits: &Limits) -> Outcome {
    let input = input.trim_end_matches(['\r', '\n']);
    debug!(bytes = input.len(), "Evaluating heights");
    evaluate(input, limits)
}

async fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}
