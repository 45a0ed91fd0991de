//! Stream a code review from a running relay to the terminal.
//! Run with: cargo run --bin review-cli -- <file|-> "<instruction>"

use anyhow::{Context, Result};
use gpt_oss_review_bot::ReviewClient;
use std::io::{Read, Write};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "review_cli=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (path, instruction) = match (args.next(), args.next()) {
        (Some(path), Some(instruction)) => (path, instruction),
        _ => {
            eprintln!("usage: review-cli <file|-> \"<instruction>\"");
            std::process::exit(2);
        }
    };

    let code = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading code from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
    };

    let relay_url =
        std::env::var("REVIEW_RELAY_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

    // Print chunks as they arrive for the live-typing effect
    let client = ReviewClient::new(&relay_url);
    let mut stdout = std::io::stdout();
    client
        .review(&code, &instruction, |chunk| {
            let _ = write!(stdout, "{chunk}");
            let _ = stdout.flush();
        })
        .await?;
    println!();

    Ok(())
}
