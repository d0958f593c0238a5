//! intake-check - validate contact submissions from the command line.
//!
//! Reads one JSON contact per line on stdin, runs each through the intake
//! service, and writes one JSON result per line on stdout. Logs go to
//! stderr so stdout stays machine-readable.
//!
//! `intake-check schema` prints the JSON schema of the accepted input.

use anyhow::{bail, Result};
use case_intake::{
    Config, ContactDirectory, ContactInput, ContactValidator, InMemoryDirectory, IntakeError,
    IntakeService, IntakeServiceImpl,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep stdout for results)
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    match std::env::args().nth(1).as_deref() {
        None => {}
        Some("schema") => {
            let schema = schemars::schema_for!(ContactInput);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }
        Some(other) => bail!("Unknown command '{}' (expected no arguments or 'schema')", other),
    }

    let directory = Arc::new(InMemoryDirectory::new(
        config.match_confidence_threshold,
        config.max_match_results,
    )) as Arc<dyn ContactDirectory>;
    let service = IntakeServiceImpl::new(
        ContactValidator::new(config.validator_options()),
        directory,
    );

    info!("Reading contact submissions from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut line_no = 0usize;
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let result = process_line(&service, line_no, &line).await;
        if result["ok"].as_bool() == Some(true) {
            accepted += 1;
        } else {
            rejected += 1;
        }

        let mut bytes = serde_json::to_vec(&result)?;
        bytes.push(b'\n');
        stdout.write_all(&bytes).await?;
    }
    stdout.flush().await?;

    info!(
        "Processed {} submissions: {} accepted, {} rejected",
        accepted + rejected,
        accepted,
        rejected
    );
    Ok(())
}

async fn process_line(service: &IntakeServiceImpl, line_no: usize, line: &str) -> Value {
    let input: ContactInput = match serde_json::from_str(line) {
        Ok(input) => input,
        Err(e) => {
            warn!("Line {}: malformed JSON: {}", line_no, e);
            return json!({ "line": line_no, "ok": false, "error": e.to_string() });
        }
    };

    match service.submit(&input).await {
        Ok(stored) => json!({ "line": line_no, "ok": true, "contact": stored }),
        Err(IntakeError::Rejected(report)) => {
            json!({ "line": line_no, "ok": false, "errors": report.errors() })
        }
        Err(IntakeError::Directory(e)) => {
            json!({ "line": line_no, "ok": false, "error": e.to_string() })
        }
    }
}
