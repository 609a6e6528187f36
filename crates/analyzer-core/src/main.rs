mod config;
mod runtime;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use config::AnalyzerConfig;
use runtime::AnalyzerRuntime;

fn main() -> Result<()> {
    let config = AnalyzerConfig::load();
    if config.log_json {
        tracing_subscriber::fmt().json().init();
    } else {
        tracing_subscriber::fmt::init();
    }

    // Asset-load failures are fatal: the process never serves requests with
    // a missing, corrupt, or schema-mismatched model.
    let runtime = AnalyzerRuntime::new(&config)
        .with_context(|| format!("loading churn model from {}", config.model_path.display()))?;

    info!("churn analyzer started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading request line")?;
        if line.trim().is_empty() {
            continue;
        }
        match runtime.evaluate_line(&line) {
            Ok(report) => {
                serde_json::to_writer(&mut stdout, &report).context("writing report")?;
                writeln!(stdout)?;
            }
            Err(err) => {
                warn!(error = %err, "request rejected");
                let rejection = serde_json::json!({ "error": err.to_string() });
                serde_json::to_writer(&mut stdout, &rejection).context("writing rejection")?;
                writeln!(stdout)?;
            }
        }
    }

    info!("churn analyzer stopped");
    Ok(())
}
