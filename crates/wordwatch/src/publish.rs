//! Report publish sinks.
//!
//! The core hands a finished [`StatisticsReport`] to a sink; how the
//! report leaves the process is entirely the sink's concern. The watch
//! loop logs transmission failures and keeps running — a failed
//! publish never kills watching.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use wordwatch_core::StatisticsReport;

/// Where finished reports go.
pub trait ReportSink {
    /// Serialize and transmit one report.
    fn publish(&self, report: &StatisticsReport) -> anyhow::Result<()>;
}

/// POSTs each report as JSON to a remote endpoint.
pub struct HttpSink {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSink {
    /// Build a sink for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl ReportSink for HttpSink {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    fn publish(&self, report: &StatisticsReport) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(report)
            .send()
            .with_context(|| format!("failed to POST report to {}", self.endpoint))?;
        response
            .error_for_status()
            .with_context(|| format!("endpoint {} rejected report", self.endpoint))?;
        tracing::info!("report published");
        Ok(())
    }
}

/// Writes each report as pretty JSON to stdout.
///
/// Used when no endpoint is configured, and by the one-shot `analyze`
/// command with `--json`.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn publish(&self, report: &StatisticsReport) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, report)?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

/// Build the sink the configuration asks for.
pub fn sink_for(endpoint: Option<&str>) -> anyhow::Result<Box<dyn ReportSink>> {
    match endpoint {
        Some(url) => Ok(Box::new(HttpSink::new(url)?)),
        None => Ok(Box::new(StdoutSink)),
    }
}
