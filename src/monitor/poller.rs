//! The fetch → parse → evaluate → report loop.
//!
//! # Responsibilities
//! - Poll the stats endpoint on a fixed interval
//! - Write threshold warnings to the injected sink
//! - Collapse runs of fetch failures into a single unavailable line

use std::io::Write;

use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::PollingConfig;
use crate::fetch::{FetchError, StatsFetcher};
use crate::monitor::streak::FailureStreak;
use crate::stats::{evaluate, parse_stats, ParseError, ServerStats};

/// Line written when the failure streak reaches the threshold.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch server statistic";

/// Anything that prevents one iteration from producing a [`ServerStats`].
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result of a single poll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Stats were evaluated and `warnings` lines written.
    Evaluated { warnings: usize },
    /// The iteration failed; `reported` is true if the unavailable line was written.
    Failed { streak: u32, reported: bool },
}

/// Polls a [`StatsFetcher`] and reports threshold violations to a sink.
pub struct StatsMonitor<F, W> {
    fetcher: F,
    sink: W,
    config: PollingConfig,
    streak: FailureStreak,
}

impl<F, W> StatsMonitor<F, W>
where
    F: StatsFetcher,
    W: Write + Send,
{
    pub fn new(fetcher: F, sink: W, config: PollingConfig) -> Self {
        let streak = FailureStreak::new(config.unavailable_threshold);
        Self {
            fetcher,
            sink,
            config,
            streak,
        }
    }

    /// Run until the shutdown signal fires, then hand back the sink.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> W {
        tracing::info!(
            interval_ms = self.config.interval_ms,
            unavailable_threshold = self.streak.threshold(),
            "Stats monitor starting"
        );

        loop {
            let outcome = tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                outcome = self.poll_once() => outcome,
            };

            let delay = match outcome {
                PollOutcome::Evaluated { .. } => {
                    self.config.interval() + self.config.evaluation_pause()
                }
                PollOutcome::Failed { .. } => self.config.interval(),
            };

            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                _ = time::sleep(delay) => {}
            }
        }

        tracing::info!("Stats monitor received shutdown signal, exiting loop");
        self.sink
    }

    /// Perform one fetch → parse → evaluate → report iteration.
    pub async fn poll_once(&mut self) -> PollOutcome {
        match self.fetch_stats().await {
            Ok(stats) => {
                let ended = self.streak.record_success();
                if ended > 0 {
                    tracing::info!(failures = ended, "Stats endpoint recovered");
                }

                let warnings = evaluate(&stats);
                tracing::debug!(?stats, warnings = warnings.len(), "Stats evaluated");
                self.emit(warnings.iter().map(ToString::to_string));

                PollOutcome::Evaluated {
                    warnings: warnings.len(),
                }
            }
            Err(e) => {
                let reported = self.streak.record_failure();
                let streak = self.streak.count();
                if reported {
                    tracing::warn!(error = %e, streak, "Stats unavailable");
                    self.emit([UNAVAILABLE_MESSAGE.to_string()]);
                } else {
                    tracing::debug!(error = %e, streak, "Stats fetch failed");
                }

                PollOutcome::Failed { streak, reported }
            }
        }
    }

    async fn fetch_stats(&self) -> Result<ServerStats, PollError> {
        let raw = self.fetcher.fetch().await?;
        Ok(parse_stats(&raw)?)
    }

    fn emit(&mut self, lines: impl IntoIterator<Item = String>) {
        let result = lines
            .into_iter()
            .try_for_each(|line| writeln!(self.sink, "{}", line))
            .and_then(|()| self.sink.flush());

        if let Err(e) = result {
            tracing::error!(error = %e, "Failed to write to output sink");
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn streak(&self) -> &FailureStreak {
        &self.streak
    }
}
