//! Replay of newline-delimited decoded events

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn, Instrument};

use super::pipeline::EventPipeline;
use crate::spans;

/// Outcome of a replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events that produced a record
    pub processed: u64,
    /// Lines that were malformed or rejected
    pub skipped: u64,
}

/// Feed every line of `input` through the pipeline, in order
///
/// Blank lines are ignored. A bad line (not UTF-8, not a decodable event, or
/// rejected by the pipeline) is logged and skipped; only I/O errors on
/// `input` stop the run.
pub async fn replay<R>(pipeline: &EventPipeline, input: R) -> std::io::Result<ReplaySummary>
where
    R: AsyncBufRead + Unpin,
{
    async {
        let mut summary = ReplaySummary::default();
        let mut lines = input.split(b'\n');
        let mut line_number = 0u64;

        while let Some(raw) = lines.next_segment().await? {
            line_number += 1;
            let line = match std::str::from_utf8(trim_line_ending(&raw)) {
                Ok(line) => line,
                Err(error) => {
                    summary.skipped += 1;
                    warn!(line = line_number, error = %error, "Skipping line that is not UTF-8");
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match pipeline.process_json(line).await {
                Ok(_) => summary.processed += 1,
                Err(error) => {
                    summary.skipped += 1;
                    warn!(line = line_number, error = %error, "Skipping event");
                }
            }
        }

        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            "Replay finished"
        );
        Ok(summary)
    }
    .instrument(spans::replay())
    .await
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
