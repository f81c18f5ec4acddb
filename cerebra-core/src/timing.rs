use std::time::Instant;

use serde_json::Value;
use tracing::trace;

use crate::models::AgentResponse;

/// Pipeline stages whose durations end up on an [`AgentResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Transcription,
    Context,
    ChatHistory,
    InsertHistory,
}

/// Measures the stages of one response pipeline run.
///
/// The total time between [`StageTimer::start`] and [`StageTimer::finish`]
/// becomes the response time; stages that were never measured keep their
/// sentinel values on the finished response.
#[derive(Debug)]
pub struct StageTimer {
    started: Instant,
    transcription: Option<f64>,
    context: Option<f64>,
    chat_history: Option<f64>,
    insert_history: Option<f64>,
}

impl StageTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            transcription: None,
            context: None,
            chat_history: None,
            insert_history: None,
        }
    }

    /// Run `op`, recording its wall-clock duration against `stage`.
    pub fn measure<T>(&mut self, stage: Stage, op: impl FnOnce() -> T) -> T {
        let begin = Instant::now();
        let out = op();
        self.record(stage, begin.elapsed().as_secs_f64());
        out
    }

    /// Record an externally measured duration, in seconds, for `stage`.
    pub fn record(&mut self, stage: Stage, seconds: f64) {
        trace!(stage = ?stage, seconds = seconds, "stage timing recorded");

        let slot = match stage {
            Stage::Transcription => &mut self.transcription,
            Stage::Context => &mut self.context,
            Stage::ChatHistory => &mut self.chat_history,
            Stage::InsertHistory => &mut self.insert_history,
        };
        *slot = Some(seconds);
    }

    /// Finish the run, bundling the model response with the collected
    /// timings.
    pub fn finish(self, response: Value) -> AgentResponse {
        let mut bundled = AgentResponse::new(response, self.started.elapsed().as_secs_f64());

        if let Some(seconds) = self.transcription {
            bundled.transcription_time = seconds;
        }
        if let Some(seconds) = self.context {
            bundled.context_time = seconds;
        }
        if let Some(seconds) = self.chat_history {
            bundled.chat_history_time = seconds;
        }
        if let Some(seconds) = self.insert_history {
            bundled.insert_history_time = seconds;
        }

        bundled
    }
}
