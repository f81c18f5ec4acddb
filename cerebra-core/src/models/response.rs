use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Sentinel timing for a pipeline stage that was never measured.
pub const STAGE_NOT_MEASURED: f64 = -1.0;

/// A model response bundled with per-stage timing measurements.
///
/// The `response` payload is produced by the language-model client and is
/// carried verbatim; this type never inspects or re-serializes it. All
/// timings are in seconds. Stages that did not run keep their sentinels:
/// `-1.0` for the optional retrieval/history stages, `0.0` for a skipped
/// transcription stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub response: Value,
    pub response_time: f64,

    #[serde(default = "default_stage_not_measured")]
    pub context_time: f64,

    #[serde(default = "default_stage_not_measured")]
    pub chat_history_time: f64,

    #[serde(default = "default_stage_not_measured")]
    pub insert_history_time: f64,

    #[serde(default)]
    pub transcription_time: f64,
}

fn default_stage_not_measured() -> f64 {
    STAGE_NOT_MEASURED
}

impl AgentResponse {
    pub fn new(response: Value, response_time: f64) -> Self {
        Self {
            response,
            response_time,
            context_time: STAGE_NOT_MEASURED,
            chat_history_time: STAGE_NOT_MEASURED,
            insert_history_time: STAGE_NOT_MEASURED,
            transcription_time: 0.0,
        }
    }

    pub fn with_context_time(mut self, seconds: f64) -> Self {
        self.context_time = seconds;
        self
    }

    pub fn with_chat_history_time(mut self, seconds: f64) -> Self {
        self.chat_history_time = seconds;
        self
    }

    pub fn with_insert_history_time(mut self, seconds: f64) -> Self {
        self.insert_history_time = seconds;
        self
    }

    pub fn with_transcription_time(mut self, seconds: f64) -> Self {
        self.transcription_time = seconds;
        self
    }

    /// Flatten into the wire mapping consumed by API layers.
    ///
    /// The mapping carries exactly six keys; the opaque `response` payload
    /// is passed through as-is.
    pub fn to_json(&self) -> Value {
        json!({
            "response": self.response,
            "transcription_time": self.transcription_time,
            "response_time": self.response_time,
            "context_time": self.context_time,
            "chat_history_time": self.chat_history_time,
            "insert_history_time": self.insert_history_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_sentinels() {
        let response = AgentResponse::new(json!({"text": "hello"}), 1.5);

        assert_eq!(response.response_time, 1.5);
        assert_eq!(response.context_time, STAGE_NOT_MEASURED);
        assert_eq!(response.chat_history_time, STAGE_NOT_MEASURED);
        assert_eq!(response.insert_history_time, STAGE_NOT_MEASURED);
        assert_eq!(response.transcription_time, 0.0);
    }

    #[test]
    fn test_to_json_with_defaults() {
        let payload = json!({"text": "hello"});
        let response = AgentResponse::new(payload.clone(), 1.5);

        assert_eq!(
            response.to_json(),
            json!({
                "response": payload,
                "transcription_time": 0.0,
                "response_time": 1.5,
                "context_time": -1.0,
                "chat_history_time": -1.0,
                "insert_history_time": -1.0,
            })
        );
    }

    #[test]
    fn test_to_json_fully_populated() {
        let payload = json!({"text": "bonjour"});
        let response = AgentResponse::new(payload.clone(), 2.0)
            .with_context_time(0.3)
            .with_chat_history_time(0.1)
            .with_insert_history_time(0.05)
            .with_transcription_time(0.4);

        let wire = response.to_json();
        let object = wire.as_object().unwrap();

        assert_eq!(object.len(), 6);
        assert_eq!(wire["response"], payload);
        assert_eq!(wire["response_time"], json!(2.0));
        assert_eq!(wire["context_time"], json!(0.3));
        assert_eq!(wire["chat_history_time"], json!(0.1));
        assert_eq!(wire["insert_history_time"], json!(0.05));
        assert_eq!(wire["transcription_time"], json!(0.4));
    }

    #[test]
    fn test_response_payload_passed_through_verbatim() {
        let payload = json!({
            "text": "nested",
            "usage": {"input_tokens": 12, "output_tokens": 40},
            "stop_reason": null
        });
        let response = AgentResponse::new(payload.clone(), 0.9);

        assert_eq!(response.to_json()["response"], payload);
    }

    #[test]
    fn test_deserialize_applies_stage_defaults() {
        let response: AgentResponse = serde_json::from_value(json!({
            "response": {"text": "partial"},
            "response_time": 0.8
        }))
        .unwrap();

        assert_eq!(response.context_time, STAGE_NOT_MEASURED);
        assert_eq!(response.chat_history_time, STAGE_NOT_MEASURED);
        assert_eq!(response.insert_history_time, STAGE_NOT_MEASURED);
        assert_eq!(response.transcription_time, 0.0);
    }

    #[test]
    fn test_negative_timings_are_legal() {
        let response = AgentResponse::new(json!("r"), 1.0).with_context_time(-1.0);
        assert_eq!(response.to_json()["context_time"], json!(-1.0));
    }
}
