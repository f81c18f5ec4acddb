use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Behavior-tuning configuration for one logical agent.
///
/// `name` is the only required field; everything else falls back to the
/// documented defaults when constructed programmatically or deserialized
/// from a settings file. Collection defaults are built fresh per
/// construction, so two configurations never share backing storage.
///
/// `context_weight` is conventionally in `[0.0, 1.0]` but is not validated;
/// the weight maps are owned by the downstream analysis subsystem and their
/// keys are unconstrained here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,

    #[serde(default)]
    pub accepted_files: Vec<String>,

    #[serde(default = "default_true")]
    pub accept_text: bool,

    #[serde(default = "default_true")]
    pub rag: bool,

    #[serde(default = "default_context_weight")]
    pub context_weight: f64,

    #[serde(default)]
    pub analysis_weights: HashMap<String, f64>,

    #[serde(default)]
    pub sentiment_weights: HashMap<String, f64>,

    #[serde(default)]
    pub emotion_weights: HashMap<String, f64>,
}

fn default_true() -> bool {
    true
}

fn default_context_weight() -> f64 {
    0.5
}

impl AgentConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accepted_files: Vec::new(),
            accept_text: true,
            rag: true,
            context_weight: default_context_weight(),
            analysis_weights: HashMap::new(),
            sentiment_weights: HashMap::new(),
            emotion_weights: HashMap::new(),
        }
    }

    pub fn with_accepted_files(mut self, accepted_files: Vec<String>) -> Self {
        self.accepted_files = accepted_files;
        self
    }

    pub fn with_accept_text(mut self, accept_text: bool) -> Self {
        self.accept_text = accept_text;
        self
    }

    pub fn with_rag(mut self, rag: bool) -> Self {
        self.rag = rag;
        self
    }

    pub fn with_context_weight(mut self, context_weight: f64) -> Self {
        self.context_weight = context_weight;
        self
    }

    pub fn with_analysis_weights(mut self, weights: HashMap<String, f64>) -> Self {
        self.analysis_weights = weights;
        self
    }

    pub fn with_sentiment_weights(mut self, weights: HashMap<String, f64>) -> Self {
        self.sentiment_weights = weights;
        self
    }

    pub fn with_emotion_weights(mut self, weights: HashMap<String, f64>) -> Self {
        self.emotion_weights = weights;
        self
    }

    /// Replace every field from a validated update payload.
    pub fn apply(&mut self, update: AgentConfigUpdate) {
        self.name = update.agent_name;
        self.accepted_files = update.accepted_files;
        self.accept_text = update.accept_text;
        self.rag = update.rag;
        self.context_weight = update.context_weight;
        self.analysis_weights = update.analysis_weights;
        self.sentiment_weights = update.sentiment_weights;
        self.emotion_weights = update.emotion_weights;
    }
}

/// Full replacement payload for [`Agent::update_config`](crate::Agent::update_config).
///
/// Every field is required on the wire; a payload missing any key is
/// rejected as a whole before any state is touched. Unknown extra keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfigUpdate {
    pub agent_name: String,
    pub accepted_files: Vec<String>,
    pub accept_text: bool,
    pub rag: bool,
    pub context_weight: f64,
    pub analysis_weights: HashMap<String, f64>,
    pub sentiment_weights: HashMap<String, f64>,
    pub emotion_weights: HashMap<String, f64>,
}
