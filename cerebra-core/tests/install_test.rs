//! The process-wide install lifecycle gets its own test binary so the
//! `OnceLock` global starts untouched.

use cerebra_core::{Agent, AgentConfig};
use serde_json::json;

#[test]
fn test_install_is_once_per_process() {
    assert!(Agent::installed().is_none());

    let first = Agent::install(
        AgentConfig::new("primary")
            .with_accepted_files(vec!["pdf".to_string()])
            .with_context_weight(0.2),
    );

    // A later install call returns the existing instance and its settings
    // are discarded.
    let second = Agent::install(AgentConfig::new("imposter").with_context_weight(0.9));

    assert_eq!(second.name(), "primary");
    assert_eq!(second.accepted_files(), vec!["pdf"]);
    assert_eq!(second.context_weight(), 0.2);

    let global = Agent::installed().expect("agent was installed");
    assert_eq!(global.name(), "primary");

    // All handles point at one underlying state.
    first
        .update_config(json!({
            "agent_name": "renamed",
            "accepted_files": [],
            "accept_text": true,
            "rag": true,
            "context_weight": 0.5,
            "analysis_weights": {},
            "sentiment_weights": {},
            "emotion_weights": {}
        }))
        .unwrap();

    assert_eq!(second.name(), "renamed");
    assert_eq!(global.name(), "renamed");
}
