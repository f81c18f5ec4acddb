mod agent;
mod response;

pub use agent::{AgentConfig, AgentConfigUpdate};
pub use response::{AgentResponse, STAGE_NOT_MEASURED};
