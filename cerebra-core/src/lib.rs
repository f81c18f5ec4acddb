pub mod agent;
pub mod config;
pub mod error;
pub mod models;
pub mod timing;

pub use agent::Agent;
pub use config::{ensure_config_dir, get_config_dir, ConfigLoadError};
pub use error::{CerebraError, CerebraResult};
pub use models::{AgentConfig, AgentConfigUpdate, AgentResponse, STAGE_NOT_MEASURED};
pub use timing::{Stage, StageTimer};
