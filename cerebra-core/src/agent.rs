use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CerebraError, CerebraResult};
use crate::models::{AgentConfig, AgentConfigUpdate};

static INSTALLED: OnceLock<Agent> = OnceLock::new();

/// Shared handle to one logical agent's configuration.
///
/// Clones are cheap and all point at the same underlying state. The interior
/// mutex serializes reconfiguration against concurrent readers, so an
/// accessor always observes either the configuration before an update or the
/// configuration after it, never a half-applied mix.
#[derive(Debug, Clone)]
pub struct Agent {
    state: Arc<Mutex<AgentConfig>>,
}

impl Agent {
    /// Create a standalone agent handle.
    ///
    /// Intended for composition roots and tests that pass the handle to
    /// consumers explicitly instead of going through the process-wide
    /// instance.
    pub fn new(config: AgentConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(config)),
        }
    }

    /// Install the process-wide agent, or fetch it if already installed.
    ///
    /// The first call in the process initializes the instance from `config`.
    /// Every later call returns a handle to the existing instance and its
    /// argument is silently discarded; use [`Agent::update_config`] to change
    /// an installed agent.
    pub fn install(config: AgentConfig) -> Agent {
        if let Some(existing) = INSTALLED.get() {
            debug!(
                agent = %existing.name(),
                "agent already installed; construction settings discarded"
            );
            return existing.clone();
        }

        INSTALLED
            .get_or_init(|| {
                info!(agent = %config.name, "installing process-wide agent");
                Agent::new(config)
            })
            .clone()
    }

    /// The process-wide agent handle, if one has been installed.
    pub fn installed() -> Option<Agent> {
        INSTALLED.get().cloned()
    }

    /// Replace the whole configuration from an untyped payload.
    ///
    /// The payload must carry every key of [`AgentConfigUpdate`]. It is
    /// validated in full before any field is assigned, so a rejected payload
    /// leaves the current configuration untouched.
    pub fn update_config(&self, config: Value) -> CerebraResult<()> {
        let update: AgentConfigUpdate =
            serde_json::from_value(config).map_err(|_| CerebraError::InvalidConfig)?;
        self.apply_update(update);
        Ok(())
    }

    /// Apply an already-validated update payload.
    pub fn apply_update(&self, update: AgentConfigUpdate) {
        let mut state = self.lock();
        state.apply(update);
        debug!(agent = %state.name, "agent configuration replaced");
    }

    pub fn name(&self) -> String {
        self.lock().name.clone()
    }

    pub fn accepted_files(&self) -> Vec<String> {
        self.lock().accepted_files.clone()
    }

    pub fn accept_text(&self) -> bool {
        self.lock().accept_text
    }

    pub fn rag(&self) -> bool {
        self.lock().rag
    }

    pub fn context_weight(&self) -> f64 {
        self.lock().context_weight
    }

    /// Clone out the full current configuration.
    pub fn snapshot(&self) -> AgentConfig {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, AgentConfig> {
        // A panic while holding the guard cannot leave the plain-data state
        // half-written, so a poisoned lock is safe to recover.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
