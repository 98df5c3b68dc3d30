use crate::registry::ObjectId;
use thiserror::Error;

/// Errors raised by the scene core.
///
/// `Configuration` is fatal and only produced while the scene is being built.
/// `NotFound` means something referenced an id the registry never had; the
/// animation loop treats it as a per-frame fault and keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("scene configuration error: {0}")]
    Configuration(String),
    #[error("object {0} is not registered")]
    NotFound(ObjectId),
}

impl SceneError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
