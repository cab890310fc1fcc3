use thiserror::Error;

/// Errors raised while building a scene. Per-frame operations never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("curated layout has {available} presets but {requested} items were requested")]
    PresetTableTooShort { requested: usize, available: usize },

    #[error("catalog is empty but {requested} items were requested")]
    EmptyCatalog { requested: usize },
}

impl SceneError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
