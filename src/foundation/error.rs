/// Convenience result type used across orbitdial.
pub type OrbitdialResult<T> = Result<T, OrbitdialError>;

/// Top-level error taxonomy for the fallible edges of the crate.
///
/// The per-frame pipeline itself never fails; errors only arise while loading configuration or
/// probing image assets.
#[derive(thiserror::Error, Debug)]
pub enum OrbitdialError {
    /// Configuration could not be read or is structurally unusable.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while inspecting image assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrbitdialError {
    /// Build a [`OrbitdialError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`OrbitdialError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`OrbitdialError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
