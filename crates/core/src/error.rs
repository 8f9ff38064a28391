use thiserror::Error;

/// Top-level error type shared by the host-side crates.
///
/// Style resolution never produces one of these: only the store and host
/// operations can fail.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("plugin not initialized; call initialize first")]
    NotInitialized,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("app group error: {0}")]
    AppGroup(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WidgetError {
    /// Stable machine-readable code reported to the host application.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotInitialized     => "NOT_INITIALIZED",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::AppGroup(_)        => "APP_GROUP_ERROR",
            Self::Serialization(_)   => "SERIALIZATION_ERROR",
            Self::Config(_)          => "CONFIG_ERROR",
            Self::Io { .. }          => "IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(WidgetError::NotInitialized.code(), "NOT_INITIALIZED");
        assert_eq!(WidgetError::InvalidArgument("x".into()).code(), "INVALID_ARGUMENT");
        assert_eq!(WidgetError::AppGroup("x".into()).code(), "APP_GROUP_ERROR");
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let err: WidgetError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "SERIALIZATION_ERROR");
    }
}
