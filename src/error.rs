#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Could not read configuration: {0}")]
    Config(String),

    #[error("Could not connect to bridge: {0}")]
    BridgeConnect(String),

    #[error("Could not authenticate with bridge: {0}")]
    BridgeAuth(String),

    #[error("Bridge error: {message}")]
    Bridge {
        message: String,
        error_type: Option<i32>,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::BridgeConnect(_) => 2,
            AppError::BridgeAuth(_) => 3,
            AppError::Bridge { .. } => 4,
            _ => 1,
        }
    }
}
