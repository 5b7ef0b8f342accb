use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmaError {
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Directory responded with status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Invalid time format: {value:?} (expected HH:MM)")]
    InvalidTimeFormat { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Payload,
    Data,
    Config,
    Io,
}

impl FarmaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FarmaError::NetworkFailure(_) | FarmaError::UnexpectedStatus { .. } => {
                ErrorCategory::Network
            }
            FarmaError::MalformedPayload(_) => ErrorCategory::Payload,
            FarmaError::InvalidTimeFormat { .. } => ErrorCategory::Data,
            FarmaError::IoError(_) => ErrorCategory::Io,
            FarmaError::ConfigError { .. }
            | FarmaError::InvalidConfigValueError { .. }
            | FarmaError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// Short message for the terminal; details go to the log.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Não foi possível contatar o serviço de farmácias".to_string()
            }
            ErrorCategory::Payload => {
                "O serviço de farmácias respondeu em um formato inesperado".to_string()
            }
            ErrorCategory::Data => {
                "Uma farmácia tem horário de funcionamento inválido".to_string()
            }
            ErrorCategory::Config => format!("Configuração inválida: {}", self),
            ErrorCategory::Io => format!("Erro de leitura/escrita: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FarmaError>;
