//! Centralized error types for the lunch picker.
//!
//! Every failure the front end reports falls into one of four buckets:
//! data unavailable, persistence failure, network failure or validation
//! failure. Each carries a short message suitable for showing to the user
//! inline, while `Display` keeps the full detail for logs.

use thiserror::Error;

/// Top-level application error type.
///
/// Crate-local errors (store, weather provider) convert into this type at the
/// front end. Use `user_message()` for the text shown next to the output.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for inline display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Storage(e) => e.user_message(),
            AppError::Validation(_) => "입력값을 확인해 주세요.",
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "파일 작업에 실패했습니다. 다시 시도해 주세요.",
            AppError::Other(_) => "예상하지 못한 오류가 발생했습니다.",
        }
    }

    /// Whether the in-memory state was already changed when this error was raised.
    ///
    /// Only a failed write qualifies: the edit stands and the file is stale.
    pub fn state_applied(&self) -> bool {
        matches!(self, AppError::Storage(StorageError::PersistenceFailed(_)))
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => "연결할 수 없습니다. 네트워크 상태를 확인하세요.",
            NetworkError::Timeout => "응답 시간이 초과되었습니다.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "서버에 문제가 있습니다. 잠시 후 다시 시도해 주세요."
            }
            NetworkError::ServerError { .. } => "요청이 거절되었습니다.",
            NetworkError::InvalidResponse(_) => "예상하지 못한 응답을 받았습니다.",
        }
    }
}

/// Backing file errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file is missing or could not be parsed.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Writing the backing file failed; memory and file have diverged.
    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),

    /// Writing the backing file failed and the change was not kept.
    #[error("Save failed, change discarded: {0}")]
    ChangeDiscarded(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::DataUnavailable(_) => {
                "맛집 데이터(restaurants.json)를 불러오지 못했습니다. 파일이 있는지 확인하세요."
            }
            StorageError::PersistenceFailed(_) => {
                "변경 사항은 반영됐지만 파일 저장에 실패했습니다. 다시 시도해 주세요."
            }
            StorageError::ChangeDiscarded(_) => {
                "파일 저장에 실패해 평가가 저장되지 않았습니다. 다시 시도해 주세요."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read, parsed or validated.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "설정값이 올바르지 않습니다. 설정을 확인하세요.",
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ApiError(_) => "날씨 정보를 해석하지 못했습니다.",
            WeatherError::ServiceUnavailable => "지금은 날씨 정보를 가져올 수 없습니다.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
