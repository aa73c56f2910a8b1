use lunch_core::{AppError, ReqwestErrorExt, WeatherError};
use lunch_weather::WeatherError as ProviderError;

use super::IntoAppError;

impl IntoAppError for ProviderError {
    fn into_app_error(self) -> AppError {
        match self {
            ProviderError::Network(e) => AppError::Network(e.into_network_error()),
            ProviderError::Parse(msg) => AppError::Weather(WeatherError::ApiError(msg)),
            ProviderError::MissingCurrent => AppError::Weather(WeatherError::ServiceUnavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_map_to_weather_errors() {
        assert!(matches!(
            ProviderError::Parse("eof".into()).into_app_error(),
            AppError::Weather(WeatherError::ApiError(_))
        ));
        assert!(matches!(
            ProviderError::MissingCurrent.into_app_error(),
            AppError::Weather(WeatherError::ServiceUnavailable)
        ));
    }
}
