use lunch_core::{AppError, StorageError};
use lunch_services::StoreError;

use super::IntoAppError;

impl IntoAppError for StoreError {
    fn into_app_error(self) -> AppError {
        match self {
            e @ StoreError::DataUnavailable { .. } => {
                AppError::Storage(StorageError::DataUnavailable(e.to_string()))
            }
            e @ StoreError::Persistence { .. } => {
                AppError::Storage(StorageError::PersistenceFailed(e.to_string()))
            }
            e @ StoreError::Discarded { .. } => {
                AppError::Storage(StorageError::ChangeDiscarded(e.to_string()))
            }
            StoreError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_persistence_maps_to_applied_storage_error() {
        let err = StoreError::persistence(Path::new("restaurants.json"), "disk full").into_app_error();
        assert!(err.state_applied());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_discarded_write_is_not_applied() {
        let err = StoreError::persistence(Path::new("ratings.json"), "read-only")
            .discarded()
            .into_app_error();
        assert!(matches!(
            err,
            AppError::Storage(StorageError::ChangeDiscarded(_))
        ));
        assert!(!err.state_applied());
        assert!(err.user_message().contains("저장되지 않았습니다"));
    }

    #[test]
    fn test_validation_maps_through() {
        let err = StoreError::validation("place_name cannot be empty").into_app_error();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("place_name")));
    }

    #[test]
    fn test_data_unavailable_maps_through() {
        let err = StoreError::data_unavailable(Path::new("r.json"), "missing").into_app_error();
        assert!(matches!(
            err,
            AppError::Storage(StorageError::DataUnavailable(_))
        ));
    }
}
