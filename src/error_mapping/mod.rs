//! Maps crate-local errors to lunch_core::AppError for consistent user-facing messages.

mod store;
mod weather;

use lunch_core::AppError;

/// Conversion into the application error taxonomy.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
