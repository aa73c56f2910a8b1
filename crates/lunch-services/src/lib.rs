//! Restaurant table, rating store and recommendation picker.

pub mod error;
pub mod json_file;
pub mod picker;
pub mod rating_store;
pub mod restaurant;
pub mod restaurant_store;
pub mod session;

pub use error::{StoreError, StoreResult};
pub use picker::pick_one;
pub use rating_store::{RatingAggregate, RatingBucket, RatingStore, MAX_SCORE};
pub use restaurant::{validate_place_name, RestaurantRecord};
pub use restaurant_store::RestaurantTable;
pub use session::{LunchSession, RatedRow};
