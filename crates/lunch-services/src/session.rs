//! One user's session: the restaurant table held in memory plus the rating
//! store it is paired with.
//!
//! Handlers take the session by reference. The table is loaded once on
//! `open` and flushed after every mutation; ratings are re-read from disk on
//! every call.

use rand::Rng;
use std::path::PathBuf;

use crate::error::StoreResult;
use crate::picker::pick_one;
use crate::rating_store::RatingStore;
use crate::restaurant::RestaurantRecord;
use crate::restaurant_store::RestaurantTable;
use crate::StoreError;

/// A table row joined with its derived average rating.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedRow<'a> {
    pub record: &'a RestaurantRecord,
    pub average: Option<f64>,
}

pub struct LunchSession {
    table: RestaurantTable,
    ratings: RatingStore,
}

impl LunchSession {
    /// Open a session. A table that could not be loaded starts empty and the
    /// load error is returned alongside so the caller can halt or carry on.
    pub fn open(
        restaurants_path: impl Into<PathBuf>,
        ratings_path: impl Into<PathBuf>,
    ) -> (Self, Option<StoreError>) {
        let (table, load_error) = RestaurantTable::load(restaurants_path);
        let session = Self {
            table,
            ratings: RatingStore::new(ratings_path),
        };
        (session, load_error)
    }

    pub fn table(&self) -> &RestaurantTable {
        &self.table
    }

    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    /// # Errors
    /// See [`RestaurantTable::append`].
    pub fn add_restaurant(&mut self, record: RestaurantRecord) -> StoreResult<()> {
        self.table.append(record)
    }

    /// # Errors
    /// See [`RestaurantTable::edit_in_place`].
    pub fn replace_table(&mut self, rows: Vec<RestaurantRecord>) -> StoreResult<()> {
        self.table.edit_in_place(rows)
    }

    /// # Errors
    /// See [`RestaurantTable::delete_by_name`].
    pub fn delete_restaurant(&mut self, place_name: &str) -> StoreResult<usize> {
        self.table.delete_by_name(place_name)
    }

    /// Record a score and return the place's new average.
    ///
    /// The name need not be in the table; ratings are keyed by name only.
    ///
    /// # Errors
    /// Returns `Validation` for a blank name, `Discarded` if the ratings
    /// file cannot be written.
    pub fn submit_rating(&self, place_name: &str, score: f64) -> StoreResult<Option<f64>> {
        crate::restaurant::validate_place_name(place_name)?;
        self.ratings.submit(place_name, score)
    }

    pub fn recommend<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&RestaurantRecord> {
        pick_one(self.table.rows(), rng)
    }

    /// Every row with its current average, in table order.
    pub fn rated_rows(&self) -> Vec<RatedRow<'_>> {
        let aggregate = self.ratings.load();
        self.table
            .rows()
            .iter()
            .map(|record| RatedRow {
                record,
                average: aggregate.average_for(&record.place_name),
            })
            .collect()
    }

    /// Distinct place names in table order, for rating prompts.
    pub fn place_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in self.table.rows() {
            if !names.contains(&row.place_name.as_str()) {
                names.push(&row.place_name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_blank_rating_name_rejected() {
        let dir = tempdir().unwrap();
        let (session, _) =
            LunchSession::open(dir.path().join("r.json"), dir.path().join("ratings.json"));

        assert!(matches!(
            session.submit_rating("", 3.0),
            Err(StoreError::Validation(_))
        ));
        assert!(!session.ratings().path().exists());
    }

    #[test]
    fn test_place_names_deduplicated_in_order() {
        let dir = tempdir().unwrap();
        let (mut session, _) =
            LunchSession::open(dir.path().join("r.json"), dir.path().join("ratings.json"));
        session
            .replace_table(vec![
                RestaurantRecord::new("b"),
                RestaurantRecord::new("a"),
                RestaurantRecord::new("b"),
            ])
            .unwrap();

        assert_eq!(session.place_names(), ["b", "a"]);
    }
}
