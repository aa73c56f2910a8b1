use rand::seq::SliceRandom;
use rand::Rng;

use crate::restaurant::RestaurantRecord;

/// Pick one row uniformly at random; `None` when there is nothing to pick.
pub fn pick_one<'a, R>(rows: &'a [RestaurantRecord], rng: &mut R) -> Option<&'a RestaurantRecord>
where
    R: Rng + ?Sized,
{
    rows.choose(rng)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_table_has_no_pick() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_one(&[], &mut rng).is_none());
    }

    #[test]
    fn test_single_row_is_always_picked() {
        let rows = vec![RestaurantRecord::new("Kim's").with_category("한식")];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(pick_one(&rows, &mut rng), Some(&rows[0]));
        }
    }

    #[test]
    fn test_roughly_uniform() {
        // Duplicate names on purpose: rows are distinct by position, not name.
        let rows: Vec<_> = ["a", "b", "a", "c", "d"]
            .into_iter()
            .map(RestaurantRecord::new)
            .collect();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut hits = [0usize; 5];
        let draws = 50_000;

        for _ in 0..draws {
            let picked = pick_one(&rows, &mut rng).unwrap();
            let index = rows
                .iter()
                .position(|row| std::ptr::eq(row, picked))
                .unwrap();
            hits[index] += 1;
        }

        let expected = draws as f64 / rows.len() as f64;
        for (index, count) in hits.iter().enumerate() {
            let ratio = *count as f64 / expected;
            assert!(
                (0.9..1.1).contains(&ratio),
                "row {index} picked {count} times, expected about {expected}"
            );
        }
    }
}
