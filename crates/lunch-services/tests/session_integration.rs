//! End-to-end flows through LunchSession against real backing files.

#![allow(clippy::unwrap_used, clippy::panic)]

use lunch_services::{LunchSession, RestaurantRecord, RestaurantTable, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::{tempdir, TempDir};

fn open(dir: &TempDir) -> (LunchSession, Option<StoreError>) {
    LunchSession::open(
        dir.path().join("restaurants.json"),
        dir.path().join("ratings.json"),
    )
}

#[test]
fn test_add_then_reload_then_pick() {
    let dir = tempdir().unwrap();
    let (mut session, load_error) = open(&dir);
    assert!(matches!(load_error, Some(StoreError::DataUnavailable { .. })));

    let kims = RestaurantRecord::new("Kim's")
        .with_category("한식")
        .with_distance(100);
    session.add_restaurant(kims.clone()).unwrap();

    let rows = RestaurantTable::load_all(&dir.path().join("restaurants.json")).unwrap();
    assert_eq!(rows, vec![kims.clone()]);
    assert_eq!(rows[0].category_name.as_deref(), Some("한식"));
    assert_eq!(rows[0].distance, Some(100));
    assert_eq!(rows[0].road_address_name, None);

    let (reopened, load_error) = open(&dir);
    assert!(load_error.is_none());
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        assert_eq!(reopened.recommend(&mut rng), Some(&kims));
    }
}

#[test]
fn test_empty_table_has_no_recommendation() {
    let dir = tempdir().unwrap();
    let (session, _) = open(&dir);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(session.recommend(&mut rng).is_none());
}

#[test]
fn test_ratings_average_and_survive_reopen() {
    let dir = tempdir().unwrap();
    let (session, _) = open(&dir);

    assert_eq!(session.submit_rating("Kim's", 5.0).unwrap(), Some(5.0));
    assert_eq!(session.submit_rating("Kim's", 3.0).unwrap(), Some(4.0));

    let (reopened, _) = open(&dir);
    assert_eq!(reopened.ratings().average_for("Kim's"), Some(4.0));
}

#[test]
fn test_rated_rows_join_by_name() {
    let dir = tempdir().unwrap();
    let (mut session, _) = open(&dir);
    session
        .replace_table(vec![
            RestaurantRecord::new("Kim's"),
            RestaurantRecord::new("Lee's"),
        ])
        .unwrap();
    session.submit_rating("Kim's", 4.0).unwrap();

    let rows = session.rated_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].average, Some(4.0));
    assert_eq!(rows[1].average, None);
}

#[test]
fn test_duplicate_names_share_one_rating_bucket() {
    let dir = tempdir().unwrap();
    let (mut session, _) = open(&dir);
    session
        .replace_table(vec![
            RestaurantRecord::new("Kim's").with_distance(100),
            RestaurantRecord::new("Kim's").with_distance(900),
        ])
        .unwrap();
    session.submit_rating("Kim's", 2.0).unwrap();

    let rows = session.rated_rows();
    assert_eq!(rows[0].average, Some(2.0));
    assert_eq!(rows[1].average, Some(2.0));
}

#[test]
fn test_rename_orphans_rating_history() {
    let dir = tempdir().unwrap();
    let (mut session, _) = open(&dir);
    session.add_restaurant(RestaurantRecord::new("Kim's")).unwrap();
    session.submit_rating("Kim's", 5.0).unwrap();

    let mut rows = session.table().rows().to_vec();
    rows[0].place_name = "Kim's Kitchen".to_string();
    session.replace_table(rows).unwrap();

    assert_eq!(session.rated_rows()[0].average, None);
    assert_eq!(session.ratings().average_for("Kim's"), Some(5.0));
}

#[test]
fn test_delete_twice_matches_delete_once() {
    let dir = tempdir().unwrap();
    let (mut session, _) = open(&dir);
    for name in ["Kim's", "Lee's", "Kim's"] {
        session.add_restaurant(RestaurantRecord::new(name)).unwrap();
    }

    session.delete_restaurant("Kim's").unwrap();
    let once = session.table().rows().to_vec();
    session.delete_restaurant("Kim's").unwrap();

    assert_eq!(session.table().rows(), once.as_slice());
    assert_eq!(once, vec![RestaurantRecord::new("Lee's")]);
}

#[test]
fn test_kakao_export_survives_edit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("restaurants.json");
    std::fs::write(
        &path,
        r#"[
  {
    "address_name": "서울 강남구 역삼동 736-1",
    "category_group_code": "FD6",
    "category_name": "음식점 > 한식 > 국밥",
    "distance": "212",
    "id": "1234567",
    "phone": "02-555-0000",
    "place_name": "역삼국밥",
    "place_url": "http://place.map.kakao.com/1234567",
    "road_address_name": "서울 강남구 테헤란로 222",
    "x": "127.036",
    "y": "37.501"
  }
]"#,
    )
    .unwrap();

    let (mut session, load_error) = open(&dir);
    assert!(load_error.is_none());
    assert_eq!(session.table().rows()[0].distance, Some(212));

    let mut rows = session.table().rows().to_vec();
    rows[0].phone = Some("02-555-1111".to_string());
    session.replace_table(rows).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written[0]["phone"], "02-555-1111");
    assert_eq!(written[0]["category_group_code"], "FD6");
    assert_eq!(written[0]["x"], "127.036");
    assert_eq!(written[0]["distance"], 212);
}

#[test]
fn test_odd_distance_does_not_cost_other_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("restaurants.json");
    std::fs::write(
        &path,
        r#"[
  {"place_name": "A", "distance": "120"},
  {"place_name": "B", "distance": "1,200"},
  {"place_name": "C", "distance": "근처"}
]"#,
    )
    .unwrap();

    let (mut session, load_error) = open(&dir);
    assert!(load_error.is_none());
    session.add_restaurant(RestaurantRecord::new("D")).unwrap();

    let names: Vec<_> = RestaurantTable::load_all(&path)
        .unwrap()
        .into_iter()
        .map(|r| (r.place_name, r.distance))
        .collect();
    assert_eq!(
        names,
        [
            ("A".to_string(), Some(120)),
            ("B".to_string(), Some(1200)),
            ("C".to_string(), None),
            ("D".to_string(), None),
        ]
    );
}

#[test]
fn test_unreadable_table_is_moved_aside_on_first_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("restaurants.json");
    std::fs::write(&path, "[{\"place_name\": \"A\"},").unwrap();

    let (mut session, load_error) = open(&dir);
    assert!(matches!(load_error, Some(StoreError::DataUnavailable { .. })));
    session.add_restaurant(RestaurantRecord::new("D")).unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("restaurants.json.bak")).unwrap(),
        "[{\"place_name\": \"A\"},"
    );
    assert_eq!(session.table().len(), 1);
}
