//! Text rendering for the terminal.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

use lunch_services::{RatedRow, RestaurantRecord};
use lunch_weather::WeatherSnapshot;

const MISSING: &str = "-";

/// Weather panel: temperature, wind and the advisory line.
pub fn weather_panel(snapshot: &WeatherSnapshot, location_label: &str) -> String {
    let mut lines = Vec::new();

    let observed = snapshot
        .observed_at()
        .map(|t| format!(" ({} 기준)", t.format("%H:%M")))
        .unwrap_or_default();
    lines.push(format!("🌤  {location_label} 현재 날씨{observed}"));

    match snapshot.temperature_celsius {
        Some(t) => lines.push(format!("   기온: {t:.1}°C")),
        None => lines.push(format!("   기온: {MISSING}")),
    }

    let wind = match (snapshot.windspeed, snapshot.wind_direction_degrees) {
        (Some(speed), Some(deg)) => format!("{speed:.1} km/h, {}풍", compass_point(deg)),
        (Some(speed), None) => format!("{speed:.1} km/h"),
        _ => MISSING.to_string(),
    };
    lines.push(format!("   바람: {wind}"));

    if let Some(advice) = snapshot.advisory() {
        lines.push(format!("   👉 {advice}"));
    }

    lines.join("\n")
}

/// Eight-point compass name for a wind direction in degrees.
pub fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [&str; 8] = ["북", "북동", "동", "남동", "남", "남서", "서", "북서"];
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + 22.5) / 45.0) as usize % POINTS.len();
    POINTS[index]
}

/// The recommendation card shown after a random pick.
pub fn recommendation(record: &RestaurantRecord, origin_label: &str) -> String {
    let mut lines = Vec::new();

    match record.short_category() {
        Some(category) => lines.push(format!("🎉 오늘은 {category} 어때요?")),
        None => lines.push("🎉 오늘은 여기 어때요?".to_string()),
    }
    lines.push(format!("추천 맛집: {}", record.place_name));

    if let Some(distance) = record.distance {
        lines.push(format!("내 위치({origin_label})에서 {distance}m 떨어져 있어요!"));
    }
    if let Some(address) = &record.road_address_name {
        lines.push(format!("주소: {address}"));
    }
    if let Some(link) = record.map_link() {
        lines.push(format!("카카오맵에서 위치 보기: {link}"));
    }

    lines.join("\n")
}

/// Full table of restaurants with the derived rating column.
pub fn restaurant_table(rows: &[RatedRow<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "가게", "분류", "거리(m)", "도로명 주소", "전화", "평점"]);

    for (index, row) in rows.iter().enumerate() {
        let record = row.record;
        table.add_row(vec![
            (index + 1).to_string(),
            record.place_name.clone(),
            text_or_missing(record.category_name.as_deref()),
            record
                .distance
                .map(|d| d.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            text_or_missing(record.road_address_name.as_deref()),
            text_or_missing(record.phone.as_deref()),
            rating_label(row.average),
        ]);
    }

    table
}

/// `★ 4.0` for a rated place, `-` otherwise.
pub fn rating_label(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("★ {avg:.1}"),
        None => MISSING.to_string(),
    }
}

fn text_or_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(MISSING)
        .to_string()
}
