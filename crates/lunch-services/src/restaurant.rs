//! Restaurant record type.
//!
//! Records mirror the rows of a Kakao local-search export. Only the fields the
//! tool shows are typed; everything else in the row (`id`, `x`, `y`,
//! `address_name`, ...) is kept verbatim in `extra` so editing a row never
//! drops data the tool doesn't understand.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A single restaurant entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub place_name: String,

    #[serde(default)]
    pub category_name: Option<String>,

    /// Walking distance from the office in meters.
    #[serde(default, deserialize_with = "deserialize_distance")]
    pub distance: Option<u32>,

    #[serde(default)]
    pub road_address_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub place_url: Option<String>,

    /// Columns this tool doesn't model, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RestaurantRecord {
    pub fn new(place_name: impl Into<String>) -> Self {
        Self {
            place_name: place_name.into(),
            category_name: None,
            distance: None,
            road_address_name: None,
            phone: None,
            place_url: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_name = Some(category.into());
        self
    }

    pub fn with_distance(mut self, meters: u32) -> Self {
        self.distance = Some(meters);
        self
    }

    pub fn with_road_address(mut self, address: impl Into<String>) -> Self {
        self.road_address_name = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_place_url(mut self, url: impl Into<String>) -> Self {
        self.place_url = Some(url.into());
        self
    }

    /// The map link, if one is set and non-blank.
    pub fn map_link(&self) -> Option<&str> {
        self.place_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Short category label: Kakao categories look like `음식점 > 한식 > 국밥`,
    /// the last segment is the useful one.
    pub fn short_category(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .and_then(|c| c.rsplit('>').next())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Reject empty or whitespace-only place names.
///
/// # Errors
/// Returns `StoreError::Validation` when the name is blank.
pub fn validate_place_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::validation("place_name cannot be empty"));
    }
    Ok(())
}

/// Kakao exports distances as strings ("132", "1,200", or "" when no origin
/// was given); hand-edited files use plain numbers. A value that still can't
/// be read as meters is dropped rather than failing the whole file.
fn deserialize_distance<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(distance_from_value))
}

fn distance_from_value(value: &serde_json::Value) -> Option<u32> {
    use serde_json::Value;

    let meters = match value {
        Value::Null => return None,
        Value::String(text) if text.trim().is_empty() => return None,
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(whole_meters)),
        Value::String(text) => {
            let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
            digits
                .parse::<u64>()
                .ok()
                .or_else(|| digits.parse::<f64>().ok().and_then(whole_meters))
        }
        _ => None,
    };

    let meters = meters.and_then(|m| u32::try_from(m).ok());
    if meters.is_none() {
        tracing::warn!(%value, "Ignoring unreadable distance");
    }
    meters
}

/// Fractional meters round to the nearest meter.
fn whole_meters(meters: f64) -> Option<u64> {
    (meters.is_finite() && meters >= 0.0).then(|| meters.round() as u64)
}
