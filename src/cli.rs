use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use lunch_services::{RestaurantRecord, MAX_SCORE};

/// 오늘 점심 뭐 먹지? Pick lunch near the office, check the weather, rate places.
#[derive(Debug, Parser)]
#[command(name = "lunch", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file path (overrides the default config location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Restaurant backing file (overrides config)
    #[arg(long, global = true)]
    pub restaurants: Option<PathBuf>,

    /// Ratings backing file (overrides config)
    #[arg(long, global = true)]
    pub ratings: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Weather panel followed by the full list (default)
    Home,
    /// Current weather and lunch advisory
    Weather,
    /// Pick one restaurant at random
    Pick,
    /// Show every restaurant with its average rating
    List,
    /// Add a restaurant
    Add(AddArgs),
    /// Edit one row of the table
    Edit(EditArgs),
    /// Delete every restaurant with this exact name
    Delete {
        name: String,
    },
    /// Rate a restaurant from 0.0 to 5.0
    Rate {
        name: String,
        #[arg(value_parser = parse_score)]
        score: f64,
    },
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Place name (required)
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub category: Option<String>,

    /// Distance from the office in meters
    #[arg(long)]
    pub distance: Option<u32>,

    /// Road address
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Map link
    #[arg(long)]
    pub url: Option<String>,
}

impl AddArgs {
    pub fn into_record(self) -> RestaurantRecord {
        let mut record = RestaurantRecord::new(self.name.trim());
        record.category_name = non_blank(self.category);
        record.distance = self.distance;
        record.road_address_name = non_blank(self.address);
        record.phone = non_blank(self.phone);
        record.place_url = non_blank(self.url);
        record
    }
}

/// Field changes for one row. An empty string clears an optional field.
#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Row number as shown by `list` (starting at 1)
    pub row: usize,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Distance in meters; an empty value clears it
    #[arg(long, value_parser = parse_distance_change)]
    pub distance: Option<DistanceChange>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub url: Option<String>,
}

impl EditArgs {
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.category.is_some()
            || self.distance.is_some()
            || self.address.is_some()
            || self.phone.is_some()
            || self.url.is_some()
    }

    /// Apply the requested changes to a copy of the row.
    pub fn apply(&self, record: &RestaurantRecord) -> RestaurantRecord {
        let mut edited = record.clone();
        if let Some(name) = &self.name {
            edited.place_name = name.trim().to_string();
        }
        if let Some(category) = &self.category {
            edited.category_name = non_blank(Some(category.clone()));
        }
        if let Some(DistanceChange(distance)) = self.distance {
            edited.distance = distance;
        }
        if let Some(address) = &self.address {
            edited.road_address_name = non_blank(Some(address.clone()));
        }
        if let Some(phone) = &self.phone {
            edited.phone = non_blank(Some(phone.clone()));
        }
        if let Some(url) = &self.url {
            edited.place_url = non_blank(Some(url.clone()));
        }
        edited
    }
}

/// New distance for a row; `None` clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceChange(pub Option<u32>);

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Scores run from 0.0 to `MAX_SCORE` in steps of 0.1.
pub fn parse_score(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !value.is_finite() || !(0.0..=MAX_SCORE).contains(&value) {
        return Err(format!("score must be between 0.0 and {MAX_SCORE:.1}, got {raw}"));
    }
    let tenths = (value * 10.0).round();
    if (value * 10.0 - tenths).abs() > 1e-9 {
        return Err(format!("score must use steps of 0.1, got {raw}"));
    }
    Ok(tenths / 10.0)
}

fn parse_distance_change(raw: &str) -> Result<DistanceChange, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DistanceChange(None));
    }
    raw.parse::<u32>()
        .map(|meters| DistanceChange(Some(meters)))
        .map_err(|_| format!("'{raw}' is not a distance in meters"))
}
