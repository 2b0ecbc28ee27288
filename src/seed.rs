//! Initial catalog seed.
//!
//! Three example workshops bootstrap the catalog on startup, matching the
//! fixture data the public catalog shipped with. A JSON seed file can
//! replace them via configuration.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use std::path::Path;

use crate::workshop::{Workshop, WorkshopStatus};

/// Categories offered by the center, used for form hints and filtering.
pub const CATEGORIES: [&str; 5] = [
    "Technology",
    "Entrepreneurship",
    "Soft Skills",
    "Creativity",
    "Health",
];

fn workshop(
    id: &str,
    title: &str,
    category: &str,
    location: &str,
    date: (i32, u32, u32),
    time: (u32, u32),
    capacity: u32,
    enrolled: u32,
    description: &str,
) -> Workshop {
    Workshop {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        category: category.to_string(),
        // fixed fixture values, always in range
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap_or_default(),
        capacity,
        enrolled,
        status: WorkshopStatus::Active,
    }
}

/// The built-in example workshops.
pub fn initial_workshops() -> Vec<Workshop> {
    vec![
        workshop(
            "ws-1",
            "Introduction to Web Development",
            "Technology",
            "Lab A",
            (2025, 2, 10),
            (18, 0),
            24,
            18,
            "Foundations of HTML, CSS and JavaScript for building modern landing pages.",
        ),
        workshop(
            "ws-2",
            "Soft Skills for Leaders",
            "Soft Skills",
            "Room 3",
            (2025, 2, 15),
            (10, 0),
            30,
            12,
            "Interactive workshop on assertive communication, feedback and adaptable leadership.",
        ),
        workshop(
            "ws-3",
            "Digital Entrepreneurship",
            "Entrepreneurship",
            "Innovation Hall",
            (2025, 2, 20),
            (19, 0),
            20,
            8,
            "How to validate business ideas, design an MVP and prepare a winning pitch.",
        ),
    ]
}

/// Load a replacement seed from a JSON file (an array of workshops).
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Workshop>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let workshops: Vec<Workshop> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    tracing::info!(path = %path.display(), count = workshops.len(), "seed file loaded");
    Ok(workshops)
}
