//! Validators normalizing AI-extracted JSON into the application's stricter
//! schema.
//!
//! The model is prompted for an exact shape but its output is still treated
//! as untrusted: every field is re-checked, free-text enums are mapped onto
//! the closed sets, and rows that cannot be repaired are skipped with a
//! reason instead of failing the whole import. Only a wrong top-level shape
//! aborts, since that means the extraction itself went wrong.

use chrono::{Datelike, Duration, NaiveDate};

use crate::{
    ai::AiError,
    error::AppError,
    model::{program::SECTIONS, publisher::PRIVILEGES},
};

/// A row the validators refused, with the reason reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPublisher {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub privilege: String,
    pub pioneer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPart {
    pub section: String,
    pub title: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWeek {
    pub week_start: NaiveDate,
    pub parts: Vec<NormalizedPart>,
}

/// Normalizes the publisher-list extraction.
///
/// Expects `{"publishers": [...]}`. Rows without a usable name are skipped;
/// privileges are mapped onto the closed set with unknowns defaulting to
/// "publisher"; phones are reduced to digits (plus a leading "+").
pub fn normalize_publishers(
    value: &serde_json::Value,
) -> Result<(Vec<NormalizedPublisher>, Vec<SkippedRow>), AppError> {
    let rows = value
        .get("publishers")
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            AiError::MalformedResponse("expected a top-level \"publishers\" array".to_string())
        })?;

    let mut valid = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let name = string_field(row, "name");

        let Some(name) = name.filter(|n| !n.is_empty()) else {
            skipped.push(SkippedRow {
                name: format!("row {}", index + 1),
                reason: "missing name".to_string(),
            });
            continue;
        };

        valid.push(NormalizedPublisher {
            name,
            phone: string_field(row, "phone")
                .map(|p| normalize_phone(&p))
                .filter(|p| !p.is_empty()),
            email: string_field(row, "email").filter(|e| e.contains('@')),
            privilege: normalize_privilege(string_field(row, "privilege").as_deref()),
            pioneer: row
                .get("pioneer")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        });
    }

    Ok((valid, skipped))
}

/// Normalizes the workbook extraction.
///
/// Expects `{"weeks": [...]}`. Week dates are snapped back to their Monday;
/// part durations are clamped to 1..=60 minutes; parts with unknown sections
/// and weeks with no usable date or no surviving parts are skipped.
pub fn normalize_programs(
    value: &serde_json::Value,
) -> Result<(Vec<NormalizedWeek>, Vec<SkippedRow>), AppError> {
    let rows = value.get("weeks").and_then(|v| v.as_array()).ok_or_else(|| {
        AiError::MalformedResponse("expected a top-level \"weeks\" array".to_string())
    })?;

    let mut valid = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let label = format!("week {}", index + 1);

        let date = string_field(row, "week_start")
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());

        let Some(date) = date else {
            skipped.push(SkippedRow {
                name: label,
                reason: "missing or invalid week_start".to_string(),
            });
            continue;
        };

        let week_start = date - Duration::days(date.weekday().num_days_from_monday() as i64);

        let mut parts = Vec::new();
        for part in row
            .get("parts")
            .and_then(|v| v.as_array())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
        {
            let Some(section) = string_field(part, "section")
                .map(|s| s.to_lowercase())
                .filter(|s| SECTIONS.contains(&s.as_str()))
            else {
                skipped.push(SkippedRow {
                    name: week_start.to_string(),
                    reason: "part with unknown section".to_string(),
                });
                continue;
            };

            let Some(title) = string_field(part, "title").filter(|t| !t.is_empty()) else {
                skipped.push(SkippedRow {
                    name: week_start.to_string(),
                    reason: "part without a title".to_string(),
                });
                continue;
            };

            let duration = part
                .get("duration_minutes")
                .and_then(|v| v.as_i64())
                .unwrap_or(10);

            parts.push(NormalizedPart {
                section,
                title,
                duration_minutes: duration.clamp(1, 60) as i32,
            });
        }

        if parts.is_empty() {
            skipped.push(SkippedRow {
                name: week_start.to_string(),
                reason: "week with no usable parts".to_string(),
            });
            continue;
        }

        valid.push(NormalizedWeek { week_start, parts });
    }

    Ok((valid, skipped))
}

fn string_field(row: &serde_json::Value, key: &str) -> Option<String> {
    row.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
}

/// Maps a free-text privilege onto the closed set; unknowns become plain
/// "publisher".
fn normalize_privilege(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "publisher".to_string();
    };

    let lowered = raw.to_lowercase();

    if PRIVILEGES.contains(&lowered.as_str()) {
        return lowered;
    }

    if lowered.contains("elder") {
        "elder".to_string()
    } else if lowered.contains("servant") {
        "ministerial_servant".to_string()
    } else {
        "publisher".to_string()
    }
}

/// Keeps digits and a leading "+"; everything else is formatting noise.
fn normalize_phone(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());

    for (i, c) in raw.chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_well_formed_publishers() {
        let value = json!({
            "publishers": [
                {"name": " Ana Souza ", "phone": "(11) 98765-4321", "email": "ana@example.org",
                 "privilege": "Elder", "pioneer": true},
            ]
        });

        let (valid, skipped) = normalize_publishers(&value).unwrap();

        assert!(skipped.is_empty());
        assert_eq!(
            valid,
            vec![NormalizedPublisher {
                name: "Ana Souza".to_string(),
                phone: Some("11987654321".to_string()),
                email: Some("ana@example.org".to_string()),
                privilege: "elder".to_string(),
                pioneer: true,
            }]
        );
    }

    #[test]
    fn skips_rows_without_a_name() {
        let value = json!({
            "publishers": [
                {"phone": "123"},
                {"name": "", "privilege": "publisher"},
                {"name": "Bruno Lima"},
            ]
        });

        let (valid, skipped) = normalize_publishers(&value).unwrap();

        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].name, "Bruno Lima");
        assert_eq!(skipped.len(), 2);
        assert!(skipped.iter().all(|s| s.reason == "missing name"));
    }

    #[test]
    fn unknown_privilege_defaults_to_publisher() {
        let value = json!({
            "publishers": [
                {"name": "Carla Dias", "privilege": "Ministerial Servant"},
                {"name": "Davi Rocha", "privilege": "something else"},
                {"name": "Elisa Melo", "privilege": null},
            ]
        });

        let (valid, _) = normalize_publishers(&value).unwrap();

        assert_eq!(valid[0].privilege, "ministerial_servant");
        assert_eq!(valid[1].privilege, "publisher");
        assert_eq!(valid[2].privilege, "publisher");
    }

    #[test]
    fn drops_emails_without_at_sign() {
        let value = json!({
            "publishers": [{"name": "Fabio Nunes", "email": "not-an-email"}]
        });

        let (valid, _) = normalize_publishers(&value).unwrap();

        assert_eq!(valid[0].email, None);
    }

    #[test]
    fn wrong_top_level_shape_is_an_error() {
        let value = json!(["just", "an", "array"]);

        assert!(normalize_publishers(&value).is_err());
    }

    #[test]
    fn snaps_week_start_to_monday() {
        // 2026-03-04 is a Wednesday; its Monday is 2026-03-02.
        let value = json!({
            "weeks": [{
                "week_start": "2026-03-04",
                "parts": [{"section": "treasures", "title": "Opening", "duration_minutes": 10}]
            }]
        });

        let (valid, skipped) = normalize_programs(&value).unwrap();

        assert!(skipped.is_empty());
        assert_eq!(
            valid[0].week_start,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
    }

    #[test]
    fn clamps_durations() {
        let value = json!({
            "weeks": [{
                "week_start": "2026-03-02",
                "parts": [
                    {"section": "ministry", "title": "A", "duration_minutes": 0},
                    {"section": "ministry", "title": "B", "duration_minutes": 240},
                ]
            }]
        });

        let (valid, _) = normalize_programs(&value).unwrap();

        assert_eq!(valid[0].parts[0].duration_minutes, 1);
        assert_eq!(valid[0].parts[1].duration_minutes, 60);
    }

    #[test]
    fn rejects_unknown_sections_but_keeps_the_week() {
        let value = json!({
            "weeks": [{
                "week_start": "2026-03-02",
                "parts": [
                    {"section": "intermission", "title": "A", "duration_minutes": 5},
                    {"section": "living", "title": "B", "duration_minutes": 15},
                ]
            }]
        });

        let (valid, skipped) = normalize_programs(&value).unwrap();

        assert_eq!(valid[0].parts.len(), 1);
        assert_eq!(valid[0].parts[0].section, "living");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].reason, "part with unknown section");
    }

    #[test]
    fn skips_weeks_without_usable_parts() {
        let value = json!({
            "weeks": [
                {"week_start": "2026-03-02", "parts": []},
                {"week_start": "not a date", "parts": []},
            ]
        });

        let (valid, skipped) = normalize_programs(&value).unwrap();

        assert!(valid.is_empty());
        assert_eq!(skipped.len(), 2);
    }
}
