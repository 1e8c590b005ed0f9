//! Presentation fields derived from raw records.
//!
//! Every function here is total: unknown, missing or malformed input maps to a
//! defined default instead of an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::Record;

/// Text rendered for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_DISPLAY_FORMAT: &str = "%a, %b %-d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStyle {
    First,
    Second,
    Third,
    Default,
}

impl RankStyle {
    pub fn class(self) -> &'static str {
        match self {
            RankStyle::First => "first",
            RankStyle::Second => "second",
            RankStyle::Third => "third",
            RankStyle::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankDecoration {
    pub medal: &'static str,
    pub style: RankStyle,
    /// Top three positions get highlighted rows.
    pub podium: bool,
}

pub fn decorate_rank(rank: Option<i64>) -> RankDecoration {
    let (medal, style) = match rank {
        Some(1) => ("🥇", RankStyle::First),
        Some(2) => ("🥈", RankStyle::Second),
        Some(3) => ("🥉", RankStyle::Third),
        _ => ("•", RankStyle::Default),
    };
    RankDecoration {
        medal,
        style,
        podium: matches!(rank, Some(r) if r <= 3),
    }
}

/// Stable ascending sort on `rank`. Entries without a numeric rank go last.
pub fn sort_by_rank(entries: &mut [Record]) {
    entries.sort_by_key(|entry| match entry.i64_field("rank") {
        Some(rank) => (0, rank),
        None => (1, 0),
    });
}

/// Fixed palette tokens used for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Success,
    Warning,
    Danger,
    Info,
    Primary,
    Secondary,
}

impl Palette {
    pub fn token(self) -> &'static str {
        match self {
            Palette::Success => "success",
            Palette::Warning => "warning",
            Palette::Danger => "danger",
            Palette::Info => "info",
            Palette::Primary => "primary",
            Palette::Secondary => "secondary",
        }
    }

    pub fn css_class(self) -> String {
        format!("bg-{}", self.token())
    }
}

const INTENSITY_COLORS: &[(&str, Palette)] = &[
    ("low", Palette::Success),
    ("moderate", Palette::Warning),
    ("high", Palette::Danger),
];

const DIFFICULTY_COLORS: &[(&str, Palette)] = &[
    ("beginner", Palette::Success),
    ("intermediate", Palette::Warning),
    ("advanced", Palette::Danger),
];

const CATEGORY_COLORS: &[(&str, Palette)] = &[
    ("cardio", Palette::Info),
    ("strength", Palette::Primary),
    ("flexibility", Palette::Success),
    ("hiit", Palette::Danger),
    ("sports", Palette::Warning),
];

fn lookup_color(table: &[(&str, Palette)], key: Option<&str>) -> Palette {
    let Some(key) = key else {
        return Palette::Secondary;
    };
    let key = key.to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(Palette::Secondary, |(_, palette)| *palette)
}

pub fn intensity_color(intensity: Option<&str>) -> Palette {
    lookup_color(INTENSITY_COLORS, intensity)
}

pub fn difficulty_color(difficulty: Option<&str>) -> Palette {
    lookup_color(DIFFICULTY_COLORS, difficulty)
}

pub fn category_color(category: Option<&str>) -> Palette {
    lookup_color(CATEGORY_COLORS, category)
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalized `name_field`, or `"{fallback_prefix} {id}"` when it is missing or empty.
pub fn display_name(record: &Record, name_field: &str, fallback_prefix: &str) -> String {
    match record.non_empty_text(name_field) {
        Some(name) => capitalize(&name),
        None => format!("{fallback_prefix} {}", record.id_label()),
    }
}

/// Numeric field as text, `0` when missing, `null` or zero-like.
pub fn number_or_zero(record: &Record, field: &str) -> String {
    match record.field(field) {
        Some(value) if value.as_f64() == Some(0.0) => "0".to_string(),
        Some(value) if value.is_number() => record.text(field),
        Some(_) => record.non_empty_text(field).unwrap_or_else(|| "0".to_string()),
        None => "0".to_string(),
    }
}

/// Render an ISO date or datetime as e.g. `Mon, Jan 15, 2024`.
///
/// Datetimes with an offset are shown in that offset. Anything unparseable
/// renders as [`INVALID_DATE`].
pub fn format_date(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .and_then(parse_date)
        .map(|date| date.format(DATE_DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ranks(entries: &[Record]) -> Vec<Option<i64>> {
        entries.iter().map(|e| e.i64_field("rank")).collect()
    }

    #[test]
    fn rank_decorations_cover_podium_and_default() {
        let got: Vec<_> = [1, 2, 3, 4, 7]
            .into_iter()
            .map(|rank| {
                let d = decorate_rank(Some(rank));
                (d.medal, d.style.class())
            })
            .collect();
        assert_eq!(
            got,
            vec![
                ("🥇", "first"),
                ("🥈", "second"),
                ("🥉", "third"),
                ("•", "default"),
                ("•", "default"),
            ]
        );
        assert!(!decorate_rank(None).podium);
        assert!(decorate_rank(Some(3)).podium);
    }

    #[test]
    fn sort_by_rank_is_ascending_and_stable() {
        let mut entries: Vec<Record> = vec![
            json!({ "rank": 3, "id": "c" }),
            json!({ "rank": 1, "id": "a" }),
            json!({ "id": "unranked" }),
            json!({ "rank": 2, "id": "b1" }),
            json!({ "rank": 2, "id": "b2" }),
        ]
        .into_iter()
        .map(Record::new)
        .collect();

        sort_by_rank(&mut entries);

        assert_eq!(ranks(&entries), vec![Some(1), Some(2), Some(2), Some(3), None]);
        let ids: Vec<_> = entries.iter().map(Record::id_label).collect();
        assert_eq!(ids, vec!["a", "b1", "b2", "c", "unranked"]);
    }

    #[test]
    fn color_lookups_are_case_insensitive_with_default() {
        assert_eq!(intensity_color(Some("HIGH")), Palette::Danger);
        assert_eq!(intensity_color(Some("Moderate")), Palette::Warning);
        assert_eq!(intensity_color(Some("extreme")), Palette::Secondary);
        assert_eq!(intensity_color(None), Palette::Secondary);
        assert_eq!(difficulty_color(Some("Beginner")), Palette::Success);
        assert_eq!(difficulty_color(Some("")), Palette::Secondary);
        assert_eq!(category_color(Some("HIIT")), Palette::Danger);
        assert_eq!(category_color(Some("strength")).css_class(), "bg-primary");
        assert_eq!(category_color(Some("default")), Palette::Secondary);
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("alpha team"), "Alpha team");
        assert_eq!(capitalize("bETA"), "BETA");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let named = Record::new(json!({ "id": 1, "name": "alpha" }));
        let unnamed = Record::new(json!({ "id": 7 }));
        let empty = Record::new(json!({ "id": 8, "name": "" }));
        assert_eq!(display_name(&named, "name", "Team"), "Alpha");
        assert_eq!(display_name(&unnamed, "name", "Team"), "Team 7");
        assert_eq!(display_name(&empty, "name", "Team"), "Team 8");
    }

    #[test]
    fn numbers_default_to_zero() {
        let record = Record::new(json!({
            "calories": 312.5,
            "minutes": 45,
            "missing_null": null,
            "zero": 0.0,
        }));
        assert_eq!(number_or_zero(&record, "calories"), "312.5");
        assert_eq!(number_or_zero(&record, "minutes"), "45");
        assert_eq!(number_or_zero(&record, "missing_null"), "0");
        assert_eq!(number_or_zero(&record, "absent"), "0");
        assert_eq!(number_or_zero(&record, "zero"), "0");
    }

    #[test]
    fn dates_render_short_form() {
        assert_eq!(format_date(Some("2024-01-15T08:30:00Z")), "Mon, Jan 15, 2024");
        assert_eq!(format_date(Some("2024-01-15T23:30:00-05:00")), "Mon, Jan 15, 2024");
        assert_eq!(format_date(Some("2024-03-05")), "Tue, Mar 5, 2024");
        assert_eq!(format_date(Some("2024-03-05T10:00:00.123456")), "Tue, Mar 5, 2024");
    }

    #[test]
    fn bad_dates_render_invalid_date() {
        assert_eq!(format_date(Some("yesterday")), INVALID_DATE);
        assert_eq!(format_date(Some("")), INVALID_DATE);
        assert_eq!(format_date(None), INVALID_DATE);
    }
}
