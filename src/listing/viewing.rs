use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::listing::text::clean_text;

/// Swedish weekday abbreviations in Monday-first order, paired with their
/// English counterparts.
const WEEKDAYS: [(&str, &str); 7] = [
    ("Mån", "Mon"),
    ("Tis", "Tue"),
    ("Ons", "Wed"),
    ("Tor", "Thu"),
    ("Fre", "Fri"),
    ("Lör", "Sat"),
    ("Sön", "Sun"),
];

/// Pulls the viewing announcement out of a card link's text.
///
/// Returns `(viewing, view_time)`, e.g. `("Sun 7 jul", "13:00-13:30")`, or a
/// pair of empty strings when no announcement matches. "Idag" is resolved
/// against `today` into an absolute `<weekday> <day> <month>` label.
pub fn extract_viewing_and_time(text: &str, today: NaiveDate) -> (String, String) {
    let announce =
        Regex::new(r"(Sön|Mån|Tis|Ons|Tor|Fre|Lör|Idag)\s*(\d{1,2}\s+\w+)?\s*kl\s+\d{1,2}:\d{2}(?:-\d{1,2}:\d{2})?")
            .unwrap();
    let Some(m) = announce.find(text) else {
        return (String::new(), String::new());
    };
    let full = clean_text(m.as_str());

    let time = Regex::new(r"kl\s+(\d{1,2}:\d{2}(?:-\d{1,2}:\d{2})?)").unwrap();
    let (mut viewing, view_time) = match time.captures(&full) {
        Some(caps) => {
            let view_time = caps[1].to_string();
            let viewing = full.replace(&caps[0], "").trim().to_string();
            (viewing, view_time)
        }
        None => (full, String::new()),
    };

    if let Some(rest) = viewing.strip_prefix("Idag") {
        let (_, eng) = WEEKDAYS[today.weekday().num_days_from_monday() as usize];
        viewing = format!("{} {} {}{}", eng, today.day(), today.format("%b"), rest)
            .trim()
            .to_string();
    } else {
        for (swe, eng) in WEEKDAYS {
            if viewing.starts_with(swe) {
                viewing = viewing.replacen(swe, eng, 1);
                break;
            }
        }
    }

    (viewing, view_time)
}

/// Parses a viewing label like "Sun 7 jul" into a date in the given year.
/// Any shortfall (too few tokens, bad day, unknown month) yields None, the
/// no-date sentinel.
pub fn parse_viewing_date(viewing: &str, year: i32) -> Option<NaiveDate> {
    let parts: Vec<&str> = viewing.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }
    let day: u32 = parts[1].parse().ok()?;
    NaiveDate::parse_from_str(&format!("{} {} {}", day, parts[2], year), "%d %b %Y").ok()
}
