use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::listing::models::ListingRecord;
use crate::listing::viewing::parse_viewing_date;

/// Marker for new-construction project cards, which are not individual units.
const EXCLUDE_MARKER: &str = "Nybyggnadsprojekt";

/// Orders records for the report and drops excluded ones.
///
/// Records with a viewing come first, sorted by ascending viewing date
/// (unparsable dates sort after every real date) and descending score within
/// a date. Records without a viewing trail in extraction order.
pub fn rank_and_filter(records: Vec<ListingRecord>, today: NaiveDate) -> Vec<ListingRecord> {
    let year = today.year();

    let (dated, undated): (Vec<_>, Vec<_>) =
        records.into_iter().partition(|r| !r.viewing.is_empty());

    let mut keyed: Vec<(NaiveDate, ListingRecord)> = dated
        .into_iter()
        .map(|r| {
            let date = parse_viewing_date(&r.viewing, year).unwrap_or(NaiveDate::MAX);
            (date, r)
        })
        .collect();
    keyed.sort_by(|(da, a), (db, b)| {
        da.cmp(db).then_with(|| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
        })
    });

    let mut ordered: Vec<ListingRecord> = keyed.into_iter().map(|(_, r)| r).collect();
    ordered.extend(undated);
    ordered.retain(|r| !r.any_field_contains(EXCLUDE_MARKER));
    ordered
}
