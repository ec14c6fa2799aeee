//! Batch-relative scoring. Normalization bounds come from the whole batch,
//! so the same listing can score differently next to different neighbours.

use regex::Regex;

use crate::config::Config;
use crate::listing::models::ListingRecord;

/// Floor sentinel for "no parseable floor": excluded from the batch bounds
/// and scored 0 on the floor dimension.
const NO_FLOOR: f64 = -1.0;

pub fn min_max(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        // Degenerate batch, every value equal: neutral rather than a
        // division by zero.
        return 0.5;
    }
    (value - min) / (max - min)
}

/// Parses the leading numeric token of a floor string ("3/10" -> 3.0,
/// "3,5/4" -> 3.5). Anything else yields the -1 sentinel.
pub fn parse_floor(floor: &str) -> f64 {
    let re = Regex::new(r"^(\d+(?:[.,]\d+)?)").unwrap();
    re.captures(floor)
        .and_then(|caps| caps[1].replace(',', ".").parse().ok())
        .unwrap_or(NO_FLOOR)
}

struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        let mut bounds: Option<Bounds> = None;
        for v in values {
            bounds = Some(match bounds {
                None => Bounds { min: v, max: v },
                Some(b) => Bounds {
                    min: b.min.min(v),
                    max: b.max.max(v),
                },
            });
        }
        // An empty dimension degenerates to (0, 0): min_max goes neutral.
        bounds.unwrap_or(Bounds { min: 0.0, max: 0.0 })
    }
}

fn parse_price(record: &ListingRecord) -> Option<f64> {
    if record.price.is_empty() {
        return None;
    }
    record.price.parse().ok()
}

fn parse_fee(record: &ListingRecord) -> Option<f64> {
    if record.monthly_fee.is_empty() {
        return None;
    }
    record.monthly_fee.replace(' ', "").parse().ok()
}

/// Fills in `score` on every record: a weighted average of the normalized
/// floor, price, rooms and monthly-fee features, rounded to 3 decimals.
pub fn score_records(records: &mut [ListingRecord], cfg: &Config) {
    let floor = Bounds::of(
        records
            .iter()
            .map(|r| parse_floor(&r.floor))
            .filter(|v| *v >= 0.0),
    );
    let price = Bounds::of(records.iter().filter_map(parse_price));
    let fee = Bounds::of(records.iter().filter_map(parse_fee));

    let coeff_sum = cfg.coeff_floor + cfg.coeff_price + cfg.coeff_rooms + cfg.coeff_monthly_fee;

    for record in records {
        // Higher floor is better; unknown floors contribute nothing.
        let floor_val = parse_floor(&record.floor);
        let norm_floor = if floor_val >= 0.0 {
            min_max(floor_val, floor.min, floor.max)
        } else {
            0.0
        };

        // Lower price is better; a missing price counts as worst-in-batch.
        let price_val = parse_price(record).unwrap_or(price.max);
        let norm_price = 1.0 - min_max(price_val, price.min, price.max);

        // Hard preference for 1.5 or 2 rooms, not a gradient.
        let rooms_val: f64 = record.rooms.parse().unwrap_or(0.0);
        let norm_rooms = if rooms_val == 1.5 || rooms_val == 2.0 {
            1.0
        } else {
            0.0
        };

        // Lower fee is better; a missing fee counts as worst-in-batch.
        let fee_val = parse_fee(record).unwrap_or(fee.max);
        let norm_fee = 1.0 - min_max(fee_val, fee.min, fee.max);

        let score = (cfg.coeff_floor * norm_floor
            + cfg.coeff_price * norm_price
            + cfg.coeff_rooms * norm_rooms
            + cfg.coeff_monthly_fee * norm_fee)
            / coeff_sum;
        record.score = (score * 1000.0).round() / 1000.0;
    }
}
