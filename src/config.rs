use std::env;

use anyhow::Context;

pub struct Config {
    pub search_url: String,
    pub html_path: String,
    pub csv_path: String,
    pub card_class: String,
    pub coeff_floor: f64,
    pub coeff_price: f64,
    pub coeff_rooms: f64,
    pub coeff_monthly_fee: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            search_url: var_or(
                "HEMNET_SEARCH_URL",
                "https://www.hemnet.se/bostader?elevator=1&balcony=1&price_max=2000000&price_min=1600000&living_area_min=35&item_types[]=bostadsratt&location_ids[]=17847",
            ),
            html_path: var_or("LOCAL_HTML", "hemnet.html"),
            csv_path: var_or("CSV_FILE", "hemnet_properties.csv"),
            card_class: var_or("PROPERTY_CARD_CLASS", "Content_content__lg290"),
            coeff_floor: coeff("COEFF_FLOOR", "3")?,
            coeff_price: coeff("COEFF_PRICE", "2")?,
            coeff_rooms: coeff("COEFF_ROOMS", "1")?,
            coeff_monthly_fee: coeff("COEFF_MONTHLY_FEE", "3")?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn coeff(key: &str, default: &str) -> anyhow::Result<f64> {
    var_or(key, default)
        .parse()
        .with_context(|| format!("{} must be a number", key))
}
