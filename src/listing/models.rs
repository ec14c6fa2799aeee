use serde::Serialize;

/// One extracted listing. Every text field is independently optional with an
/// empty string standing in for "not present on the card"; `score` is filled
/// in by the scoring pass.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingRecord {
    pub score: f64,
    pub floor: String,
    pub viewing: String,
    pub view_time: String,
    pub address: String,
    pub area: String,
    pub price: String,
    pub living_area: String,
    pub rooms: String,
    pub monthly_fee: String,
    pub price_per_m2: String,
    pub features: String,
    pub agent: String,
    pub url: String,
}

impl ListingRecord {
    pub fn any_field_contains(&self, needle: &str) -> bool {
        [
            &self.floor,
            &self.viewing,
            &self.view_time,
            &self.address,
            &self.area,
            &self.price,
            &self.living_area,
            &self.rooms,
            &self.monthly_fee,
            &self.price_per_m2,
            &self.features,
            &self.agent,
            &self.url,
        ]
        .iter()
        .any(|f| f.contains(needle))
    }
}
