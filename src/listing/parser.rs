use anyhow::anyhow;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::listing::models::ListingRecord;
use crate::listing::text::{
    clean_floor, clean_monthly_fee, clean_rooms, clean_text, extract_int, extract_number,
};
use crate::listing::viewing::extract_viewing_and_time;

const SITE_ORIGIN: &str = "https://www.hemnet.se";
const MUNICIPALITY_SUFFIX: &str = ", Linköpings kommun";

struct CardSelectors {
    title: Selector,
    truncate: Selector,
    location: Selector,
    span: Selector,
    asking_price: Selector,
    attribute: Selector,
    display_tag: Selector,
    agent: Selector,
}

impl CardSelectors {
    fn new() -> Self {
        Self {
            title: Selector::parse("h2.NestTitle_nestTitle__D7O_9").unwrap(),
            truncate: Selector::parse("div.Header_truncate__ebq7a").unwrap(),
            location: Selector::parse("div.Location_address___eOo4").unwrap(),
            span: Selector::parse("span").unwrap(),
            asking_price: Selector::parse("span.ForSaleAttributes_askingPrice__ANshd").unwrap(),
            attribute: Selector::parse("div.hcl-flex--item.ForSaleAttributes_attribute__5Y0jr")
                .unwrap(),
            display_tag: Selector::parse("div.NestDisplayTag_nestDisplayTagContainer__dfBQI")
                .unwrap(),
            agent: Selector::parse("span.NestBody_nestBody__B_PPT").unwrap(),
        }
    }
}

/// Extracts one record per listing card found in the saved search page.
/// `today` anchors relative viewing announcements ("Idag").
pub fn extract_records(
    html: &str,
    card_class: &str,
    today: NaiveDate,
) -> anyhow::Result<Vec<ListingRecord>> {
    let card_selector = Selector::parse(&format!("div.{}", card_class))
        .map_err(|e| anyhow!("invalid card class '{}': {}", card_class, e))?;
    let selectors = CardSelectors::new();

    let document = Html::parse_document(html);
    let records = document
        .select(&card_selector)
        .map(|card| extract_listing(card, &selectors, today))
        .collect();

    Ok(records)
}

fn extract_listing(card: ElementRef<'_>, sel: &CardSelectors, today: NaiveDate) -> ListingRecord {
    let mut record = ListingRecord::default();

    if let Some(link) = enclosing_link(card) {
        if let Some(href) = link.value().attr("href") {
            record.url = if href.starts_with("http") {
                href.to_string()
            } else {
                format!("{}{}", SITE_ORIGIN, href)
            };
        }
        let link_text: String = link.text().collect();
        let (viewing, view_time) = extract_viewing_and_time(&link_text, today);
        record.viewing = viewing;
        record.view_time = view_time;
    }

    record.address = card
        .select(&sel.title)
        .next()
        .and_then(|title| title.select(&sel.truncate).next())
        .map(element_text)
        .unwrap_or_default();

    record.area = card
        .select(&sel.location)
        .next()
        .and_then(|loc| loc.select(&sel.span).next())
        .map(element_text)
        .unwrap_or_default()
        .replace(MUNICIPALITY_SUFFIX, "");

    record.price = card
        .select(&sel.asking_price)
        .next()
        .map(|el| extract_int(&el.text().collect::<String>()))
        .unwrap_or_default();

    // The attribute row has no per-field markers; positions mirror Hemnet's
    // card layout: [label, living area, rooms, floor, monthly fee, price/m²].
    // If the page ever reorders these there is nothing to key off.
    let attrs: Vec<ElementRef<'_>> = card.select(&sel.attribute).collect();
    let attr_text = |i: usize| -> String {
        attrs
            .get(i)
            .and_then(|el| el.select(&sel.span).next())
            .map(|span| span.text().collect())
            .unwrap_or_default()
    };
    if attrs.len() >= 4 {
        record.living_area = extract_number(&attr_text(1));
        record.rooms = clean_rooms(&attr_text(2));
        record.floor = clean_floor(&attr_text(3));
    }
    if attrs.len() >= 6 {
        record.monthly_fee = clean_monthly_fee(&attr_text(4));
        record.price_per_m2 = extract_int(&attr_text(5));
    }

    record.features = card
        .select(&sel.display_tag)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(", ");

    record.agent = card
        .select(&sel.agent)
        .next()
        .map(element_text)
        .unwrap_or_default();

    record
}

fn enclosing_link<'a>(card: ElementRef<'a>) -> Option<ElementRef<'a>> {
    card.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
}

fn element_text(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_CLASS: &str = "Content_content__lg290";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 9).unwrap()
    }

    fn full_card() -> String {
        let attrs = [
            "Lägenhet",
            "64 m²",
            "1,5 rum",
            "3/10 vån",
            "2\u{a0}908 kr/mån",
            "30 547 kr/m²",
        ]
        .map(|v| {
            format!(
                "<div class=\"hcl-flex--item ForSaleAttributes_attribute__5Y0jr\"><span>{}</span></div>",
                v
            )
        })
        .join("");

        format!(
            r#"<html><body>
            <a href="/bostad/lagenhet-123">
              <div class="Content_content__lg290">
                <h2 class="NestTitle_nestTitle__D7O_9">
                  <div class="Header_truncate__ebq7a">Storgatan 1</div>
                </h2>
                <div class="Location_address___eOo4"><span>Innerstaden, Linköpings kommun</span></div>
                <span class="ForSaleAttributes_askingPrice__ANshd">1 955 000 kr</span>
                {attrs}
                <div class="NestDisplayTag_nestDisplayTagContainer__dfBQI">Balkong</div>
                <div class="NestDisplayTag_nestDisplayTagContainer__dfBQI">Hiss</div>
                <span class="NestBody_nestBody__B_PPT">Mäklarhuset</span>
              </div>
              Visning Sön 13 jul kl 13:00-13:30
            </a>
            </body></html>"#
        )
    }

    #[test]
    fn extracts_all_fields_from_full_card() {
        let records = extract_records(&full_card(), CARD_CLASS, today()).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.url, "https://www.hemnet.se/bostad/lagenhet-123");
        assert_eq!(r.viewing, "Sun 13 jul");
        assert_eq!(r.view_time, "13:00-13:30");
        assert_eq!(r.address, "Storgatan 1");
        assert_eq!(r.area, "Innerstaden");
        assert_eq!(r.price, "1955000");
        assert_eq!(r.living_area, "64");
        assert_eq!(r.rooms, "1.5");
        assert_eq!(r.floor, "3/10");
        assert_eq!(r.monthly_fee, "2 908");
        assert_eq!(r.price_per_m2, "30547");
        assert_eq!(r.features, "Balkong, Hiss");
        assert_eq!(r.agent, "Mäklarhuset");
    }

    #[test]
    fn card_without_enclosing_link_gets_empty_url_and_viewing() {
        let html = r#"<html><body>
            <div class="Content_content__lg290">
              <span class="ForSaleAttributes_askingPrice__ANshd">2 000 000 kr</span>
            </div>
        </body></html>"#;
        let records = extract_records(html, CARD_CLASS, today()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "");
        assert_eq!(records[0].viewing, "");
        assert_eq!(records[0].view_time, "");
        assert_eq!(records[0].price, "2000000");
    }

    #[test]
    fn short_attribute_row_degrades_to_empty_fields() {
        let html = r#"<html><body>
            <div class="Content_content__lg290">
              <div class="hcl-flex--item ForSaleAttributes_attribute__5Y0jr"><span>Lägenhet</span></div>
              <div class="hcl-flex--item ForSaleAttributes_attribute__5Y0jr"><span>45 m²</span></div>
            </div>
        </body></html>"#;
        let records = extract_records(html, CARD_CLASS, today()).unwrap();
        let r = &records[0];
        assert_eq!(r.living_area, "");
        assert_eq!(r.rooms, "");
        assert_eq!(r.floor, "");
        assert_eq!(r.monthly_fee, "");
        assert_eq!(r.price_per_m2, "");
    }

    #[test]
    fn absolute_href_is_kept_as_is() {
        let html = r#"<html><body>
            <a href="https://www.hemnet.se/bostad/lagenhet-9">
              <div class="Content_content__lg290"></div>
            </a>
        </body></html>"#;
        let records = extract_records(html, CARD_CLASS, today()).unwrap();
        assert_eq!(records[0].url, "https://www.hemnet.se/bostad/lagenhet-9");
    }

    #[test]
    fn invalid_card_class_is_an_error() {
        assert!(extract_records("<html></html>", "not a class!", today()).is_err());
    }
}
