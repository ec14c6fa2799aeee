//! Text normalizers for raw card fields. All of these are total: any input
//! yields a string, unparseable values come back as "".

pub fn clean_text(text: &str) -> String {
    text.replace('\u{a0}', " ").replace('\n', " ").trim().to_string()
}

/// Keeps digits plus comma/dot, treats comma as decimal separator and returns
/// the parsed number's canonical form ("1 234,5 kr" -> "1234.5").
pub fn extract_number(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    match kept.replace(',', ".").parse::<f64>() {
        Ok(v) => v.to_string(),
        Err(_) => String::new(),
    }
}

pub fn extract_int(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(v) => v.to_string(),
        Err(_) => String::new(),
    }
}

pub fn clean_rooms(text: &str) -> String {
    clean_text(&text.replace("rum", "").replace(',', "."))
}

pub fn clean_floor(text: &str) -> String {
    clean_text(&text.replace("vån", ""))
}

/// Drops the unit suffix and ASCII thousands separators. NBSP separators are
/// normalized to plain spaces afterwards by clean_text, so the scoring pass
/// strips spaces again before parsing the fee.
pub fn clean_monthly_fee(text: &str) -> String {
    clean_text(&text.replace("kr/mån", "").replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_normalizes_whitespace() {
        assert_eq!(clean_text("  3\u{a0}195\n000  "), "3 195 000");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn extract_number_handles_swedish_decimals() {
        assert_eq!(extract_number("1 234,5 kr"), "1234.5");
        assert_eq!(extract_number("64 m²"), "64");
        assert_eq!(extract_number("abc"), "");
        assert_eq!(extract_number(""), "");
        assert_eq!(extract_number("1.2.3"), "");
    }

    #[test]
    fn extract_int_strips_everything_but_digits() {
        assert_eq!(extract_int("3 195 000 kr"), "3195000");
        assert_eq!(extract_int(""), "");
        assert_eq!(extract_int("kr"), "");
        assert_eq!(extract_int("007"), "7");
    }

    #[test]
    fn clean_rooms_converts_decimal_comma() {
        assert_eq!(clean_rooms("1,5 rum"), "1.5");
        assert_eq!(clean_rooms("2 rum"), "2");
    }

    #[test]
    fn clean_floor_drops_unit() {
        assert_eq!(clean_floor("3/10 vån"), "3/10");
        assert_eq!(clean_floor(""), "");
    }

    #[test]
    fn clean_monthly_fee_drops_suffix_and_ascii_spaces() {
        assert_eq!(clean_monthly_fee("2 908 kr/mån"), "2908");
        // NBSP separators survive as plain spaces, matching the page text.
        assert_eq!(clean_monthly_fee("2\u{a0}908 kr/mån"), "2 908");
    }
}
