//! Field normalization for scraped text
//!
//! Pure, stateless transforms applied to raw extracted strings before a
//! record is built. Every parser here has a fixed fallback (empty string,
//! zero, sentinel date) so malformed page structure never propagates as an
//! error.

use chrono::NaiveDate;

/// Returns the fixed fallback date (`2010-01-01`) substituted when source
/// date text cannot be parsed.
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).expect("fixed sentinel date")
}

/// Splits a title string into (name, model).
///
/// The first whitespace token is the name, the second (if present) the
/// model. Fewer tokens leave the missing fields empty.
pub fn split_name_model(title: &str) -> (String, String) {
    let mut tokens = title.split_whitespace();
    let name = tokens.next().unwrap_or("").to_string();
    let model = tokens.next().unwrap_or("").to_string();
    (name, model)
}

/// Parses a price/run string by concatenating its digit characters.
///
/// Returns 0 when the string contains no digits (or the digits overflow).
pub fn parse_numeric(raw: &str) -> i64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(0)
}

/// Month lookup for the site's localized (Ukrainian) month abbreviations.
///
/// Keys are the first three characters of the rendered month token.
/// Unknown abbreviations default to month 1.
const MONTH_ABBREVS: [(&str, u32); 12] = [
    ("січ", 1),
    ("лют", 2),
    ("бер", 3),
    ("кві", 4),
    ("тра", 5),
    ("чер", 6),
    ("лип", 7),
    ("сер", 8),
    ("вер", 9),
    ("жов", 10),
    ("лис", 11),
    ("гру", 12),
];

/// Parses a source date rendered as `"<weekday> <day> <month-abbrev> <year>"`.
///
/// The month abbreviation is matched on its first three characters through
/// the fixed table above (miss → month 1). Any input with a token count other
/// than four, a month token of two characters or fewer, or components that do
/// not form a valid calendar date yields the sentinel date.
pub fn parse_adv_date(raw: &str) -> NaiveDate {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() != 4 || tokens[2].chars().count() <= 2 {
        return sentinel_date();
    }

    let prefix: String = tokens[2].chars().take(3).collect();
    let month = MONTH_ABBREVS
        .iter()
        .find(|(abbrev, _)| *abbrev == prefix)
        .map(|(_, m)| *m)
        .unwrap_or(1);

    let day = tokens[1].parse::<u32>().ok();
    let year = tokens[3].parse::<i32>().ok();
    match (day, year) {
        (Some(day), Some(year)) => {
            NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(sentinel_date)
        }
        _ => sentinel_date(),
    }
}

/// Blank guard: collapses a missing scraped value to an empty trimmed string
/// so the numeric/date parsers never see a null.
pub fn text_or_default(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_model_two_tokens() {
        assert_eq!(
            split_name_model("Honda CR-V"),
            ("Honda".to_string(), "CR-V".to_string())
        );
    }

    #[test]
    fn test_split_name_model_extra_tokens_ignored() {
        assert_eq!(
            split_name_model("Honda CR-V 2016"),
            ("Honda".to_string(), "CR-V".to_string())
        );
    }

    #[test]
    fn test_split_name_model_single_token() {
        assert_eq!(split_name_model("Honda"), ("Honda".to_string(), String::new()));
    }

    #[test]
    fn test_split_name_model_empty() {
        assert_eq!(split_name_model(""), (String::new(), String::new()));
        assert_eq!(split_name_model("   "), (String::new(), String::new()));
    }

    #[test]
    fn test_parse_numeric_mixed_text() {
        assert_eq!(parse_numeric("15 500 $"), 15500);
        assert_eq!(parse_numeric("120 тис. км"), 120);
    }

    #[test]
    fn test_parse_numeric_digits_in_order() {
        assert_eq!(parse_numeric("a1b2c3"), 123);
    }

    #[test]
    fn test_parse_numeric_no_digits() {
        assert_eq!(parse_numeric("договірна"), 0);
        assert_eq!(parse_numeric(""), 0);
    }

    #[test]
    fn test_parse_adv_date_all_months() {
        let expected = [
            ("січ", 1),
            ("лют", 2),
            ("бер", 3),
            ("кві", 4),
            ("тра", 5),
            ("чер", 6),
            ("лип", 7),
            ("сер", 8),
            ("вер", 9),
            ("жов", 10),
            ("лис", 11),
            ("гру", 12),
        ];
        for (abbrev, month) in expected {
            let parsed = parse_adv_date(&format!("пн 15 {} 2024", abbrev));
            assert_eq!(
                parsed.format("%Y-%m-%d").to_string(),
                format!("2024-{:02}-15", month)
            );
        }
    }

    #[test]
    fn test_parse_adv_date_full_month_word() {
        // Only the first three characters are matched.
        let parsed = parse_adv_date("пн 3 травня 2023");
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2023-05-03");
    }

    #[test]
    fn test_parse_adv_date_unknown_month_defaults_to_january() {
        let parsed = parse_adv_date("пн 15 xyzzy 2024");
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_adv_date_wrong_token_count() {
        assert_eq!(parse_adv_date("15 січня 2024"), sentinel_date());
        assert_eq!(parse_adv_date("пн 15 січня 2024 зайве"), sentinel_date());
        assert_eq!(parse_adv_date(""), sentinel_date());
    }

    #[test]
    fn test_parse_adv_date_short_month_token() {
        // Month token of two characters or fewer is rejected outright.
        assert_eq!(parse_adv_date("пн 15 сі 2024"), sentinel_date());
    }

    #[test]
    fn test_parse_adv_date_invalid_components() {
        assert_eq!(parse_adv_date("пн 99 січня 2024"), sentinel_date());
        assert_eq!(parse_adv_date("пн 15 січня рік"), sentinel_date());
    }

    #[test]
    fn test_sentinel_date_value() {
        assert_eq!(sentinel_date().format("%Y-%m-%d").to_string(), "2010-01-01");
    }

    #[test]
    fn test_text_or_default() {
        assert_eq!(text_or_default(Some("  Київ ")), "Київ");
        assert_eq!(text_or_default(Some("")), "");
        assert_eq!(text_or_default(None), "");
    }
}
