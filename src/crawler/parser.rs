//! HTML extraction for listing and detail pages
//!
//! Listing pages carry detail-page links as `a.address` anchors and a
//! next-page anchor pointing at `{base}?page={N+1}`. Detail pages are reduced
//! to a fixed set of structural selectors; every missing node collapses
//! through the blank guard so a partially rendered page still yields a
//! record with fallback fields.

use crate::advert::NewAdvert;
use crate::normalize::{parse_adv_date, parse_numeric, split_name_model, text_or_default};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracts detail-page URLs from a listing page.
///
/// Matches the site's `a.address` anchor pattern and resolves hrefs to
/// absolute URLs against the listing base.
pub fn extract_listing_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a.address[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Ok(absolute) = base_url.join(href.trim()) {
                    if absolute.scheme() == "http" || absolute.scheme() == "https" {
                        links.push(absolute.to_string());
                    }
                }
            }
        }
    }

    links
}

/// Checks whether the listing page links to the given next page.
///
/// The harvester terminates when no anchor resolves to `{base}?page={page}`.
pub fn has_next_page(html: &str, base_url: &Url, page: u32) -> bool {
    let expected = format!("{}?page={}", base_url, page);
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return false,
    };

    document.select(&selector).any(|element| {
        element
            .value()
            .attr("href")
            .and_then(|href| base_url.join(href.trim()).ok())
            .map(|absolute| absolute.as_str() == expected)
            .unwrap_or(false)
    })
}

/// Extracts a normalized advertisement record from a detail page.
///
/// Extraction never fails: absent or malformed nodes fall back to empty
/// strings, zero, or the sentinel date.
pub fn parse_advert(html: &str, url: &str) -> NewAdvert {
    let document = Html::parse_document(html);

    let title = text_or_default(select_first_text(&document, "h1.head").as_deref());
    let (name, model) = split_name_model(&title);

    let price_raw = text_or_default(select_first_text(&document, "div.price_value strong").as_deref());
    let run_raw = text_or_default(select_first_text(&document, "dd.mhide span.argument").as_deref());
    let date_raw = text_or_default(select_first_text(&document, "div.update-date span").as_deref());

    NewAdvert {
        url: url.to_string(),
        name,
        model,
        price: parse_numeric(&price_raw),
        region: text_or_default(
            select_first_text(
                &document,
                "section#userInfoBlock ul.checked-list li.item div.item_inner",
            )
            .as_deref(),
        ),
        run: parse_numeric(&run_raw),
        color: text_or_default(color_sibling_text(&document).as_deref()),
        salon: text_or_default(
            select_first_text(&document, "div.technical-info dl.unstyle dd").as_deref(),
        ),
        seller: text_or_default(select_first_text(&document, "div.seller_info_name").as_deref()),
        adv_date: parse_adv_date(&date_raw),
    }
}

/// Returns the concatenated text of the first element matching the selector.
fn select_first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// The color value is not inside the marker element: it is the text node
/// following `span.car-color` at sibling level.
fn color_sibling_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("span.car-color").ok()?;
    let marker: ElementRef = document.select(&selector).next()?;

    let mut node = marker.next_sibling();
    while let Some(current) = node {
        if let Some(text) = current.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        node = current.next_sibling();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::sentinel_date;
    use chrono::NaiveDate;

    fn base_url() -> Url {
        Url::parse("https://auto.ria.com/uk/car/used/").unwrap()
    }

    const DETAIL_PAGE: &str = r#"
        <html><body>
            <h1 class="head">Honda CR-V 2016</h1>
            <div class="price_value"><strong>15 500 $</strong></div>
            <dd class="mhide"><span class="argument">120 тис. км</span></dd>
            <section id="userInfoBlock">
                <ul class="checked-list unstyle mb-15">
                    <li class="item"><div class="item_inner">Київ</div></li>
                </ul>
            </section>
            <span class="car-color"></span> Сірий
            <div class="technical-info"><dl class="unstyle"><dd>позашляховик</dd></dl></div>
            <div class="seller_info_name bold">Олександр</div>
            <div class="size13 mt-5 mb-10 update-date"><span>пн 15 тра 2024</span></div>
        </body></html>
    "#;

    #[test]
    fn test_extract_listing_links_resolves_relative() {
        let html = r#"
            <html><body>
                <a class="address" href="/uk/auto_honda_cr-v_1.html">one</a>
                <a class="address" href="https://auto.ria.com/uk/auto_bmw_x5_2.html">two</a>
                <a href="/uk/not_an_ad.html">plain anchor</a>
            </body></html>
        "#;
        let links = extract_listing_links(html, &base_url());
        assert_eq!(
            links,
            vec![
                "https://auto.ria.com/uk/auto_honda_cr-v_1.html".to_string(),
                "https://auto.ria.com/uk/auto_bmw_x5_2.html".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_listing_links_empty_page() {
        assert!(extract_listing_links("<html><body></body></html>", &base_url()).is_empty());
    }

    #[test]
    fn test_has_next_page_present() {
        let html = r#"<html><body>
            <a href="https://auto.ria.com/uk/car/used/?page=2">next</a>
        </body></html>"#;
        assert!(has_next_page(html, &base_url(), 2));
    }

    #[test]
    fn test_has_next_page_relative_href() {
        let html = r#"<html><body><a href="?page=2">next</a></body></html>"#;
        assert!(has_next_page(html, &base_url(), 2));
    }

    #[test]
    fn test_has_next_page_absent() {
        let html = r#"<html><body>
            <a href="https://auto.ria.com/uk/car/used/?page=3">wrong page</a>
        </body></html>"#;
        assert!(!has_next_page(html, &base_url(), 2));
    }

    #[test]
    fn test_parse_advert_full_page() {
        let advert = parse_advert(DETAIL_PAGE, "https://auto.ria.com/uk/auto_honda_cr-v_1.html");

        assert_eq!(advert.url, "https://auto.ria.com/uk/auto_honda_cr-v_1.html");
        assert_eq!(advert.name, "Honda");
        assert_eq!(advert.model, "CR-V");
        assert_eq!(advert.price, 15500);
        assert_eq!(advert.region, "Київ");
        assert_eq!(advert.run, 120);
        assert_eq!(advert.color, "Сірий");
        assert_eq!(advert.salon, "позашляховик");
        assert_eq!(advert.seller, "Олександр");
        assert_eq!(
            advert.adv_date,
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_advert_empty_page_uses_fallbacks() {
        let advert = parse_advert("<html><body></body></html>", "https://a.example/ad");

        assert_eq!(advert.name, "");
        assert_eq!(advert.model, "");
        assert_eq!(advert.price, 0);
        assert_eq!(advert.run, 0);
        assert_eq!(advert.region, "");
        assert_eq!(advert.color, "");
        assert_eq!(advert.salon, "");
        assert_eq!(advert.seller, "");
        assert_eq!(advert.adv_date, sentinel_date());
    }
}
