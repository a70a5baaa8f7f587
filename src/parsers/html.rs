use scraper::{Html, Selector};

use super::ParsedPage;

/// Parses page markup for the first title element, the first favicon link
/// and the presence of scripts
pub fn parse(markup: &str) -> ParsedPage {
    let doc = Html::parse_document(markup);

    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>());

    // rel is a space-separated list, so this also matches "shortcut icon"
    let icon_selector = Selector::parse(r#"link[rel~="icon"]"#).unwrap();
    let icon_href = doc
        .select(&icon_selector)
        .next()
        .map(|element| element.value().attr("href").map(str::to_string));

    let script_selector = Selector::parse("script").unwrap();
    let has_script = doc.select(&script_selector).next().is_some();

    ::log::debug!(
        "Parsed markup: title: {}, favicon link: {}, scripts: {}",
        title.is_some(),
        icon_href.is_some(),
        has_script
    );

    ParsedPage {
        title,
        icon_href,
        has_script,
    }
}
