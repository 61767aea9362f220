use scraper::{Html, Selector};

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn must_select_one<'a>(html: &'a Html, selector: &str) -> scraper::ElementRef<'a> {
    let parsed = Selector::parse(selector).unwrap();
    let mut matches = html.select(&parsed);
    let element = matches
        .next()
        .unwrap_or_else(|| panic!("No element matching '{selector}'"));
    assert!(
        matches.next().is_none(),
        "Expected one element matching '{selector}' but found more"
    );
    element
}
