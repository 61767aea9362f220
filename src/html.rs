use maud::{DOCTYPE, Markup, PreEscaped, html};

// Layout styles
pub const PAGE_STYLE: &str = "min-h-screen bg-gray-50 text-gray-900";
pub const CONTENT_STYLE: &str = "flex-1 px-6 py-8 mx-auto max-w-screen-xl";
pub const CHART_CARD_STYLE: &str = "rounded bg-white shadow-sm p-4";
pub const CHART_TITLE_STYLE: &str = "mb-2 text-lg font-semibold";
pub const CHART_CONTAINER_STYLE: &str = "min-h-[320px] w-full";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Inventory" }

                style
                {
                    r#"
                    #sidebar-wrapper {
                        display: none;
                    }

                    #sidebar-wrapper.active {
                        display: block;
                    }

                    @media (min-width: 1024px) {
                        #sidebar-wrapper {
                            display: block;
                        }
                    }
                    "#
                }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class=(PAGE_STYLE)
            {
                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use maud::{PreEscaped, html};
    use scraper::{Html, Selector};

    use crate::{
        html::{HeadElement, base},
        test_utils::assert_valid_html,
    };

    #[test]
    fn base_includes_title_and_head_scripts() {
        let markup = base(
            "Dashboard",
            &[
                HeadElement::ScriptLink("/static/echarts.min.js".to_owned()),
                HeadElement::ScriptSource(PreEscaped("console.log('ready');".to_owned())),
            ],
            &html!(main id="content" {}),
        );

        let document = Html::parse_document(&markup.into_string());
        assert_valid_html(&document);

        let title = Selector::parse("title").unwrap();
        let title_text: String = document
            .select(&title)
            .next()
            .expect("page should have a title")
            .text()
            .collect();
        assert_eq!(title_text, "Dashboard - Inventory");

        let scripts = Selector::parse("head script").unwrap();
        let scripts: Vec<_> = document.select(&scripts).collect();
        assert_eq!(scripts.len(), 2);
        assert_eq!(scripts[0].value().attr("src"), Some("/static/echarts.min.js"));
        assert_eq!(
            scripts[1].text().collect::<String>(),
            "console.log('ready');"
        );

        let content = Selector::parse("body #content").unwrap();
        assert!(document.select(&content).next().is_some());
    }
}
