//! The collapsible sidebar: its markup, its toggle handler and the browser
//! script that wires the toggle up.
//!
//! On small screens the sidebar is hidden until the toggle button adds the
//! [SIDEBAR_ACTIVE_CLASS] class to it. Each click flips the class; there is no
//! other state.

use maud::{Markup, PreEscaped, html};

use crate::{
    endpoints,
    html::HeadElement,
    page::{ClickAction, Page},
};

/// The id of the button that opens and closes the sidebar.
pub const SIDEBAR_TOGGLE_ID: &str = "sidebarToggle";
/// The id of the sidebar panel.
pub const SIDEBAR_ID: &str = "sidebar-wrapper";
/// The class that shows the sidebar on small screens.
pub const SIDEBAR_ACTIVE_CLASS: &str = "active";

/// Queues the sidebar toggle to be attached once `page` finishes loading.
pub fn register_sidebar_toggle(page: &mut Page) {
    page.on_ready(|page| {
        attach_sidebar_toggle(page);
    });
}

/// Makes clicks on the toggle button flip the sidebar's active class.
///
/// Returns `false` and attaches nothing if the button or the sidebar is
/// missing from `page`.
pub fn attach_sidebar_toggle(page: &mut Page) -> bool {
    if !page.contains(SIDEBAR_TOGGLE_ID) || !page.contains(SIDEBAR_ID) {
        tracing::debug!("sidebar toggle or sidebar missing, not attaching click handler");
        return false;
    }

    page.add_click_handler(
        SIDEBAR_TOGGLE_ID,
        ClickAction::ToggleClass {
            target: SIDEBAR_ID.to_owned(),
            class: SIDEBAR_ACTIVE_CLASS.to_owned(),
        },
    );

    true
}

/// The browser script equivalent of [register_sidebar_toggle].
pub fn sidebar_toggle_script() -> HeadElement {
    HeadElement::ScriptSource(PreEscaped(format!(
        r#"document.addEventListener('DOMContentLoaded', function () {{
    const toggleButton = document.getElementById('{SIDEBAR_TOGGLE_ID}');
    const sidebar = document.getElementById('{SIDEBAR_ID}');
    if (toggleButton && sidebar) {{
        toggleButton.addEventListener('click', () => sidebar.classList.toggle('{SIDEBAR_ACTIVE_CLASS}'));
    }}
}});"#
    )))
}

/// Template for a link in the sidebar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 rounded-sm text-white bg-blue-700"
        } else {
            "block py-2 px-3 rounded-sm text-gray-200 hover:bg-gray-700 hover:text-white"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

/// The sidebar navigation with its toggle button.
pub struct Sidebar<'a> {
    links: Vec<Link<'a>>,
}

impl Sidebar<'_> {
    /// Get the sidebar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> Sidebar<'_> {
        let links = [
            (endpoints::DASHBOARD_VIEW, "Dashboard"),
            (endpoints::PRODUCTS_VIEW, "Products"),
            (endpoints::CATEGORIES_VIEW, "Categories"),
            (endpoints::RECORD_SALE_VIEW, "Record Sale"),
            (endpoints::SALES_HISTORY_VIEW, "Sales History"),
            (endpoints::ANALYSIS_VIEW, "Analysis"),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        Sidebar { links }
    }

    /// The toggle button and the sidebar panel.
    pub fn into_html(self) -> Markup {
        html!(
            button
                id=(SIDEBAR_TOGGLE_ID)
                type="button"
                class="lg:hidden m-4 px-3 py-2 rounded bg-gray-800 text-white"
                aria-controls=(SIDEBAR_ID)
            {
                "Menu"
            }

            nav
                id=(SIDEBAR_ID)
                class="w-64 shrink-0 bg-gray-900 p-4"
            {
                span class="block mb-6 text-xl font-semibold text-white" { "Inventory" }

                ul class="flex flex-col gap-1 font-medium"
                {
                    @for link in self.links {
                        li { (link.into_html()) }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        html::HeadElement,
        page::{Element, Page},
        sidebar::{
            SIDEBAR_ACTIVE_CLASS, SIDEBAR_ID, SIDEBAR_TOGGLE_ID, Sidebar, attach_sidebar_toggle,
            register_sidebar_toggle, sidebar_toggle_script,
        },
        test_utils::must_select_one,
    };

    fn sidebar_classes(page: &Page) -> Vec<String> {
        page.element(SIDEBAR_ID)
            .map(|sidebar| sidebar.classes().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    #[test]
    fn clicks_toggle_active_class() {
        let mut page = Page::new()
            .with_element(SIDEBAR_TOGGLE_ID, Element::new())
            .with_element(SIDEBAR_ID, Element::new().with_class("sidebar"));
        register_sidebar_toggle(&mut page);
        page.finish_loading();

        page.click(SIDEBAR_TOGGLE_ID);
        assert!(page
            .element(SIDEBAR_ID)
            .is_some_and(|sidebar| sidebar.has_class(SIDEBAR_ACTIVE_CLASS)));

        page.click(SIDEBAR_TOGGLE_ID);
        assert_eq!(sidebar_classes(&page), vec!["sidebar"]);
    }

    #[test]
    fn handler_waits_for_page_load() {
        let mut page = Page::new()
            .with_element(SIDEBAR_TOGGLE_ID, Element::new())
            .with_element(SIDEBAR_ID, Element::new());
        register_sidebar_toggle(&mut page);

        page.click(SIDEBAR_TOGGLE_ID);
        assert!(sidebar_classes(&page).is_empty());

        page.finish_loading();
        assert_eq!(page.click_handler_count(SIDEBAR_TOGGLE_ID), 1);
    }

    #[test]
    fn missing_toggle_leaves_sidebar_alone() {
        let mut page = Page::new()
            .with_element(SIDEBAR_ID, Element::new().with_class("sidebar"))
            .with_element("content", Element::new());
        register_sidebar_toggle(&mut page);
        page.finish_loading();

        for id in ["content", SIDEBAR_ID, SIDEBAR_TOGGLE_ID, "missing"] {
            page.click(id);
        }

        assert_eq!(sidebar_classes(&page), vec!["sidebar"]);
        assert_eq!(page.click_handler_count(SIDEBAR_TOGGLE_ID), 0);
    }

    #[test]
    fn missing_sidebar_attaches_nothing() {
        let mut page = Page::new().with_element(SIDEBAR_TOGGLE_ID, Element::new());

        assert!(!attach_sidebar_toggle(&mut page));

        page.click(SIDEBAR_TOGGLE_ID);
        assert_eq!(page.click_handler_count(SIDEBAR_TOGGLE_ID), 0);
    }

    #[test]
    fn sidebar_markup_can_be_toggled() {
        let markup = Sidebar::new(endpoints::DASHBOARD_VIEW).into_html().into_string();
        let mut page = Page::from_html(&markup);

        assert!(attach_sidebar_toggle(&mut page));
        page.click(SIDEBAR_TOGGLE_ID);

        assert!(page
            .element(SIDEBAR_ID)
            .is_some_and(|sidebar| sidebar.has_class(SIDEBAR_ACTIVE_CLASS)));
    }

    #[test]
    fn marks_current_link() {
        let markup = Sidebar::new(endpoints::SALES_HISTORY_VIEW)
            .into_html()
            .into_string();
        let html = Html::parse_fragment(&markup);

        let current = must_select_one(&html, "a[aria-current=page]");
        assert_eq!(current.value().attr("href"), Some(endpoints::SALES_HISTORY_VIEW));
        assert_eq!(current.text().collect::<String>(), "Sales History");

        let links = Selector::parse("nav a").unwrap();
        assert_eq!(html.select(&links).count(), 6);
    }

    #[test]
    fn script_toggles_class_after_load() {
        let HeadElement::ScriptSource(script) = sidebar_toggle_script() else {
            panic!("sidebar script should be inline");
        };

        assert!(script.0.starts_with("document.addEventListener('DOMContentLoaded'"));
        assert!(script.0.contains("document.getElementById('sidebarToggle')"));
        assert!(script.0.contains("document.getElementById('sidebar-wrapper')"));
        assert!(script.0.contains("if (toggleButton && sidebar)"));
        assert!(script.0.contains("sidebar.classList.toggle('active')"));
    }
}
