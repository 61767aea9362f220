//! A model of the host page that charts and the sidebar attach to.
//!
//! The page tracks which element ids exist, the class list of each element,
//! the click handlers registered against them, and the hooks that run once the
//! markup has finished loading. Renderers look targets up here on every call.

use std::collections::{BTreeSet, HashMap};

use scraper::{Html, Selector};

/// An element on the page, identified by its id in [Page].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    classes: BTreeSet<String>,
}

impl Element {
    /// An element with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `class` to the element's class list.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_owned());
        self
    }

    /// Whether the element's class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// The element's classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Adds `class` if it is missing, removes it otherwise.
    ///
    /// Returns whether the class is present afterwards.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_owned());
            true
        }
    }
}

/// What happens when an element with a click handler is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Flip `class` on the element with id `target`.
    ToggleClass {
        /// The id of the element whose class list changes.
        target: String,
        /// The class to add or remove.
        class: String,
    },
}

/// A function that runs once the page has finished loading.
pub type ReadyHook = fn(&mut Page);

/// The host page.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
    click_handlers: HashMap<String, Vec<ClickAction>>,
    ready_hooks: Vec<ReadyHook>,
    is_loaded: bool,
}

impl Page {
    /// An empty page that has not finished loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a page from HTML markup.
    ///
    /// Every element with an `id` attribute becomes an [Element] with the
    /// classes from its `class` attribute. Elements without an id cannot be
    /// looked up and are skipped. When ids repeat, the first element wins, as
    /// with `document.getElementById`.
    pub fn from_html(markup: &str) -> Self {
        let document = Html::parse_document(markup);
        let mut page = Self::new();

        let Ok(selector) = Selector::parse("[id]") else {
            return page;
        };

        for node in document.select(&selector) {
            let Some(id) = node.value().id() else {
                continue;
            };

            if page.elements.contains_key(id) {
                continue;
            }

            let element = node
                .value()
                .classes()
                .fold(Element::new(), |element, class| element.with_class(class));
            page.elements.insert(id.to_owned(), element);
        }

        page
    }

    /// Adds an element with `id` to the page, replacing any element with the
    /// same id.
    pub fn with_element(mut self, id: &str, element: Element) -> Self {
        self.elements.insert(id.to_owned(), element);
        self
    }

    /// Looks up the element with `id`.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Whether an element with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Registers `action` to run whenever the element with `id` is clicked.
    pub fn add_click_handler(&mut self, id: &str, action: ClickAction) {
        self.click_handlers
            .entry(id.to_owned())
            .or_default()
            .push(action);
    }

    /// The number of click handlers registered on the element with `id`.
    pub fn click_handler_count(&self, id: &str) -> usize {
        self.click_handlers.get(id).map_or(0, Vec::len)
    }

    /// Queues `hook` to run when the page finishes loading.
    ///
    /// Hooks added after the page has loaded never run, the same as a
    /// `DOMContentLoaded` listener added too late.
    pub fn on_ready(&mut self, hook: ReadyHook) {
        if self.is_loaded {
            tracing::debug!("page already loaded, ready hook will not run");
            return;
        }

        self.ready_hooks.push(hook);
    }

    /// Marks the markup as loaded and runs the queued ready hooks once.
    pub fn finish_loading(&mut self) {
        if self.is_loaded {
            return;
        }

        self.is_loaded = true;

        for hook in std::mem::take(&mut self.ready_hooks) {
            hook(self);
        }
    }

    /// Whether [Page::finish_loading] has run.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Clicks the element with `id`, running its click handlers in the order
    /// they were added.
    ///
    /// Clicking an element with no handlers, or an id not on the page, does
    /// nothing.
    pub fn click(&mut self, id: &str) {
        let Some(actions) = self.click_handlers.get(id).cloned() else {
            return;
        };

        for action in actions {
            match action {
                ClickAction::ToggleClass { target, class } => {
                    if let Some(element) = self.elements.get_mut(&target) {
                        let is_present = element.toggle_class(&class);
                        tracing::debug!("toggled class {class} on #{target}: {is_present}");
                    }
                }
            }
        }
    }
}
