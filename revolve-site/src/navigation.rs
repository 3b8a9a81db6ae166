//! Navbar state and section scrolling arithmetic

use std::time::Duration;

/// Navbar switches to its compact style past this scroll offset (px).
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Space left above a section title when scrolling to it (px).
pub const SECTION_BUFFER: f64 = 80.0;
/// The scroll-to-top button shows past this offset (px).
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 300.0;

/// Delay before re-scrolling to the URL fragment once the DOM is ready.
pub const DOM_READY_RESCROLL: Duration = Duration::from_millis(500);
/// Delay before re-scrolling to the URL fragment after full load.
pub const LOAD_RESCROLL: Duration = Duration::from_millis(200);

/// Where "back" goes when there is no history.
pub const FALLBACK_PAGE: &str = "hero-header.html";
/// Section the call-to-action buttons scroll to.
pub const CTA_SECTION: &str = "process";
/// Section the "learn more" buttons scroll to.
pub const LEARN_MORE_SECTION: &str = "contact";

/// Navbar style and mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    mobile_menu_open: bool,
}

impl NavState {
    /// Top of the page, menu closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the navbar is in its scrolled style.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        self.scrolled
    }

    /// Whether the compact style applies.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether the mobile menu is expanded.
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Hamburger click. Returns whether the menu is now open.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Collapse the mobile menu.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// A nav link was clicked. In-page anchors close the mobile menu and
    /// yield the section id; other links are left to the browser.
    pub fn follow_link<'a>(&mut self, href: &'a str) -> Option<&'a str> {
        let target = anchor_target(href)?;
        self.close_mobile_menu();
        Some(target)
    }
}

/// Section id of an in-page `#id` link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts a section's title `buffer` pixels below the top.
pub fn section_scroll_top(element_top: f64, buffer: f64) -> f64 {
    (element_top - buffer).max(0.0)
}

/// Whether the scroll-to-top button shows at `scroll_y`.
pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TO_TOP_THRESHOLD
}

/// Percentage of the content scrolled through, capped at 100. `None` when
/// the content fits in the window.
pub fn reading_progress(
    scroll_y: f64,
    content_height: f64,
    window_height: f64,
) -> Option<f64> {
    let scrollable = content_height - window_height;
    (scrollable > 0.0).then(|| (scroll_y / scrollable * 100.0).min(100.0))
}

/// Where a cross-page section link leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionNavigation {
    /// Already on the page; scroll to the section.
    ScrollInPage(String),
    /// Load `page#section`.
    Redirect(String),
}

/// Resolve a link to `section` on `target_page` from `current_path`.
pub fn navigate_to_section(
    current_path: &str,
    target_page: &str,
    section: &str,
) -> SectionNavigation {
    let page_stem = target_page.replacen(".html", "", 1);
    if current_path.contains(&page_stem) {
        SectionNavigation::ScrollInPage(section.to_string())
    } else {
        SectionNavigation::Redirect(format!("{target_page}#{section}"))
    }
}

/// Section named by a location hash such as `#faq`.
pub fn fragment_section(hash: &str) -> Option<&str> {
    anchor_target(hash)
}

/// What the "back" button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Go back in browser history.
    HistoryBack,
    /// Load this page instead.
    Redirect(&'static str),
}

/// "Back" with `history_len` entries in the session history.
pub fn back_action(history_len: usize) -> BackAction {
    if history_len > 1 {
        BackAction::HistoryBack
    } else {
        BackAction::Redirect(FALLBACK_PAGE)
    }
}

/// Action bound to a key on the policy pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+P.
    Print,
    /// Escape.
    Back,
}

/// Keyboard shortcuts on the policy pages.
pub fn shortcut(key: &str, ctrl_or_meta: bool) -> Option<Shortcut> {
    match key {
        "p" if ctrl_or_meta => Some(Shortcut::Print),
        "Escape" => Some(Shortcut::Back),
        _ => None,
    }
}

/// Anchor id for a heading, generated from its position when it has none.
pub fn heading_anchor_id(existing: Option<&str>, index: usize) -> String {
    match existing {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("section-{index}"),
    }
}
