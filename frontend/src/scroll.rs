use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Top of the page: roomy and see-through.
    Far,
    Near,
}

impl HeaderStyle {
    pub fn from_scroll(scroll_y: f64) -> Self {
        if scroll_y > config::HEADER_SCROLL_THRESHOLD {
            HeaderStyle::Near
        } else {
            HeaderStyle::Far
        }
    }

    pub fn padding(&self) -> &'static str {
        match self {
            HeaderStyle::Far => "20px 0",
            HeaderStyle::Near => "12px 0",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            HeaderStyle::Far => "transparent",
            HeaderStyle::Near => "rgba(10, 11, 13, 0.95)",
        }
    }

    pub fn border_bottom(&self) -> &'static str {
        match self {
            HeaderStyle::Far => "1px solid rgba(255, 255, 255, 0.05)",
            HeaderStyle::Near => "1px solid rgba(212, 255, 0, 0.2)",
        }
    }

    pub fn inline_style(&self) -> String {
        format!(
            "padding: {}; background: {}; border-bottom: {};",
            self.padding(),
            self.background(),
            self.border_bottom()
        )
    }
}

/// Selector to smooth-scroll to for an in-page link, or `None` when the click
/// should be left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

/// Smooth-scrolls to the element matched by `href`. Returns whether the
/// default navigation should be prevented, which is only the case when a
/// target was actually found.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(selector) = anchor_target(href) else {
        return false;
    };
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());

    match target {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("No scroll target for {}", selector);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_far_near_far() {
        assert_eq!(HeaderStyle::from_scroll(0.0), HeaderStyle::Far);
        assert_eq!(HeaderStyle::from_scroll(100.0), HeaderStyle::Near);
        assert_eq!(HeaderStyle::from_scroll(0.0), HeaderStyle::Far);
    }

    #[test]
    fn threshold_is_strictly_greater_than_fifty() {
        assert_eq!(HeaderStyle::from_scroll(50.0), HeaderStyle::Far);
        assert_eq!(HeaderStyle::from_scroll(50.5), HeaderStyle::Near);
    }

    #[test]
    fn near_style_is_compact_and_dark() {
        let style = HeaderStyle::Near.inline_style();
        assert!(style.contains("padding: 12px 0"));
        assert!(style.contains("rgba(10, 11, 13, 0.95)"));
        assert!(style.contains("rgba(212, 255, 0, 0.2)"));
        assert_eq!(HeaderStyle::Far.background(), "transparent");
        assert_eq!(HeaderStyle::Far.padding(), "20px 0");
    }

    #[test]
    fn bare_hash_is_left_alone() {
        assert_eq!(anchor_target("#"), None);
        assert!(!scroll_to_anchor("#"));
    }

    #[test]
    fn in_page_links_resolve_to_selectors() {
        assert_eq!(anchor_target("#contact"), Some("#contact"));
        assert_eq!(anchor_target("/privacy"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }
}
