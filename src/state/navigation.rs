// Page navigation state management.
// Switches between the portfolio and quote app views and owns page scrolling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::quote::QuotePanel;

/// The two mutually exclusive page views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Portfolio,
    App,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Portfolio => "Portfolio",
            View::App => "Quote Generator",
        }
    }
}

/// Whether scroll input moves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

/// Vertical scroll position of the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageScroll {
    pub offset: u16,
    pub overflow: Overflow,
}

impl PageScroll {
    pub fn scroll_up(&mut self, lines: u16) {
        if self.overflow == Overflow::Auto {
            self.offset = self.offset.saturating_sub(lines);
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        if self.overflow == Overflow::Auto {
            self.offset = self.offset.saturating_add(lines);
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }
}

/// Page navigator for the two views.
#[derive(Debug, Clone, Default)]
pub struct PageNavigator {
    view: View,
    pub scroll: PageScroll,
}

impl PageNavigator {
    pub fn new(view: View) -> Self {
        Self {
            view,
            scroll: PageScroll::default(),
        }
    }

    pub fn current(&self) -> View {
        self.view
    }

    /// Reveal the quote app. Returns true if the caller should fetch a quote,
    /// which is only the case while the panel still shows its placeholder.
    pub fn show_app(&mut self, panel: &QuotePanel) -> bool {
        debug!("showing app view");
        self.view = View::App;
        self.scroll.scroll_to_top();
        panel.display.is_placeholder()
    }

    /// Reveal the portfolio.
    pub fn show_portfolio(&mut self) {
        debug!("showing portfolio view");
        self.view = View::Portfolio;
        self.scroll.scroll_to_top();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Quote;

    #[test]
    fn test_show_app_requests_first_fetch_only() {
        let mut nav = PageNavigator::default();
        let mut panel = QuotePanel::new();

        assert!(nav.show_app(&panel));
        assert_eq!(nav.current(), View::App);

        panel.begin();
        panel.settle(Ok(Quote::new("life is short", "Anon")));

        nav.show_portfolio();
        assert_eq!(nav.current(), View::Portfolio);
        assert!(!nav.show_app(&panel));
    }

    #[test]
    fn test_show_app_after_failure_does_not_refetch() {
        let mut nav = PageNavigator::default();
        let mut panel = QuotePanel::new();
        panel.begin();
        panel.settle(Err(crate::error::FetchError::Interrupted));

        assert!(!nav.show_app(&panel));
    }

    #[test]
    fn test_transitions_scroll_to_top() {
        let mut nav = PageNavigator::default();
        nav.scroll.scroll_down(12);
        assert_eq!(nav.scroll.offset, 12);

        nav.show_app(&QuotePanel::new());
        assert_eq!(nav.scroll.offset, 0);

        nav.scroll.scroll_down(3);
        nav.show_portfolio();
        assert_eq!(nav.scroll.offset, 0);
    }

    #[test]
    fn test_hidden_overflow_ignores_scrolling() {
        let mut scroll = PageScroll::default();
        scroll.scroll_down(4);
        scroll.overflow = Overflow::Hidden;

        scroll.scroll_down(10);
        scroll.scroll_up(2);
        assert_eq!(scroll.offset, 4);

        scroll.overflow = Overflow::Auto;
        scroll.scroll_up(10);
        assert_eq!(scroll.offset, 0);
    }
}
