//! Static tab definitions
//!
//! The screen always has the same three sections, each filled with the same
//! placeholder rows.

/// Number of placeholder rows per tab ("0" through "75")
pub const ITEMS_PER_TAB: usize = 76;

/// A labelled content section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub title: &'static str,
}

pub const TABS: [Tab; 3] = [
    Tab { title: "Content" },
    Tab { title: "Profile" },
    Tab {
        title: "Recommended",
    },
];

/// Placeholder rows shown on every page
pub fn placeholder_items() -> Vec<String> {
    (0..ITEMS_PER_TAB).map(|i| i.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_titles_in_order() {
        let titles: Vec<_> = TABS.iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Content", "Profile", "Recommended"]);
    }

    #[test]
    fn test_placeholder_items() {
        let items = placeholder_items();
        assert_eq!(items.len(), 76);
        assert_eq!(items.first().map(String::as_str), Some("0"));
        assert_eq!(items.last().map(String::as_str), Some("75"));
    }
}
