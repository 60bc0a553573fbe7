use serde::{Deserialize, Serialize};

/// Main application views selectable from the header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Dashboard,
    Board,
    Planner,
    Notes,
    Bookmarks,
    Whiteboard,
    Timeline,
    Habits,
    Quran,
    Finance,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[
            ViewMode::Dashboard,
            ViewMode::Board,
            ViewMode::Planner,
            ViewMode::Notes,
            ViewMode::Bookmarks,
            ViewMode::Whiteboard,
            ViewMode::Timeline,
            ViewMode::Habits,
            ViewMode::Quran,
            ViewMode::Finance,
        ]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            ViewMode::Dashboard => "dashboard",
            ViewMode::Board => "board",
            ViewMode::Planner => "planner",
            ViewMode::Notes => "notes",
            ViewMode::Bookmarks => "bookmarks",
            ViewMode::Whiteboard => "whiteboard",
            ViewMode::Timeline => "timeline",
            ViewMode::Habits => "habits",
            ViewMode::Quran => "quran",
            ViewMode::Finance => "finance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Dashboard => "Dashboard",
            ViewMode::Board => "Board",
            ViewMode::Planner => "Planner",
            ViewMode::Notes => "Notes",
            ViewMode::Bookmarks => "Bookmarks",
            ViewMode::Whiteboard => "Whiteboard",
            ViewMode::Timeline => "Timeline",
            ViewMode::Habits => "Habits",
            ViewMode::Quran => "Quran",
            ViewMode::Finance => "Finance",
        }
    }

    /// Heading shown in the header when this view is not the board view.
    pub fn heading(self) -> &'static str {
        match self {
            ViewMode::Dashboard => "Dashboard",
            ViewMode::Board => "Board",
            ViewMode::Planner => "Weekly Planner",
            ViewMode::Notes => "Notes",
            ViewMode::Bookmarks => "Bookmarks",
            ViewMode::Whiteboard => "Whiteboard",
            ViewMode::Timeline => "Timeline",
            ViewMode::Habits => "Habit Tracker",
            ViewMode::Quran => "Quran",
            ViewMode::Finance => "Finance",
        }
    }

    pub fn title_is_editable(self) -> bool {
        self == ViewMode::Board
    }
}

/// Header title: the active board's title in board view, a fixed heading elsewhere.
pub fn header_title(view: ViewMode, active_board_title: Option<&str>) -> String {
    match (view, active_board_title) {
        (ViewMode::Board, Some(title)) => title.to_string(),
        _ => view.heading().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_views_with_unique_keys() {
        let all = ViewMode::all();
        assert_eq!(all.len(), 10);
        let keys: std::collections::HashSet<_> = all.iter().map(|view| view.as_key()).collect();
        assert_eq!(keys.len(), all.len());
    }

    #[test]
    fn board_view_uses_board_title() {
        assert_eq!(header_title(ViewMode::Board, Some("Sprint")), "Sprint");
        assert_eq!(header_title(ViewMode::Habits, Some("Sprint")), "Habit Tracker");
        assert_eq!(header_title(ViewMode::Board, None), "Board");
    }
}
