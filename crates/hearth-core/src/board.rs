use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: String,
    pub title: String,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
        }
    }
}

/// Ordered set of boards with unique ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Boards(Vec<Board>);

impl Boards {
    pub fn new(boards: Vec<Board>) -> Self {
        let mut out: Vec<Board> = Vec::with_capacity(boards.len());
        for board in boards {
            if !out.iter().any(|existing| existing.id == board.id) {
                out.push(board);
            }
        }
        Self(out)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Board> {
        self.0.iter().find(|board| board.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<&Board> {
        self.0.first()
    }

    /// Returns false when a board with the same id already exists.
    pub fn insert(&mut self, board: Board) -> bool {
        if self.contains(&board.id) {
            return false;
        }
        self.0.push(board);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Board> {
        let index = self.0.iter().position(|board| board.id == id)?;
        Some(self.0.remove(index))
    }

    pub fn rename(&mut self, id: &str, title: String) -> bool {
        match self.0.iter_mut().find(|board| board.id == id) {
            Some(board) => {
                board.title = title;
                true
            }
            None => false,
        }
    }
}

impl Default for Boards {
    fn default() -> Self {
        Self(vec![Board::new("My Board")])
    }
}

/// Normalises a new board title. Empty or whitespace-only input yields `None`.
pub fn normalize_board_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Value to commit when an inline title edit ends, if any.
///
/// Only a trimmed, non-empty value that differs from the current title
/// produces a commit.
pub fn title_commit(current: &str, draft: &str) -> Option<String> {
    let next = normalize_board_title(draft)?;
    if next == current.trim() {
        return None;
    }
    Some(next)
}

pub fn can_delete_board(boards: &Boards, active_id: &str, id: &str) -> bool {
    boards.len() > 1 && id != active_id && boards.contains(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(id: &str, title: &str) -> Board {
        Board {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn duplicate_ids_are_collapsed() {
        let boards = Boards::new(vec![board("a", "One"), board("a", "Two"), board("b", "Three")]);
        assert_eq!(boards.len(), 2);
        assert_eq!(boards.get("a").map(|b| b.title.as_str()), Some("One"));
    }

    #[test]
    fn title_commit_requires_trimmed_changed_value() {
        assert_eq!(title_commit("Work", "  Home "), Some("Home".to_string()));
        assert_eq!(title_commit("Work", "   "), None);
        assert_eq!(title_commit("Work", ""), None);
        assert_eq!(title_commit("Work", " Work  "), None);
    }

    #[test]
    fn lone_board_cannot_be_deleted() {
        let boards = Boards::new(vec![board("a", "Only")]);
        assert!(!can_delete_board(&boards, "a", "a"));
        assert!(!can_delete_board(&boards, "other", "a"));
    }

    #[test]
    fn active_board_cannot_be_deleted() {
        let boards = Boards::new(vec![board("a", "One"), board("b", "Two")]);
        assert!(!can_delete_board(&boards, "a", "a"));
        assert!(can_delete_board(&boards, "a", "b"));
        assert!(!can_delete_board(&boards, "a", "missing"));
    }
}
