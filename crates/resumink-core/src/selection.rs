//! Single-section selection state.

use crate::section::SectionId;

/// Tracks which section (if any) is selected.
///
/// This holds no reference to the document; the editor validates ids
/// before selecting and calls [`Selection::remove`] on delete, so the
/// selection never points at a missing section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<SectionId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the selected section ID (if any).
    pub fn selected(&self) -> Option<SectionId> {
        self.selected
    }

    pub fn is_selected(&self, id: SectionId) -> bool {
        self.selected == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Select a single section, replacing any previous selection.
    /// Returns true if the selection changed.
    pub fn select(&mut self, id: SectionId) -> bool {
        if self.selected == Some(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the selection. Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Forget a deleted section. Returns true if it was the selected one.
    pub fn remove(&mut self, id: SectionId) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_select_replaces() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut selection = Selection::new();

        assert!(selection.select(a));
        assert!(selection.select(b));
        assert!(!selection.is_selected(a));
        assert_eq!(selection.selected(), Some(b));
    }

    #[test]
    fn test_reselect_is_noop() {
        let id = Uuid::new_v4();
        let mut selection = Selection::new();
        selection.select(id);
        assert!(!selection.select(id));
        assert_eq!(selection.selected(), Some(id));
    }

    #[test]
    fn test_remove_only_clears_matching() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut selection = Selection::new();
        selection.select(a);

        assert!(!selection.remove(b));
        assert_eq!(selection.selected(), Some(a));
        assert!(selection.remove(a));
        assert!(selection.is_empty());
        assert!(!selection.clear());
    }
}
