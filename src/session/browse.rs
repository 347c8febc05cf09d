use crate::content::entry::CharacterEntry;
use crate::content::level::Level;
use crate::content::library::Library;

/// Per-level character table with column visibility toggles, used to
/// hide a column and self-test the rest.
pub struct BrowseView {
    pub level: Level,
    pub rows: Vec<CharacterEntry>,
    pub show_glyph: bool,
    pub show_gloss: bool,
    pub show_reading: bool,
    pub selected: usize,
}

impl BrowseView {
    pub fn open(library: &Library, level: Level) -> Self {
        let rows = library.characters.get(&level).cloned().unwrap_or_default();
        Self {
            level,
            rows,
            show_glyph: true,
            show_gloss: true,
            show_reading: true,
            selected: 0,
        }
    }

    pub fn next(&mut self) {
        let last = self.rows.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_entry(&self) -> Option<&CharacterEntry> {
        self.rows.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_shows_every_column() {
        let library = Library::load();
        let view = BrowseView::open(&library, Level::L8);
        assert!(!view.rows.is_empty());
        assert!(view.show_glyph && view.show_gloss && view.show_reading);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_absent_level_opens_empty() {
        let library = Library::load();
        let view = BrowseView::open(&library, Level::Special);
        assert!(view.rows.is_empty());
        assert!(view.selected_entry().is_none());
    }

    #[test]
    fn test_navigation_clamps() {
        let library = Library::load();
        let mut view = BrowseView::open(&library, Level::L8);
        view.prev();
        assert_eq!(view.selected, 0);

        for _ in 0..view.rows.len() + 3 {
            view.next();
        }
        assert_eq!(view.selected, view.rows.len() - 1);
        assert!(view.selected_entry().is_some());
    }
}
