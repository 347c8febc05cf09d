use crate::content::library::Library;
use crate::engine::search::{SearchHit, search};
use crate::ui::line_input::LineInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFocus {
    Query,
    Results,
}

/// Search screen state. `ran` tells an empty result list apart from a
/// search that never happened, so "No matches" only shows after a run.
pub struct SearchView {
    pub input: LineInput,
    pub hits: Vec<SearchHit>,
    pub ran: bool,
    pub selected: usize,
    pub focus: SearchFocus,
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            input: LineInput::new(""),
            hits: Vec::new(),
            ran: false,
            selected: 0,
            focus: SearchFocus::Query,
        }
    }

    pub fn run(&mut self, library: &Library) {
        let query = self.input.value().to_string();
        self.hits = search(library, &query);
        self.ran = !query.is_empty();
        self.selected = 0;
        if self.hits.is_empty() {
            self.focus = SearchFocus::Query;
        } else {
            self.focus = SearchFocus::Results;
        }
    }

    pub fn next(&mut self) {
        let last = self.hits.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.hits.get(self.selected)
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn type_query(view: &mut SearchView, text: &str) {
        for ch in text.chars() {
            view.input
                .handle(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_fresh_view_has_not_run() {
        let view = SearchView::new();
        assert!(!view.ran);
        assert!(view.hits.is_empty());
        assert_eq!(view.focus, SearchFocus::Query);
    }

    #[test]
    fn test_run_with_hits_moves_focus_to_results() {
        let library = Library::load();
        let mut view = SearchView::new();
        type_query(&mut view, "물");
        view.run(&library);

        assert!(view.ran);
        assert!(!view.hits.is_empty());
        assert_eq!(view.focus, SearchFocus::Results);
        assert_eq!(view.selected, 0);
        assert!(view.selected_hit().is_some());
    }

    #[test]
    fn test_run_without_hits_keeps_focus_on_query() {
        let library = Library::load();
        let mut view = SearchView::new();
        type_query(&mut view, "zzzz");
        view.run(&library);

        assert!(view.ran);
        assert!(view.hits.is_empty());
        assert_eq!(view.focus, SearchFocus::Query);
    }

    #[test]
    fn test_empty_query_counts_as_never_run() {
        let library = Library::load();
        let mut view = SearchView::new();
        view.run(&library);
        assert!(!view.ran);
    }

    #[test]
    fn test_next_clamps_to_last_hit() {
        let library = Library::load();
        let mut view = SearchView::new();
        type_query(&mut view, "물");
        view.run(&library);

        for _ in 0..view.hits.len() + 5 {
            view.next();
        }
        assert_eq!(view.selected, view.hits.len() - 1);
    }
}
