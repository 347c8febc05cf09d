use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::content::entry::{CharacterEntry, IdiomEntry};
use crate::content::level::Level;
use crate::content::library::Library;
use crate::engine::daily;
use crate::session::browse::BrowseView;
use crate::session::cards::CardDeck;
use crate::session::lookup::SearchView;
use crate::session::quiz::QuizSession;
use crate::store::json_store::JsonStore;
use crate::ui::components::menu::Menu;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    LevelSelect,
    Grid,
    Quiz,
    Cards,
    Search,
    Idioms,
    Settings,
}

/// Today's idiom set as drawn or restored from the cache.
pub struct DailyIdioms {
    pub date: String,
    pub idioms: Vec<IdiomEntry>,
}

pub struct App {
    pub screen: AppScreen,
    pub menu: Menu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub library: Library,
    pub store: Option<JsonStore>,
    pub level_cursor: usize,
    pub browse: Option<BrowseView>,
    pub quiz: Option<QuizSession>,
    pub deck: Option<CardDeck>,
    pub search: SearchView,
    pub idioms: Option<DailyIdioms>,
    pub detail: Option<(Level, CharacterEntry)>,
    pub settings_selected: usize,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let menu = Menu::new(theme);

        let store = JsonStore::new().ok();
        let library = Library::load();

        Self {
            screen: AppScreen::Menu,
            menu,
            theme,
            config,
            library,
            store,
            level_cursor: 0,
            browse: None,
            quiz: None,
            deck: None,
            search: SearchView::new(),
            idioms: None,
            detail: None,
            settings_selected: 0,
            should_quit: false,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Screen state drops here; the search view and the daily set live
    /// for the whole run.
    pub fn go_to_menu(&mut self) {
        self.screen = AppScreen::Menu;
        self.browse = None;
        self.quiz = None;
        self.deck = None;
        self.detail = None;
    }

    pub fn go_to_level_select(&mut self) {
        self.level_cursor = 0;
        self.screen = AppScreen::LevelSelect;
    }

    pub fn open_browse(&mut self, level: Level) {
        self.browse = Some(BrowseView::open(&self.library, level));
        self.screen = AppScreen::Grid;
    }

    /// Entering the quiz starts a fresh session, so the score begins
    /// at zero.
    pub fn open_quiz(&mut self) {
        self.quiz = Some(QuizSession::new(&self.library, &mut self.rng));
        self.screen = AppScreen::Quiz;
    }

    pub fn open_cards(&mut self) {
        self.deck = Some(CardDeck::new(&self.library));
        self.screen = AppScreen::Cards;
    }

    pub fn open_search(&mut self) {
        self.search.focus = crate::session::lookup::SearchFocus::Query;
        self.screen = AppScreen::Search;
    }

    pub fn open_idioms(&mut self, force: bool) {
        let today = daily::today_stamp();
        let reuse = !force && self.idioms.as_ref().is_some_and(|d| d.date == today);
        if !reuse {
            let idioms = daily::open_daily(
                self.store.as_ref(),
                &self.library.idioms,
                &today,
                force,
                &mut self.rng,
            );
            self.idioms = Some(DailyIdioms {
                date: today,
                idioms,
            });
        }
        self.screen = AppScreen::Idioms;
    }

    pub fn go_to_settings(&mut self) {
        self.settings_selected = 0;
        self.screen = AppScreen::Settings;
    }

    pub fn quiz_choose(&mut self, idx: usize) {
        let delay = self.config.advance_delay();
        if let Some(ref mut quiz) = self.quiz {
            quiz.choose(idx, Instant::now(), delay);
        }
    }

    pub fn quiz_move(&mut self, down: bool) {
        if let Some(ref mut quiz) = self.quiz {
            quiz.move_selection(down);
        }
    }

    pub fn quiz_redeal(&mut self) {
        if let Some(ref mut quiz) = self.quiz {
            quiz.redeal(&mut self.rng);
        }
    }

    pub fn quiz_cycle_from(&mut self, forward: bool) {
        if let Some(ref mut quiz) = self.quiz {
            quiz.cycle_from(&self.library, &mut self.rng, forward);
        }
    }

    pub fn quiz_cycle_to(&mut self, forward: bool) {
        if let Some(ref mut quiz) = self.quiz {
            quiz.cycle_to(&self.library, &mut self.rng, forward);
        }
    }

    pub fn quiz_cycle_source(&mut self) {
        if let Some(ref mut quiz) = self.quiz {
            quiz.cycle_source(&self.library, &mut self.rng);
        }
    }

    pub fn quiz_cycle_style(&mut self) {
        if let Some(ref mut quiz) = self.quiz {
            quiz.cycle_style();
        }
    }

    pub fn on_tick(&mut self) {
        if self.screen == AppScreen::Quiz {
            if let Some(ref mut quiz) = self.quiz {
                quiz.maybe_advance(Instant::now(), &mut self.rng);
            }
        }
    }

    pub fn settings_cycle_forward(&mut self) {
        match self.settings_selected {
            0 => {
                let themes = Theme::available_themes();
                if let Some(idx) = themes.iter().position(|t| *t == self.config.theme) {
                    let next = (idx + 1) % themes.len();
                    self.config.theme = themes[next].clone();
                } else if let Some(first) = themes.first() {
                    self.config.theme = first.clone();
                }
                if let Some(new_theme) = Theme::load(&self.config.theme) {
                    let theme: &'static Theme = Box::leak(Box::new(new_theme));
                    self.theme = theme;
                    self.menu.theme = theme;
                }
            }
            1 => {
                self.config.advance_delay_ms = (self.config.advance_delay_ms + 250).min(10_000);
            }
            _ => {}
        }
    }

    pub fn settings_cycle_backward(&mut self) {
        match self.settings_selected {
            0 => {
                let themes = Theme::available_themes();
                if let Some(idx) = themes.iter().position(|t| *t == self.config.theme) {
                    let next = if idx == 0 { themes.len() - 1 } else { idx - 1 };
                    self.config.theme = themes[next].clone();
                } else if let Some(first) = themes.first() {
                    self.config.theme = first.clone();
                }
                if let Some(new_theme) = Theme::load(&self.config.theme) {
                    let theme: &'static Theme = Box::leak(Box::new(new_theme));
                    self.theme = theme;
                    self.menu.theme = theme;
                }
            }
            1 => {
                self.config.advance_delay_ms =
                    self.config.advance_delay_ms.saturating_sub(250).max(250);
            }
            _ => {}
        }
    }
}
