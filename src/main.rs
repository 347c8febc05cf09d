mod app;
mod config;
mod content;
mod engine;
mod event;
mod session;
mod store;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use app::{App, AppScreen};
use content::level::LEVEL_ORDER;
use event::{AppEvent, EventHandler};
use session::lookup::SearchFocus;
use ui::components::card_panel::CardPanel;
use ui::components::detail::DetailCard;
use ui::components::idiom_board::IdiomBoard;
use ui::components::level_grid::LevelGrid;
use ui::components::level_list::LevelList;
use ui::components::quiz_board::QuizBoard;
use ui::components::range_bar::RangeBar;
use ui::components::search_panel::SearchPanel;
use ui::layout::ScreenFrame;
use ui::line_input::InputResult;
use ui::theme::ThemeColors;

#[derive(Parser)]
#[command(
    name = "hanjaro",
    version,
    about = "Terminal hanja study for the Korean proficiency levels"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Answer verdict time in milliseconds")]
    delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(delay_ms) = cli.delay_ms {
        app.config.advance_delay_ms = delay_ms;
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
            app.menu.theme = theme;
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // An open detail popup swallows every key until it closes.
    if app.detail.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.detail = None,
            _ => {}
        }
        return;
    }

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::LevelSelect => handle_level_select_key(app, key),
        AppScreen::Grid => handle_grid_key(app, key),
        AppScreen::Quiz => handle_quiz_key(app, key),
        AppScreen::Cards => handle_cards_key(app, key),
        AppScreen::Search => handle_search_key(app, key),
        AppScreen::Idioms => handle_idioms_key(app, key),
        AppScreen::Settings => handle_settings_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.go_to_level_select(),
        KeyCode::Char('2') => app.open_quiz(),
        KeyCode::Char('3') => app.open_cards(),
        KeyCode::Char('4') => app.open_search(),
        KeyCode::Char('5') => app.open_idioms(false),
        KeyCode::Char('c') => app.go_to_settings(),
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => match app.menu.selected {
            0 => app.go_to_level_select(),
            1 => app.open_quiz(),
            2 => app.open_cards(),
            3 => app.open_search(),
            4 => app.open_idioms(false),
            5 => app.go_to_settings(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_level_select_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.level_cursor = app.level_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.level_cursor = (app.level_cursor + 1).min(LEVEL_ORDER.len() - 1);
        }
        KeyCode::Enter => app.open_browse(LEVEL_ORDER[app.level_cursor]),
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    let Some(ref mut browse) = app.browse else {
        app.go_to_menu();
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.browse = None;
            app.screen = AppScreen::LevelSelect;
        }
        KeyCode::Up | KeyCode::Char('k') => browse.prev(),
        KeyCode::Down | KeyCode::Char('j') => browse.next(),
        KeyCode::Char('1') => browse.show_glyph = !browse.show_glyph,
        KeyCode::Char('2') => browse.show_gloss = !browse.show_gloss,
        KeyCode::Char('3') => browse.show_reading = !browse.show_reading,
        KeyCode::Enter => {
            if let Some(entry) = browse.selected_entry() {
                app.detail = Some((browse.level, entry.clone()));
            }
        }
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Char(ch @ '1'..='4') => {
            app.quiz_choose(ch as usize - '1' as usize);
        }
        KeyCode::Up | KeyCode::Char('k') => app.quiz_move(false),
        KeyCode::Down | KeyCode::Char('j') => app.quiz_move(true),
        KeyCode::Enter => {
            if let Some(ref quiz) = app.quiz {
                let idx = quiz.selected;
                app.quiz_choose(idx);
            }
        }
        KeyCode::Char('f') => app.quiz_cycle_from(true),
        KeyCode::Char('F') => app.quiz_cycle_from(false),
        KeyCode::Char('t') => app.quiz_cycle_to(true),
        KeyCode::Char('T') => app.quiz_cycle_to(false),
        KeyCode::Char('c') => app.quiz_cycle_source(),
        KeyCode::Char('d') => app.quiz_cycle_style(),
        KeyCode::Char('n') => app.quiz_redeal(),
        _ => {}
    }
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    let Some(ref mut deck) = app.deck else {
        app.go_to_menu();
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Left | KeyCode::Char('h') => deck.prev(),
        KeyCode::Right | KeyCode::Char('l') => deck.next(),
        KeyCode::Char(' ') | KeyCode::Enter => deck.flip(),
        KeyCode::Char('d') => deck.cycle_face(),
        KeyCode::Char('f') => deck.cycle_from(&app.library, true),
        KeyCode::Char('F') => deck.cycle_from(&app.library, false),
        KeyCode::Char('t') => deck.cycle_to(&app.library, true),
        KeyCode::Char('T') => deck.cycle_to(&app.library, false),
        KeyCode::Char('c') => deck.cycle_source(&app.library),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match app.search.focus {
        SearchFocus::Query => match key.code {
            KeyCode::Down | KeyCode::Tab if !app.search.hits.is_empty() => {
                app.search.focus = SearchFocus::Results;
            }
            _ => match app.search.input.handle(key) {
                InputResult::Submit => app.search.run(&app.library),
                InputResult::Cancel => app.go_to_menu(),
                InputResult::Continue => {}
            },
        },
        SearchFocus::Results => match key.code {
            KeyCode::Esc | KeyCode::Tab => app.search.focus = SearchFocus::Query,
            KeyCode::Char('q') => app.go_to_menu(),
            KeyCode::Up | KeyCode::Char('k') => {
                if app.search.selected == 0 {
                    app.search.focus = SearchFocus::Query;
                } else {
                    app.search.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => app.search.next(),
            KeyCode::Enter => {
                if let Some(hit) = app.search.selected_hit() {
                    app.detail = Some((hit.level, hit.entry.clone()));
                }
            }
            _ => {}
        },
    }
}

fn handle_idioms_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Char('n') => app.open_idioms(true),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            let _ = app.config.save();
            app.go_to_menu();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_selected = app.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.settings_selected = (app.settings_selected + 1).min(1);
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            app.settings_cycle_forward();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.settings_cycle_backward();
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::LevelSelect => render_level_select(frame, app),
        AppScreen::Grid => render_grid(frame, app),
        AppScreen::Quiz => render_quiz(frame, app),
        AppScreen::Cards => render_cards(frame, app),
        AppScreen::Search => render_search(frame, app),
        AppScreen::Idioms => render_idioms(frame, app),
        AppScreen::Settings => render_settings(frame, app),
    }

    if let Some((level, ref entry)) = app.detail {
        let popup = ui::layout::centered_rect(40, 50, area);
        let card = DetailCard::new(level, entry, app.theme);
        frame.render_widget(&card, popup);
    }
}

fn render_header(frame: &mut ratatui::Frame, area: Rect, info: &str, colors: &ThemeColors) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " hanjaro ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info,
            Style::default().fg(colors.dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_hints(frame: &mut ratatui::Frame, area: Rect, hints: &[&str], colors: &ThemeColors) {
    let lines: Vec<Line> = ui::layout::pack_hint_lines(hints, area.width as usize)
        .into_iter()
        .take(area.height as usize)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.dim()))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = ScreenFrame::new(frame.area());

    let info = format!(
        " {} characters | {} words | {} idioms",
        app.library.total_characters(),
        app.library.total_words(),
        app.library.idioms.len(),
    );
    render_header(frame, layout.header, &info, colors);

    let menu_area = ui::layout::centered_rect(50, 85, layout.main);
    frame.render_widget(&app.menu, menu_area);

    render_hints(
        frame,
        layout.footer,
        &["[1-5] Open", "[c] Settings", "[j/k] Move", "[q] Quit"],
        colors,
    );
}

fn render_level_select(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = ScreenFrame::new(frame.area());

    render_header(frame, layout.header, " Level Browser", colors);

    let list_area = ui::layout::centered_rect(40, 90, layout.main);
    let list = LevelList::new(&app.library, app.level_cursor, app.theme);
    frame.render_widget(&list, list_area);

    render_hints(
        frame,
        layout.footer,
        &["[Enter] Open", "[j/k] Move", "[Esc] Back"],
        colors,
    );
}

fn render_grid(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = ScreenFrame::new(frame.area());

    let Some(ref browse) = app.browse else {
        return;
    };

    let info = format!(
        " {} | {} characters",
        browse.level.label(),
        browse.rows.len(),
    );
    render_header(frame, layout.header, &info, colors);

    let grid = LevelGrid::new(browse, app.theme);
    frame.render_widget(&grid, layout.main);

    render_hints(
        frame,
        layout.footer,
        &[
            "[1/2/3] Toggle columns",
            "[Enter] Detail",
            "[j/k] Move",
            "[Esc] Back",
        ],
        colors,
    );
}

fn render_quiz(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = ScreenFrame::new(frame.area());

    let Some(ref quiz) = app.quiz else {
        return;
    };

    let info = format!(" Quiz | Score {}/{}", quiz.score, quiz.answered);
    render_header(frame, layout.header, &info, colors);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(layout.main);

    let range = RangeBar::new(
        quiz.from,
        quiz.to,
        quiz.source,
        quiz.style.as_str(),
        app.theme,
    );
    frame.render_widget(&range, main_layout[0]);

    let board = QuizBoard::new(quiz, app.theme);
    frame.render_widget(&board, main_layout[1]);

    render_hints(
        frame,
        layout.footer,
        &[
            "[1-4] Answer",
            "[f/F] From",
            "[t/T] To",
            "[c] Source",
            "[d] Prompt",
            "[n] New round",
            "[Esc] Back",
        ],
        colors,
    );
}

fn render_cards(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = ScreenFrame::new(frame.area());

    let Some(ref deck) = app.deck else {
        return;
    };

    let position = if deck.len() > 0 { deck.index + 1 } else { 0 };
    let info = format!(" Flashcards | {position} / {}", deck.len());
    render_header(frame, layout.header, &info, colors);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(layout.main);

    let range = RangeBar::new(
        deck.from,
        deck.to,
        deck.source,
        deck.face.as_str(),
        app.theme,
    );
    frame.render_widget(&range, main_layout[0]);

    let panel = CardPanel::new(deck, app.theme);
    frame.render_widget(&panel, main_layout[1]);

    render_hints(
        frame,
        layout.footer,
        &[
            "[Space] Flip",
            "[h/l] Prev/Next",
            "[f/F] From",
            "[t/T] To",
            "[c] Source",
            "[d] Front face",
            "[Esc] Back",
        ],
        colors,
    );
}

fn render_search(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = ScreenFrame::new(frame.area());

    render_header(frame, layout.header, " Search", colors);

    let panel = SearchPanel::new(&app.search, app.theme);
    frame.render_widget(&panel, layout.main);

    let hints: &[&str] = match app.search.focus {
        SearchFocus::Query => &["[Enter] Search", "[Tab] Results", "[Esc] Back"],
        SearchFocus::Results => &[
            "[Enter] Detail",
            "[j/k] Move",
            "[Tab] Query",
            "[q] Back",
        ],
    };
    render_hints(frame, layout.footer, hints, colors);
}

fn render_idioms(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = ScreenFrame::new(frame.area());

    render_header(frame, layout.header, " Daily Idioms", colors);

    if let Some(ref daily) = app.idioms {
        let board_area = ui::layout::centered_rect(70, 90, layout.main);
        let board = IdiomBoard::new(&daily.idioms, &daily.date, app.theme);
        frame.render_widget(&board, board_area);
    }

    render_hints(
        frame,
        layout.footer,
        &["[n] New set", "[Esc] Back"],
        colors,
    );
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let centered = ui::layout::centered_rect(60, 80, area);

    let block = Block::bordered()
        .title(" Settings ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let fields: Vec<(String, String)> = vec![
        ("Theme".to_string(), app.config.theme.clone()),
        (
            "Answer delay (ms)".to_string(),
            format!("{}", app.config.advance_delay_ms),
        ),
    ];

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "  Use arrows to navigate, Enter/Right to change, ESC to save & exit",
        Style::default().fg(colors.dim()),
    )));
    header.render(layout[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .split(layout[1]);

    for (i, (label, value)) in fields.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };

        let label_text = format!("{indicator}{label}:");
        let value_text = format!("  < {value} >");

        let label_style = Style::default()
            .fg(if is_selected {
                colors.accent()
            } else {
                colors.fg()
            })
            .add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });

        let value_style = Style::default().fg(if is_selected {
            colors.warning()
        } else {
            colors.dim()
        });

        let lines = vec![
            Line::from(Span::styled(label_text, label_style)),
            Line::from(Span::styled(value_text, value_style)),
        ];
        Paragraph::new(lines).render(field_layout[i], frame.buffer_mut());
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        "  [ESC] Save & back  [Enter/arrows] Change value",
        Style::default().fg(colors.accent()),
    )));
    footer.render(layout[3], frame.buffer_mut());
}
