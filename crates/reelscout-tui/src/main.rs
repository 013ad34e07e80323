//! reelscout - terminal movie browser.
//!
//! Browses the discover listing of a movie-metadata API with sorting and
//! pagination, searches by title, and shows the most searched terms in a
//! trending strip.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Position};
use reelscout_api::TmdbClient;
use reelscout_core::config::{Config, Directories, TOKEN_ENV};
use reelscout_core::debounce::Debouncer;
use reelscout_core::details::{DetailsState, youtube_url};
use reelscout_core::gallery::Direction;
use reelscout_core::query::{self, QueryDescriptor};
use reelscout_core::store::FALLBACK_PAYLOAD_ERROR;
use reelscout_core::window::effective_total_pages;
use reelscout_core::{Effect, Orchestrator, SortDirection, SortField, TrendingStore};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod app;
mod backend;
mod cli;
mod colors;
mod render;
mod state;
mod widgets;

use app::{App, spawn_silent};
use backend::TrendingBackend;
use cli::{Cli, Commands, clamp_page};
use render::{card_at, render_browse, render_details};
use state::{Focus, PendingScroll, ViewMode};

/// Gallery animation frame interval
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

type Runner = Orchestrator<TmdbClient, TrendingBackend>;

/// Collaborator plumbing owned by the event loop
struct Session {
    orchestrator: Runner,
    debouncer: Debouncer<String>,
}

impl Session {
    fn run(&mut self, app: &mut App, effects: Vec<Effect>) {
        if self.orchestrator.execute(effects) {
            app.request_scroll();
        }
    }

    /// The search box changed: update the raw query and restart the debounce
    fn input_changed(&mut self, app: &mut App) {
        app.browse.set_raw_query(app.input.clone());
        self.debouncer.push(app.input.clone());
    }

    fn open_details(&mut self, movie_id: Option<u64>) {
        if let Some(id) = movie_id {
            self.orchestrator.load_details(id);
        }
    }
}

/// Keys that work anywhere on the browse screen. Returns true if handled.
fn handle_global_key(app: &mut App, session: &mut Session, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let effects = match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return true;
        }
        KeyCode::F(2) => app.browse.cycle_sort_field(!shift),
        KeyCode::F(3) => app.browse.toggle_sort_direction(),
        KeyCode::PageDown => app.browse.request_next(),
        KeyCode::PageUp => app.browse.request_prev(),
        KeyCode::Home if ctrl => app.browse.request_first(),
        KeyCode::End if ctrl => app.browse.request_last(),
        KeyCode::Tab => {
            app.focus = app.focus.next(app.gallery_visible());
            return true;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev(app.gallery_visible());
            return true;
        }
        _ => return false,
    };
    session.run(app, effects);
    true
}

fn handle_details_key(app: &mut App, key_code: KeyCode) -> bool {
    if app.view_mode != ViewMode::Details {
        return false;
    }
    match key_code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b' | 'h') => {
            app.close_details();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.details_scroll = app.details_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.details_scroll = app.details_scroll.saturating_add(1);
        }
        KeyCode::PageUp => app.details_scroll = app.details_scroll.saturating_sub(10),
        KeyCode::PageDown => app.details_scroll = app.details_scroll.saturating_add(10),
        KeyCode::Char('t') => {
            if let Some(DetailsState::Loaded(loaded)) = app.details.state()
                && let Some(key) = loaded.trailer_key.as_deref()
            {
                spawn_silent("xdg-open", &[&youtube_url(key)]);
            }
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
    true
}

fn handle_search_key(app: &mut App, session: &mut Session, key_code: KeyCode) -> bool {
    if app.focus != Focus::Search {
        return false;
    }
    match key_code {
        KeyCode::Char(c) => {
            app.enter_char(c);
            session.input_changed(app);
        }
        KeyCode::Backspace => {
            app.delete_char();
            session.input_changed(app);
        }
        KeyCode::Esc if !app.input.is_empty() => {
            app.clear_input();
            session.input_changed(app);
        }
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.cursor_position = 0,
        KeyCode::End => app.cursor_position = app.input.chars().count(),
        KeyCode::Down | KeyCode::Enter => app.focus = Focus::Grid,
        _ => return false,
    }
    true
}

fn handle_gallery_key(app: &mut App, session: &mut Session, key_code: KeyCode) -> bool {
    if app.focus != Focus::Gallery {
        return false;
    }
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => app.select_trending(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.select_trending(Direction::Right),
        KeyCode::Char('[') => {
            app.gallery.scroll(Direction::Left);
        }
        KeyCode::Char(']') => {
            app.gallery.scroll(Direction::Right);
        }
        KeyCode::Enter => {
            let id = app.open_trending();
            session.open_details(id);
        }
        KeyCode::Down | KeyCode::Char('j') => app.focus = Focus::Grid,
        KeyCode::Up | KeyCode::Char('k') => app.focus = Focus::Search,
        _ => return false,
    }
    true
}

fn handle_grid_key(app: &mut App, session: &mut Session, key_code: KeyCode) -> bool {
    if app.focus != Focus::Grid {
        return false;
    }
    let len = app.movies().len();
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => app.grid.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.grid.move_right(len),
        KeyCode::Down | KeyCode::Char('j') => app.grid.move_down(len),
        KeyCode::Up | KeyCode::Char('k') => {
            if !app.grid.move_up() {
                app.scroll_to_top();
                app.focus = Focus::Search;
            }
        }
        KeyCode::Enter => {
            let id = app.open_selected();
            session.open_details(id);
        }
        _ => return false,
    }
    true
}

fn handle_pagination_key(app: &mut App, session: &mut Session, key_code: KeyCode) -> bool {
    if app.focus != Focus::Pagination {
        return false;
    }
    let effects = match key_code {
        KeyCode::Left | KeyCode::Char('h') => app.browse.request_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.browse.request_next(),
        KeyCode::Home => app.browse.request_first(),
        KeyCode::End => app.browse.request_last(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.focus = Focus::Grid;
            return true;
        }
        _ => return false,
    };
    session.run(app, effects);
    true
}

/// Single-letter shortcuts, outside the search box
fn handle_browse_key(app: &mut App, session: &mut Session, key_code: KeyCode) {
    let effects = match key_code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            return;
        }
        KeyCode::Char('s') => app.browse.cycle_sort_field(true),
        KeyCode::Char('S') => app.browse.cycle_sort_field(false),
        KeyCode::Char('d') => app.browse.toggle_sort_direction(),
        _ => return,
    };
    session.run(app, effects);
}

fn handle_key(app: &mut App, session: &mut Session, key: KeyEvent) {
    tracing::trace!("key: code={:?}, modifiers={:?}", key.code, key.modifiers);

    if handle_details_key(app, key.code) {
        return;
    }
    if handle_global_key(app, session, key) {
        return;
    }
    if handle_search_key(app, session, key.code) {
        return;
    }
    if handle_gallery_key(app, session, key.code) {
        return;
    }
    if handle_grid_key(app, session, key.code) {
        return;
    }
    if handle_pagination_key(app, session, key.code) {
        return;
    }
    handle_browse_key(app, session, key.code);
}

fn handle_mouse(app: &mut App, session: &mut Session, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    let details = app.view_mode == ViewMode::Details;

    match mouse.kind {
        MouseEventKind::ScrollDown if details => {
            app.details_scroll = app.details_scroll.saturating_add(1);
        }
        MouseEventKind::ScrollUp if details => {
            app.details_scroll = app.details_scroll.saturating_sub(1);
        }
        MouseEventKind::ScrollDown => app.grid.move_down(app.movies().len()),
        MouseEventKind::ScrollUp => {
            if !app.grid.move_up() {
                app.scroll_to_top();
            }
        }
        MouseEventKind::Down(MouseButton::Left) if !details => {
            if let Some((area, bar)) = app.page_bar.as_ref()
                && area.contains(pos)
            {
                let target = bar.hit_test(pos.x - area.x).and_then(|button| {
                    button.target(
                        app.browse.current_page(),
                        app.browse.effective_total_pages(),
                    )
                });
                if let Some(page) = target {
                    app.focus = Focus::Pagination;
                    let effects = app.browse.request_page(page);
                    session.run(app, effects);
                }
                return;
            }

            if let Some(area) = app.gallery_area
                && area.contains(pos)
            {
                app.focus = Focus::Gallery;
                if app.gallery.show_buttons() && pos.x == area.x && app.gallery.can_scroll_left() {
                    app.gallery.scroll(Direction::Left);
                } else if app.gallery.show_buttons()
                    && pos.x + 1 == area.right()
                    && app.gallery.can_scroll_right()
                {
                    app.gallery.scroll(Direction::Right);
                } else {
                    app.gallery.touch_start(f32::from(pos.x));
                }
                return;
            }

            if let Some(index) = card_at(app, pos.x, pos.y) {
                app.focus = Focus::Grid;
                app.grid.selected = index;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.gallery.touch_move(f32::from(pos.x)),
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(direction) = app.gallery.touch_end() {
                tracing::debug!("gallery swipe {direction:?}");
            }
        }
        _ => {}
    }
}

fn setup_logging(debug_flag: bool) {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let directives = ["reelscout", "reelscout_tui", "reelscout_core", "reelscout_api"]
        .iter()
        .fold("warn".to_string(), |acc, target| format!("{acc},{target}={level}"));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let log_dir = std::env::temp_dir();
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("reelscout-tui-{timestamp}.log");

    #[cfg(unix)]
    {
        let symlink_path = log_dir.join("reelscout-tui.log");
        let _ = std::fs::remove_file(&symlink_path);
        let _ = std::os::unix::fs::symlink(log_dir.join(&log_filename), &symlink_path);
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}

fn config_path(cli_path: Option<&Path>) -> Result<PathBuf> {
    match cli_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Directories::new()?.config_file),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let path = config_path(cli.config.as_deref())?;
    let config = Config::load(&path).with_context(|| format!("loading {}", path.display()))?;

    if matches!(cli.command, Some(Commands::InitConfig)) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let catalog = match TmdbClient::new(&config.api, config.api_token()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Cannot reach the movie API: {e}");
            eprintln!();
            eprintln!("Set {TOKEN_ENV} or api.token in {}", path.display());
            return Ok(());
        }
    };
    let trending = TrendingBackend::from_config(&config);

    match cli.command {
        Some(Commands::Search { query, page }) => {
            let page = clamp_page(page, config.browse.page_cap);
            let descriptor =
                query::build(&query, SortField::default(), SortDirection::default(), page);
            print_page(&catalog, &trending, &descriptor, config.browse.page_cap).await?;
        }
        Some(Commands::Discover { sort, dir, page }) => {
            let page = clamp_page(page, config.browse.page_cap);
            let descriptor = query::build("", sort, dir, page);
            print_page(&catalog, &trending, &descriptor, config.browse.page_cap).await?;
        }
        Some(Commands::Trending) => print_trending(&trending, config.trending.limit).await?,
        Some(Commands::Tui | Commands::InitConfig) | None => {
            run_tui(&config, catalog, trending).await?;
        }
    }

    Ok(())
}

async fn run_tui(config: &Config, catalog: TmdbClient, trending: TrendingBackend) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let (orchestrator, mut messages) = Orchestrator::new(Arc::new(catalog), Arc::new(trending));
    let (debouncer, mut debounced) =
        Debouncer::new(Duration::from_millis(config.browse.debounce_ms));
    let mut session = Session {
        orchestrator: orchestrator.with_trending_limit(config.trending.limit),
        debouncer,
    };

    let effects = app.browse.start();
    session.run(&mut app, effects);
    session.orchestrator.load_trending();

    let mut event_stream = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| ui(f, &mut app))?;
            needs_render = false;
        }

        let scroll_due = app.pending_scroll.as_ref().map(PendingScroll::due);
        let scroll_at = scroll_due.unwrap_or_else(Instant::now);
        let animating = app.gallery.is_animating();

        tokio::select! {
            Some(message) = messages.recv() => {
                let effects = app.handle_message(message);
                session.run(&mut app, effects);
                needs_render = true;
            }

            Some(text) = debounced.recv() => {
                tracing::debug!("debounced query: {text:?}");
                let effects = app.browse.apply_debounced_query(text);
                session.run(&mut app, effects);
                needs_render = true;
            }

            () = tokio::time::sleep_until(scroll_at), if scroll_due.is_some() => {
                app.poll_scroll();
                needs_render = true;
            }

            _ = frames.tick(), if animating => {
                needs_render = app.gallery.tick();
            }

            Some(event_result) = event_stream.next() => {
                let event = match event_result {
                    Ok(e) => e,
                    Err(e) => {
                        tracing::error!("Event stream error: {}", e);
                        continue;
                    }
                };

                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        handle_key(&mut app, &mut session, key);
                    }
                    Event::Mouse(mouse) => handle_mouse(&mut app, &mut session, mouse),
                    Event::Resize(..) => {}
                    _ => continue,
                }
                needs_render = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.browse.teardown();
    session.debouncer.cancel();
    session.orchestrator.abort_all();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    match app.view_mode {
        ViewMode::Browse => render_browse(f, app),
        ViewMode::Details => render_details(f, app),
    }
}

async fn print_page(
    catalog: &TmdbClient,
    trending: &TrendingBackend,
    descriptor: &QueryDescriptor,
    page_cap: u32,
) -> Result<()> {
    match descriptor.search_text() {
        Some(text) => println!("Searching: {text}"),
        None => println!("Discover: {}", descriptor.path_and_query()),
    }

    let payload = catalog.page(descriptor).await?;
    if payload.is_failure() {
        println!(
            "{}",
            payload.error.as_deref().unwrap_or(FALLBACK_PAYLOAD_ERROR)
        );
        return Ok(());
    }

    let movies = payload.results.unwrap_or_default();
    let total = effective_total_pages(payload.total_pages.unwrap_or(0), page_cap);
    println!();
    println!(
        "Page {} of {total}: {} movies",
        descriptor.page(),
        movies.len()
    );
    for (i, m) in movies.iter().enumerate() {
        println!(
            "  {:>2}. {} ({}) ★ {} [{}]",
            i + 1,
            m.title,
            m.release_year(),
            m.rating_label(),
            m.language_label()
        );
    }

    if let (Some(text), Some(top)) = (descriptor.search_text(), movies.first())
        && let Err(e) = trending.record_search(text, top).await
    {
        tracing::warn!("failed to update search count for {text:?}: {e}");
    }

    Ok(())
}

async fn print_trending(trending: &TrendingBackend, limit: usize) -> Result<()> {
    let movies = trending.trending(limit).await?;
    if movies.is_empty() {
        if trending.is_remote() {
            println!("No searches recorded yet");
        } else {
            println!("No trending backend configured; counts are only kept while the TUI runs");
        }
        return Ok(());
    }
    println!("Trending Now");
    for (i, m) in movies.iter().enumerate() {
        println!("  {:>2}. {} ({} searches)", i + 1, m.display_title(), m.count);
    }
    Ok(())
}
