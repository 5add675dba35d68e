// App state and main event loop.
// Owns the page components, routes keyboard and mouse input, and runs quote
// fetches as background tasks that report back over a channel.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::info;

use crate::api::{Quote, QuoteClient};
use crate::config::Settings;
use crate::error::{FetchError, Result};
use crate::state::{Member, MemberModal, ModalLayout, PageNavigator, QuotePanel, Roster, View};
use crate::ui;

const PAGE_LINES: u16 = 10;

/// Messages from background tasks to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    QuoteSettled(std::result::Result<Quote, FetchError>),
}

/// Delivers a settle event when dropped, so the panel always leaves the
/// loading state even if the fetch task panics or is aborted.
struct SettleOnDrop {
    tx: UnboundedSender<AppEvent>,
    outcome: Option<std::result::Result<Quote, FetchError>>,
}

impl SettleOnDrop {
    fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self { tx, outcome: None }
    }

    fn complete(mut self, outcome: std::result::Result<Quote, FetchError>) {
        self.outcome = Some(outcome);
    }
}

impl Drop for SettleOnDrop {
    fn drop(&mut self) {
        let outcome = self.outcome.take().unwrap_or(Err(FetchError::Interrupted));
        // The receiver only goes away when the app is shutting down.
        let _ = self.tx.send(AppEvent::QuoteSettled(outcome));
    }
}

/// Fetch one quote in the background and report the outcome on `tx`.
fn spawn_quote_fetch(client: QuoteClient, tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let guard = SettleOnDrop::new(tx);
        info!(url = %client.url(), "fetching quote");
        let outcome = client.random_quote().await;
        guard.complete(outcome);
    })
}

/// Screen regions from the last frame, used to hit-test mouse presses.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitAreas {
    pub screen: Rect,
    pub members: Rect,
    pub launch_button: Rect,
    pub quote_button: Rect,
    pub back_button: Rect,
}

/// Main application state.
pub struct App {
    /// Portfolio / app view switching and page scroll.
    pub navigator: PageNavigator,
    /// Quote generator state.
    pub quote: QuotePanel,
    /// Member cards on the portfolio page.
    pub roster: Roster,
    /// Member detail dialog.
    pub modal: MemberModal,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Regions recorded by the last draw.
    pub hit: HitAreas,
    client: QuoteClient,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = QuoteClient::new(&settings.api_url)?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: QuoteClient, settings: Settings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            navigator: PageNavigator::new(settings.start_view),
            quote: QuotePanel::new(),
            roster: Roster::new(settings.members),
            modal: MemberModal::new(),
            show_help: false,
            should_quit: false,
            hit: HitAreas::default(),
            client,
            events_tx,
            events_rx,
        }
    }

    /// Starting directly in the app view loads a quote straight away.
    pub fn start(&mut self) {
        if self.navigator.current() == View::App {
            self.request_quote();
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        self.start();
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.drain_events();
        }
        Ok(())
    }

    /// Handle keyboard and mouse events.
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply everything background tasks have reported so far.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::QuoteSettled(outcome) => self.quote.settle(outcome),
        }
    }

    /// Start a quote fetch unless one is already in flight.
    pub fn request_quote(&mut self) -> bool {
        if !self.quote.begin() {
            info!("quote fetch already in flight; ignoring request");
            return false;
        }
        spawn_quote_fetch(self.client.clone(), self.events_tx.clone());
        true
    }

    pub fn show_app(&mut self) {
        if self.navigator.show_app(&self.quote) {
            self.request_quote();
        }
    }

    pub fn show_portfolio(&mut self) {
        self.navigator.show_portfolio();
    }

    fn open_member(&mut self, member: Member) {
        self.modal.open(member, &mut self.navigator.scroll);
    }

    fn open_selected_member(&mut self) {
        if let Some(member) = self.roster.selected_member().cloned() {
            self.open_member(member);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.modal.is_open() {
            match key.code {
                KeyCode::Esc => {
                    self.modal.handle_escape(&mut self.navigator.scroll);
                }
                KeyCode::Char('x') => self.modal.close(&mut self.navigator.scroll),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::PageUp => self.navigator.scroll.scroll_up(PAGE_LINES),
                KeyCode::PageDown => self.navigator.scroll.scroll_down(PAGE_LINES),
                _ => {}
            }
            return;
        }

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Esc => {
                self.modal.handle_escape(&mut self.navigator.scroll);
            }
            KeyCode::Tab | KeyCode::BackTab => match self.navigator.current() {
                View::Portfolio => self.show_app(),
                View::App => self.show_portfolio(),
            },
            KeyCode::PageUp => self.navigator.scroll.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.navigator.scroll.scroll_down(PAGE_LINES),
            code => match self.navigator.current() {
                View::Portfolio => self.handle_portfolio_key(code),
                View::App => self.handle_app_key(code),
            },
        }
    }

    fn handle_portfolio_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.roster.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.roster.select_next(),
            KeyCode::Enter => self.open_selected_member(),
            KeyCode::Char('a') => self.show_app(),
            _ => {}
        }
    }

    fn handle_app_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.request_quote();
            }
            KeyCode::Char('b') | KeyCode::Backspace => self.show_portfolio(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_press(Position::new(mouse.column, mouse.row));
            }
            MouseEventKind::ScrollUp => self.navigator.scroll.scroll_up(1),
            MouseEventKind::ScrollDown => self.navigator.scroll.scroll_down(1),
            _ => {}
        }
    }

    fn handle_press(&mut self, position: Position) {
        if self.modal.is_open() {
            let layout = ModalLayout::centered(self.hit.screen);
            self.modal
                .handle_press(position, &layout, &mut self.navigator.scroll);
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.navigator.current() {
            View::Portfolio => {
                if self.hit.launch_button.contains(position) {
                    self.show_app();
                } else if self.hit.members.contains(position) {
                    let row = (position.y - self.hit.members.y) as usize;
                    let index = row + self.roster.list_state.offset();
                    if let Some(member) = self.roster.select_at(index).cloned() {
                        self.open_member(member);
                    }
                }
            }
            View::App => {
                if self.hit.quote_button.contains(position) {
                    self.request_quote();
                } else if self.hit.back_button.contains(position) {
                    self.show_portfolio();
                }
            }
        }
    }

    /// Wait for the next background event and apply it.
    #[cfg(test)]
    pub async fn settle_next(&mut self) {
        let event = tokio::time::timeout(Duration::from_secs(10), self.events_rx.recv())
            .await
            .expect("fetch did not settle in time")
            .expect("event channel closed");
        self.apply(event);
    }
}
