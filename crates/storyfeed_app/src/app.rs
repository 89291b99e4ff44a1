use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use storyfeed_core::{update, AppState, Msg};

use crate::effects::EffectRunner;
use crate::keys::{self, KeyAction};
use crate::persistence;
use crate::ui;

/// How long one loop pass waits for a key before treating it as a tick.
/// This is also the render coalescing window.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

/// Which pane keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    List,
}

pub fn run_app() -> std::io::Result<()> {
    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    focus: Focus,
    selected: usize,
    needs_render: bool,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let runner = EffectRunner::new(msg_tx);
        Self {
            state: AppState::new(),
            runner,
            msg_rx,
            focus: Focus::default(),
            selected: 0,
            needs_render: true,
            should_quit: false,
        }
    }

    fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        // Restore the persisted term; this also runs the initial fetch.
        let term = persistence::load_search_term();
        self.dispatch_msg(Msg::SearchRestored(term));

        while !self.should_quit {
            self.process_pending_messages();

            if self.state.consume_dirty() || std::mem::take(&mut self.needs_render) {
                let view = self.state.view();
                self.clamp_selection(view.stories.len());
                let focus = self.focus;
                let selected = self.selected;
                terminal.draw(|frame| ui::render(frame, &view, focus, selected))?;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            } else {
                self.dispatch_msg(Msg::Tick);
            }
        }
        Ok(())
    }

    /// Drain everything the engine pump queued since the last pass, so one
    /// render covers the whole batch.
    fn process_pending_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let view = self.state.view();
        match keys::translate(key, self.focus, &view, self.selected) {
            KeyAction::Dispatch(msg) => self.dispatch_msg(msg),
            KeyAction::FocusSearch => {
                self.focus = Focus::Search;
                self.needs_render = true;
            }
            KeyAction::FocusList => {
                self.focus = Focus::List;
                self.needs_render = true;
            }
            KeyAction::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
                self.needs_render = true;
            }
            KeyAction::MoveDown => {
                if self.selected + 1 < view.stories.len() {
                    self.selected += 1;
                }
                self.needs_render = true;
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
