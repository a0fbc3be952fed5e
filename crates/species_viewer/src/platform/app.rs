use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Frame;
use species_core::{update, AppState, Msg};
use viewer_logging::{viewer_debug, viewer_info, viewer_warn};

use super::config::{load_config, ViewerConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::input::{self, Action};
use super::logging;
use super::terminal::TerminalSession;
use super::ui::render::{self, ChartPanel};
use super::ui::selector::Selector;

const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let loaded = load_config(&cwd);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => ViewerConfig::default(),
    };
    logging::initialize(config.log_destination, config.log_level());
    match loaded {
        Ok(Some(_)) => viewer_info!("Loaded {} from {:?}", CONFIG_FILENAME, cwd),
        Ok(None) => viewer_debug!("No {} found, using defaults", CONFIG_FILENAME),
        Err(err) => viewer_warn!("Ignoring configuration: {}", err),
    }
    viewer_info!("Catalog root {}", config.catalog_root);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner =
        EffectRunner::new(config.engine_config(), msg_tx).context("starting fetch engine")?;
    let mut terminal = TerminalSession::new().context("preparing terminal")?;

    let mut session = Session::new(runner);
    session.dispatch(Msg::Started);
    let mut redraw = true;

    while !session.should_quit {
        while let Ok(msg) = msg_rx.try_recv() {
            redraw |= session.dispatch(msg);
        }
        if redraw {
            terminal.draw(|frame| session.draw(frame))?;
            redraw = false;
        }
        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    redraw |= session.handle_key(key);
                }
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }
    }

    drop(terminal);
    viewer_info!("Species viewer exiting");
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    selector: Selector,
    panel: ChartPanel,
    should_quit: bool,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            selector: Selector::default(),
            panel: ChartPanel::default(),
            should_quit: false,
        }
    }

    /// Runs `msg` through `update`; returns whether the screen is stale.
    fn dispatch(&mut self, msg: Msg) -> bool {
        if let Msg::SpeciesSelected(name) = &msg {
            if self.state.find_species(name).is_none() {
                viewer_info!("No species named {:?}; keeping current selection", name);
            }
        }
        if let Msg::MembersResolved { generation, .. } | Msg::MembersFailed { generation, .. } =
            &msg
        {
            if *generation != self.state.latest_generation() {
                viewer_debug!(
                    "Discarding result of superseded selection {} (latest {})",
                    generation,
                    self.state.latest_generation()
                );
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            self.selector.sync(self.state.view().options.len());
        }
        was_dirty
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let options = self.state.view().options;
        match input::handle_key(key, &mut self.selector, &options) {
            Some(Action::Dispatch(msg)) => {
                self.dispatch(msg);
                true
            }
            Some(Action::Redraw) => true,
            Some(Action::ToggleChartJson) => {
                self.panel = self.panel.toggled();
                true
            }
            Some(Action::Quit) => {
                self.should_quit = true;
                false
            }
            None => false,
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let view = self.state.view();
        render::draw(frame, &view, &mut self.selector, self.panel);
    }
}
