//! Terminal UI front end.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{digit_position, move_cursor};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::GameContext;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// `names` pre-fill the two name inputs.
#[instrument(skip_all)]
pub fn run_tui(names: [String; 2]) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut context = GameContext::new();
    let mut app = App::new(names);
    let res = run_loop(&mut terminal, &mut app, &mut context);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draw, wait for a key, dispatch; one input at a time.
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    context: &mut GameContext,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key.code, context);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
