use std::io;

use crossterm::event;

use crate::tui::App;

/// Event-driven TUI runtime.
///
/// Renders once at startup and after every handled event, then blocks until
/// the next terminal event. Each event is handled to completion before the
/// next one is read.
#[derive(Debug)]
pub struct Tui {
    dirty: bool,
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}

impl Tui {
    pub fn new() -> Self {
        // Initial render is required on startup
        Self { dirty: true }
    }

    /// Runs `app` until `app.should_exit()` returns true.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                if self.dirty {
                    terminal.draw(|f| app.draw(f))?;
                    self.dirty = false;
                }
                let event = event::read()?;
                app.handle_event(&event);
                self.dirty = true;
            }
            Ok(())
        })
    }
}
