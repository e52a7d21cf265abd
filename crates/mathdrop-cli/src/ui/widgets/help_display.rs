use mathdrop_engine::SessionState;
use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::widgets::style;

/// One key hint: the keys to press and what they do.
#[derive(Debug, Clone, Copy)]
struct Hint(&'static str, &'static str);

const PLAYING: &[Hint] = &[
    Hint("←↓↑→/hjkl", "move"),
    Hint("Enter/Space", "drop"),
    Hint("r", "reset"),
    Hint("q", "quit game"),
    Hint("Esc", "exit"),
];

const CHALLENGE: &[Hint] = &[
    Hint("0-9/-", "type"),
    Hint("Backspace", "erase"),
    Hint("Enter", "answer"),
    Hint("r", "reset"),
    Hint("q", "quit game"),
    Hint("Esc", "exit"),
];

const GAME_OVER: &[Hint] = &[Hint("r", "reset"), Hint("q", "quit game"), Hint("Esc", "exit")];

/// Footer listing the keys that do something in the current phase.
///
/// Without a session only the playing keys apply: selecting a cell starts a
/// new one.
#[derive(Debug)]
pub struct HelpDisplay {
    hints: &'static [Hint],
}

impl HelpDisplay {
    pub fn new(state: Option<&SessionState>) -> Self {
        let hints = match state {
            Some(SessionState::AwaitingAnswer(_)) => CHALLENGE,
            Some(SessionState::GameOver) => GAME_OVER,
            Some(SessionState::Playing) | None => PLAYING,
        };
        Self { hints }
    }

    fn line(&self) -> Line<'static> {
        let spans = self.hints.iter().enumerate().flat_map(|(i, Hint(keys, action))| {
            let gap = (i > 0).then(|| Span::raw("  "));
            gap.into_iter().chain([
                Span::styled(format!(" {keys} "), style::KEY),
                Span::styled(format!(" {action}"), style::LABEL),
            ])
        });
        Line::from_iter(spans).centered()
    }
}

impl Widget for HelpDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.line().render(area, buf);
    }
}
