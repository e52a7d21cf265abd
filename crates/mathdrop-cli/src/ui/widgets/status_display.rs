use std::iter;

use mathdrop_engine::{GameSession, SessionState, ShapeKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// Side panel with the running totals of the live session.
///
/// Values render as `-` while no session exists.
pub struct StatusDisplay<'a> {
    session: Option<&'a GameSession>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(session: Option<&'a GameSession>) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        // a seed is 32 hex digits
        32 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&GameSession) -> String),
    LabelValue(&'static str, &'static dyn Fn(&GameSession) -> String),
}

fn shape_count(session: &GameSession, kind: ShapeKind) -> String {
    session.stats().shape_counter()[kind as usize].to_string()
}

const ROWS: &[Row] = &[
    Row::LabelValue("STATE:", &|session| {
        match session.session_state() {
            SessionState::Playing => "PLAYING",
            SessionState::AwaitingAnswer(_) => "CHALLENGE",
            SessionState::GameOver => "GAME OVER",
        }
        .to_owned()
    }),
    Row::Empty,
    Row::LabelValue("SCORE:", &|session| session.score().to_string()),
    Row::LabelValue("DROPS:", &|session| session.drop_count().to_string()),
    Row::Empty,
    Row::LabelValue("SQUARE:", &|session| shape_count(session, ShapeKind::Square)),
    Row::LabelValue("L-SHAPE:", &|session| shape_count(session, ShapeKind::LShape)),
    Row::LabelValue("T-SHAPE:", &|session| shape_count(session, ShapeKind::TShape)),
    Row::LabelValue("LINE:", &|session| shape_count(session, ShapeKind::Line)),
    Row::Empty,
    Row::FullLabel("SEED:"),
    Row::FullValue(&|session| session.seed().to_string()),
];

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let value = |f: &dyn Fn(&GameSession) -> String| {
            self.session.map_or_else(|| "-".to_owned(), f)
        };

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style::LABEL)
                        .left_aligned()
                        .render(area, buf);
                }
                Row::FullValue(f) => {
                    Line::styled(value(f), style).right_aligned().render(area, buf);
                }
                Row::LabelValue(label, f) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style::LABEL)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(f), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
