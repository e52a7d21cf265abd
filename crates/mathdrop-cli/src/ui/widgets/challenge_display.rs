use mathdrop_engine::Challenge;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Clear, Widget},
};

use crate::ui::widgets::style;

/// Popup asking the pending challenge question.
///
/// Shows the prompt, the answer typed so far and a one-line hint.
#[derive(Debug)]
pub struct ChallengeDisplay<'a> {
    challenge: &'a Challenge,
    input: &'a str,
    block: Option<BlockWidget<'a>>,
}

const INPUT_WIDTH: u16 = 24;

impl<'a> ChallengeDisplay<'a> {
    pub fn new(challenge: &'a Challenge, input: &'a str) -> Self {
        Self {
            challenge,
            input,
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
        INPUT_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        5 + super::block_vertical_margin(self.block.as_ref())
    }

    /// Centers the popup inside `area`.
    pub fn popup_area(&self, area: Rect) -> Rect {
        let [area] = area.layout(
            &Layout::horizontal([Constraint::Length(self.width())]).flex(Flex::Center),
        );
        let [area] =
            area.layout(&Layout::vertical([Constraint::Length(self.height())]).flex(Flex::Center));
        area
    }
}

impl Widget for ChallengeDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Clear.render(area, buf);
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let [prompt_area, _, input_area, _, hint_area] =
            area.layout(&Layout::vertical([Constraint::Length(1); 5]));

        Line::styled(self.challenge.prompt(), style::WARNING)
            .centered()
            .render(prompt_area, buf);
        Line::from(vec![
            Span::styled("> ", style::LABEL),
            Span::styled(self.input, style::INFO.add_modifier(Modifier::BOLD)),
            Span::styled("_", style::LABEL),
        ])
        .centered()
        .render(input_area, buf);
        Line::styled("Enter to answer", style::LABEL)
            .centered()
            .render(hint_area, buf);
    }
}
