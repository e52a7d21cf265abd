use mathdrop_engine::Rgb;
use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// One board cell drawn as a 2×1 terminal block.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn empty(show_dots: bool) -> Self {
        if show_dots {
            Self::new(style::EMPTY_DOT, ".")
        } else {
            Self::new(style::EMPTY, "")
        }
    }

    pub fn filled(color: Rgb) -> Self {
        let [r, g, b] = color.to_rgb8();
        let color = Color::Rgb(r, g, b);
        Self::new(Style::new().fg(color).bg(color), "")
    }

    /// Overlays the selection cursor, keeping the cell's color visible around it.
    pub fn with_cursor(self) -> Self {
        let style = match self.style.bg {
            Some(bg) if self.style != style::EMPTY && self.style != style::EMPTY_DOT => {
                style::CURSOR.bg(bg)
            }
            _ => style::CURSOR,
        };
        Self::new(style, "[]")
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
