use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    cell_display::*, challenge_display::*, grid_display::*, help_display::*, status_display::*,
};

mod cell_display;
mod challenge_display;
mod grid_display;
mod help_display;
mod status_display;

mod color {
    use ratatui::style::Color;

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = fg_bg(color::BLACK, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const CURSOR: Style = fg_bg(color::BLACK, color::CYAN).add_modifier(Modifier::BOLD);
    pub const LABEL: Style = Style::new().fg(color::GRAY);
    pub const KEY: Style = fg_bg(color::BLACK, color::GRAY).add_modifier(Modifier::BOLD);

    pub const INFO: Style = Style::new().fg(color::WHITE);
    pub const SUCCESS: Style = Style::new().fg(color::GREEN);
    pub const WARNING: Style = Style::new().fg(color::YELLOW);
    pub const ERROR: Style = Style::new().fg(color::RED);

    pub const PLAYING_BORDER: Color = color::WHITE;
    pub const CHALLENGE_BORDER: Color = color::YELLOW;
    pub const GAME_OVER_BORDER: Color = color::RED;
    pub const NO_SESSION_BORDER: Color = color::GRAY;
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
