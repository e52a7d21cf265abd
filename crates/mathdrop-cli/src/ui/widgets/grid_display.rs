use std::iter;

use mathdrop_engine::{ColorField, GRID_SIZE, Grid, Position};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::CellDisplay;

/// Draws the occupancy grid with per-cell colors.
///
/// Rendering never touches session state: it only reads the grid and the
/// color field it is given.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    colors: &'a ColorField,
    cursor: Option<Position>,
    show_dots: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid, colors: &'a ColorField) -> Self {
        Self {
            grid,
            colors,
            cursor: None,
            show_dots: true,
            block: None,
        }
    }

    pub fn cursor(self, cursor: Position) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn show_dots(self, show_dots: bool) -> Self {
        Self { show_dots, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        let cols = u16::try_from(GRID_SIZE).unwrap();
        cols * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let rows = u16::try_from(GRID_SIZE).unwrap();
        rows * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell_display(&self, row: usize, col: usize) -> CellDisplay {
        let cell = if self.grid.is_occupied(row, col) {
            CellDisplay::filled(self.colors.cell(row, col))
        } else {
            CellDisplay::empty(self.show_dots)
        };
        if self.cursor == Some(Position::new(row, col)) {
            cell.with_cursor()
        } else {
            cell
        }
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..GRID_SIZE).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints =
            (0..GRID_SIZE).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<GRID_SIZE>(&vertical)
            .into_iter()
            .map(|row| row.layout::<GRID_SIZE>(&horizontal));

        for (row, grid_row) in grid_cells.enumerate() {
            for (col, grid_cell) in iter::zip(0.., grid_row) {
                self.cell_display(row, col).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mathdrop_engine::{GameSession, ShapeKind};

    use super::*;

    fn render(widget: &GridDisplay<'_>) -> Buffer {
        let area = Rect::new(0, 0, widget.width(), widget.height());
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_size_includes_border() {
        let grid = Grid::EMPTY;
        let colors = ColorField::WHITE;
        let widget = GridDisplay::new(&grid, &colors);
        assert_eq!((widget.width(), widget.height()), (20, 10));
        let widget = widget.block(BlockWidget::bordered());
        assert_eq!((widget.width(), widget.height()), (22, 12));
    }

    #[test]
    fn test_occupied_cells_use_their_color() {
        let mut session = GameSession::new();
        let outcome = session.attempt_drop_with(ShapeKind::Square, Position::new(8, 0));
        let mathdrop_engine::DropOutcome::Placed(placement) = outcome else {
            panic!("expected placement, got {outcome:?}");
        };
        let [r, g, b] = placement.color.to_rgb8();

        let widget = GridDisplay::new(session.grid(), session.colors());
        let buf = render(&widget);

        assert_eq!(buf[(0, 8)].bg, ratatui::style::Color::Rgb(r, g, b));
        assert_eq!(buf[(3, 9)].bg, ratatui::style::Color::Rgb(r, g, b));
        // the dot is centered in the right half of a 2-wide cell
        assert_eq!(buf[(4, 8)].symbol(), " ");
        assert_eq!(buf[(5, 8)].symbol(), ".");
    }

    #[test]
    fn test_cursor_marker() {
        let grid = Grid::EMPTY;
        let colors = ColorField::WHITE;
        let widget = GridDisplay::new(&grid, &colors)
            .cursor(Position::new(2, 3))
            .show_dots(false);
        let buf = render(&widget);

        assert_eq!(buf[(6, 2)].symbol(), "[");
        assert_eq!(buf[(7, 2)].symbol(), "]");
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
