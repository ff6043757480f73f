//! Board rendering for the Tic-Tac-Toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::board::{Board, Cell, Pos};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cells per side of the board being drawn
    size: usize,
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            size: 3,
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);

        self.size = board.size();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        self.draw_marks(&painter, board);
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;
        if accepts_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                if board.is_empty(board_pos) {
                    painter.rect_filled(
                        self.cell_rect(board_pos).shrink(4.0),
                        CornerRadius::same(6),
                        hover_valid(),
                    );
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Inner grid lines only, no outer frame
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.size as f32 * self.cell_size;
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);

        for i in 1..self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)],
                stroke,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for idx in 0..self.size * self.size {
            let pos = Pos::from_index(idx, self.size);
            match board.get(pos) {
                Cell::X => self.draw_x(painter, pos),
                Cell::O => self.draw_o(painter, pos),
                Cell::Empty => {}
            }
        }
    }

    fn draw_x(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let r = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_WIDTH_RATIO, X_MARK);
        painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
        painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
    }

    fn draw_o(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let stroke = Stroke::new(self.cell_size * MARK_WIDTH_RATIO, O_MARK);
        painter.circle_stroke(center, self.cell_size * MARK_RATIO, stroke);
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.rect_stroke(
            self.cell_rect(pos).shrink(6.0),
            CornerRadius::same(6),
            Stroke::new(2.0, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    /// Stroke through the first and last cell of the completed line
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
            let stroke = Stroke::new(self.cell_size * MARK_WIDTH_RATIO * 0.8, WIN_HIGHLIGHT);
            painter.line_segment([self.board_to_screen(first), self.board_to_screen(last)], stroke);
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(size: usize) -> BoardView {
        BoardView {
            size,
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(100.0 * size as f32 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_board_roundtrip() {
        let view = view(4);
        for idx in 0..16 {
            let pos = Pos::from_index(idx, 4);
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_margin_is_outside_board() {
        let view = view(3);
        assert_eq!(view.screen_to_board(Pos2::new(5.0, 5.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(BOARD_MARGIN + 301.0, 50.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(BOARD_MARGIN + 250.0, BOARD_MARGIN + 10.0)), Some(Pos::new(0, 2)));
    }
}
