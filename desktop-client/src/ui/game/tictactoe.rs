use tictactoe_common::games::tictactoe::{BOARD_SIZE, BOARD_WIDTH, Board, Mark, TicTacToeGameState};

pub struct TicTacToeGameUi;

impl TicTacToeGameUi {
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 4.0;
    const MARK_PADDING: f32 = 0.15;
    const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(127, 127, 127);

    /// Draws the board into all of the available space and returns the cell
    /// clicked this frame, if any. Clicks are only reported when `accepts_input`.
    pub fn render_board(
        &self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        accepts_input: bool,
    ) -> Option<usize> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Self::BACKGROUND);

        let hovered = if accepts_input {
            hovered_cell(rect, response.hover_pos(), &state.board)
        } else {
            None
        };

        if let Some(cell) = hovered {
            painter.rect_filled(
                cell_rect(rect, cell),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        Self::draw_grid(painter, rect);

        for (cell, mark) in state.board.cells().iter().enumerate() {
            match mark {
                Mark::Player => Self::draw_x(painter, cell_rect(rect, cell)),
                Mark::Computer => Self::draw_o(painter, cell_rect(rect, cell)),
                Mark::Empty => {}
            }
        }

        if let Some(line) = state.winning_line {
            painter.line_segment(
                [
                    cell_rect(rect, line.start()).center(),
                    cell_rect(rect, line.end()).center(),
                ],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        hovered.filter(|_| response.clicked())
    }

    fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
        let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
        let cell_width = rect.width() / BOARD_WIDTH as f32;
        let cell_height = rect.height() / BOARD_WIDTH as f32;

        for i in 1..BOARD_WIDTH {
            let x = rect.left() + i as f32 * cell_width;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);

            let y = rect.top() + i as f32 * cell_height;
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        }
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let rect = rect.shrink2(rect.size() * Self::MARK_PADDING);
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let radius = rect.width().min(rect.height()) * (0.5 - Self::MARK_PADDING);
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

/// Maps a point inside `board` to its cell, numbered row by row from the top left.
pub fn grid_position(board: egui::Rect, pos: egui::Pos2) -> Option<usize> {
    if !board.contains(pos) {
        return None;
    }

    let last = BOARD_WIDTH - 1;
    let column = ((pos.x - board.left()) / board.width() * BOARD_WIDTH as f32) as usize;
    let row = ((pos.y - board.top()) / board.height() * BOARD_WIDTH as f32) as usize;
    Some(row.min(last) * BOARD_WIDTH + column.min(last))
}

/// The empty cell under the pointer, if any.
fn hovered_cell(board_rect: egui::Rect, pointer: Option<egui::Pos2>, board: &Board) -> Option<usize> {
    pointer
        .and_then(|pos| grid_position(board_rect, pos))
        .filter(|&cell| board.is_cell_empty(cell))
}

pub fn cell_rect(board: egui::Rect, cell: usize) -> egui::Rect {
    debug_assert!(cell < BOARD_SIZE);
    let size = egui::vec2(
        board.width() / BOARD_WIDTH as f32,
        board.height() / BOARD_WIDTH as f32,
    );
    let column = (cell % BOARD_WIDTH) as f32;
    let row = (cell / BOARD_WIDTH) as f32;
    egui::Rect::from_min_size(
        egui::pos2(board.left() + column * size.x, board.top() + row * size.y),
        size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(640.0, 480.0))
    }

    #[test]
    fn test_grid_position_maps_corners_and_centre() {
        assert_eq!(grid_position(window(), egui::pos2(1.0, 1.0)), Some(0));
        assert_eq!(grid_position(window(), egui::pos2(639.0, 1.0)), Some(2));
        assert_eq!(grid_position(window(), egui::pos2(320.0, 240.0)), Some(4));
        assert_eq!(grid_position(window(), egui::pos2(1.0, 479.0)), Some(6));
        assert_eq!(grid_position(window(), egui::pos2(639.0, 479.0)), Some(8));
    }

    #[test]
    fn test_grid_position_clamps_far_edge() {
        assert_eq!(grid_position(window(), egui::pos2(640.0, 480.0)), Some(8));
    }

    #[test]
    fn test_grid_position_outside_board_is_none() {
        assert_eq!(grid_position(window(), egui::pos2(700.0, 10.0)), None);
        assert_eq!(grid_position(window(), egui::pos2(-1.0, 10.0)), None);
    }

    #[test]
    fn test_grid_position_respects_offset_board() {
        let board = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(300.0, 300.0));
        assert_eq!(grid_position(board, egui::pos2(50.0, 60.0)), None);
        assert_eq!(grid_position(board, egui::pos2(399.0, 151.0)), Some(5));
    }

    #[test]
    fn test_hovered_cell_ignores_marked_cells() {
        let mut board = Board::new();
        board.place(4, Mark::Computer).unwrap();
        let centre = cell_rect(window(), 4).center();
        let corner = cell_rect(window(), 0).center();

        assert_eq!(hovered_cell(window(), Some(centre), &board), None);
        assert_eq!(hovered_cell(window(), Some(corner), &board), Some(0));
        assert_eq!(hovered_cell(window(), None, &board), None);
        assert_eq!(hovered_cell(window(), Some(egui::pos2(-5.0, 5.0)), &board), None);
    }

    #[test]
    fn test_cell_centres_map_back_to_their_cell() {
        for cell in 0..BOARD_SIZE {
            let centre = cell_rect(window(), cell).center();
            assert_eq!(grid_position(window(), centre), Some(cell));
        }
    }
}
