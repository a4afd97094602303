use engine::rect::Rect;

pub const BOARD_WIDTH: i32 = 1200;
pub const BOARD_HEIGHT: i32 = 1130;

pub const PIECE_START_X: i32 = 280;
pub const PIECE_START_Y: i32 = 95;
/// Line pieces start on an even rotation, i.e. lying flat.
pub const PIECE_START_ROTATION: u8 = 2;

pub const LINE_LENGTH: i32 = 159;
pub const LINE_THICKNESS: i32 = 43;

/// Horizontal distance of one left/right move.
pub const MOVE_STEP: i32 = 10;
/// Moves keep `x + width` strictly inside these screen columns.
pub const LEFT_LIMIT: i32 = 104;
pub const RIGHT_LIMIT: i32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_rotation(rotation: u8) -> Self {
        if rotation % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A line piece. Width, height and sprite all follow the parity of the rotation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub x: i32,
    pub y: i32,
    pub placed: bool,
    rotation: u8,
}

impl Default for Piece {
    fn default() -> Self {
        Self {
            x: PIECE_START_X,
            y: PIECE_START_Y,
            placed: false,
            rotation: PIECE_START_ROTATION,
        }
    }
}

impl Piece {
    pub fn line() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_rotation(self.rotation)
    }

    pub fn width(&self) -> i32 {
        match self.orientation() {
            Orientation::Horizontal => LINE_LENGTH,
            Orientation::Vertical => LINE_THICKNESS,
        }
    }

    pub fn height(&self) -> i32 {
        match self.orientation() {
            Orientation::Horizontal => LINE_THICKNESS,
            Orientation::Vertical => LINE_LENGTH,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width() as u32, self.height() as u32)
    }

    pub fn move_right(&mut self) {
        self.x += MOVE_STEP;
    }

    pub fn move_left(&mut self) {
        self.x -= MOVE_STEP;
    }

    pub fn descend(&mut self) {
        self.y = self.y.saturating_add(1);
    }

    pub fn rotate(&mut self) {
        // u8 wraps at an even number, so parity survives the wrap.
        self.rotation = self.rotation.wrapping_add(1);
    }
}

/// Ordered piece list. The falling piece is the first one not yet placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pieces {
    pieces: Vec<Piece>,
}

impl Pieces {
    pub fn add_piece(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn falling_piece(&self) -> Option<&Piece> {
        self.pieces.iter().find(|p| !p.placed)
    }

    pub fn falling_piece_mut(&mut self) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| !p.placed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetrisState {
    pieces: Pieces,
    ticks: u64,
}

impl Default for TetrisState {
    fn default() -> Self {
        Self::new()
    }
}

impl TetrisState {
    /// A board holding a single line piece at the spawn point.
    pub fn new() -> Self {
        let mut pieces = Pieces::default();
        pieces.add_piece(Piece::line());
        Self::with_pieces(pieces)
    }

    pub fn with_pieces(pieces: Pieces) -> Self {
        Self { pieces, ticks: 0 }
    }

    pub fn pieces(&self) -> &Pieces {
        &self.pieces
    }

    pub fn falling_piece(&self) -> Option<&Piece> {
        self.pieces.falling_piece()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Drops the falling piece by one pixel. There is no floor.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if let Some(piece) = self.pieces.falling_piece_mut() {
            piece.descend();
        }
    }

    /// Returns whether the piece moved.
    pub fn move_right(&mut self) -> bool {
        match self.pieces.falling_piece_mut() {
            Some(piece) if piece.x + piece.width() + MOVE_STEP < RIGHT_LIMIT => {
                piece.move_right();
                true
            }
            _ => false,
        }
    }

    /// Returns whether the piece moved. The bound is checked against the right edge, as for
    /// right moves.
    pub fn move_left(&mut self) -> bool {
        match self.pieces.falling_piece_mut() {
            Some(piece) if piece.x + piece.width() - MOVE_STEP > LEFT_LIMIT => {
                piece.move_left();
                true
            }
            _ => false,
        }
    }

    pub fn rotate(&mut self) -> bool {
        match self.pieces.falling_piece_mut() {
            Some(piece) => {
                piece.rotate();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_flat_line_piece() {
        let s = TetrisState::new();
        assert_eq!(s.pieces().pieces().len(), 1);
        let piece = s.falling_piece().expect("falling piece");
        assert_eq!((piece.x, piece.y), (280, 95));
        assert_eq!(piece.orientation(), Orientation::Horizontal);
        assert_eq!((piece.width(), piece.height()), (159, 43));
    }

    #[test]
    fn rotation_toggles_dimensions() {
        let mut piece = Piece::line();
        piece.rotate();
        assert_eq!(piece.orientation(), Orientation::Vertical);
        assert_eq!((piece.width(), piece.height()), (43, 159));
        piece.rotate();
        assert_eq!(piece.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn rotation_parity_survives_wrapping() {
        let mut piece = Piece::line();
        for _ in 0..256 {
            piece.rotate();
        }
        assert_eq!(piece.rotation(), PIECE_START_ROTATION);
        assert_eq!(piece.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn falling_piece_skips_placed_pieces() {
        let mut pieces = Pieces::default();
        pieces.add_piece(Piece {
            placed: true,
            ..Piece::line()
        });
        pieces.add_piece(Piece {
            x: 400,
            ..Piece::line()
        });
        assert_eq!(pieces.falling_piece().map(|p| p.x), Some(400));
    }

    #[test]
    fn tick_only_moves_the_falling_piece() {
        let mut pieces = Pieces::default();
        pieces.add_piece(Piece {
            placed: true,
            ..Piece::line()
        });
        pieces.add_piece(Piece::line());
        let mut s = TetrisState::with_pieces(pieces);
        s.tick();
        assert_eq!(s.pieces().pieces()[0].y, PIECE_START_Y);
        assert_eq!(s.pieces().pieces()[1].y, PIECE_START_Y + 1);
    }
}
