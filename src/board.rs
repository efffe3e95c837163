//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
///
/// X moves first and is the human seat in the console game; O is the
/// computer seat the search plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Classification of a board position
///
/// `Won(Player::X)` and `Won(Player::O)` are the first- and second-player
/// wins; `Draw` requires a full board with no winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    InProgress,
    Won(Player),
    Draw,
}

/// The 3x3 grid of cells in row-major order (position = row * 3 + column).
///
/// The board carries no turn marker; whose move it is belongs to the caller
/// (the game loop, or the side-to-move argument of the search functions).
/// This type implements `Copy` since it's only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters after whitespace is
    /// filtered out; `.` (or a space) marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters are present
    /// or any character is not a valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::{Board, Cell};
    ///
    /// let board = Board::from_string("XO. .X. ..O").unwrap();
    /// assert_eq!(board.get(0), Cell::X);
    /// assert_eq!(board.get(4), Cell::X);
    /// assert_eq!(board.get(8), Cell::O);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, position: usize) -> bool {
        self.cells[position] == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `player`'s mark and return the new board
    ///
    /// # Errors
    ///
    /// Returns error if the position is out of bounds or already occupied.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, position: usize, player: Player) -> Result<Board, crate::Error> {
        if position >= 9 {
            return Err(crate::Error::InvalidPosition { position });
        }
        if !self.is_empty(position) {
            return Err(crate::Error::InvalidMove { position });
        }

        let mut next = *self;
        next.cells[position] = player.to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Classify the position as won, drawn, or still in progress.
    ///
    /// Total over any 3x3 grid, including positions not reachable by legal
    /// play; the search relies on this when testing hypothetical moves.
    pub fn verdict(&self) -> Verdict {
        if let Some(winner) = self.winner() {
            return Verdict::Won(winner);
        }
        if self.cells.contains(&Cell::Empty) {
            Verdict::InProgress
        } else {
            Verdict::Draw
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.verdict() != Verdict::InProgress
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.verdict() == Verdict::Draw
    }

    /// Infer whose turn it is from the piece counts, assuming X opened.
    ///
    /// # Errors
    ///
    /// Returns error if the counts cannot arise from alternating X-first
    /// play (difference outside 0..=1).
    pub fn turn(&self) -> Result<Player, crate::Error> {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();

        if x_count == o_count {
            Ok(Player::X)
        } else if x_count == o_count + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts { x_count, o_count })
        }
    }

    /// Check that the position is reachable by legal alternating play.
    ///
    /// Rejects impossible piece counts, boards where both players hold a
    /// winning line, and winners whose piece count says they did not move
    /// last. Analyst-supplied positions go through this before search.
    pub fn is_valid(&self) -> bool {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();

        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }
        // A winner must have placed the last mark
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        true
    }

    /// Get the 9-character string representation used as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_apply() {
        let board = Board::new();

        let next = board.apply(4, Player::X).unwrap();
        assert_eq!(next.cells[4], Cell::X);
        // original untouched
        assert_eq!(board.cells[4], Cell::Empty);

        let occupied = next.apply(4, Player::O);
        assert!(occupied.is_err());
        assert!(occupied.unwrap_err().to_string().contains("occupied"));

        let out_of_bounds = next.apply(9, Player::O);
        assert!(out_of_bounds.is_err());
    }

    #[test]
    fn test_legal_moves() {
        let mut board = Board::new();
        assert_eq!(board.legal_moves().len(), 9);

        board = board.apply(0, Player::X).unwrap();
        assert_eq!(board.legal_moves().len(), 8);
        assert!(!board.legal_moves().contains(&0));

        // No legal moves once the game is decided
        let won = Board::from_string("XXXOO....").unwrap();
        assert!(won.legal_moves().is_empty());
    }

    #[test]
    fn test_win_detection_rows_columns_diagonals() {
        let row = Board::from_string("XXXOO....").unwrap();
        assert_eq!(row.winner(), Some(Player::X));

        let column = Board::from_string("XOXXO..O.").unwrap();
        assert_eq!(column.winner(), Some(Player::O));

        let diagonal = Board::from_string("X.O.XO..X").unwrap();
        assert_eq!(diagonal.winner(), Some(Player::X));

        let anti_diagonal = Board::from_string("X.OXO.O.X").unwrap();
        assert_eq!(anti_diagonal.winner(), Some(Player::O));
    }

    #[test]
    fn test_verdict_classification() {
        assert_eq!(Board::new().verdict(), Verdict::InProgress);

        let won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(won.verdict(), Verdict::Won(Player::X));

        // X O X / X O O / O X X - full board, no line
        let drawn = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(drawn.verdict(), Verdict::Draw);
        assert!(drawn.is_draw());
        assert!(drawn.is_terminal());
    }

    #[test]
    fn test_verdict_on_unreachable_grid() {
        // All X - never reachable, still classifiable
        let board = Board::from_string("XXXXXXXXX").unwrap();
        assert_eq!(board.verdict(), Verdict::Won(Player::X));
        assert!(!board.is_valid());
    }

    #[test]
    fn test_turn_inference() {
        assert_eq!(Board::new().turn().unwrap(), Player::X);

        let one_mark = Board::from_string("X........").unwrap();
        assert_eq!(one_mark.turn().unwrap(), Player::O);

        let two_marks = Board::from_string("XO.......").unwrap();
        assert_eq!(two_marks.turn().unwrap(), Player::X);

        let impossible = Board::from_string("XX.......").unwrap();
        assert!(impossible.turn().is_err());
    }

    #[test]
    fn test_is_valid_rejects_double_winner() {
        // X wins top row and O wins bottom row at once
        let board = Board::from_string("XXX...OOO").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_is_valid_winner_parity() {
        // X won but piece counts say O moved last
        let board = Board::from_string("XXXOO.O..").unwrap();
        assert!(!board.is_valid());

        let legitimate = Board::from_string("XXXOO....").unwrap();
        assert!(legitimate.is_valid());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO..X...O").unwrap();
        let parsed = Board::from_string(&board.encode()).unwrap();
        assert_eq!(parsed, board);
        assert_eq!(board.encode(), "XO..X...O");
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }

    #[test]
    fn test_empty_positions() {
        let board = Board::new().apply(4, Player::X).unwrap();
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&4));
        assert!(empty.contains(&0));
    }
}
