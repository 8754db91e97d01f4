
pub mod solver;
pub mod score_rules;
pub mod error;
pub mod lexicon;
pub mod rack;
pub mod game;

use std::fmt;

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 15;
pub const DEFAULT_BOARD_SIZE: usize = 5;

pub use score_rules::{LetterScoring, ScoreTable, EnglishScrabbleScoring};
pub use error::{Error, IllegalWordReason, Result};
pub use lexicon::Lexicon;
pub use rack::{Rack, RackSnapshot, TileSupply, RACK_CAPACITY};
pub use game::Game;

/// What is needed to judge and score a word
pub struct Rules<Scoring: LetterScoring> {
    pub scoring: Scoring,

    /// The words that can be played
    pub lexicon: Lexicon,
}

// letters are stored as uppercase ascii bytes
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(pub u8);

impl Letter {
    /// Upper-cases ascii letters, None for anything else
    pub fn from_char(c: char) -> Option<Letter> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    pub fn to_char(self) -> char {
        self.0 as char
    }

    /// The letters of a word, None if something is not a letter
    pub fn parse_word(word: &str) -> Option<Vec<Letter>> {
        word.chars().map(Letter::from_char).collect()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
         write!(f, "{}", (self.0 as char).escape_default())
    }
}
impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
         write!(f, "{}", self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Square {
    Empty,
    Filled(Letter),
}

impl Square {
    pub fn letter(&self) -> Option<Letter> {
        match self {
            Square::Filled(letter) => Some(*letter),
            Square::Empty => None
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    Horizontal,
}

/// Zero-based coordinates of a square
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    /// Displayed one-based, the way players enter it
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.col + 1)
    }
}

impl std::ops::Index<Direction> for Position {
    type Output = usize;
    /// The coordinate that changes in that direction
    fn index(&self, dir: Direction) -> &Self::Output {
        match dir {
            Direction::Vertical => &self.row,
            Direction::Horizontal => &self.col,
        }
    }
}

impl std::ops::IndexMut<Direction> for Position {
    /// The coordinate that changes in that direction
    fn index_mut(&mut self, dir: Direction) -> &mut Self::Output {
        match dir {
            Direction::Vertical => &mut self.row,
            Direction::Horizontal => &mut self.col,
        }
    }
}

/// A resolved start square and the direction in which a word is written
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Placement(pub Position, pub Direction);

impl Placement {
    pub fn next(mut self) -> Self {
        self.0[self.1] = self.0[self.1].saturating_add(1);
        self
    }

    /// The `len` squares covered by a word starting here
    pub fn squares(self, len: usize) -> impl Iterator<Item=Position> {
        let mut head = self;
        (0..len).map(move |_| {
            let pos = head.0;
            head = head.next();
            pos
        })
    }
}

/// Where the player asks for a word to go: one-based row and column, and a direction
///
/// Read from and displayed as `row:col:H` or `row:col:V`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
    pub dir: Direction,
}

impl Location {
    pub fn new(row: usize, col: usize, dir: Direction) -> Self {
        Self { row, col, dir }
    }

    /// Checks that a word of `len` letters starting here stays on a board of `size`
    pub fn resolve(&self, size: usize, len: usize) -> Result<Placement> {
        if self.row == 0 || self.col == 0 || self.row > size || self.col > size {
            return Err(Error::Bounds("Please select a location within the board!".to_string()))
        }
        let start = Position { row: self.row - 1, col: self.col - 1 };
        if start[self.dir] + len > size {
            return Err(Error::Bounds("The word could not fit into the board!".to_string()))
        }
        Ok(Placement(start, self.dir))
    }
}

impl From<Placement> for Location {
    fn from(place: Placement) -> Self {
        Self { row: place.0.row + 1, col: place.0.col + 1, dir: place.1 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dir = match self.dir {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        };
        write!(f, "{}:{}:{}", self.row, self.col, dir)
    }
}

impl std::str::FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s.split(':').map(str::trim).collect::<Vec<_>>();
        if parts.len() != 3 {
            return Err(Error::LocationFormat(format!("expected 3 parts, got {}", parts.len())))
        }
        let coord = |part: &str| part.parse::<usize>()
            .map_err(|_| Error::LocationFormat("Location should be numeric!".to_string()));
        let row = coord(parts[0])?;
        let col = coord(parts[1])?;
        let dir = match parts[2] {
            "H" | "h" => Direction::Horizontal,
            "V" | "v" => Direction::Vertical,
            other => return Err(Error::LocationFormat(format!("Invalid direction {:?}!", other))),
        };
        Ok(Location { row, col, dir })
    }
}

/// The grid of squares, and how many of them hold a letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letter_table: Table<Square>,
    occupied: usize,
}

impl Board {
    /// An empty board of `size`×`size` squares
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE || size > MAX_BOARD_SIZE {
            return Err(Error::Config { size, min: MIN_BOARD_SIZE, max: MAX_BOARD_SIZE })
        }
        Ok(Self {
            letter_table: Table::fill_with(Square::Empty, size),
            occupied: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.letter_table.size()
    }

    pub fn letter_at(&self, pos: Position) -> Result<Square> {
        self.letter_table.get(pos).copied()
            .ok_or_else(|| Error::Bounds(format!("{} is outside of the board", pos)))
    }

    /// Stores a letter without any rule check
    ///
    /// Filling an empty square counts it as occupied
    pub fn place(&mut self, pos: Position, letter: Letter) -> Result<()> {
        let square = self.letter_table.get_mut(pos)
            .ok_or_else(|| Error::Bounds(format!("{} is outside of the board", pos)))?;
        if *square == Square::Empty {
            self.occupied += 1;
        }
        *square = Square::Filled(letter);
        Ok(())
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.size() * self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Every filled square, row by row
    pub fn filled(&self) -> impl Iterator<Item=(Position, Letter)> + '_ {
        self.letter_table.iter().filter_map(|(pos, square)| square.letter().map(|l| (pos, l)))
    }

    /// Whether the letter is somewhere on the board
    pub fn contains(&self, letter: Letter) -> bool {
        self.filled().any(|(_, l)| l == letter)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.size();
        write!(f, "  |")?;
        for col in 0..size {
            write!(f, "{:^3}|", col + 1)?;
        }
        writeln!(f)?;
        let separator = format!("--|{}", "---|".repeat(size));
        writeln!(f, "{}", separator)?;
        for row in 0..size {
            write!(f, "{:<2}|", row + 1)?;
            for col in 0..size {
                match self.letter_table.get(Position { row, col }) {
                    Some(Square::Filled(l)) => write!(f, "{:^3}|", l.to_char())?,
                    _ => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    squares: Vec<Vec<T>>
}

impl<T> Table<T> {
    pub fn fill_with(el: T, size: usize) -> Self where T: Clone {
        Self {
            squares: vec![vec![el; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.squares.len()
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.squares.get(pos.row)?.get(pos.col)
    }
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.squares.get_mut(pos.row)?.get_mut(pos.col)
    }

    pub fn iter(&self) -> impl Iterator<Item=(Position, &T)> {
        self.squares.iter().enumerate().flat_map(|(row, line)|
            line.iter().enumerate().map(move |(col, el)| (Position { row, col }, el))
        )
    }
}


#[test]
fn board_size_limits() {
    assert!(matches!(Board::new(4), Err(Error::Config { size: 4, .. })));
    assert!(matches!(Board::new(16), Err(Error::Config { size: 16, .. })));

    let board = Board::new(5).unwrap();
    assert_eq!(board.size(), 5);
    assert_eq!(board.occupied_count(), 0);
    assert!(!board.is_full());
    assert!(Board::new(15).is_ok());
}

#[test]
fn board_place_and_read() {
    let mut board = Board::new(5).unwrap();
    let pos = Position { row: 2, col: 4 };

    assert_eq!(board.letter_at(pos).unwrap(), Square::Empty);
    board.place(pos, Letter(b'Q')).unwrap();
    assert_eq!(board.letter_at(pos).unwrap(), Square::Filled(Letter(b'Q')));
    assert_eq!(board.occupied_count(), 1);

    // storing on an already filled square does not count twice
    board.place(pos, Letter(b'Q')).unwrap();
    assert_eq!(board.occupied_count(), 1);
    assert!(board.contains(Letter(b'Q')));
    assert!(!board.contains(Letter(b'A')));

    assert!(matches!(board.letter_at(Position { row: 5, col: 0 }), Err(Error::Bounds(_))));
    assert!(matches!(board.place(Position { row: 0, col: 5 }, Letter(b'A')), Err(Error::Bounds(_))));
}

#[test]
fn board_full() {
    let mut board = Board::new(5).unwrap();
    for row in 0..5 {
        for col in 0..5 {
            assert!(!board.is_full());
            board.place(Position { row, col }, Letter(b'E')).unwrap();
        }
    }
    assert_eq!(board.occupied_count(), 25);
    assert!(board.is_full());
}

#[test]
fn location_parse_and_display() {
    let loc: Location = " 2 : 3 :V".parse().unwrap();
    assert_eq!(loc, Location::new(2, 3, Direction::Vertical));
    assert_eq!(loc.to_string(), "2:3:V");
    assert_eq!("1:1:h".parse::<Location>().unwrap(), Location::new(1, 1, Direction::Horizontal));

    assert!(matches!("1:1".parse::<Location>(), Err(Error::LocationFormat(_))));
    assert!(matches!("a:1:H".parse::<Location>(), Err(Error::LocationFormat(_))));
    assert!(matches!("1:1:D".parse::<Location>(), Err(Error::LocationFormat(_))));
}

#[test]
fn location_bounds() {
    let ok = Location::new(1, 3, Direction::Horizontal).resolve(5, 3).unwrap();
    assert_eq!(ok, Placement(Position { row: 0, col: 2 }, Direction::Horizontal));
    assert_eq!(ok.squares(3).collect::<Vec<_>>(), vec![
        Position { row: 0, col: 2 },
        Position { row: 0, col: 3 },
        Position { row: 0, col: 4 },
    ]);

    assert!(matches!(Location::new(0, 1, Direction::Vertical).resolve(5, 1), Err(Error::Bounds(_))));
    assert!(matches!(Location::new(6, 1, Direction::Vertical).resolve(5, 1), Err(Error::Bounds(_))));
    assert!(matches!(Location::new(1, 4, Direction::Horizontal).resolve(5, 3), Err(Error::Bounds(_))));
    assert!(matches!(Location::new(4, 1, Direction::Vertical).resolve(5, 3), Err(Error::Bounds(_))));
    assert!(Location::new(4, 1, Direction::Horizontal).resolve(5, 3).is_ok());
}

#[test]
fn board_rendering() {
    let mut board = Board::new(5).unwrap();
    board.place(Position { row: 0, col: 0 }, Letter(b'C')).unwrap();
    let shown = board.to_string();
    let lines = shown.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "  | 1 | 2 | 3 | 4 | 5 |");
    assert_eq!(lines[1], "--|---|---|---|---|---|");
    assert_eq!(lines[2], "1 | C |   |   |   |   |");
    assert_eq!(lines.len(), 2 + 2 * 5);
}
