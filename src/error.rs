
use thiserror::Error;

use super::{Letter, Position};

pub type Result<T> = std::result::Result<T, Error>;

/// Why a word was refused before any placement was attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalWordReason {
    /// Contains something else than letters (or is empty)
    NotAlphabetic,
    /// Not part of the lexicon
    NotInLexicon,
    /// The opening word must come from the rack alone, these letters are lacking
    NeedsBoard(Vec<Letter>),
    /// The rack covers the word, but none of its letters is on the board to connect to
    NoAnchor,
    /// Neither the rack nor the board can provide these letters
    MissingLetters(Vec<Letter>),
}

impl std::fmt::Display for IllegalWordReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn letters(l: &[Letter]) -> String {
            l.iter().map(|l| l.to_char()).collect()
        }
        match self {
            Self::NotAlphabetic => write!(f, "a word may only contain letters"),
            Self::NotInLexicon => write!(f, "the word is not in the dictionary"),
            Self::NeedsBoard(missing) => write!(f, "the first word must be made from your tiles only (missing {})", letters(missing)),
            Self::NoAnchor => write!(f, "the word must use at least one letter already on the board"),
            Self::MissingLetters(missing) => write!(f, "you must use letters from the tiles or the board (missing {})", letters(missing)),
        }
    }
}

#[derive(Error, Debug)]
/// Everything that can go wrong while setting up or playing a game
pub enum Error {
    /// The board size is outside of the allowed range
    #[error("Board size should be between {min} and {max}, got {size}")]
    Config { size: usize, min: usize, max: usize },

    /// A coordinate is out of the board, or the word runs off its edge
    #[error("{0}")]
    Bounds(String),

    /// The location could not be read as `row:col:H` or `row:col:V`
    #[error("Location should be in the form of _:_:H or _:_:V ({0})")]
    LocationFormat(String),

    #[error("Invalid word: {0}")]
    IllegalWord(IllegalWordReason),

    /// An occupied square holds a different letter than the word needs
    #[error("You must not overwrite existing tiles on the board! ({found} at {pos} where {wanted} is needed)")]
    Overwrite { pos: Position, found: Letter, wanted: Letter },

    /// An empty square needs a letter the rack does not have
    #[error("You must only use the existing or given tiles! (no {letter} left for {pos})")]
    TileSource { pos: Position, letter: Letter },

    /// The word does not reuse any tile already on the board
    #[error("You must use at least one existing tile!")]
    Disconnected,

    /// The letter is not in the rack
    #[error("Letter {0} is not in the rack")]
    NotFound(Letter),

    /// The letter has no value in the score table
    #[error("No score for letter {0}")]
    ScoreLookup(Letter),

    /// A record of a static table could not be parsed
    #[error("Malformed {table} entry at line {line}: \"{content}\"")]
    Malformed { table: &'static str, line: usize, content: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Fst(#[from] fst::Error),
}

impl Error {
    /// The session cannot continue after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ScoreLookup(_) | Self::Malformed { .. } | Self::Io(_) | Self::Fst(_))
    }

    /// The player has to choose a new word (and location), not only a new location
    pub fn needs_new_word(&self) -> bool {
        matches!(
            self,
            Self::IllegalWord(_) | Self::Overwrite { .. } | Self::TileSource { .. } | Self::Disconnected | Self::NotFound(_)
        )
    }
}


#[test]
fn error_policy() {
    let pos = Position { row: 0, col: 0 };
    assert!(Error::ScoreLookup(Letter(b'Q')).is_fatal());
    assert!(!Error::ScoreLookup(Letter(b'Q')).needs_new_word());
    assert!(Error::Disconnected.needs_new_word());
    assert!(Error::Overwrite { pos, found: Letter(b'C'), wanted: Letter(b'D') }.needs_new_word());
    assert!(Error::TileSource { pos, letter: Letter(b'Z') }.needs_new_word());
    assert!(Error::IllegalWord(IllegalWordReason::NotInLexicon).needs_new_word());

    let bounds = Error::Bounds("out".to_string());
    assert!(!bounds.is_fatal());
    assert!(!bounds.needs_new_word());
    assert!(!Error::Config { size: 3, min: 5, max: 15 }.needs_new_word());
    assert!(!Error::LocationFormat("x".to_string()).is_fatal());
}
