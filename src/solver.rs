
pub mod legality;
pub mod placement;
pub mod score;
pub mod best_move;

use super::{Letter, Location};

pub use legality::{check_word, check_letters, partition, Partition};
pub use placement::place_word;
pub use score::score;
pub use best_move::{best_move, BestMove};

/// A committed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub word: String,
    pub location: Location,
    /// Points for the tiles that came from the rack
    pub score: u32,
    /// Letters of the word that were already on the board
    pub existing: Vec<Letter>,
    /// Number of squares filled by this move
    pub new_tiles: usize,
}


#[cfg(test)]
pub(crate) mod test_support {
    use crate::{Board, Letter, Location, Direction, Rack, Lexicon, Rules, ScoreTable};

    pub fn letters(s: &str) -> Vec<Letter> {
        s.bytes().map(Letter).collect()
    }

    pub fn rack(s: &str) -> Rack {
        Rack::from_letters(letters(s))
    }

    pub fn rules(words: &[&str]) -> Rules<ScoreTable> {
        Rules {
            scoring: ScoreTable::english(),
            lexicon: Lexicon::from_words(words).unwrap(),
        }
    }

    pub fn h(row: usize, col: usize) -> Location {
        Location::new(row, col, Direction::Horizontal)
    }

    pub fn v(row: usize, col: usize) -> Location {
        Location::new(row, col, Direction::Vertical)
    }

    /// A board of `size` with each word written at its location, without any rule check
    pub fn board_with(size: usize, words: &[(&str, Location)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for (word, loc) in words {
            let place = loc.resolve(size, word.len()).unwrap();
            for (pos, l) in place.squares(word.len()).zip(letters(word)) {
                board.place(pos, l).unwrap();
            }
        }
        board
    }
}
