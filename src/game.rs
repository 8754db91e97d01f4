
use super::{Board, Letter, LetterScoring, Location, Rack, Result, Rules, TileSupply};
use super::solver::{self, BestMove, MoveOutcome};

/// One game session: the board, the player's tiles and the score so far
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rack: Rack,
    supply: TileSupply,
    capacity: usize,
    total_score: u32,
    /// Number of committed moves
    moves: usize,
}

impl Game {
    /// A game on an empty `size`×`size` board, with a first rack dealt from `supply`
    pub fn new(size: usize, mut supply: TileSupply, capacity: usize) -> Result<Self> {
        let board = Board::new(size)?;
        let mut rack = Rack::new();
        supply.deal(&mut rack, capacity);
        Ok(Self {
            board,
            rack,
            supply,
            capacity,
            total_score: 0,
            moves: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_first_move(&self) -> bool {
        self.moves == 0
    }

    /// Every square holds a letter
    pub fn is_won(&self) -> bool {
        self.board.is_full()
    }

    pub fn tiles_left(&self) -> usize {
        self.supply.remaining()
    }

    pub fn check_word(&self, rules: &Rules<impl LetterScoring>, word: &str) -> Result<Vec<Letter>> {
        solver::check_word(word, &self.rack, &self.board, self.is_first_move(), &rules.lexicon)
    }

    /// Plays `word` at `location`, then refills the rack
    ///
    /// On error nothing changed.
    pub fn play(&mut self, rules: &Rules<impl LetterScoring>, word: &str, location: Location) -> Result<MoveOutcome> {
        let letters = self.check_word(rules, word)?;
        let first_move = self.is_first_move();
        let outcome = solver::place_word(
            &mut self.board,
            &mut self.rack,
            &letters,
            location,
            first_move,
            &rules.scoring,
        )?;

        self.total_score += outcome.score;
        self.moves += 1;
        self.supply.deal(&mut self.rack, self.capacity);

        log::info!(
            "move {}: {} at {} for {} points (total {}, {} squares filled)",
            self.moves, outcome.word, outcome.location, outcome.score, self.total_score, self.board.occupied_count(),
        );
        Ok(outcome)
    }

    pub fn best_move(&self, rules: &Rules<impl LetterScoring>) -> Result<Option<BestMove>> {
        solver::best_move(rules, &self.rack, &self.board, self.is_first_move())
    }
}


#[cfg(test)]
use super::{Error, IllegalWordReason, Lexicon, ScoreTable, RACK_CAPACITY};
#[cfg(test)]
use super::solver::test_support::{letters, h, v};

#[cfg(test)]
fn new_game(tiles: &str) -> Game {
    Game::new(5, TileSupply::new(letters(tiles)), RACK_CAPACITY).unwrap()
}

#[cfg(test)]
fn english(words: &[&str]) -> Rules<ScoreTable> {
    Rules { scoring: ScoreTable::english(), lexicon: Lexicon::from_words(words).unwrap() }
}

#[test]
fn bad_board_size() {
    assert!(matches!(
        Game::new(20, TileSupply::new(vec![]), RACK_CAPACITY),
        Err(Error::Config { size: 20, .. })
    ));
}

#[test]
fn opening_move_then_refill() {
    let rules = english(&["CAT", "COW"]);
    let mut game = new_game("CATSXXXOWE");
    assert_eq!(game.rack().tiles(), &letters("CATSXXX")[..]);
    assert!(game.is_first_move());

    let outcome = game.play(&rules, "cat", h(1, 1)).unwrap();
    assert_eq!(outcome.score, 5);
    assert_eq!(game.board().occupied_count(), 3);
    assert_eq!(game.total_score(), 5);
    assert!(!game.is_first_move());
    assert_eq!(game.rack().tiles(), &letters("SXXXOWE")[..]);
    assert_eq!(game.tiles_left(), 0);
}

#[test]
fn failed_move_changes_nothing() {
    let rules = english(&["CAT", "DOG", "TOE"]);
    let mut game = new_game("CATDOGTOEXXXX");
    game.play(&rules, "CAT", h(1, 1)).unwrap();
    let before = game.clone();

    // none of D, O and G is on the board
    let err = game.play(&rules, "DOG", v(1, 1)).unwrap_err();
    assert!(matches!(err, Error::IllegalWord(IllegalWordReason::NoAnchor)));

    // T is on the board, but the word is placed away from it
    let err = game.play(&rules, "TOE", h(3, 1)).unwrap_err();
    assert!(matches!(err, Error::Disconnected));
    assert!(err.needs_new_word());

    let err = game.play(&rules, "TOE", h(1, 4)).unwrap_err();
    assert!(matches!(err, Error::Bounds(_)));
    assert!(!err.needs_new_word());

    assert_eq!(game.board(), before.board());
    assert_eq!(game.rack(), before.rack());
    assert_eq!(game.total_score(), before.total_score());
    assert_eq!(game.moves(), 1);
}

#[test]
fn overwrite_through_game() {
    let rules = english(&["CAT", "TAD"]);
    let mut game = new_game("CATTADXX");
    game.play(&rules, "CAT", h(1, 1)).unwrap();
    assert_eq!(game.rack().tiles(), &letters("TADXX")[..]);
    let before = game.clone();

    // the T would land on the C of CAT
    let err = game.play(&rules, "TAD", h(1, 1)).unwrap_err();
    assert!(matches!(err, Error::Overwrite { .. }));
    assert_eq!(game.board(), before.board());
    assert_eq!(game.rack(), before.rack());
}

#[test]
fn total_is_sum_of_moves() {
    let rules = english(&["CAT", "COW", "TOE"]);
    let mut game = new_game("CATOWOEXXX");

    let mut sum = 0;
    for (word, loc) in &[("CAT", h(1, 1)), ("COW", v(1, 1)), ("TOE", v(1, 3))] {
        let before = game.board().occupied_count();
        let outcome = game.play(&rules, word, *loc).unwrap();
        assert_eq!(game.board().occupied_count(), before + outcome.new_tiles);
        sum += outcome.score;
    }
    assert_eq!(game.total_score(), sum);
    assert_eq!(sum, 5 + 5 + 2);
    assert_eq!(game.moves(), 3);
}

#[test]
fn hint_follows_game_state() {
    let rules = english(&["CAT", "AXE", "TAXES"]);
    let mut game = new_game("CATSXEX");

    let best = game.best_move(&rules).unwrap().unwrap();
    assert_eq!(best.word, "TAXES");
    assert_eq!(best.location, h(1, 1));

    game.play(&rules, "CAT", h(1, 1)).unwrap();
    // AXE through the A of CAT, down the second column
    let best = game.best_move(&rules).unwrap().unwrap();
    assert_eq!(best.word, "AXE");
    assert_eq!(best.score, 9);
    assert_eq!(best.location, v(1, 2));
}

#[test]
fn win_when_board_is_full() {
    let words = ["AAAAA"];
    let rules = english(&words);
    let mut game = new_game(&"A".repeat(25));
    game.play(&rules, "AAAAA", h(1, 1)).unwrap();
    for col in 1..=5 {
        assert!(!game.is_won());
        game.play(&rules, "AAAAA", v(1, col)).unwrap();
    }
    assert!(game.is_won());
    assert_eq!(game.board().occupied_count(), 25);
}
