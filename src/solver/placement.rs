
use crate::{Board, Error, IllegalWordReason, Letter, LetterScoring, Location, Placement, Rack, Result, Square};

use super::{score, MoveOutcome};

/// Writes `word` on the board at `location`, taking the new tiles from the rack
///
/// Squares that already hold the right letter are reused (and not scored).
/// Fails with `Overwrite` on a conflicting square, `TileSource` when the rack
/// lacks a letter for an empty square, and `Disconnected` when a move other
/// than the first reuses nothing. On any failure the board and the rack are
/// left exactly as they were.
pub fn place_word(
    board: &mut Board,
    rack: &mut Rack,
    word: &[Letter],
    location: Location,
    first_move: bool,
    scoring: &impl LetterScoring,
) -> Result<MoveOutcome> {
    if word.is_empty() {
        return Err(Error::IllegalWord(IllegalWordReason::NotAlphabetic))
    }
    let place = location.resolve(board.size(), word.len())?;

    let board_before = board.clone();
    let rack_before = rack.snapshot();

    let result = fill(board, rack, word, place, first_move).and_then(|existing| {
        let score = score(word, &existing, scoring)?;
        Ok(MoveOutcome {
            word: word.iter().map(|l| l.to_char()).collect(),
            location,
            score,
            new_tiles: word.len() - existing.len(),
            existing,
        })
    });

    if let Err(e) = &result {
        log::debug!("placement at {} rolled back: {}", location, e);
        *board = board_before;
        rack.restore(rack_before);
    }
    result
}

/// Gives the letters that were already on the board
fn fill(board: &mut Board, rack: &mut Rack, word: &[Letter], place: Placement, first_move: bool) -> Result<Vec<Letter>> {
    let mut existing = vec![];

    for (pos, &wanted) in place.squares(word.len()).zip(word) {
        match board.letter_at(pos)? {
            Square::Filled(found) if found != wanted => {
                return Err(Error::Overwrite { pos, found, wanted })
            },
            Square::Filled(_) => existing.push(wanted),
            Square::Empty => {
                rack.remove(wanted).map_err(|_| Error::TileSource { pos, letter: wanted })?;
                board.place(pos, wanted)?;
            },
        }
    }

    if !first_move && existing.is_empty() {
        return Err(Error::Disconnected)
    }
    Ok(existing)
}


#[cfg(test)]
use crate::{ScoreTable, Position, Direction};
#[cfg(test)]
use crate::solver::test_support::{letters, rack, board_with, h, v};

#[test]
fn first_move_cat() {
    let scoring = ScoreTable::english();
    let mut board = board_with(5, &[]);
    let mut tiles = rack("CATSXXX");

    let outcome = place_word(&mut board, &mut tiles, &letters("CAT"), h(1, 1), true, &scoring).unwrap();

    assert_eq!(outcome.score, 3 + 1 + 1);
    assert_eq!(outcome.new_tiles, 3);
    assert!(outcome.existing.is_empty());
    assert_eq!(board.occupied_count(), 3);
    assert_eq!(board.letter_at(Position { row: 0, col: 2 }).unwrap(), Square::Filled(Letter(b'T')));
    assert_eq!(tiles, rack("SXXX"));
}

#[test]
fn overwrite_is_rolled_back() {
    let scoring = ScoreTable::english();
    let mut board = board_with(5, &[("CAT", h(1, 1))]);
    let mut tiles = rack("DOGXXXX");
    let board_before = board.clone();

    let err = place_word(&mut board, &mut tiles, &letters("DOG"), v(1, 1), false, &scoring).unwrap_err();

    assert!(matches!(err, Error::Overwrite { found: Letter(b'C'), wanted: Letter(b'D'), .. }));
    assert_eq!(board, board_before);
    assert_eq!(tiles, rack("DOGXXXX"));
}

#[test]
fn overwrite_after_writes_is_rolled_back() {
    let scoring = ScoreTable::english();
    // O and G get written before the conflict on the T of CAT
    let mut board = board_with(5, &[("CAT", h(3, 1))]);
    let mut tiles = rack("OGDXXXX");
    let board_before = board.clone();

    let err = place_word(&mut board, &mut tiles, &letters("GOD"), v(1, 3), false, &scoring).unwrap_err();

    assert!(matches!(err, Error::Overwrite { pos: Position { row: 2, col: 2 }, .. }));
    assert_eq!(board, board_before);
    assert_eq!(board.occupied_count(), 3);
    assert_eq!(tiles, rack("OGDXXXX"));
}

#[test]
fn missing_tile_keeps_existing_letters() {
    let scoring = ScoreTable::english();
    let mut board = board_with(5, &[("CAT", h(1, 1))]);
    let mut tiles = rack("OXXXXXX");
    let board_before = board.clone();

    // C is reused, O comes from the rack, no W for the third square
    let err = place_word(&mut board, &mut tiles, &letters("COW"), v(1, 1), false, &scoring).unwrap_err();

    assert!(matches!(err, Error::TileSource { letter: Letter(b'W'), pos: Position { row: 2, col: 0 } }));
    assert_eq!(board, board_before);
    assert_eq!(board.letter_at(Position { row: 0, col: 0 }).unwrap(), Square::Filled(Letter(b'C')));
    assert_eq!(tiles, rack("OXXXXXX"));
}

#[test]
fn nothing_in_common_is_rejected() {
    let scoring = ScoreTable::english();
    let mut board = board_with(5, &[("CAT", h(1, 1))]);
    let mut tiles = rack("XXXXXXX");
    let board_before = board.clone();

    let err = place_word(&mut board, &mut tiles, &letters("DOG"), h(3, 1), false, &scoring).unwrap_err();

    assert!(matches!(err, Error::TileSource { letter: Letter(b'D'), .. }));
    assert_eq!(board, board_before);
    assert_eq!(tiles, rack("XXXXXXX"));
}

#[test]
fn disconnected_word_is_reverted() {
    let scoring = ScoreTable::english();
    let mut board = board_with(5, &[("CAT", h(1, 1))]);
    let mut tiles = rack("TOEXXXX");
    let board_before = board.clone();

    // every square can be filled, but none of them touches CAT
    let err = place_word(&mut board, &mut tiles, &letters("TOE"), h(3, 1), false, &scoring).unwrap_err();

    assert!(matches!(err, Error::Disconnected));
    assert_eq!(board, board_before);
    for col in 0..3 {
        assert_eq!(board.letter_at(Position { row: 2, col }).unwrap(), Square::Empty);
    }
    assert_eq!(board.occupied_count(), 3);
    assert_eq!(tiles, rack("TOEXXXX"));
}

#[test]
fn reused_letters_are_not_scored() {
    let scoring = ScoreTable::english();
    let mut board = board_with(5, &[("CAT", h(1, 1))]);
    let mut tiles = rack("OWXXXXX");
    let before = board.occupied_count();

    let outcome = place_word(&mut board, &mut tiles, &letters("COW"), v(1, 1), false, &scoring).unwrap();

    assert_eq!(outcome.score, 1 + 4);
    assert_eq!(outcome.existing, letters("C"));
    assert_eq!(outcome.new_tiles, 2);
    assert_eq!(board.occupied_count(), before + outcome.new_tiles);
    assert_eq!(tiles, rack("XXXXX"));
    assert_eq!(outcome.location.dir, Direction::Vertical);
}

#[test]
fn out_of_board() {
    let scoring = ScoreTable::english();
    let mut board = board_with(5, &[]);
    let mut tiles = rack("CATSXXX");

    for loc in &[h(1, 4), v(4, 1), h(0, 1), h(6, 1)] {
        assert!(matches!(
            place_word(&mut board, &mut tiles, &letters("CAT"), *loc, true, &scoring),
            Err(Error::Bounds(_))
        ));
    }
    assert!(board.is_empty());
    assert_eq!(tiles, rack("CATSXXX"));
}

#[test]
fn missing_score_is_rolled_back() {
    let scoring = ScoreTable::from_reader("C 3\nA 1\n".as_bytes()).unwrap();
    let mut board = board_with(5, &[]);
    let mut tiles = rack("CATSXXX");

    let err = place_word(&mut board, &mut tiles, &letters("CAT"), h(1, 1), true, &scoring).unwrap_err();

    assert!(matches!(err, Error::ScoreLookup(Letter(b'T'))));
    assert!(err.is_fatal());
    assert!(board.is_empty());
    assert_eq!(tiles, rack("CATSXXX"));
}
