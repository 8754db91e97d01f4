
use std::time::Instant;

use rayon::prelude::*;

use crate::{Board, Direction, Letter, LetterScoring, Location, Placement, Position, Rack, Result, Rules, Square};
use crate::lexicon::letters_of;

use super::{check_letters, score};

/// The highest scoring move found for the current rack and board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMove {
    pub word: String,
    pub score: u32,
    pub location: Location,
}

/// Tries every word of the lexicon and keeps the best scoring one
///
/// Words are tried in parallel, but between equal scores the word coming
/// first in the lexicon wins, as in a scan in lexicon order.
pub fn best_move(rules: &Rules<impl LetterScoring>, rack: &Rack, board: &Board, first_move: bool) -> Result<Option<BestMove>> {
    let start = Instant::now();

    let candidates = rules.lexicon.words()
        .par_iter()
        .enumerate()
        .filter_map(|(i, word)| {
            match best_for_word(&letters_of(word), rack, board, first_move, &rules.scoring) {
                Ok(None) => None,
                Ok(Some(found)) => Some(Ok((i, found))),
                Err(e) => Some(Err(e)),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    // a move worth nothing places no tile, it is not reported
    let mut best: Option<(usize, u32, Placement)> = None;
    for (i, (score, place)) in candidates {
        if score > best.map_or(0, |(_, best_score, _)| best_score) {
            best = Some((i, score, place));
        }
    }

    log::info!("best move searched in {:?}", Instant::now() - start);

    Ok(best.map(|(i, score, place)| BestMove {
        word: rules.lexicon.words()[i].clone(),
        score,
        location: place.into(),
    }))
}

/// The best score for a single word, and where to play it
///
/// The first move can only go in the top left corner, horizontally. Later
/// moves align one letter of the word with the same letter on the board.
/// None when no placement scores a point.
pub fn best_for_word(
    word: &[Letter],
    rack: &Rack,
    board: &Board,
    first_move: bool,
    scoring: &impl LetterScoring,
) -> Result<Option<(u32, Placement)>> {
    if check_letters(word, rack, board, first_move).is_err() {
        return Ok(None)
    }

    if first_move {
        if word.len() <= board.size() {
            let place = Placement(Position { row: 0, col: 0 }, Direction::Horizontal);
            let score = score(word, &[], scoring)?;
            return Ok(if score > 0 { Some((score, place)) } else { None })
        }
        return Ok(None)
    }

    let mut best: Option<(u32, Placement)> = None;
    for (anchor, letter) in anchors(word, board) {
        for (i, _) in word.iter().enumerate().filter(|&(_, &l)| l == letter) {
            for &dir in &[Direction::Vertical, Direction::Horizontal] {
                if anchor[dir] < i {
                    continue
                }
                let mut start = anchor;
                start[dir] -= i;
                let place = Placement(start, dir);

                if let Some(existing) = fit(word, rack, board, place) {
                    let score = score(word, &existing, scoring)?;
                    if score > best.map_or(0, |(best_score, _)| best_score) {
                        best = Some((score, place));
                    }
                }
            }
        }
    }
    Ok(best)
}

/// Squares of the board holding a letter of the word
///
/// Ordered by the first occurrence of the letter in the word, then row by row.
fn anchors(word: &[Letter], board: &Board) -> Vec<(Position, Letter)> {
    let mut acc = vec![];
    for (i, &l) in word.iter().enumerate() {
        if word[..i].contains(&l) {
            continue
        }
        acc.extend(board.filled().filter(|&(_, b)| b == l));
    }
    acc
}

/// The letters reused from the board if `word` can be written at `place`
///
/// Empty squares are taken from a copy of the rack.
fn fit(word: &[Letter], rack: &Rack, board: &Board, place: Placement) -> Option<Vec<Letter>> {
    if place.0[place.1] + word.len() > board.size() {
        return None
    }
    let mut available = rack.clone();
    let mut existing = vec![];
    for (pos, &wanted) in place.squares(word.len()).zip(word) {
        match board.letter_at(pos).ok()? {
            Square::Filled(found) if found == wanted => existing.push(wanted),
            Square::Filled(_) => return None,
            Square::Empty => available.remove(wanted).ok()?,
        }
    }
    Some(existing)
}


#[cfg(test)]
use crate::solver::test_support::{letters, rack, rules, board_with, h, v};

#[test]
fn first_move_top_left() {
    let rules = rules(&["CAT", "TAXES", "AXE", "SEXTANT"]);
    let board = board_with(5, &[]);
    let tiles = rack("CATSXEX");

    let best = best_move(&rules, &tiles, &board, true).unwrap().unwrap();
    // SEXTANT is too long for the board and needs a second T and an N
    assert_eq!(best, BestMove { word: "TAXES".to_string(), score: 12, location: h(1, 1) });
}

#[test]
fn ties_keep_lexicon_order() {
    let rules = rules(&["TAC", "CAT", "ACT"]);
    let board = board_with(5, &[]);
    let best = best_move(&rules, &rack("CATXXXX"), &board, true).unwrap().unwrap();
    assert_eq!(best.word, "TAC");
    assert_eq!(best.score, 5);
}

#[test]
fn nothing_playable() {
    let rules = rules(&["DOG", "ZOO"]);
    let board = board_with(5, &[]);
    assert_eq!(best_move(&rules, &rack("CATXXXX"), &board, true).unwrap(), None);

    let board = board_with(5, &[("CAT", h(1, 1))]);
    assert_eq!(best_move(&rules, &rack("CATXXXX"), &board, false).unwrap(), None);
}

#[test]
fn later_move_aligns_with_anchor() {
    let rules = rules(&["COW", "TOW"]);
    let board = board_with(5, &[("CAT", h(1, 1))]);
    let tiles = rack("OWXXXXX");

    // C of COW under the C of CAT: O and W are new
    assert_eq!(
        best_for_word(&letters("COW"), &tiles, &board, false, &rules.scoring).unwrap(),
        Some((5, Placement(Position { row: 0, col: 0 }, Direction::Vertical))),
    );

    let best = best_move(&rules, &tiles, &board, false).unwrap().unwrap();
    assert_eq!(best, BestMove { word: "COW".to_string(), score: 5, location: v(1, 1) });
}

#[test]
fn horizontal_placement_through_anchor() {
    let rules = rules(&["AXE"]);
    // a single X in the middle column, nothing above it
    let board = board_with(5, &[("X", v(1, 3))]);
    let tiles = rack("AEZZZZZ");

    // vertically the A would be above the first row, horizontally it fits
    let best = best_move(&rules, &tiles, &board, false).unwrap().unwrap();
    assert_eq!(best.location, h(1, 2));
    assert_eq!(best.score, 2);
}

#[test]
fn mismatch_or_short_rack_discards_offset() {
    let board = board_with(5, &[("CAT", h(1, 1)), ("B", h(2, 1))]);
    let scoring = crate::ScoreTable::english();

    // vertically from the C the A meets the B, horizontally the B meets the T of CAT
    assert_eq!(best_for_word(&letters("CAB"), &rack("ABXXXXX"), &board, false, &scoring).unwrap(), None);

    // every letter is somewhere on the board, but the rack cannot fill the empty squares
    assert_eq!(best_for_word(&letters("TACT"), &rack("XXXXXXX"), &board, false, &scoring).unwrap(), None);
}

#[test]
fn best_score_over_several_anchors() {
    let rules = rules(&["AZO"]);
    let board = board_with(6, &[("OA", h(1, 1))]);
    let tiles = rack("ZAOXXXX");

    let best = best_move(&rules, &tiles, &board, false).unwrap().unwrap();
    // down and across from the A both score 11, down is tried first
    assert_eq!(best.score, 11);
    assert_eq!(best.location, v(1, 2));
}

#[test]
fn move_worth_nothing_is_not_reported() {
    // every letter of CAT is already on the board
    let rules = rules(&["CAT"]);
    let board = board_with(5, &[("CAT", h(1, 1))]);
    let tiles = rack("XXXXXXX");
    assert_eq!(best_for_word(&letters("CAT"), &tiles, &board, false, &rules.scoring).unwrap(), None);
    assert_eq!(best_move(&rules, &tiles, &board, false).unwrap(), None);

    // blank tiles on the first move
    let rules = crate::Rules {
        scoring: crate::ScoreTable::from_reader("A 0\n".as_bytes()).unwrap(),
        lexicon: crate::Lexicon::from_words(vec!["AA"]).unwrap(),
    };
    assert_eq!(best_move(&rules, &rack("AA"), &board_with(5, &[]), true).unwrap(), None);
}
