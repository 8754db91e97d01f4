
use crate::{Board, Error, IllegalWordReason, Letter, Lexicon, Rack, Result};

/// The letters of a word split by whether the rack can provide them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub from_rack: Vec<Letter>,
    /// Letters left once the rack is used up, in word order
    pub remainder: Vec<Letter>,
}

/// Splits `word` between the rack and what remains, on a private copy of the rack
pub fn partition(word: &[Letter], rack: &Rack) -> Partition {
    let mut available = rack.tiles().to_vec();
    let mut from_rack = vec![];
    let mut remainder = vec![];
    for &l in word {
        match available.iter().position(|&a| a == l) {
            Some(i) => {
                available.swap_remove(i);
                from_rack.push(l);
            },
            None => remainder.push(l),
        }
    }
    Partition { from_rack, remainder }
}

/// Whether the rack and the board can supply the letters of `word`
///
/// Only checks that letters exist on the board, not where they are.
pub fn check_letters(word: &[Letter], rack: &Rack, board: &Board, first_move: bool) -> Result<Partition> {
    let split = partition(word, rack);

    if first_move {
        if !split.remainder.is_empty() {
            return Err(Error::IllegalWord(IllegalWordReason::NeedsBoard(split.remainder)))
        }
    } else if split.remainder.is_empty() {
        if !word.iter().any(|&l| board.contains(l)) {
            return Err(Error::IllegalWord(IllegalWordReason::NoAnchor))
        }
    } else {
        // each missing letter once, in word order
        let mut missing: Vec<Letter> = vec![];
        for &l in &split.remainder {
            if !board.contains(l) && !missing.contains(&l) {
                missing.push(l);
            }
        }
        if !missing.is_empty() {
            return Err(Error::IllegalWord(IllegalWordReason::MissingLetters(missing)))
        }
    }

    Ok(split)
}

/// Checks that `word` may be played, and gives its letters
pub fn check_word(word: &str, rack: &Rack, board: &Board, first_move: bool, lexicon: &Lexicon) -> Result<Vec<Letter>> {
    let letters = match Letter::parse_word(word) {
        Some(letters) if !letters.is_empty() => letters,
        _ => return Err(Error::IllegalWord(IllegalWordReason::NotAlphabetic)),
    };
    if !lexicon.contains(word) {
        return Err(Error::IllegalWord(IllegalWordReason::NotInLexicon))
    }
    check_letters(&letters, rack, board, first_move)?;
    Ok(letters)
}


#[cfg(test)]
use crate::solver::test_support::{letters, rack, board_with, h};

#[test]
fn partition_uses_each_tile_once() {
    let split = partition(&letters("BOOK"), &rack("KOBX"));
    assert_eq!(split.from_rack, letters("BOK"));
    assert_eq!(split.remainder, letters("O"));

    let split = partition(&letters("CAT"), &rack(""));
    assert!(split.from_rack.is_empty());
    assert_eq!(split.remainder, letters("CAT"));
}

#[test]
fn first_move_needs_rack_only() {
    let lexicon = Lexicon::from_words(vec!["CAT", "CATS", "DOG"]).unwrap();
    let board = board_with(5, &[]);
    let tiles = rack("CATSXXX");

    assert_eq!(check_word("cat", &tiles, &board, true, &lexicon).unwrap(), letters("CAT"));
    assert!(check_word("CATS", &tiles, &board, true, &lexicon).is_ok());
    match check_word("DOG", &tiles, &board, true, &lexicon) {
        Err(Error::IllegalWord(IllegalWordReason::NeedsBoard(missing))) => assert_eq!(missing, letters("DOG")),
        other => panic!("{:?}", other),
    }
}

#[test]
fn first_move_accepted_words_come_from_rack() {
    let lexicon = Lexicon::from_words(vec!["A", "AA", "BAA", "ABBA", "CAB", "BAC"]).unwrap();
    let board = board_with(5, &[]);
    let tiles = rack("ABAC");
    for word in lexicon.words() {
        if let Ok(l) = check_word(word, &tiles, &board, true, &lexicon) {
            assert!(partition(&l, &tiles).remainder.is_empty(), "{}", word);
        }
    }
}

#[test]
fn rejects_non_words() {
    let lexicon = Lexicon::from_words(vec!["CAT"]).unwrap();
    let board = board_with(5, &[]);
    let tiles = rack("CATDOGS");

    for bad in &["C4T", "CA T", "", "ca-t", " CAT ", "CAT\n", "\tCAT"] {
        assert!(matches!(
            check_word(bad, &tiles, &board, true, &lexicon),
            Err(Error::IllegalWord(IllegalWordReason::NotAlphabetic))
        ), "{:?}", bad);
    }
    assert!(matches!(
        check_word("DOG", &tiles, &board, true, &lexicon),
        Err(Error::IllegalWord(IllegalWordReason::NotInLexicon))
    ));
}

#[test]
fn later_moves_need_anchor() {
    let board = board_with(5, &[("CAT", h(1, 1))]);

    // rack covers it, and T is on the board
    assert!(check_letters(&letters("TO"), &rack("TOXXXXX"), &board, false).is_ok());

    // rack covers it, but nothing to attach to
    assert!(matches!(
        check_letters(&letters("DOG"), &rack("DOGXXXX"), &board, false),
        Err(Error::IllegalWord(IllegalWordReason::NoAnchor))
    ));

    // the missing C is on the board
    let split = check_letters(&letters("COD"), &rack("ODXXXXX"), &board, false).unwrap();
    assert_eq!(split.remainder, letters("C"));

    // neither rack nor board has G
    match check_letters(&letters("DOG"), &rack("XXXXXXX"), &board, false) {
        Err(Error::IllegalWord(IllegalWordReason::MissingLetters(missing))) => assert_eq!(missing, letters("DOG")),
        other => panic!("{:?}", other),
    }

    // repeated letters are reported once
    match check_letters(&letters("DODO"), &rack("XXXXXXX"), &board, false) {
        Err(Error::IllegalWord(IllegalWordReason::MissingLetters(missing))) => assert_eq!(missing, letters("DO")),
        other => panic!("{:?}", other),
    }
}
