
use crate::{Letter, LetterScoring, Result};

/// Points for a word, where the letters that were already on the board count for nothing
///
/// Each entry of `existing` cancels one matching letter of the word.
pub fn score(word: &[Letter], existing: &[Letter], scoring: &impl LetterScoring) -> Result<u32> {
    let mut existing = existing.to_vec();
    let mut total = 0;
    for &l in word {
        match existing.iter().position(|&e| e == l) {
            Some(i) => {
                existing.swap_remove(i);
            },
            None => total += scoring.try_score_for(l)?,
        }
    }
    Ok(total)
}


#[cfg(test)]
use crate::{Error, ScoreTable};
#[cfg(test)]
use crate::solver::test_support::letters;

#[test]
fn only_new_tiles_score() {
    let scoring = ScoreTable::english();
    assert_eq!(score(&letters("CAT"), &[], &scoring).unwrap(), 5);
    assert_eq!(score(&letters("CAT"), &letters("C"), &scoring).unwrap(), 2);
    assert_eq!(score(&letters("CAT"), &letters("CAT"), &scoring).unwrap(), 0);
}

#[test]
fn existing_cancels_one_letter_each() {
    let scoring = ScoreTable::english();
    // one of the two Z is on the board
    assert_eq!(score(&letters("ZZZ"), &letters("Z"), &scoring).unwrap(), 20);
    // letters of `existing` not in the word change nothing
    assert_eq!(score(&letters("ZA"), &letters("Q"), &scoring).unwrap(), 11);
}

#[test]
fn unknown_letter() {
    let scoring = ScoreTable::from_reader("A 1\n".as_bytes()).unwrap();
    assert!(matches!(score(&letters("AB"), &[], &scoring), Err(Error::ScoreLookup(Letter(b'B')))));
    // not looked up when it was on the board
    assert_eq!(score(&letters("AB"), &letters("B"), &scoring).unwrap(), 1);
}
