
use std::collections::HashMap;
use std::io::BufRead;

use super::{Letter, Error, Result};

/// The value of each letter
pub trait LetterScoring: Sync {
    /// None when the letter has no value, which the caller reports as an error
    fn score_for(&self, letter: Letter) -> Option<u32>;

    fn try_score_for(&self, letter: Letter) -> Result<u32> {
        self.score_for(letter).ok_or(Error::ScoreLookup(letter))
    }
}

/// Letter values read from a `letter value` per line table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    map: HashMap<Letter, u32>,
}

impl ScoreTable {
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut map = HashMap::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue
            }
            let malformed = || Error::Malformed { table: "score", line: i + 1, content: line.clone() };

            let mut parts = trimmed.split_whitespace();
            let (letter, value) = match (parts.next(), parts.next(), parts.next()) {
                (Some(letter), Some(value), None) => {
                    let mut chars = letter.chars();
                    let letter = match (chars.next().and_then(Letter::from_char), chars.next()) {
                        (Some(l), None) => l,
                        _ => return Err(malformed()),
                    };
                    let value = value.parse::<u32>().map_err(|_| malformed())?;
                    (letter, value)
                },
                _ => return Err(malformed()),
            };
            map.insert(letter, value);
        }
        Ok(Self { map })
    }

    /// The values of the english scrabble
    pub fn english() -> Self {
        Self {
            map: ENGLISH_VALUES.iter().map(|&(l, v)| (Letter(l), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl LetterScoring for ScoreTable {
    fn score_for(&self, letter: Letter) -> Option<u32> {
        self.map.get(&letter).copied()
    }
}

const ENGLISH_VALUES: [(u8, u32); 26] = [
    (b'A', 1), (b'B', 3), (b'C', 3), (b'D', 2), (b'E', 1), (b'F', 4), (b'G', 2),
    (b'H', 4), (b'I', 1), (b'J', 8), (b'K', 5), (b'L', 1), (b'M', 3), (b'N', 1),
    (b'O', 1), (b'P', 3), (b'Q', 10), (b'R', 1), (b'S', 1), (b'T', 1), (b'U', 1),
    (b'V', 4), (b'W', 4), (b'X', 8), (b'Y', 4), (b'Z', 10),
];

/// Used when no score table is given
pub struct EnglishScrabbleScoring;
impl LetterScoring for EnglishScrabbleScoring {
    fn score_for(&self, letter: Letter) -> Option<u32> {
        ENGLISH_VALUES.iter().find(|&&(l, _)| l == letter.0).map(|&(_, v)| v)
    }
}


#[test]
fn score_table_parse() {
    let table = ScoreTable::from_reader("A 1\nc 3\n\n  Q 10  \n".as_bytes()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.score_for(Letter(b'A')), Some(1));
    assert_eq!(table.score_for(Letter(b'C')), Some(3));
    assert_eq!(table.score_for(Letter(b'Q')), Some(10));
    assert_eq!(table.score_for(Letter(b'Z')), None);
    assert!(matches!(table.try_score_for(Letter(b'Z')), Err(Error::ScoreLookup(Letter(b'Z')))));
}

#[test]
fn score_table_malformed() {
    for bad in &["A", "A one", "AB 1", "1 1", "A 1 2", "A -1"] {
        match ScoreTable::from_reader(bad.as_bytes()) {
            Err(e @ Error::Malformed { line: 1, .. }) => assert!(e.is_fatal()),
            other => panic!("{:?} parsed as {:?}", bad, other),
        }
    }
}

#[test]
fn english_values_agree() {
    let table = ScoreTable::english();
    assert_eq!(table.len(), 26);
    for l in b'A'..=b'Z' {
        assert_eq!(table.score_for(Letter(l)), EnglishScrabbleScoring.score_for(Letter(l)));
    }
    assert_eq!(EnglishScrabbleScoring.score_for(Letter(b'Z')), Some(10));
    assert_eq!(EnglishScrabbleScoring.score_for(Letter(b'a')), None);
}
