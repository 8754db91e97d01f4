
use std::io::BufRead;

use fst::{Set, Streamer};

use super::{Letter, Result};

/// The words that may be played
///
/// The words keep the order (and duplicates) of their source, which decides
/// between equally good moves. Membership is answered by a `fst::Set`.
#[derive(Debug)]
pub struct Lexicon {
    words: Vec<String>,
    set: Set<Vec<u8>>,
}

impl Lexicon {
    /// A word as stored: trimmed and upper-cased, None if it is not made of letters only
    pub fn normalize(word: &str) -> Option<String> {
        let word = word.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None
        }
        Some(word.to_ascii_uppercase())
    }

    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item=S>) -> Result<Self> {
        let words = words.into_iter().filter_map(|w| {
            let normalized = Self::normalize(w.as_ref());
            if normalized.is_none() && !w.as_ref().trim().is_empty() {
                log::warn!("skipping dictionary entry that is not a word: {:?}", w.as_ref());
            }
            normalized
        }).collect::<Vec<_>>();

        let mut sorted = words.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let set = Set::from_iter(sorted)?;

        Ok(Self { words, set })
    }

    /// One word per line
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_words(lines)
    }

    /// A set built by `make_fst`, the words are then in lexicographic order
    pub fn from_fst(data: Vec<u8>) -> Result<Self> {
        let set = Set::new(data)?;
        let mut words = Vec::with_capacity(set.len());
        let mut stream = set.stream();
        while let Some(key) = stream.next() {
            match std::str::from_utf8(key).ok().and_then(Self::normalize) {
                Some(word) => words.push(word),
                None => log::warn!("skipping dictionary entry that is not a word: {:?}", key),
            }
        }
        // entries written in lower case are looked up in upper case
        let mut sorted = words.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let set = Set::from_iter(sorted)?;
        Ok(Self { words, set })
    }

    /// Case-insensitive exact match
    pub fn contains(&self, word: &str) -> bool {
        match Self::normalize(word) {
            Some(word) => self.set.contains(word),
            None => false,
        }
    }

    /// The words in source order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The letters of a stored word
pub(crate) fn letters_of(word: &str) -> Vec<Letter> {
    word.bytes().map(Letter).collect()
}


#[test]
fn lexicon_from_text() {
    let lexicon = Lexicon::from_reader("cat\n DOG \n\nca-t\nCat\nbat\n".as_bytes()).unwrap();
    assert_eq!(lexicon.words(), &["CAT", "DOG", "CAT", "BAT"]);
    assert_eq!(lexicon.len(), 4);

    assert!(lexicon.contains("cat"));
    assert!(lexicon.contains("Dog"));
    assert!(!lexicon.contains("ca-t"));
    assert!(!lexicon.contains("CATS"));
    assert!(!lexicon.contains(""));
}

#[test]
fn lexicon_from_fst() {
    let mut build = fst::SetBuilder::memory();
    build.extend_iter(vec!["at", "cat", "zoo"]).unwrap();
    let data = build.into_inner().unwrap();

    let lexicon = Lexicon::from_fst(data).unwrap();
    assert_eq!(lexicon.words(), &["AT", "CAT", "ZOO"]);
    assert!(lexicon.contains("Zoo"));
    assert!(!lexicon.contains("ZO"));
}
