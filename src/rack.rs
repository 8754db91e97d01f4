
use std::fmt;
use std::io::BufRead;

use super::{Letter, Error, Result};

/// Number of tiles a rack holds when the supply allows it
pub const RACK_CAPACITY: usize = 7;

/// The tiles the player can choose from, in the order they were drawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Letter>,
}

/// The content of a rack before a move is attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RackSnapshot(Vec<Letter>);

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_letters(letters: impl IntoIterator<Item=Letter>) -> Self {
        Self { tiles: letters.into_iter().collect() }
    }

    /// Draws from `supply` starting at `draw` until `capacity` is reached or the supply is exhausted
    ///
    /// Returns where the next draw starts
    pub fn refill(&mut self, supply: &[Letter], mut draw: usize, capacity: usize) -> usize {
        while self.tiles.len() < capacity && draw < supply.len() {
            self.tiles.push(supply[draw]);
            draw += 1;
        }
        draw
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.tiles.contains(&letter)
    }

    /// Takes out the first tile with this letter
    pub fn remove(&mut self, letter: Letter) -> Result<()> {
        match self.tiles.iter().position(|&l| l == letter) {
            Some(i) => {
                self.tiles.remove(i);
                Ok(())
            },
            None => Err(Error::NotFound(letter)),
        }
    }

    pub fn snapshot(&self) -> RackSnapshot {
        RackSnapshot(self.tiles.clone())
    }

    pub fn restore(&mut self, snapshot: RackSnapshot) {
        self.tiles = snapshot.0;
    }

    pub fn tiles(&self) -> &[Letter] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for l in &self.tiles {
            write!(f, "{}  ", l)?;
        }
        Ok(())
    }
}

/// The ordered tiles not yet dealt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSupply {
    tiles: Vec<Letter>,
    drawn: usize,
}

impl TileSupply {
    pub fn new(tiles: Vec<Letter>) -> Self {
        Self { tiles, drawn: 0 }
    }

    /// One single-letter tile per line, blank lines are skipped
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut tiles = vec![];
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue
            }
            let mut chars = trimmed.chars();
            match (chars.next().and_then(Letter::from_char), chars.next()) {
                (Some(l), None) => tiles.push(l),
                _ => return Err(Error::Malformed { table: "tiles", line: i + 1, content: line.clone() }),
            }
        }
        Ok(Self::new(tiles))
    }

    /// Fills `rack` up to `capacity` from the tiles not drawn yet
    pub fn deal(&mut self, rack: &mut Rack, capacity: usize) {
        self.drawn = rack.refill(&self.tiles, self.drawn, capacity);
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len() - self.drawn
    }
}


#[cfg(test)]
fn letters(s: &str) -> Vec<Letter> {
    s.bytes().map(Letter).collect()
}

#[test]
fn refill_up_to_capacity() {
    let supply = letters("ABCDEFGHIJ");
    let mut rack = Rack::new();
    let draw = rack.refill(&supply, 0, RACK_CAPACITY);
    assert_eq!(draw, 7);
    assert_eq!(rack.tiles(), &letters("ABCDEFG")[..]);

    // nothing drawn when full
    assert_eq!(rack.refill(&supply, draw, RACK_CAPACITY), 7);

    rack.remove(Letter(b'C')).unwrap();
    rack.remove(Letter(b'A')).unwrap();
    let draw = rack.refill(&supply, draw, RACK_CAPACITY);
    assert_eq!(draw, 9);
    assert_eq!(rack.tiles(), &letters("BDEFGHI")[..]);
}

#[test]
fn refill_exhausted_supply() {
    let supply = letters("XY");
    let mut rack = Rack::from_letters(letters("A"));
    assert_eq!(rack.refill(&supply, 0, RACK_CAPACITY), 2);
    assert_eq!(rack.len(), 3);
    assert_eq!(rack.refill(&supply, 2, RACK_CAPACITY), 2);
    assert_eq!(rack.len(), 3);
}

#[test]
fn remove_and_restore() {
    let mut rack = Rack::from_letters(letters("AAB"));
    let snapshot = rack.snapshot();

    assert!(rack.contains(Letter(b'A')));
    rack.remove(Letter(b'A')).unwrap();
    rack.remove(Letter(b'A')).unwrap();
    assert!(!rack.contains(Letter(b'A')));
    assert!(matches!(rack.remove(Letter(b'A')), Err(Error::NotFound(Letter(b'A')))));
    assert_eq!(rack.tiles(), &letters("B")[..]);

    rack.restore(snapshot);
    assert_eq!(rack, Rack::from_letters(letters("AAB")));
}

#[test]
fn supply_from_text() {
    let mut supply = TileSupply::from_reader("c\nA\n\nT\n".as_bytes()).unwrap();
    assert_eq!(supply.remaining(), 3);

    let mut rack = Rack::new();
    supply.deal(&mut rack, 2);
    assert_eq!(rack.tiles(), &letters("CA")[..]);
    assert_eq!(supply.remaining(), 1);
    supply.deal(&mut rack, RACK_CAPACITY);
    assert_eq!(supply.remaining(), 0);
    assert_eq!(rack.to_string(), "C  A  T  ");

    assert!(matches!(
        TileSupply::from_reader("A\nBB\n".as_bytes()),
        Err(Error::Malformed { table: "tiles", line: 2, .. })
    ));
}
