
use std::fs::File;
use std::io::{
    self,
    BufRead,
    BufReader,
    Write,
};
use std::convert::TryInto;
use std::time::Instant;

use std::path::PathBuf;
use structopt::StructOpt;

use scrabble_solo::{
    Error,
    Game,
    LetterScoring,
    Lexicon,
    Location,
    Rules,
    ScoreTable,
    TileSupply,
    DEFAULT_BOARD_SIZE,
    MIN_BOARD_SIZE,
    MAX_BOARD_SIZE,
};

#[derive(Debug, serde::Deserialize)]
struct Settings {
    /// The words that are allowed to be played.
    ///
    /// Either a `.txt` file with one word per line, or a `.fst` file generated with `make_fst`
    dictionary: PathBuf,

    /// One `letter value` pair per line, the english values are used when absent
    scores: Option<PathBuf>,

    /// The tiles in the order they are dealt, one per line
    tiles: PathBuf,

    /// A text shown before the game starts
    rules: Option<PathBuf>,

    /// Asked to the player when absent
    board_size: Option<usize>,

    #[serde(default = "seven")]
    rack_capacity: usize,

    /// Typed instead of a word or a location to leave the game
    #[serde(default = "three_stars")]
    quit_token: String,
}

fn seven() -> usize { scrabble_solo::RACK_CAPACITY }
fn three_stars() -> String { "***".to_string() }

#[derive(Debug, StructOpt)]
#[structopt(name = "scrabble_solo", about = "A solo scrabble game in the terminal")]
struct Opt {
    /// The config file, if not present, looks for `scrabble-config`
    #[structopt(short = "c", long = "config")]
    config: Option<String>,

    /// The dictionary of words that are allowed to be played, `.txt` or `.fst`
    #[structopt(short = "d", long = "dictionary")]
    dict: Option<String>,

    /// The letter values, one `letter value` pair per line
    #[structopt(short = "s", long = "scores")]
    scores: Option<String>,

    /// The tiles, one letter per line, dealt in order
    #[structopt(short = "t", long = "tiles")]
    tiles: Option<String>,

    /// The size of the board, between 5 and 15
    #[structopt(short = "b", long = "board-size")]
    board_size: Option<usize>,

    /// Log more (-v info, -vv debug)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

fn load_config(opt: &Opt) -> Result<Settings, config::ConfigError> {
    let mut s = config::Config::new();

    match &opt.config {
        Some(f) => { s.merge(config::File::with_name(f))?; },
        None => { s.merge(config::File::with_name("scrabble-config").required(false))?; },
    }

    s.merge(config::Environment::with_prefix("SCRABBLE"))?;

    if let Some(d) = &opt.dict {
        s.set("dictionary", d.as_str())?;
    }
    if let Some(p) = &opt.scores {
        s.set("scores", p.as_str())?;
    }
    if let Some(t) = &opt.tiles {
        s.set("tiles", t.as_str())?;
    }
    if let Some(n) = opt.board_size {
        let n: i64 = n.try_into().map_err(|_| config::ConfigError::Message("board size too large".to_string()))?;
        s.set("board_size", n)?;
    }

    s.try_into()
}

fn main() {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new().with_level(level).init().expect("logger");

    let conf = load_config(&opt).expect("config");

    let start = Instant::now();
    let lexicon = load_lexicon(&conf.dictionary).expect("reading the dictionary");
    log::info!("dictionary of {} words loaded in {:?}", lexicon.len(), Instant::now() - start);

    let supply = File::open(&conf.tiles)
        .map_err(Error::from)
        .and_then(|f| TileSupply::from_reader(BufReader::new(f)))
        .expect("reading the tiles");
    log::info!("{} tiles to deal", supply.remaining());

    let result = match &conf.scores {
        Some(path) => {
            let scoring = File::open(path)
                .map_err(Error::from)
                .and_then(|f| ScoreTable::from_reader(BufReader::new(f)))
                .expect("reading the scores");
            run_game(Rules { scoring, lexicon }, supply, &conf)
        },
        None => run_game(Rules { scoring: scrabble_solo::EnglishScrabbleScoring, lexicon }, supply, &conf),
    };

    if let Err(e) = result {
        log::error!("the game had to stop: {}", e);
        eprintln!("The game had to stop: {}", e);
        std::process::exit(1);
    }
}

fn load_lexicon(path: &PathBuf) -> scrabble_solo::Result<Lexicon> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("fst") => Lexicon::from_fst(std::fs::read(path)?),
        _ => Lexicon::from_reader(BufReader::new(File::open(path)?)),
    }
}

/// The player's side of the terminal
struct Console<L> {
    lines: L,
    quit_token: String,
}

impl<L: Iterator<Item=io::Result<String>>> Console<L> {
    /// None when the player quits or the input ends
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        print!("{}", question);
        io::stdout().flush()?;
        match self.lines.next() {
            None => Ok(None),
            Some(line) => {
                let answer = line?.trim().to_ascii_uppercase();
                if answer == self.quit_token {
                    Ok(None)
                } else {
                    Ok(Some(answer))
                }
            },
        }
    }
}

fn run_game(rules: Rules<impl LetterScoring>, supply: TileSupply, conf: &Settings) -> scrabble_solo::Result<()> {
    let stdin = io::stdin();
    let mut console = Console {
        lines: stdin.lock().lines(),
        quit_token: conf.quit_token.to_ascii_uppercase(),
    };

    println!("GOOD DAY! WELCOME TO THE SCRABBLE GAME!");
    println!("{}", "-".repeat(50));
    if let Some(path) = &conf.rules {
        println!("Here are some rules:");
        for line in BufReader::new(File::open(path)?).lines() {
            println!("{}", line?.trim());
        }
    }

    let mut game = loop {
        let size = match conf.board_size {
            Some(size) => size,
            None => {
                let question = format!("\nEnter your board size ({} - {}): ", MIN_BOARD_SIZE, MAX_BOARD_SIZE);
                match console.ask(&question)? {
                    None => return farewell(),
                    Some(answer) => answer.parse().unwrap_or(DEFAULT_BOARD_SIZE),
                }
            },
        };
        match Game::new(size, supply.clone(), conf.rack_capacity) {
            Ok(game) => break game,
            Err(e) if conf.board_size.is_some() => return Err(e),
            Err(e) => println!("{}", e),
        }
    };

    println!("\nBOARD:\n{}", game.board());

    'turns: while !game.is_won() {
        if game.rack().is_empty() {
            println!("No tiles left to play.");
            break
        }
        print_tiles(&game, &rules.scoring)?;
        let best = game.best_move(&rules)?;

        let word = loop {
            match console.ask("Enter a word: ")? {
                None => break 'turns,
                Some(word) => match game.check_word(&rules, &word) {
                    Ok(_) => break word,
                    Err(e) => println!("{}", e),
                },
            }
        };

        let outcome = loop {
            let answer = match console.ask("Enter the location of your word (_:_:H or _:_:V): ")? {
                None => break 'turns,
                Some(answer) => answer,
            };
            let location = match answer.parse::<Location>() {
                Ok(location) => location,
                Err(e) => {
                    println!("{}", e);
                    continue
                },
            };
            match game.play(&rules, &word, location) {
                Ok(outcome) => break outcome,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) if e.needs_new_word() => {
                    println!("{}", e);
                    continue 'turns
                },
                Err(e) => println!("{}", e),
            }
        };

        println!("Your score for this move: {}", outcome.score);
        println!("Total score: {}", game.total_score());
        match best {
            Some(best) => println!(
                "Maximum possible score in this move is {} using the word {} at {}",
                best.score, best.word, best.location,
            ),
            None => println!("No better move could be found with these tiles"),
        }
        println!("\nBOARD:\n{}", game.board());

        if game.is_won() {
            println!("You won the game!");
        }
    }

    farewell()
}

fn farewell() -> scrabble_solo::Result<()> {
    println!("Hope you had fun, do come back again!");
    Ok(())
}

fn print_tiles(game: &Game, scoring: &impl LetterScoring) -> scrabble_solo::Result<()> {
    let mut tiles = String::new();
    let mut scores = String::new();
    for &l in game.rack().tiles() {
        tiles.push_str(&format!("{:<3}", l.to_char()));
        scores.push_str(&format!("{:<3}", scoring.try_score_for(l)?));
    }
    println!("\nTiles : {}", tiles);
    println!("Scores: {}\n", scores);
    Ok(())
}
