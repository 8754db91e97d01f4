
use fst::SetBuilder;

use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
    BufWriter,
};
use std::time::Instant;

use std::path::PathBuf;
use structopt::StructOpt;

use scrabble_solo::Lexicon;

#[derive(Debug, StructOpt)]
#[structopt(name = "make_fst", about = "Compile a word list into a fst dictionary for scrabble_solo")]
struct Opt {
    /// The input list. One word per line
    #[structopt(short = "i", long = "input-list", parse(from_os_str))]
    list_file: PathBuf,

    /// Where to write the compiled dictionary
    #[structopt(short = "o", long = "output-fst", parse(from_os_str))]
    fst_file: PathBuf,
}

fn main() {
    simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Info).init().expect("logger");

    let Opt { list_file, fst_file } = Opt::from_args();

    let start = Instant::now();
    let file = BufReader::new(File::open(list_file).expect("opening the words list file"));
    let mut skipped = 0;
    let mut words = file.lines()
        .map(|l| l.expect("reading line from word list"))
        .filter_map(|l| {
            let word = Lexicon::normalize(&l);
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect::<Vec<_>>();
    log::info!("{} words loaded in {:?} ({} lines skipped)", words.len(), Instant::now() - start, skipped);

    // the set is ordered, the order of the list is lost
    words.sort_unstable();
    words.dedup();

    let start = Instant::now();
    let wtr = BufWriter::new(File::create(fst_file).expect("create the words fst file"));
    let mut build = SetBuilder::new(wtr).expect("builder writing to fst file");
    build.extend_iter(&words).expect("inserting words");
    build.finish().expect("finishing the fst file");
    log::info!("dictionary of {} words written in {:?}", words.len(), Instant::now() - start);
}
