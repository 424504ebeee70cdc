extern crate argparse;

use std::io::Write;
use std::process;

use env_logger::Builder;
use log::{info, LevelFilter};

use sentence_anagrams::{for_each_sentence, sentence_occurrences, Dictionary, Result, SearchOptions};

struct Args {
    sentence: String,
    dictionary_path: String,
    minwords: usize,
    maxwords: usize,
    minletters: usize,
    maxletters: usize,
    word_anagrams: bool,
    verbose: usize,
}

fn parse_args() -> Args {
    use argparse::{ArgumentParser, IncrBy, Store, StoreTrue};

    let mut args = Args {
        sentence: String::new(),
        dictionary_path: String::new(),
        minwords: 0,
        maxwords: std::usize::MAX,
        minletters: 0,
        maxletters: std::usize::MAX,
        word_anagrams: false,
        verbose: 0,
    };

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Find every sentence spelled with exactly the letters of the given sentence");
        ap.refer(&mut args.sentence)
            .required()
            .add_argument("sentence", Store, "Sentence to generate anagrams of");
        ap.refer(&mut args.minwords)
            .add_option(&["-w", "--min-words"], Store, "The minimum number of words in the generated anagrams");
        ap.refer(&mut args.maxwords)
            .add_option(&["-W", "--max-words"], Store, "The maximum number of words in the generated anagrams");
        ap.refer(&mut args.minletters)
            .add_option(&["-l", "--min-letters"], Store, "The minimum number of letters per word in the generated anagrams");
        ap.refer(&mut args.maxletters)
            .add_option(&["-L", "--max-letters"], Store, "The maximum number of letters per word in the generated anagrams");
        ap.refer(&mut args.dictionary_path)
            .add_option(&["-f", "--dictionary"], Store, "The path of the word list");
        ap.refer(&mut args.word_anagrams)
            .add_option(&["-a", "--word-anagrams"], StoreTrue, "List single-word anagrams of each input word instead");
        ap.refer(&mut args.verbose)
            .add_option(&["-v", "--verbose"], IncrBy(1usize), "Increase log output (repeatable)");
        ap.parse_args_or_exit();
    }

    args
}

fn print_set(set: &[&str]) {
    println!("{}", set.join(" "));
}

fn run(args: Args) -> Result<()> {
    let mut dictionary = if args.dictionary_path.is_empty() {
        Dictionary::from_default_list()
    } else {
        Dictionary::from_dictionary_path(&args.dictionary_path)?
    };

    if (args.minletters, args.maxletters) != (0, std::usize::MAX) {
        dictionary = dictionary.with_letter_bounds(args.minletters, args.maxletters);
    }
    info!("dictionary holds {} words", dictionary.len());

    let words: Vec<&str> = args.sentence.split_whitespace().collect();

    if args.word_anagrams {
        for word in &words {
            let anagrams: Vec<&str> = dictionary.word_anagrams(word).iter().map(|w| &**w).collect();
            print!("{}: ", word);
            print_set(&anagrams);
        }
        return Ok(());
    }

    let options = SearchOptions::new().min_words(args.minwords).max_words(args.maxwords);
    let mut found = 0;
    for_each_sentence(&dictionary, &sentence_occurrences(&words), options, |sentence| {
        print_set(&sentence);
        found += 1;
    })?;
    info!("found {} anagram sentences", found);
    Ok(())
}

fn main() {
    let args = parse_args();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
