//! Command-line interface for rutokenizer-rs
//!
//! Usage:
//!   rutok [OPTIONS] <TEXT>
//!   echo "Сделай что-либо." | rutok
//!
//! Options:
//!   -l, --lexicon <FILE>  Path to the lexicon file
//!   -p, --positions       Print character offsets
//!   -s, --simple          Split only, without merging compounds
//!   -j, --json            Output as JSON
//!   -h, --help            Show help

use rutokenizer::lexicon_path::resolve_lexicon_path;
use rutokenizer::{Lexicon, SimpleTokenizer, Tokenizer};
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

fn print_help() {
    eprintln!(
        r#"rutok - Russian tokenizer aware of hyphenated compounds

USAGE:
    rutok [OPTIONS] [TEXT]
    echo "Сделай что-либо." | rutok

OPTIONS:
    -l, --lexicon <FILE>  Path to the lexicon file
                          (default: $RUTOKENIZER_LEXICON or the data directory)
    -p, --positions       Print character offsets of every token
    -s, --simple          Split only, without merging compounds
    -j, --json            Output as JSON
    -h, --help            Show this help message

EXAMPLES:
    rutok "По-доброму вышел из-за угла."
    rutok -p -l lexicon.json "что-либо"
    echo "куда-нибудь" | rutok -j
"#
    );
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut lexicon_arg: Option<PathBuf> = None;
    let mut positions = false;
    let mut simple_mode = false;
    let mut json_output = false;
    let mut text: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-p" | "--positions" => {
                positions = true;
            }
            "-s" | "--simple" => {
                simple_mode = true;
            }
            "-j" | "--json" => {
                json_output = true;
            }
            "-l" | "--lexicon" => {
                i += 1;
                if i < args.len() {
                    lexicon_arg = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: --lexicon requires a file path");
                    std::process::exit(1);
                }
            }
            arg if !arg.starts_with('-') => {
                text = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Read from stdin if no text provided
    let input_text = if let Some(t) = text {
        t
    } else {
        let stdin = io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => lines.push(l),
                Err(e) => {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
        lines.join("\n")
    };

    // Tokenize
    let tokens = if simple_mode {
        SimpleTokenizer::tokenize(&input_text)
    } else {
        let path = resolve_lexicon_path(lexicon_arg.as_deref());
        let lexicon = match Lexicon::load(&path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error loading lexicon: {}", e);
                std::process::exit(1);
            }
        };
        Tokenizer::new(lexicon).tokenize_with_positions(&input_text)
    };

    // Output
    if json_output {
        let json = if positions {
            serde_json::to_string_pretty(&tokens)
        } else {
            let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
            serde_json::to_string_pretty(&texts)
        };
        match json {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for token in &tokens {
            if positions {
                println!(
                    "{}\t{}\t{}\t{}",
                    token.text,
                    token.start,
                    token.end,
                    token.kind.as_str()
                );
            } else {
                println!("{}", token.text);
            }
        }
    }
}
