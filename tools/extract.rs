/// Network extraction tool — turns co-reference pipeline output into a
/// character network file.
///
/// Usage: extract --tokens <file.tokens> --book <file.book> --out <path>
///        [--format <csv|graphml|edgelist>] [--sentiment <lexicon.ron>]
///        [--paragraph] [--no-gender-fallback]
///
/// The csv format writes two files, `<path>.vertices.csv` and
/// `<path>.edges.csv`; the others write `<path>` itself.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;
use std::{env, io};

use charnet::core::extractor::NetworkExtractor;
use charnet::core::grouper::GroupingStrategy;
use charnet::core::network::CharacterNetwork;
use charnet::core::sentiment::RonLexicon;
use charnet::io::{book, export, tokens};

const USAGE: &str = "Usage: extract --tokens <file.tokens> --book <file.book> --out <path> \
                     [--format <csv|graphml|edgelist>] [--sentiment <lexicon.ron>] \
                     [--paragraph] [--no-gender-fallback]";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut tokens_path = None;
    let mut book_path = None;
    let mut out_path = None;
    let mut format = "graphml".to_string();
    let mut sentiment_path = None;
    let mut strategy = GroupingStrategy::Sentence;
    let mut gender_fallback = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tokens" => {
                i += 1;
                tokens_path = Some(args[i].clone());
            }
            "--book" => {
                i += 1;
                book_path = Some(args[i].clone());
            }
            "--out" => {
                i += 1;
                out_path = Some(args[i].clone());
            }
            "--format" => {
                i += 1;
                format = args[i].clone();
            }
            "--sentiment" => {
                i += 1;
                sentiment_path = Some(args[i].clone());
            }
            "--paragraph" => {
                strategy = GroupingStrategy::Paragraph;
            }
            "--no-gender-fallback" => {
                gender_fallback = false;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    let tokens_path = tokens_path.unwrap_or_else(|| missing("--tokens"));
    let book_path = book_path.unwrap_or_else(|| missing("--book"));
    let out_path = out_path.unwrap_or_else(|| missing("--out"));

    let tokens = tokens::load_tokens(Path::new(&tokens_path)).unwrap_or_else(|e| {
        eprintln!("Error reading token table: {}", e);
        process::exit(1);
    });
    let roster = book::load_book(Path::new(&book_path)).unwrap_or_else(|e| {
        eprintln!("Error reading character document: {}", e);
        process::exit(1);
    });
    if let Err(e) = tokens::validate_character_refs(&tokens, roster.len()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let mut extractor = NetworkExtractor::new()
        .strategy(strategy)
        .gender_fallback(gender_fallback);
    if let Some(path) = sentiment_path {
        let lexicon = RonLexicon::load_from_ron(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("Error reading sentiment lexicon: {}", e);
            process::exit(1);
        });
        extractor = extractor.sentiment(lexicon);
    }

    let network = extractor.extract(&tokens, &roster);
    println!(
        "Extracted {} vertices, {} edges",
        network.vertices().len(),
        network.edges().len()
    );

    if let Err(e) = write_output(&network, &format, &out_path) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

fn write_output(network: &CharacterNetwork, format: &str, out_path: &str) -> io::Result<()> {
    match format {
        "csv" => {
            let mut vertex_file = BufWriter::new(File::create(format!("{}.vertices.csv", out_path))?);
            export::write_vertex_csv(network, &mut vertex_file)?;
            vertex_file.flush()?;
            let mut edge_file = BufWriter::new(File::create(format!("{}.edges.csv", out_path))?);
            export::write_edge_csv(network, &mut edge_file)?;
            edge_file.flush()
        }
        "graphml" => {
            let mut file = BufWriter::new(File::create(out_path)?);
            export::write_graphml(network, &mut file)?;
            file.flush()
        }
        "edgelist" => {
            let mut file = BufWriter::new(File::create(out_path)?);
            export::write_edge_list(network, &mut file)?;
            file.flush()
        }
        other => {
            eprintln!("Unknown format: {} (expected csv, graphml, or edgelist)", other);
            process::exit(1);
        }
    }
}

fn missing(flag: &str) -> String {
    eprintln!("Error: {} is required", flag);
    eprintln!("{}", USAGE);
    process::exit(1);
}
