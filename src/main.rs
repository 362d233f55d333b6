use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use analyzer::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: analyzer <source file> [--tokens]");
        exit(2);
    }

    let file_path: &str = &args[1];
    let dump_tokens = args.len() == 3 && args[2] == "--tokens";

    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let full_path: PathBuf = env::current_dir().unwrap().join(file_path);
    let file_contents = read_to_string(&full_path).expect("Failed to read file!");

    let tokens = match tokenize(file_contents, Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, full_path);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if dump_tokens {
        for token in tokens.iter() {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let (_, error) = parse(tokens);

    if let Some(error) = error {
        display_error(error, full_path);
        exit(1);
    }

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("No faults found, total time: {:?}", start.elapsed());
}
