use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use log::info;
use monkey_parser::{parser::parser::parse_source, render_error};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [FILE]", args[0]);
        return ExitCode::FAILURE;
    }

    let (source, file_name) = match args.get(1) {
        Some(file_path) => {
            let path = PathBuf::from(file_path);
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_path.clone());

            match read_to_string(&path) {
                Ok(source) => (source, Some(file_name)),
                Err(error) => {
                    eprintln!("Failed to read {}: {}", file_path, error);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => {
            let mut source = String::new();
            if let Err(error) = io::stdin().read_to_string(&mut source) {
                eprintln!("Failed to read stdin: {}", error);
                return ExitCode::FAILURE;
            }
            (source, None)
        }
    };

    let start = Instant::now();
    let (program, errors) = parse_source(&source, file_name);
    info!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", render_error(error, &source));
        }
        return ExitCode::FAILURE;
    }

    for stmt in &program.statements {
        println!("{}", stmt);
    }

    ExitCode::SUCCESS
}
