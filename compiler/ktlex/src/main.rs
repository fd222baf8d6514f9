//! `ktlex` command-line entry point.

use ktlex::commands::{check_source, lex_source, mode_trajectory, parse_lex_options, read_file};

fn main() {
    ktlex::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: ktlex lex <file.kt> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --hidden                Include whitespace and comments");
                eprintln!("  --significant-newlines  Newlines in statement context are tokens");
                eprintln!("  --start-mode=<mode>     default, inside, linestring, multilinestring");
                eprintln!("  --no-shebang            Do not treat a leading #! as a shebang");
                std::process::exit(1);
            }
            let options = parse_lex_options(&args[3..]).unwrap_or_else(|msg| fail(&msg));
            let source = read_file(&args[2]).unwrap_or_else(|msg| fail(&msg));
            print!("{}", lex_source(&source, &options));
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: ktlex check <file.kt>");
                std::process::exit(1);
            }
            let path = &args[2];
            let source = read_file(path).unwrap_or_else(|msg| fail(&msg));
            let report = check_source(path, &source);
            eprint!("{}", report.output);
            if report.has_errors() {
                std::process::exit(1);
            }
        }
        "modes" => {
            if args.len() < 3 {
                eprintln!("Usage: ktlex modes <file.kt>");
                std::process::exit(1);
            }
            let source = read_file(&args[2]).unwrap_or_else(|msg| fail(&msg));
            print!("{}", mode_trajectory(&source));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

fn print_usage() {
    println!("ktlex - Kotlin mode-stack lexer");
    println!();
    println!("Usage: ktlex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>     Print the token stream");
    println!("  check <file>   Report lexical errors (exit 1 if any)");
    println!("  modes <file>   Print the mode stack trajectory");
    println!("  help           Show this message");
    println!();
    println!("Set RUST_LOG=kt_lexer=trace to log mode pushes and pops.");
}
