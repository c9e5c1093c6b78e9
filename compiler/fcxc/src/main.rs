//! FCx front-end CLI.

use fcxc::commands::{
    explain_error, lex_file, parse_cli_options, parse_file, print_registry, CliOptions,
};

fn main() {
    fcxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" | "parse" => {
            let (options, positional) = options_or_exit(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("Usage: fcx {command} <file.fcx> [options]");
                std::process::exit(1);
            };
            if command == "lex" {
                lex_file(path, &options);
            } else {
                parse_file(path, &options);
            }
        }
        "registry" => {
            let (options, _) = options_or_exit(&args[2..]);
            print_registry(&options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("FCx front end {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: fcx explain <ERROR_CODE>");
                eprintln!("Example: fcx explain E1002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // A bare source path is parsed with default options.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("fcx"))
            {
                parse_file(command, &CliOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn options_or_exit(args: &[String]) -> (CliOptions, Vec<&str>) {
    match parse_cli_options(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("FCx front end: operator-dense lexing and parsing");
    println!();
    println!("Usage: fcx <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.fcx>       Tokenize and display tokens");
    println!("  parse <file.fcx>     Parse and display the AST");
    println!("  registry             List every registered operator");
    println!("  explain <code>       Explain an error code (e.g., E1002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>      Nesting limit before E1010 (default: 256)");
    println!("  --error-limit=<n>    Stop after n errors (default: unlimited)");
    println!("  --strict             Reject context-dependent operator meanings");
    println!("  --color=<mode>       auto, always or never (honors NO_COLOR)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable tracing, e.g. RUST_LOG=fcx_parse=debug");
    println!("  FCX_LOG_TREE=1       Show tracing output as a span tree");
    println!();
    println!("Examples:");
    println!("  fcx lex main.fcx");
    println!("  fcx parse main.fcx --strict");
    println!("  fcx parse main.fcx --error-limit=5 --color=never");
    println!("  fcx explain E1009");
}
