//! okkhor CLI — driving adapter for the okkhor transliteration engine.
//!
//! Subcommands:
//! - `convert <text>... [--grammar path]` — transliterate text
//! - `check <grammar>` — validate a grammar file loads without errors
//! - `info [--grammar path]` — print grammar summary

use std::process;

use okkhor::{Engine, Grammar};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "convert" => cmd_convert(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "info" => cmd_info(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_convert(args: &[String]) -> Result<(), String> {
    let (grammar_path, text_args) = parse_grammar_flag(args)?;

    if text_args.is_empty() {
        return Err("convert requires text to transliterate".into());
    }

    let engine = build_engine(grammar_path.as_deref())?;
    let input = text_args.join(" ");
    println!("{}", engine.parse(&input));

    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("check requires a grammar file path".into());
    }

    let grammar = Grammar::from_file(&args[0]).map_err(|e| format!("grammar invalid: {e}"))?;

    println!("Grammar valid ({} patterns)", grammar.patterns().len());
    Ok(())
}

fn cmd_info(args: &[String]) -> Result<(), String> {
    let (grammar_path, rest) = parse_grammar_flag(args)?;
    if !rest.is_empty() {
        return Err(format!("unexpected argument \"{}\"", rest[0]));
    }

    let grammar = match grammar_path.as_deref() {
        Some(path) => Grammar::from_file(path).map_err(|e| e.to_string())?,
        None => Grammar::bundled().map_err(|e| e.to_string())?,
    };

    let total = grammar.patterns().len();
    let conditional = grammar
        .patterns()
        .iter()
        .filter(|p| !p.is_unconditional())
        .count();

    println!("Grammar: {}", grammar_path.as_deref().unwrap_or("(bundled)"));
    println!("Patterns: {total}");
    println!("  unconditional: {}", total - conditional);
    println!("  conditional:   {conditional}");
    println!("Consonants: {}", grammar.classes().consonants().len());
    println!("Digits: {}", grammar.classes().digits().len());
    println!(
        "Case-sensitive characters: {}",
        grammar.classes().case_sensitive().len()
    );

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Engine assembly
// ═══════════════════════════════════════════════════════════════════════════════

fn build_engine(grammar_path: Option<&str>) -> Result<Engine, String> {
    match grammar_path {
        Some(path) => Engine::from_file(path).map_err(|e| e.to_string()),
        None => Engine::bundled().map_err(|e| e.to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

/// Split off an optional `--grammar <path>`; everything else is returned
/// in order.
fn parse_grammar_flag(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut grammar = None;
    let mut rest = Vec::new();
    let mut i = 0;

    while i < args.len() {
        if args[i] == "--grammar" {
            i += 1;
            if i >= args.len() {
                return Err("--grammar requires a file path".into());
            }
            grammar = Some(args[i].clone());
        } else if let Some(stripped) = args[i].strip_prefix("--grammar=") {
            grammar = Some(stripped.to_string());
        } else if args[i].starts_with("--") {
            return Err(format!("unexpected flag \"{}\"", args[i]));
        } else {
            rest.push(args[i].clone());
        }
        i += 1;
    }

    Ok((grammar, rest))
}

fn print_usage() {
    eprintln!(
        "Usage: okkhor <command> [options]

Commands:
  convert <text>... [--grammar path]   Transliterate text (bundled grammar by default)
  check <grammar>                      Validate a grammar file
  info [--grammar path]                Print grammar summary
  help                                 Show this help"
    );
}
