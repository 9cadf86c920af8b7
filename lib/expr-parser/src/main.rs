use log::LevelFilter;
use simplelog::*;

use expr_parser::{extract_variables, parse_expr};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let s = std::env::args().nth(1).unwrap_or_else(|| "A || B && !(C + 0)".to_string());
    println!("Input: {:?}", s);
    println!("Variables: {:?}", extract_variables(&s));
    match parse_expr(&s) {
        Ok(expr) => {
            println!("Parsed: {:?}", expr);
            println!("Parsed: {:#}", expr);
            println!("Parsed: {}", expr);
        }
        Err(e) => println!("Error: {}", e),
    }

    Ok(())
}
