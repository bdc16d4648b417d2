use std::env;
use std::fs;

use php_lexer::{HeredocPart, Token};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <php_file>", args[0]);
        std::process::exit(1);
    }
    let filename = &args[1];
    let content = fs::read_to_string(filename).expect("Failed to read file");
    let tokens = php_lexer::lex(&content).expect("Lexing failed");
    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Token::Heredoc { parts, is_nowdoc } => {
                let kind = if *is_nowdoc { "nowdoc" } else { "heredoc" };
                println!("{:03}: Heredoc ({kind}):", i);
                for part in parts {
                    match part {
                        HeredocPart::Literal(s) => println!("       literal    {s:?}"),
                        HeredocPart::Variable(name) => println!("       variable   ${name}"),
                        HeredocPart::Expression(src) => println!("       expression {{{src}}}"),
                    }
                }
            }
            _ => println!("{:03}: {:?}", i, tok),
        }
    }
}