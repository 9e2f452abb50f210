use std::io::Read;

use ccl_parse::{Parser, Tokenizer, normalize_newlines};

fn main() {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source).unwrap();
    let source = normalize_newlines(&source);

    println!("=== Lines ===");
    for line in Tokenizer::new(&source) {
        println!("{:?}", line);
    }

    println!("\n=== Entries ===");
    for entry in Parser::new(&source) {
        println!("{:?}", entry);
    }
}
