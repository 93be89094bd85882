//! Split stdin line by line.
//!
//! Usage: stdin_split [delimiter...]  (defaults to a single space)

use std::io::{self, BufReader};

use sift_core::{LineCursor, PatternSet, Tokenizer};

fn main() -> io::Result<()> {
    let delims: Vec<String> = std::env::args().skip(1).collect();
    let patterns = if delims.is_empty() {
        PatternSet::new([" "])
    } else {
        PatternSet::new(delims.iter().map(String::as_bytes))
    };

    let stdin = io::stdin();
    let mut cursor = LineCursor::new(BufReader::new(stdin.lock()), Tokenizer::new(patterns));

    while cursor.advance()? {
        print!("{:>4}:", cursor.line_number());
        while let Some(token) = cursor.next_token() {
            print!(" [{}]", String::from_utf8_lossy(token));
        }
        println!();
    }
    Ok(())
}
