use sift_core::{PatternSet, Tokenizer};

fn main() {
    let line = b"alpha, beta\tgamma, delta";
    let tokenizer = Tokenizer::new(PatternSet::new([", ", " ", "\t"]));

    println!("Line: {:?}\n", std::str::from_utf8(line).unwrap());
    println!("Groups:");

    let map = tokenizer.tokenize(line, None);
    for (i, group) in map.groups(line).enumerate() {
        println!("  {}: {:?}", i + 1, String::from_utf8_lossy(group));
    }
    println!("\nWord count: {}", map.word_count());
    println!("Index:      {:?}", map.index());
}
