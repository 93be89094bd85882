use sift_core::{FormatStyle, ValueParser};

fn main() {
    let mut parser = ValueParser::new();

    println!("Integers:");
    for (token, base) in [("42", 10), ("-0xFF", 10), ("0b101", 2), ("zz", 62), ("111", 1)] {
        println!("  {:>8} (base {:>2}) -> {:?}", token, base, parser.parse_i64(token, base));
    }

    println!("\nFloats:");
    for token in ["1.5e2", "3.25", "-inf", "NaN"] {
        println!("  {:>8} -> {:?}", token, parser.parse_f64(token, 10));
    }

    println!("\nEuropean style:");
    parser.set_style(FormatStyle::Eu);
    for token in ["1.234,5", "3,14"] {
        println!("  {:>8} -> {:?}", token, parser.parse_f64(token, 10));
    }

    println!("\nBooleans:");
    parser.bools_mut().add_true("on");
    for token in ["YES", "f", "on", "maybe"] {
        println!("  {:>8} -> {:?}", token, parser.parse_bool(token));
    }
}
