use kvline_core::{LineParser, MalformedPolicy, ParserOptions};

fn main() {
    let input = b"Server=db.internal;Port=5432;broken;Timeout=30";

    println!("Input: {:?}\n", String::from_utf8_lossy(input));

    println!("Truncate:");
    let mut parser = LineParser::new(input);
    while let Some(entry) = parser.next_entry() {
        println!(
            "  {} = {}",
            String::from_utf8_lossy(entry.key),
            String::from_utf8_lossy(entry.value)
        );
    }
    if let Some(err) = parser.malformed() {
        println!("  stopped: {}", err);
    }

    println!("\nSkip:");
    let opts = ParserOptions::default().with_policy(MalformedPolicy::Skip);
    for entry in LineParser::with_options(input, opts) {
        println!(
            "  {} = {}",
            String::from_utf8_lossy(entry.key),
            String::from_utf8_lossy(entry.value)
        );
    }
}
