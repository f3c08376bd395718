use std::io::BufRead;
use kvline_core::LineParser;

fn main() -> std::io::Result<()> {
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let mut parser = LineParser::new(line.as_bytes());
        while let Some(span) = parser.next_span() {
            eprintln!("ENTRY: {:?}", span);
        }
    }
    Ok(())
}
