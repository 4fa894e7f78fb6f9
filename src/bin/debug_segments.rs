use rutokenizer::{classify, Segmenter, TokenKind};

fn main() {
    let input = "Я  сплю, мечтаю-ка\u{00A0} что--либо «по-доброму».";
    println!("Input: {}", input);

    let segmenter = Segmenter::new(input);
    let segments = segmenter.make_segments();

    println!("\nSegments:");
    for (i, segment) in segments.iter().enumerate() {
        println!(
            "  {}: {:?} [{}, {}) - kind: {:?}",
            i, segment.text, segment.start, segment.end, segment.kind
        );
    }

    println!("\nCharacter classes:");
    for (i, c) in input.chars().enumerate() {
        println!("  {}: {:?} {:?}", i, c, classify(c));
    }

    let punct: Vec<_> = segments.iter().filter(|s| s.kind == TokenKind::Punct).collect();
    println!("\nPunctuation segments count: {}", punct.len());
}
