/// Single characters stripped from every title: parentheses, comma, straight
/// and typographic apostrophe, and the heavy arrow some imports carry.
const NOISE_CHARS: [char; 6] = ['(', ')', ',', '\'', '\u{2019}', '\u{2794}'];

/// UTF-8 of `’` and `➔` read back as Windows-1252.
const MANGLED_SEQUENCES: [&str; 2] = ["\u{e2}\u{20ac}\u{2122}", "\u{e2}\u{17e}\u{201d}"];

/// Removes punctuation noise from a song title.
///
/// Letters, case and whitespace are left alone, so `"Song (Remix)"` becomes
/// `"Song Remix"` and `"Song ➔ Remix"` becomes `"Song  Remix"`. Stripping is
/// repeated until nothing changes; removing a character must not leave a
/// freshly formed mangled sequence behind, which keeps the function
/// idempotent.
pub fn normalize(title: &str) -> String {
    let mut current = strip_noise(title);
    loop {
        let next = strip_noise(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_noise(title: &str) -> String {
    let mut cleaned = title.to_string();
    for sequence in MANGLED_SEQUENCES {
        if cleaned.contains(sequence) {
            cleaned = cleaned.replace(sequence, "");
        }
    }
    cleaned.retain(|c| !NOISE_CHARS.contains(&c));
    cleaned
}
