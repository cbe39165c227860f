// Numeric-tone pinyin ("ni3") -> diacritic pinyin ("nǐ")
//
// Diacritic placement: 'a' carries the mark if present, then the 'o' of an
// "ou" diphthong, then 'e'; otherwise the vowel closest to the end.

fn tone_variants(vowel: char) -> Option<&'static [char; 4]> {
    match vowel {
        'a' => Some(&['ā', 'á', 'ǎ', 'à']),
        'A' => Some(&['Ā', 'Á', 'Ǎ', 'À']),
        'e' => Some(&['ē', 'é', 'ě', 'è']),
        'E' => Some(&['Ē', 'É', 'Ě', 'È']),
        'i' => Some(&['ī', 'í', 'ǐ', 'ì']),
        'I' => Some(&['Ī', 'Í', 'Ǐ', 'Ì']),
        'o' => Some(&['ō', 'ó', 'ǒ', 'ò']),
        'O' => Some(&['Ō', 'Ó', 'Ǒ', 'Ò']),
        'u' => Some(&['ū', 'ú', 'ǔ', 'ù']),
        'U' => Some(&['Ū', 'Ú', 'Ǔ', 'Ù']),
        'ü' => Some(&['ǖ', 'ǘ', 'ǚ', 'ǜ']),
        _ => None,
    }
}

fn mark_vowel(body: &str, vowel: char, tone: usize) -> String {
    match tone_variants(vowel) {
        Some(variants) => body.replace(vowel, &variants[tone].to_string()),
        None => body.to_owned(),
    }
}

fn strip_last(syllable: &str) -> String {
    let mut body = syllable.to_owned();
    body.pop();
    body
}

/// Converts one numeric-tone syllable to its diacritic form.
///
/// Tokens that carry no tone digit (bare separators like "," and "·", or
/// letters-only words embedded in a pinyin field) pass through unchanged.
pub fn mark_tone(syllable: &str) -> String {
    let last = match syllable.chars().last() {
        Some(c) => c,
        None => return String::new(),
    };

    let tone = match last {
        c if c.is_alphabetic() => return syllable.to_owned(),
        // neutral tone: drop the digit, no mark
        '5' => return strip_last(syllable),
        '1'..='4' => last as usize - '1' as usize,
        _ => return syllable.to_owned(),
    };

    let body = strip_last(syllable).replace("u:", "ü");

    // "ou" takes the mark on the 'o'; the bare vowel checks cover the rest
    for vowel in ["a", "A", "ou", "Ou", "e", "E"] {
        if body.contains(vowel) {
            // the marked letter is always the first char of the pattern
            let target = vowel.chars().next().unwrap();
            return mark_vowel(&body, target, tone);
        }
    }

    for c in body.chars().rev() {
        if tone_variants(c).is_some() {
            return mark_vowel(&body, c, tone);
        }
    }

    // no recognizable vowel; should not happen for well-formed pinyin
    body
}
