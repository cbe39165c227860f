use once_cell::sync::Lazy;
use regex::Regex;

use crate::cedict::tone::mark_tone;

// "traditional simplified [" -> simplified
static REGEX_HEADWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^ ]+ ([^ ]+) \[").unwrap());
// "[pin1 yin1]" -> numeric pinyin
static REGEX_PINYIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\[]+\[([^\]]+)").unwrap());
// "] /def/def/" -> slash-delimited definition block
static REGEX_DEFINITIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\]]+\] /(.+)/").unwrap());

// "(Taiwan pr. ...)" parenthetical
static REGEX_TAIWAN_PR_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(Taiwan pr\.[^)]*\)").unwrap());
// "traditional|simplified" alternation token
static REGEX_TRAD_SIMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^| :]+\|([^ \[]+)").unwrap());
// inline "[pin1 yin1]" annotation
static REGEX_BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());
// punctuation immediately followed by text
static REGEX_AFTER_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r":(\S)").unwrap());
static REGEX_AFTER_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\S)").unwrap());

// The cleanup rules only shrink or locally rewrite the text, so the fixed
// point comes within a few passes; the cap guards pathological inputs.
const MAX_CLEANUP_PASSES: usize = 16;

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// Simplified-script headword.
    pub headword: String,
    /// Diacritic pinyin, space-joined.
    pub pinyin: String,
    /// Cleaned definitions in first-seen order, duplicates collapsed.
    pub definitions: Vec<String>,
}

pub fn render_pinyin(numeric: &str) -> String {
    numeric
        .split_whitespace()
        .map(mark_tone)
        .collect::<Vec<_>>()
        .join(" ")
}

// Self-referential cross-links and bare regional-pronunciation notes carry
// no semantic content of their own.
fn is_dropped(definition: &str, headword: &str) -> bool {
    (definition.contains("variant of") && definition.contains(headword))
        || definition.starts_with("Taiwan pr. ")
}

/// Rewrites one definition to its cleaned fixed point.
///
/// Per pass: strip "(Taiwan pr. ...)", keep only the simplified side of a
/// "X|Y" alternation, normalize or strip bracketed pinyin, and put a space
/// after ":" and "," where missing.
pub fn clean_definition(definition: &str) -> String {
    let mut text = definition.to_owned();

    for _ in 0..MAX_CLEANUP_PASSES {
        let before = text.clone();

        text = REGEX_TAIWAN_PR_PAREN.replace_all(&text, "").into_owned();

        let alternation = REGEX_TRAD_SIMP
            .captures(&text)
            .map(|c| (c[0].to_owned(), c[1].to_owned()));
        if let Some((token, simplified)) = alternation {
            text = text.replace(&token, &simplified);
        }

        if text.starts_with("also pr.") {
            // the annotation is meaningful; normalize it in place
            let annotation = REGEX_BRACKETED
                .captures(&text)
                .map(|c| (c[0].to_owned(), render_pinyin(&c[1])));
            if let Some((bracketed, rendered)) = annotation {
                text = text.replace(&bracketed, &rendered);
            }
        } else {
            text = REGEX_BRACKETED.replace_all(&text, "").into_owned();
        }

        text = REGEX_AFTER_COLON.replace_all(&text, ": $1").into_owned();
        text = REGEX_AFTER_COMMA.replace_all(&text, ", $1").into_owned();

        if text == before {
            break;
        }
    }

    text
}

/// Parses one source line into a record, or `None` for comments, empty
/// lines, lines that do not match the entry grammar, and lines whose whole
/// definition set is filtered away.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let headword = REGEX_HEADWORD.captures(line)?[1].to_owned();
    let pinyin = render_pinyin(&REGEX_PINYIN.captures(line)?[1]);
    let block = REGEX_DEFINITIONS.captures(line)?[1].to_owned();

    let mut definitions = Vec::new();
    for definition in block.split('/') {
        if is_dropped(definition, &headword) {
            continue;
        }

        let cleaned = clean_definition(definition);
        if !definitions.contains(&cleaned) {
            definitions.push(cleaned);
        }
    }

    if definitions.is_empty() {
        return None;
    }

    Some(ParsedLine {
        headword,
        pinyin,
        definitions,
    })
}
