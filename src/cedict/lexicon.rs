use std::collections::BTreeMap;

use serde::Serialize;

use crate::cedict::parser::parse_line;

/// Accumulator for parsed lines: headword -> pronunciation -> definition
/// groups, where each group holds what one source line contributed beyond
/// the groups recorded before it for the same pair.
///
/// Groups keep first-seen order and never hold duplicates, so building the
/// lexicon twice from the same source gives identical output.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: BTreeMap<String, BTreeMap<String, Vec<Vec<String>>>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, headword: &str, pinyin: &str, definitions: Vec<String>) {
        if definitions.is_empty() {
            return;
        }

        let groups = self
            .entries
            .entry(headword.to_owned())
            .or_default()
            .entry(pinyin.to_owned())
            .or_default();

        // keep only what earlier lines have not recorded for this pair
        let mut remainder = definitions;
        for group in groups.iter() {
            remainder.retain(|definition| !group.contains(definition));
        }

        if !remainder.is_empty() {
            groups.push(remainder);
        }
    }

    /// Flattens every group into a single "; "-joined string.
    pub fn finish(self) -> FinishedLexicon {
        FinishedLexicon(
            self.entries
                .into_iter()
                .map(|(headword, pronunciations)| {
                    let pronunciations = pronunciations
                        .into_iter()
                        .map(|(pinyin, groups)| {
                            let groups = groups
                                .into_iter()
                                .map(|group| group.join("; "))
                                .collect::<Vec<_>>();
                            (pinyin, groups)
                        })
                        .collect();
                    (headword, pronunciations)
                })
                .collect(),
        )
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FinishedLexicon(pub BTreeMap<String, BTreeMap<String, Vec<String>>>);

/// Folds the source lines, in order, into a [`Lexicon`].
pub fn build_lexicon<'a>(lines: impl IntoIterator<Item = &'a str>) -> Lexicon {
    let mut lexicon = Lexicon::new();

    for line in lines {
        if let Some(parsed) = parse_line(line) {
            lexicon.insert(&parsed.headword, &parsed.pinyin, parsed.definitions);
        }
    }

    lexicon
}
