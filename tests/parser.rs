use cedict_json::cedict::parser::{clean_definition, parse_line};

#[test]
fn parses_a_basic_entry() {
    let parsed = parse_line("你好 你好 [ni3 hao3] /hello/hi/").unwrap();

    assert_eq!(parsed.headword, "你好");
    assert_eq!(parsed.pinyin, "nǐ hǎo");
    assert_eq!(parsed.definitions, vec!["hello", "hi"]);
}

#[test]
fn skips_comments_empty_and_malformed_lines() {
    assert!(parse_line("").is_none());
    assert!(parse_line("# CC-CEDICT").is_none());
    assert!(parse_line("not a dictionary line").is_none());
    // missing definition block
    assert!(parse_line("你好 你好 [ni3 hao3]").is_none());
    // missing pinyin brackets
    assert!(parse_line("你好 你好 /hello/").is_none());
}

#[test]
fn duplicate_definitions_within_a_line_collapse() {
    let parsed = parse_line("A A [a1] /x/x/y/").unwrap();
    assert_eq!(parsed.definitions, vec!["x", "y"]);
}

#[test]
fn drops_self_referential_variants_and_taiwan_pronunciations() {
    assert!(parse_line("你好 你好 [ni3 hao3] /variant of 你好[ni3 hao3]/").is_none());
    assert!(parse_line("你 你 [ni3] /Taiwan pr. ni2/").is_none());

    // a variant-of pointing at a different word stays
    let parsed = parse_line("干 干 [gan4] /variant of 幹/").unwrap();
    assert_eq!(parsed.definitions, vec!["variant of 幹"]);
}

#[test]
fn rewrites_traditional_simplified_alternations() {
    assert_eq!(clean_definition("see 長城|长城"), "see 长城");
}

#[test]
fn strips_taiwan_pr_parentheticals() {
    assert_eq!(clean_definition("to lie (Taiwan pr. dao3)"), "to lie ");
}

#[test]
fn strips_inline_pinyin_brackets() {
    assert_eq!(clean_definition("abbr. for 北京[Bei3 jing1]"), "abbr. for 北京");
}

#[test]
fn normalizes_also_pr_annotations_instead_of_stripping_them() {
    assert_eq!(clean_definition("also pr. [ni2 hao3]"), "also pr. ní hǎo");
}

#[test]
fn inserts_spaces_after_colons_and_commas() {
    assert_eq!(clean_definition("one,two:three"), "one, two: three");
}

#[test]
fn cleanup_reaches_a_fixed_point() {
    let cleaned = clean_definition("also pr. [ni2 hao3] (Taiwan pr. la1), ok");
    assert_eq!(clean_definition(&cleaned), cleaned);

    let cleaned = clean_definition("see 長城|长城[Chang2 cheng2],full");
    assert_eq!(clean_definition(&cleaned), cleaned);
}

#[test]
fn definitions_that_clean_to_the_same_text_collapse() {
    let parsed = parse_line("长城 长城 [Chang2 cheng2] /長城|长城/长城/").unwrap();
    assert_eq!(parsed.pinyin, "Cháng chéng");
    assert_eq!(parsed.definitions, vec!["长城"]);
}
