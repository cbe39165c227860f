use cedict_json::cedict::tone::mark_tone;

#[test]
fn neutral_tone_drops_the_digit_without_a_mark() {
    assert_eq!(mark_tone("ma5"), "ma");
    assert_eq!(mark_tone("le5"), "le");
    assert_eq!(mark_tone("r5"), "r");
}

#[test]
fn renders_the_usual_syllables() {
    assert_eq!(mark_tone("ni3"), "nǐ");
    assert_eq!(mark_tone("hao3"), "hǎo");
    assert_eq!(mark_tone("zhong1"), "zhōng");
    assert_eq!(mark_tone("lu:4"), "lǜ");
}

#[test]
fn a_takes_the_mark_over_any_other_vowel() {
    assert_eq!(mark_tone("xiao3"), "xiǎo");
    assert_eq!(mark_tone("huai4"), "huài");
    assert_eq!(mark_tone("lao3"), "lǎo");
}

#[test]
fn ou_marks_the_o() {
    assert_eq!(mark_tone("dou1"), "dōu");
    assert_eq!(mark_tone("gou3"), "gǒu");
}

#[test]
fn otherwise_the_last_vowel_is_marked() {
    assert_eq!(mark_tone("liu4"), "liù");
    assert_eq!(mark_tone("gui4"), "guì");
    assert_eq!(mark_tone("lun2"), "lún");
}

#[test]
fn uppercase_vowels_take_uppercase_marks() {
    assert_eq!(mark_tone("Ao4"), "Ào");
    assert_eq!(mark_tone("E4"), "È");
    assert_eq!(mark_tone("Zhong1"), "Zhōng");
}

#[test]
fn separators_and_toneless_tokens_pass_through() {
    assert_eq!(mark_tone(","), ",");
    assert_eq!(mark_tone("·"), "·");
    assert_eq!(mark_tone("xx"), "xx");
    assert_eq!(mark_tone(""), "");
}
