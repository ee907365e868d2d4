//! Script classification helpers shared by the normalizers and tokenizer.

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c) || ('\u{31F0}'..='\u{31FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || c == '々'
}

pub fn is_hangul(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c) || ('\u{1100}'..='\u{11FF}').contains(&c)
}

pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c) || ('\u{0750}'..='\u{077F}').contains(&c)
}

/// Harakat, shadda, sukun, superscript alef and tatweel.
pub fn is_arabic_mark(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c) || c == '\u{0670}' || c == '\u{0640}'
}

/// Latin letters, including the Latin-1 and Latin Extended-A/B ranges used
/// by es, fr, de, tr, id and vi.
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (('\u{00C0}'..='\u{024F}').contains(&c) && c != '×' && c != '÷')
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_japanese_scripts() {
        assert!(is_hiragana('を'));
        assert!(is_katakana('ミ'));
        assert!(is_kanji('追'));
        assert!(!is_kanji('を'));
    }

    #[test]
    fn classifies_latin_with_diacritics() {
        assert!(is_latin('ñ'));
        assert!(is_latin('ş'));
        assert!(is_latin('ệ'));
        assert!(!is_latin('п'));
    }

    #[test]
    fn separates_arabic_marks_from_letters() {
        assert!(is_arabic('ض'));
        assert!(is_arabic_mark('\u{064E}'));
        assert!(!is_arabic_mark('ض'));
    }
}
