//! Email, stage name and bio rules.

/// Most words allowed in a stage name.
pub const MAX_STAGE_NAME_WORDS: usize = 2;

/// Most words allowed in a bio.
pub const MAX_BIO_WORDS: usize = 4;

/// Whitespace as the browser's regex `\s` and `String.prototype.trim`
/// see it. Differs from `char::is_whitespace`: includes U+FEFF, excludes
/// U+0085.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing [`is_form_whitespace`] characters.
pub fn trim_form(text: &str) -> &str {
    text.trim_matches(is_form_whitespace)
}

/// Check the shape `local@domain.tld`: exactly one `@`, no whitespace,
/// a non-empty local part, and a domain with a dot that has at least one
/// character on each side.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(is_form_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split(is_form_whitespace)
        .filter(|word| !word.is_empty())
        .count()
}

/// A stage name is non-blank and at most two words.
pub fn validate_stage_name(name: &str) -> bool {
    let words = word_count(name);
    words > 0 && words <= MAX_STAGE_NAME_WORDS
}

/// A bio is at most four words. Blank bios are allowed.
pub fn validate_bio(bio: &str) -> bool {
    word_count(bio) <= MAX_BIO_WORDS
}
