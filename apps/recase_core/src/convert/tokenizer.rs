use super::CaseKind;

/// Split `text` into word tokens and report the detected source case.
///
/// Detection runs a fixed ladder: explicit separators win (`_`, then `-`),
/// then all-caps input, then case-transition scanning. Inputs with no
/// separators and no internal transitions come back as `Unknown`; the
/// classification is best-effort and only ever informational.
pub fn tokenize(text: &str) -> (Vec<String>, CaseKind) {
    if text.contains('_') {
        return (split_words(text, '_'), CaseKind::Snake);
    }
    if text.contains('-') {
        return (split_words(text, '-'), CaseKind::Kebab);
    }
    if looks_shouted(text) {
        let tokens = text.split_whitespace().map(str::to_string).collect();
        return (tokens, CaseKind::Upper);
    }
    scan(text)
}

fn split_words(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

// All uppercase letters/digits apart from whitespace, more than one
// character, and at least one actual letter (digits alone say nothing
// about casing).
fn looks_shouted(text: &str) -> bool {
    if text.len() <= 1 {
        return false;
    }
    let mut has_upper = false;
    for ch in text.chars() {
        if ch.is_ascii_uppercase() {
            has_upper = true;
        } else if !ch.is_ascii_digit() && !ch.is_whitespace() {
            return false;
        }
    }
    has_upper
}

// Character scan: whitespace flushes the current token; an uppercase
// character following a lowercase or digit starts a new one. Pascal vs
// camel is decided by the first character, but only once a transition
// split actually happened.
fn scan(text: &str) -> (Vec<String>, CaseKind) {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut split_on_case = false;
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if ch.is_whitespace() {
            flush(&mut tokens, &mut current);
        } else {
            if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                flush(&mut tokens, &mut current);
                split_on_case = true;
            }
            current.push(ch);
        }
        prev = Some(ch);
    }
    flush(&mut tokens, &mut current);

    let detected = if split_on_case {
        if text.starts_with(|c: char| c.is_uppercase()) {
            CaseKind::Pascal
        } else {
            CaseKind::Camel
        }
    } else {
        CaseKind::Unknown
    };

    (tokens, detected)
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
