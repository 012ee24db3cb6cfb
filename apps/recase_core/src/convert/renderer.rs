use super::{CaseKind, ConvertError};

/// Join `tokens` under the rules of `target`. Zero-length tokens are
/// skipped; an empty token sequence renders to an empty string.
pub fn render(tokens: &[String], target: CaseKind) -> Result<String, ConvertError> {
    let words: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|word| !word.is_empty())
        .collect();

    let out = match target {
        CaseKind::Snake => join_mapped(&words, "_", str::to_lowercase),
        CaseKind::Kebab => join_mapped(&words, "-", str::to_lowercase),
        CaseKind::Upper => join_mapped(&words, " ", str::to_uppercase),
        CaseKind::Camel => {
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(&word.to_lowercase());
                } else {
                    push_capitalized(&mut out, word);
                }
            }
            out
        }
        CaseKind::Pascal => {
            let mut out = String::new();
            for word in &words {
                push_capitalized(&mut out, word);
            }
            out
        }
        CaseKind::Unknown => return Err(ConvertError::UnsupportedTarget(target)),
    };

    Ok(out)
}

fn join_mapped(words: &[&str], sep: &str, transform: fn(&str) -> String) -> String {
    words
        .iter()
        .map(|word| transform(word))
        .collect::<Vec<_>>()
        .join(sep)
}

// First character uppercased, remainder lowercased.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}
