use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;

use super::entries::EMOTICONS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Lowercased word with apostrophes removed (`Don't` -> `dont`).
    Word(String),
    /// Emoticon exactly as written.
    Emoticon(&'static str),
}

/// URLs (skipped whole) or any known emoticon, longest emoticon first so
/// `</3` wins over `<3`.
#[allow(clippy::expect_used)] // built from escaped literals, it doesn't panic
static SPECIAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let mut faces: Vec<&str> = EMOTICONS.iter().map(|(e, _)| *e).collect();
    faces.sort_by_key(|e| Reverse(e.len()));
    let faces = faces
        .iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?P<url>https?://\S+)|(?P<face>{faces})"))
        .expect("static regex should not panic")
});

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_apostrophe(c)
}

/// An emoticon must not run into a following word. Faces opening with `:` or
/// `;` may trail a word (`great:D`); the rest need a boundary before them too.
fn stands_alone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    let attaches = text[start..].starts_with([':', ';']);

    after.is_none_or(|c| !c.is_alphanumeric())
        && (attaches || before.is_none_or(|c| !c.is_alphanumeric()))
}

fn push_words(segment: &str, tokens: &mut Vec<Token>) {
    for piece in segment.split(|c: char| !is_word_char(c)) {
        let word: String = piece
            .chars()
            .filter(|c| !is_apostrophe(*c))
            .flat_map(char::to_lowercase)
            .collect();
        if !word.is_empty() {
            tokens.push(Token::Word(word));
        }
    }
}

/// Split text into word and emoticon tokens. Punctuation and URLs are dropped.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut consumed = 0;
    let mut search_from = 0;

    while let Some(caps) = SPECIAL_REGEX.captures_at(text, search_from) {
        let Some(whole) = caps.get(0) else { break };

        if let Some(face) = caps.name("face") {
            if !stands_alone(text, face.start(), face.end()) {
                // faces are ASCII, so the next byte is a char boundary
                search_from = face.start() + 1;
                continue;
            }
            push_words(&text[consumed..face.start()], &mut tokens);
            if let Some(emoticon) = EMOTICONS
                .iter()
                .map(|(e, _)| *e)
                .find(|e| *e == face.as_str())
            {
                tokens.push(Token::Emoticon(emoticon));
            }
        } else {
            push_words(&text[consumed..whole.start()], &mut tokens);
        }

        consumed = whole.end();
        search_from = consumed;
    }

    push_words(&text[consumed..], &mut tokens);
    tokens
}
