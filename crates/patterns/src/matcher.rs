//! Segment-sequence and in-segment wildcard matching.
//!
//! The same scheme runs at two granularities. Across segments, `**` tokens
//! delimit groups of literal tokens; within one segment, `*` characters
//! delimit chunks of literal characters. Both matchers consume the literal
//! prefix and suffix first, then slide each wildcard-bounded group to the
//! leftmost position that fits. Matching is a boolean test: the first
//! workable split is taken, since only existence matters.

use crate::pattern::Token;

/// Tests whether `segments` is consumed in full by `tokens`.
pub(crate) fn match_tokens(tokens: &[Token], segments: &[String], case_sensitive: bool) -> bool {
    let mut pat = tokens;
    let mut segs = segments;

    // Literal prefix.
    while let (Some(Token::Literal(lit)), Some(seg)) = (pat.first(), segs.first()) {
        if !match_segment(lit, seg, case_sensitive) {
            return false;
        }
        pat = &pat[1..];
        segs = &segs[1..];
    }
    if segs.is_empty() {
        // Path consumed; whatever pattern remains must be able to match
        // nothing at all.
        return pat.iter().all(|token| matches!(token, Token::AnySegments));
    }
    if pat.is_empty() {
        return false;
    }

    // Literal suffix.
    while let (Some(Token::Literal(lit)), Some(seg)) = (pat.last(), segs.last()) {
        if !match_segment(lit, seg, case_sensitive) {
            return false;
        }
        pat = &pat[..pat.len() - 1];
        segs = &segs[..segs.len() - 1];
    }
    if segs.is_empty() {
        return pat.iter().all(|token| matches!(token, Token::AnySegments));
    }

    // `pat` now begins and ends with `**`. Slide each literal group bounded
    // by two `**` tokens to its leftmost fit in what is left of the path.
    while pat.len() > 1 {
        let Some(next) = pat[1..]
            .iter()
            .position(|token| matches!(token, Token::AnySegments))
        else {
            break;
        };
        let group = &pat[1..=next];
        if group.is_empty() {
            // `**/**` collapses.
            pat = &pat[1..];
            continue;
        }
        let Some(offset) = slide_tokens(group, segs, case_sensitive) else {
            return false;
        };
        pat = &pat[next + 1..];
        segs = &segs[offset + group.len()..];
    }

    pat.iter().all(|token| matches!(token, Token::AnySegments))
}

/// Tests whether `segments` is consistent with some longer path that would
/// satisfy [`match_tokens`].
///
/// Every supplied segment must match its token. If the path runs out while
/// literal tokens remain, those tokens are presumed satisfiable: they will
/// be tested against real children later. Reaching a `**` settles the
/// question immediately, since it can absorb anything deeper.
pub(crate) fn match_tokens_prefix(
    tokens: &[Token],
    segments: &[String],
    case_sensitive: bool,
) -> bool {
    let mut pat = tokens;
    let mut segs = segments;

    loop {
        match (pat.first(), segs.first()) {
            (Some(Token::AnySegments), _) => return true,
            (Some(Token::Literal(_)), None) => return true,
            (Some(Token::Literal(lit)), Some(seg)) => {
                if !match_segment(lit, seg, case_sensitive) {
                    return false;
                }
                pat = &pat[1..];
                segs = &segs[1..];
            }
            (None, None) => return true,
            (None, Some(_)) => return false,
        }
    }
}

/// Tests one path segment against one literal token using `*` and `?`.
///
/// `*` matches any run of characters, including none; `?` matches exactly
/// one character.
pub(crate) fn match_segment(pattern: &str, segment: &str, case_sensitive: bool) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = segment.chars().collect();

    if !pat.contains(&'*') {
        // Without `*` the lengths must agree exactly.
        return pat.len() == text.len()
            && pat
                .iter()
                .zip(&text)
                .all(|(&p, &c)| char_matches(p, c, case_sensitive));
    }

    let mut pat = pat.as_slice();
    let mut text = text.as_slice();

    // Literal prefix up to the first `*`.
    while let (Some(&p), Some(&c)) = (pat.first(), text.first()) {
        if p == '*' {
            break;
        }
        if !char_matches(p, c, case_sensitive) {
            return false;
        }
        pat = &pat[1..];
        text = &text[1..];
    }
    if text.is_empty() {
        return pat.iter().all(|&p| p == '*');
    }
    if pat.is_empty() {
        return false;
    }

    // Literal suffix back to the last `*`.
    while let (Some(&p), Some(&c)) = (pat.last(), text.last()) {
        if p == '*' {
            break;
        }
        if !char_matches(p, c, case_sensitive) {
            return false;
        }
        pat = &pat[..pat.len() - 1];
        text = &text[..text.len() - 1];
    }
    if text.is_empty() {
        return pat.iter().all(|&p| p == '*');
    }

    // `pat` begins and ends with `*`; slide each bounded chunk left to right.
    while pat.len() > 1 {
        let Some(next) = pat[1..].iter().position(|&p| p == '*') else {
            break;
        };
        let chunk = &pat[1..=next];
        if chunk.is_empty() {
            pat = &pat[1..];
            continue;
        }
        let Some(offset) = slide_chars(chunk, text, case_sensitive) else {
            return false;
        };
        pat = &pat[next + 1..];
        text = &text[offset + chunk.len()..];
    }

    pat.iter().all(|&p| p == '*')
}

/// Finds the leftmost offset at which every token in `group` matches a
/// consecutive run of `segments`.
fn slide_tokens(group: &[Token], segments: &[String], case_sensitive: bool) -> Option<usize> {
    if group.len() > segments.len() {
        return None;
    }
    (0..=segments.len() - group.len()).find(|&offset| {
        group
            .iter()
            .zip(&segments[offset..])
            .all(|(token, segment)| match token {
                // Groups are delimited by `**` positions, so only literals
                // occur here; treating `**` as match-one keeps this total.
                Token::AnySegments => true,
                Token::Literal(lit) => match_segment(lit, segment, case_sensitive),
            })
    })
}

/// Finds the leftmost offset at which every character of `chunk` matches a
/// consecutive run of `text`.
fn slide_chars(chunk: &[char], text: &[char], case_sensitive: bool) -> Option<usize> {
    if chunk.len() > text.len() {
        return None;
    }
    (0..=text.len() - chunk.len()).find(|&offset| {
        chunk
            .iter()
            .enumerate()
            .all(|(i, &p)| char_matches(p, text[offset + i], case_sensitive))
    })
}

fn char_matches(p: char, c: char, case_sensitive: bool) -> bool {
    if p == '?' {
        return true;
    }
    if p == c {
        return true;
    }
    !case_sensitive && p.to_lowercase().eq(c.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(pattern: &str, text: &str) -> bool {
        match_segment(pattern, text, true)
    }

    #[test]
    fn plain_text_matches_itself_only() {
        assert!(segment("main.rs", "main.rs"));
        assert!(!segment("main.rs", "main.rc"));
        assert!(!segment("main.rs", "main.rs.bak"));
    }

    #[test]
    fn question_mark_matches_exactly_one_character() {
        assert!(segment("a??.java", "abc.java"));
        assert!(!segment("a??.java", "ab.java"));
        assert!(!segment("a??.java", "abcd.java"));
    }

    #[test]
    fn star_matches_any_run_including_empty() {
        assert!(segment("*.txt", "notes.txt"));
        assert!(segment("*.txt", ".txt"));
        assert!(segment("file*", "file"));
        assert!(segment("a*b*c", "aXXbYYc"));
        assert!(segment("a*b*c", "abc"));
        assert!(!segment("a*b*c", "acb"));
    }

    #[test]
    fn star_backtracks_across_repeated_chunks() {
        assert!(segment("*ab*ab*", "XabYabZ"));
        assert!(segment("*ab*ab*", "ababab"));
        assert!(!segment("*ab*ab*", "abX"));
    }

    #[test]
    fn case_flag_controls_character_comparison() {
        assert!(!match_segment("Readme*", "README.md", true));
        assert!(match_segment("Readme*", "README.md", false));
    }

    #[test]
    fn question_mark_matches_star_literally_too() {
        assert!(segment("?", "x"));
        assert!(segment("??", "ab"));
        assert!(!segment("??", "a"));
    }
}
