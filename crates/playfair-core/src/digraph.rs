//! Splits plaintext into letter pairs.
//!
//! A pair is formed from two consecutive letters, unless both are the same
//! letter (ignoring case) or only one letter is left. In those cases the
//! current letter is paired with the padding letter and the next letter, if
//! any, opens the following pair.

use std::fmt::{self, Display, Formatter};
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use crate::options::DEFAULT_PADDING;

/// Two lowercase letters, the unit the cipher works on. May still contain `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph(pub char, pub char);

impl Display for Digraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Lazy iterator over the digraphs of a text.
///
/// Cloning it, or building a new one from the same text, restarts the sequence.
#[derive(Debug, Clone)]
pub struct Digraphs<'a> {
    chars: Peekable<Chars<'a>>,
    padding: char,
}

impl<'a> Digraphs<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_padding(text, DEFAULT_PADDING)
    }

    pub fn with_padding(text: &'a str, padding: char) -> Self {
        Self {
            chars: text.chars().peekable(),
            padding,
        }
    }
}

impl Iterator for Digraphs<'_> {
    type Item = Digraph;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.chars.next()?;
        let second = match self.chars.peek().copied() {
            Some(next) if !next.eq_ignore_ascii_case(&first) => {
                self.chars.next().map(|c| c.to_ascii_lowercase())
            }
            _ => None,
        };

        Some(Digraph(
            first.to_ascii_lowercase(),
            second.unwrap_or(self.padding),
        ))
    }
}

impl FusedIterator for Digraphs<'_> {}

/// Digraphs of `text` padded with `x`.
pub fn segment(text: &str) -> Digraphs<'_> {
    Digraphs::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<String> {
        segment(text).map(|d| d.to_string()).collect()
    }

    #[test]
    fn should_pad_the_repeated_l_in_helloworld() {
        assert_eq!(pairs("helloworld"), vec!["he", "lx", "lo", "wo", "rl", "dx"]);
    }

    #[test]
    fn should_yield_nothing_for_empty_text() {
        assert_eq!(segment("").next(), None);
    }

    #[test]
    fn should_pad_a_single_letter() {
        assert_eq!(segment("a").collect::<Vec<_>>(), vec![Digraph('a', 'x')]);
    }

    #[test]
    fn should_only_split_repeats_inside_a_pair() {
        assert_eq!(pairs("book"), vec!["bo", "ok"]);
        assert_eq!(pairs("balloon"), vec!["ba", "lx", "lo", "on"]);
    }

    #[test]
    fn should_compare_case_insensitive_and_emit_lowercase() {
        assert_eq!(pairs("LlAMA"), vec!["lx", "la", "ma"]);
    }

    #[test]
    fn should_keep_j_in_the_digraph() {
        assert_eq!(pairs("jinx"), vec!["ji", "nx"]);
    }

    #[test]
    fn should_use_a_custom_padding() {
        let pairs: Vec<_> = Digraphs::with_padding("too", 'q').collect();
        assert_eq!(pairs, vec![Digraph('t', 'o'), Digraph('o', 'q')]);
    }

    #[test]
    fn should_restart_when_cloned() {
        let mut digraphs = segment("secret");
        let restarted = digraphs.clone();
        digraphs.next();
        assert_eq!(restarted.count(), 3);
        assert_eq!(digraphs.count(), 2);
    }

    #[test]
    fn should_cover_every_letter_in_order() {
        let text = "thequickbrownfoxxjumpsoverthelazydogg";
        let joined: String = segment(text).map(|d| d.to_string()).collect();
        let mut letters = joined.chars().peekable();
        for expected in text.chars() {
            loop {
                let got = letters.next().expect("ran out of letters");
                if got == expected {
                    break;
                }
                assert_eq!(got, 'x', "only padding may be injected");
            }
        }
        assert!(letters.all(|c| c == 'x'));
    }
}
