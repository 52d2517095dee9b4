// src/names/mod.rs
//! Name decomposition boundary.
//!
//! Extraction only produces display names. Splitting them into parts is an
//! injected capability so callers can plug in a real name parser.

use serde::{Deserialize, Serialize};

/// Parts of a personal name. Any part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedName {
    pub title: String,
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl DecomposedName {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.first.is_empty() && self.middle.is_empty() && self.last.is_empty()
    }
}

pub trait NameDecomposer {
    fn decompose(&self, full_name: &str) -> DecomposedName;
}

impl<F> NameDecomposer for F
where
    F: Fn(&str) -> DecomposedName,
{
    fn decompose(&self, full_name: &str) -> DecomposedName {
        self(full_name)
    }
}

/// Handles the two display forms the register itself produces:
/// `Surname, Given Names` and `Given Names Surname`, each optionally carrying
/// leading academic titles ("Dr.", "Prof. Dr.", "Dipl.-Ing.").
#[derive(Debug, Default, Clone, Copy)]
pub struct RegisterNameDecomposer;

impl NameDecomposer for RegisterNameDecomposer {
    fn decompose(&self, full_name: &str) -> DecomposedName {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return DecomposedName::default();
        }

        let mut titles: Vec<&str> = Vec::new();
        let (last_part, given_part) = match full_name.split_once(',') {
            Some((last, given)) => (Some(last), given),
            None => (None, full_name),
        };

        let surname = last_part.map(|last| split_leading_titles(last, &mut titles));
        let mut given = split_leading_titles(given_part, &mut titles);

        let last = match surname {
            Some(surname) => surname.join(" "),
            None => given.pop().unwrap_or_default().to_string(),
        };

        let first = if given.is_empty() { String::new() } else { given.remove(0).to_string() };

        DecomposedName {
            title: titles.join(" "),
            first,
            middle: given.join(" "),
            last,
        }
    }
}

/// Moves leading title tokens of `part` into `titles`, returns the rest.
fn split_leading_titles<'a>(part: &'a str, titles: &mut Vec<&'a str>) -> Vec<&'a str> {
    let mut rest = Vec::new();
    for token in part.split_whitespace() {
        if rest.is_empty() && is_title(token) {
            titles.push(token);
        } else {
            rest.push(token);
        }
    }
    rest
}

// Abbreviated titles end with a dot ("Dr.", "Prof.", "Dipl.-Kfm.").
fn is_title(token: &str) -> bool {
    token.len() > 1 && token.ends_with('.') && token.chars().next().is_some_and(char::is_uppercase)
}
