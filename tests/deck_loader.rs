mod common;

use slidedeck::deck::{Deck, DeckError};
use std::path::Path;

const TALK: &str = "\
# Welcome

Opening remarks.

---

## Overview

- one
- two

---

Closing without a heading.
";

#[test]
fn loads_slides_and_titles() {
    let (_dir, path) = common::temp_file("quarterly-review.md", TALK);
    let deck = Deck::load(&path).unwrap();

    assert_eq!(deck.name(), "quarterly-review");
    assert_eq!(deck.len(), 3);
    assert!(!deck.is_empty());

    let titles: Vec<Option<&str>> = deck.slides().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec![Some("Welcome"), Some("Overview"), None]);
    assert_eq!(deck.slides()[2].body(), "Closing without a heading.");
}

#[test]
fn missing_file_is_read_error() {
    let err = Deck::load(Path::new("/nonexistent/deck.md")).unwrap_err();
    assert!(matches!(err, DeckError::ReadError { .. }));
    assert!(err.to_string().contains("/nonexistent/deck.md"));
}

#[test]
fn deck_of_separators_is_empty_error() {
    let (_dir, path) = common::temp_file("blank.md", "---\n\n---\n   \n");
    let err = Deck::load(&path).unwrap_err();
    assert!(matches!(err, DeckError::Empty { .. }));
}

#[test]
fn parse_without_separators_is_one_slide() {
    let deck = Deck::parse("solo", "# Only\ntext").unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.slides()[0].title(), Some("Only"));
}
