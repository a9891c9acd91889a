//! Markdown slide decks.
//!
//! A deck is a UTF-8 Markdown file where slides are separated by lines that
//! consist of `---`. Blank slides are dropped.

mod parser;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use parser::{first_heading, split_slides};

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read deck '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Deck '{path}' contains no slides")]
    Empty { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    body: String,
    title: Option<String>,
}

impl Slide {
    pub fn new(body: impl Into<String>) -> Self {
        let body = body.into();
        let title = first_heading(&body);
        Self { body, title }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// First level-1 or level-2 heading.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    name: String,
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck from Markdown text. Returns `None` if it has no slides.
    pub fn parse(name: impl Into<String>, source: &str) -> Option<Self> {
        let slides: Vec<Slide> = split_slides(source).into_iter().map(Slide::new).collect();
        if slides.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            slides,
        })
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let source = fs::read_to_string(path).map_err(|e| DeckError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string());
        let deck = Self::parse(name, &source).ok_or_else(|| DeckError::Empty {
            path: path.to_path_buf(),
        })?;
        tracing::info!(path = %path.display(), slides = deck.len(), "Loaded deck");
        Ok(deck)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a parsed deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
