//! Fallback answers for input that names no command.
//!
//! The dispatcher consults a `Responder` only after registry lookup fails.
//! `KeywordResponder` matches the lower-cased input against regex
//! categories and rotates through each category's canned replies.

use regex::Regex;
use serde::Deserialize;

use folio_types::error::{FolioError, Result};

use crate::interpreter::Output;

const PORTFOLIO_REPLIES: &str = include_str!("../data/replies.toml");

/// Produces an output for unmatched input, or declines with `None`.
pub trait Responder {
    fn respond(&mut self, input: &str) -> Option<Output>;
}

struct Category {
    name: String,
    pattern: Option<Regex>,
    replies: Vec<String>,
    next: usize,
}

impl Category {
    fn reply(&mut self) -> Option<String> {
        if self.replies.is_empty() {
            return None;
        }
        let text = self.replies[self.next].clone();
        self.next = (self.next + 1) % self.replies.len();
        Some(text)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RepliesFile {
    #[serde(default, rename = "category")]
    categories: Vec<CategoryDef>,
    #[serde(default)]
    fallback: Option<FallbackDef>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryDef {
    name: String,
    pattern: String,
    replies: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FallbackDef {
    replies: Vec<String>,
}

/// Regex-keyed canned replies.
#[derive(Default)]
pub struct KeywordResponder {
    categories: Vec<Category>,
    fallback: Option<Category>,
}

impl KeywordResponder {
    /// A responder that never answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled portfolio Q&A categories. Unmatched input is declined.
    pub fn portfolio() -> Result<Self> {
        Self::from_toml(PORTFOLIO_REPLIES)
    }

    /// Parse a replies file:
    ///
    /// ```toml
    /// [[category]]
    /// name = "greetings"
    /// pattern = '^(hi|hello)\b'
    /// replies = ["Hello!", "Hi there!"]
    ///
    /// [fallback]
    /// replies = ["Try 'help'."]
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: RepliesFile = toml::from_str(text)?;
        let mut responder = Self::new();
        for def in file.categories {
            responder = responder.with_category(&def.name, &def.pattern, def.replies)?;
        }
        if let Some(fallback) = file.fallback {
            responder = responder.with_fallback(fallback.replies);
        }
        Ok(responder)
    }

    /// Append a category. Categories are tried in insertion order.
    pub fn with_category(mut self, name: &str, pattern: &str, replies: Vec<String>) -> Result<Self> {
        if replies.is_empty() {
            return Err(FolioError::Config(format!("reply category {name} has no replies")));
        }
        let regex = Regex::new(pattern)
            .map_err(|e| FolioError::Config(format!("reply category {name}: {e}")))?;
        self.categories.push(Category {
            name: name.to_string(),
            pattern: Some(regex),
            replies,
            next: 0,
        });
        Ok(self)
    }

    /// Answer otherwise unmatched input with these replies instead of declining.
    pub fn with_fallback(mut self, replies: Vec<String>) -> Self {
        self.fallback = Some(Category {
            name: "fallback".to_string(),
            pattern: None,
            replies,
            next: 0,
        });
        self
    }

    /// Category names in match order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Responder for KeywordResponder {
    fn respond(&mut self, input: &str) -> Option<Output> {
        let lower = input.to_lowercase();
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.pattern.as_ref().is_some_and(|re| re.is_match(&lower)));
        let category = match category {
            Some(c) => c,
            None => self.fallback.as_mut()?,
        };
        log::debug!("Responder category {} for {lower:?}", category.name);
        category.reply().map(Output::ai)
    }
}
