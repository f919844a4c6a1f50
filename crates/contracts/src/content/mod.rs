//! Static page content: one payload per tab plus header/footer metadata.
//!
//! The documents live in `content/*.json` next to this crate and are bundled
//! at compile time (see [`catalog`]).

mod catalog;

pub use catalog::ContentCatalog;

use crate::tone::ToneToken;
use serde::Deserialize;

/// Inline run of text inside a paragraph or list item.
///
/// In the documents a plain string is text; styled runs are one-key objects:
/// `{"strong": ".."}`, `{"em": ".."}`, `{"code": ".."}`,
/// `{"link": "..", "href": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Inline {
    Text(String),
    Strong {
        #[serde(rename = "strong")]
        text: String,
    },
    Emphasis {
        #[serde(rename = "em")]
        text: String,
    },
    Code {
        #[serde(rename = "code")]
        text: String,
    },
    Link {
        href: String,
        #[serde(rename = "link")]
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Paragraph(Vec<Inline>),
    Bullets(Vec<Vec<Inline>>),
    Numbered(Vec<Vec<Inline>>),
}

/// Arrangement of the cards inside a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Stack,
    Compact,
    Grid,
}

impl Layout {
    pub fn css_class(&self) -> &'static str {
        match self {
            Layout::Stack => "section-layout section-layout--stack",
            Layout::Compact => "section-layout section-layout--compact",
            Layout::Grid => "section-layout section-layout--grid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionCard {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tone: ToneToken,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContentPayload {
    #[serde(default)]
    pub layout: Layout,
    pub cards: Vec<SectionCard>,
}

impl ContentPayload {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().filter_map(|card| card.title.as_deref())
    }
}

/// Header and footer text of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub authors: String,
    pub paper_href: String,
    pub paper_label: String,
    pub badge_title: String,
    pub badge_subtitle: String,
    pub footer: String,
}
