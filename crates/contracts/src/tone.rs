//! Card tones and their fixed class table. Colours live in `layout.css`.

use serde::Deserialize;

/// Visual style family of a content card.
///
/// Deserialisation never fails: unknown tone names resolve to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum ToneToken {
    #[default]
    Default,
    Blue,
    Green,
    Yellow,
    Red,
    Pink,
    Purple,
    Orange,
    Amber,
    Tip,
}

impl ToneToken {
    pub fn code(&self) -> &'static str {
        match self {
            ToneToken::Default => "default",
            ToneToken::Blue => "blue",
            ToneToken::Green => "green",
            ToneToken::Yellow => "yellow",
            ToneToken::Red => "red",
            ToneToken::Pink => "pink",
            ToneToken::Purple => "purple",
            ToneToken::Orange => "orange",
            ToneToken::Amber => "amber",
            ToneToken::Tip => "tip",
        }
    }

    /// Total parse: anything unrecognised is `Default`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "blue" => ToneToken::Blue,
            "green" => ToneToken::Green,
            "yellow" => ToneToken::Yellow,
            "red" => ToneToken::Red,
            "pink" => ToneToken::Pink,
            "purple" => ToneToken::Purple,
            "orange" => ToneToken::Orange,
            "amber" => ToneToken::Amber,
            "tip" => ToneToken::Tip,
            _ => ToneToken::Default,
        }
    }

    /// Modifier class for the card (`section-card--<tone>`).
    pub fn css_class(&self) -> &'static str {
        match self {
            ToneToken::Default => "section-card--default",
            ToneToken::Blue => "section-card--blue",
            ToneToken::Green => "section-card--green",
            ToneToken::Yellow => "section-card--yellow",
            ToneToken::Red => "section-card--red",
            ToneToken::Pink => "section-card--pink",
            ToneToken::Purple => "section-card--purple",
            ToneToken::Orange => "section-card--orange",
            ToneToken::Amber => "section-card--amber",
            ToneToken::Tip => "section-card--tip",
        }
    }
}

impl From<String> for ToneToken {
    fn from(code: String) -> Self {
        ToneToken::from_code(&code)
    }
}
