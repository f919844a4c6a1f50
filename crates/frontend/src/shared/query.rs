//! Page parameters read from the URL query string.
//!
//! `?tab=glossario` opens the page on that section. Unknown values are
//! dropped and the first tab is used.

use contracts::TabKey;
use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

impl PageQuery {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|err| {
            log::warn!("Malformed query string '{}': {}", search, err);
            Self::default()
        })
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }

    pub fn tab(&self) -> Option<TabKey> {
        let code = self.tab.as_deref()?;
        let key = TabKey::from_code(code);
        if key.is_none() {
            log::warn!("Unknown tab in query string: '{}'", code);
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(PageQuery::parse("?tab=glossario").tab(), Some(TabKey::Glossario));
        assert_eq!(
            PageQuery::parse("?lang=pt&tab=metodos").tab(),
            Some(TabKey::Metodos)
        );
    }

    #[test]
    fn test_missing_or_unknown_tab() {
        assert_eq!(PageQuery::parse("").tab(), None);
        assert_eq!(PageQuery::parse("?").tab(), None);
        assert_eq!(PageQuery::parse("?tab=unknown_key").tab(), None);
    }
}
