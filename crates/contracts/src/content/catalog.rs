use super::{ContentPayload, PageMeta};
use crate::tabs::TabKey;
use anyhow::Context;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

const PAGE: &str = include_str!("../../content/page.json");
const INTRO: &str = include_str!("../../content/intro.json");
const METODOS: &str = include_str!("../../content/metodos.json");
const GLOSSARIO: &str = include_str!("../../content/glossario.json");
const RESULTADOS: &str = include_str!("../../content/resultados.json");
const DISCUSSAO: &str = include_str!("../../content/discussao.json");
const REFERENCIAS: &str = include_str!("../../content/referencias.json");

static BUNDLED: Lazy<anyhow::Result<ContentCatalog>> = Lazy::new(ContentCatalog::load);
static EMPTY: Lazy<ContentCatalog> = Lazy::new(ContentCatalog::default);

/// All payloads of the page, one per [`TabKey`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentCatalog {
    pub meta: PageMeta,
    intro: ContentPayload,
    metodos: ContentPayload,
    glossario: ContentPayload,
    resultados: ContentPayload,
    discussao: ContentPayload,
    referencias: ContentPayload,
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("invalid content document '{}'", name))
}

impl ContentCatalog {
    /// Parses the documents bundled into the binary.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            meta: parse("page.json", PAGE)?,
            intro: parse("intro.json", INTRO)?,
            metodos: parse("metodos.json", METODOS)?,
            glossario: parse("glossario.json", GLOSSARIO)?,
            resultados: parse("resultados.json", RESULTADOS)?,
            discussao: parse("discussao.json", DISCUSSAO)?,
            referencias: parse("referencias.json", REFERENCIAS)?,
        })
    }

    /// Process-wide parsed copy of the bundled documents.
    pub fn bundled() -> Result<&'static ContentCatalog, &'static anyhow::Error> {
        Lazy::force(&BUNDLED).as_ref()
    }

    /// Catalog with no cards, for rendering when the bundle is unusable.
    pub fn empty() -> &'static ContentCatalog {
        &EMPTY
    }

    pub fn payload(&self, key: TabKey) -> &ContentPayload {
        match key {
            TabKey::Intro => &self.intro,
            TabKey::Metodos => &self.metodos,
            TabKey::Glossario => &self.glossario,
            TabKey::Resultados => &self.resultados,
            TabKey::Discussao => &self.discussao,
            TabKey::Referencias => &self.referencias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Layout;

    #[test]
    fn test_bundled_documents_parse() {
        let catalog = ContentCatalog::load().unwrap();
        for key in TabKey::all() {
            assert!(!catalog.payload(key).is_empty(), "no cards for {}", key);
        }
        assert!(catalog.meta.paper_href.starts_with("https://arxiv.org/"));
    }

    #[test]
    fn test_layouts() {
        let catalog = ContentCatalog::bundled().unwrap();
        assert_eq!(catalog.payload(TabKey::Glossario).layout, Layout::Grid);
        assert_eq!(catalog.payload(TabKey::Referencias).layout, Layout::Compact);
        assert_eq!(catalog.payload(TabKey::Intro).layout, Layout::Stack);
    }

    #[test]
    fn test_broken_document_names_file() {
        let err = parse::<ContentPayload>("intro.json", "{").unwrap_err();
        assert!(format!("{:#}", err).contains("intro.json"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ContentCatalog::empty();
        assert!(TabKey::all().iter().all(|key| catalog.payload(*key).is_empty()));
    }
}
