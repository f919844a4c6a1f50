/// Sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKey {
    Intro,
    Metodos,
    Glossario,
    Resultados,
    Discussao,
    Referencias,
}

impl TabKey {
    /// Section code, used in the URL and in data attributes.
    pub fn code(&self) -> &'static str {
        match self {
            TabKey::Intro => "intro",
            TabKey::Metodos => "metodos",
            TabKey::Glossario => "glossario",
            TabKey::Resultados => "resultados",
            TabKey::Discussao => "discussao",
            TabKey::Referencias => "referencias",
        }
    }

    /// All sections in page order.
    pub fn all() -> [TabKey; 6] {
        [
            TabKey::Intro,
            TabKey::Metodos,
            TabKey::Glossario,
            TabKey::Resultados,
            TabKey::Discussao,
            TabKey::Referencias,
        ]
    }

    /// Parses a section code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "intro" => Some(TabKey::Intro),
            "metodos" => Some(TabKey::Metodos),
            "glossario" => Some(TabKey::Glossario),
            "resultados" => Some(TabKey::Resultados),
            "discussao" => Some(TabKey::Discussao),
            "referencias" => Some(TabKey::Referencias),
            _ => None,
        }
    }
}

impl std::fmt::Display for TabKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Symbolic icon reference. The frontend's icon provider turns it into a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    BookOpen,
    FlaskConical,
    ListChecks,
    LineChart,
    MessageSquareText,
    Link,
}

impl IconRef {
    pub fn name(&self) -> &'static str {
        match self {
            IconRef::BookOpen => "book-open",
            IconRef::FlaskConical => "flask-conical",
            IconRef::ListChecks => "list-checks",
            IconRef::LineChart => "line-chart",
            IconRef::MessageSquareText => "message-square-text",
            IconRef::Link => "link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for key in TabKey::all() {
            assert_eq!(TabKey::from_code(key.code()), Some(key));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(TabKey::from_code("unknown_key"), None);
        assert_eq!(TabKey::from_code("Intro"), None);
        assert_eq!(TabKey::from_code(""), None);
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(IconRef::BookOpen.name(), "book-open");
        assert_eq!(IconRef::MessageSquareText.name(), "message-square-text");
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(TabKey::Glossario.to_string(), "glossario");
        assert_eq!(format!("{} -> {}", TabKey::Intro, TabKey::Metodos), "intro -> metodos");
    }
}
