//! Tab configuration and the active-tab state machine.
//!
//! The descriptor sequence is fixed at construction; the only mutation is
//! moving the active marker through `apply` or one of the `select*` methods.

mod error;
mod key;

pub use error::TabError;
pub use key::{IconRef, TabKey};

/// Fixed configuration record for one selectable section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub key: TabKey,
    pub label: &'static str,
    pub icon: IconRef,
}

impl TabDescriptor {
    pub const fn new(key: TabKey, label: &'static str, icon: IconRef) -> Self {
        Self { key, label, icon }
    }
}

/// Sections of the page in display order.
pub fn default_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new(TabKey::Intro, "Introdução", IconRef::BookOpen),
        TabDescriptor::new(TabKey::Metodos, "Métodos", IconRef::FlaskConical),
        TabDescriptor::new(TabKey::Glossario, "Glossário", IconRef::ListChecks),
        TabDescriptor::new(TabKey::Resultados, "Resultados", IconRef::LineChart),
        TabDescriptor::new(TabKey::Discussao, "Discussão", IconRef::MessageSquareText),
        TabDescriptor::new(TabKey::Referencias, "Referências", IconRef::Link),
    ]
}

/// Result of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The active tab moved.
    Changed { from: TabKey, to: TabKey },
    /// The requested tab was already active.
    Unchanged,
    /// The requested key is not configured; state is untouched.
    Ignored,
}

impl SelectOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, SelectOutcome::Changed { .. })
    }
}

/// Request coming from the tab strip: a click or a navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCommand {
    Select(TabKey),
    Next,
    Previous,
    First,
    Last,
}

impl TabCommand {
    /// Maps a DOM `KeyboardEvent.key` value to a navigation command.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" => Some(TabCommand::Next),
            "ArrowLeft" => Some(TabCommand::Previous),
            "Home" => Some(TabCommand::First),
            "End" => Some(TabCommand::Last),
            _ => None,
        }
    }
}

/// Ordered, non-empty tab set with exactly one active entry.
///
/// Unknown keys are ignored on selection (`SelectOutcome::Ignored`) rather
/// than reported as errors: the page has no channel to show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    tabs: Vec<TabDescriptor>,
    active: usize,
}

impl TabBar {
    /// Builds a tab bar with the first descriptor active.
    pub fn new(tabs: Vec<TabDescriptor>) -> Result<Self, TabError> {
        if tabs.is_empty() {
            return Err(TabError::Empty);
        }
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].iter().any(|other| other.key == tab.key) {
                return Err(TabError::DuplicateKey(tab.key));
            }
        }
        Ok(Self { tabs, active: 0 })
    }

    /// Makes `key` the initially active tab.
    pub fn with_default(mut self, key: TabKey) -> Result<Self, TabError> {
        self.active = self
            .position(key)
            .ok_or_else(|| TabError::InvalidSelection(key.code().to_string()))?;
        Ok(self)
    }

    fn position(&self, key: TabKey) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.key == key)
    }

    fn select_index(&mut self, index: usize) -> SelectOutcome {
        if index == self.active {
            return SelectOutcome::Unchanged;
        }
        let from = self.active_key();
        self.active = index;
        SelectOutcome::Changed {
            from,
            to: self.active_key(),
        }
    }

    pub fn select(&mut self, key: TabKey) -> SelectOutcome {
        match self.position(key) {
            Some(index) => self.select_index(index),
            None => SelectOutcome::Ignored,
        }
    }

    /// Selection by raw key string, e.g. from a URL or a DOM data attribute.
    pub fn select_code(&mut self, code: &str) -> SelectOutcome {
        match TabKey::from_code(code) {
            Some(key) => self.select(key),
            None => SelectOutcome::Ignored,
        }
    }

    pub fn select_next(&mut self) -> SelectOutcome {
        let next = (self.active + 1) % self.tabs.len();
        self.select_index(next)
    }

    pub fn select_previous(&mut self) -> SelectOutcome {
        let len = self.tabs.len();
        let previous = (self.active + len - 1) % len;
        self.select_index(previous)
    }

    pub fn select_first(&mut self) -> SelectOutcome {
        self.select_index(0)
    }

    pub fn select_last(&mut self) -> SelectOutcome {
        self.select_index(self.tabs.len() - 1)
    }

    pub fn apply(&mut self, command: TabCommand) -> SelectOutcome {
        match command {
            TabCommand::Select(key) => self.select(key),
            TabCommand::Next => self.select_next(),
            TabCommand::Previous => self.select_previous(),
            TabCommand::First => self.select_first(),
            TabCommand::Last => self.select_last(),
        }
    }

    pub fn active(&self) -> &TabDescriptor {
        &self.tabs[self.active]
    }

    pub fn active_key(&self) -> TabKey {
        self.active().key
    }

    pub fn active_icon(&self) -> IconRef {
        self.active().icon
    }

    pub fn is_active(&self, key: TabKey) -> bool {
        self.active_key() == key
    }

    pub fn descriptors(&self) -> &[TabDescriptor] {
        &self.tabs
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self {
            tabs: default_tabs(),
            active: 0,
        }
    }
}
