use crate::layout::center::{Center, TabBar};
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use contracts::{ContentCatalog, SelectOutcome, TabBar as TabBarState, TabCommand, TabKey};
use leptos::prelude::*;

fn initial_state(initial_tab: Option<TabKey>) -> TabBarState {
    let Some(key) = initial_tab else {
        return TabBarState::default();
    };
    TabBarState::default()
        .with_default(key)
        .unwrap_or_else(|err| {
            log::warn!("Initial tab ignored: {}", err);
            TabBarState::default()
        })
}

/// Runs `command` against the tab state. Subscribers are notified only when
/// the active tab actually moves.
fn apply_command(tabs: RwSignal<TabBarState>, command: TabCommand) -> SelectOutcome {
    let outcome = tabs
        .try_maybe_update(|state| {
            let outcome = state.apply(command);
            (outcome.is_changed(), outcome)
        })
        .unwrap_or(SelectOutcome::Ignored);

    match outcome {
        SelectOutcome::Changed { from, to } => {
            log::debug!("Tab switched: {} -> {}", from, to);
        }
        SelectOutcome::Ignored => {
            log::warn!("Ignored selection of unconfigured tab: {:?}", command);
        }
        SelectOutcome::Unchanged => {}
    }
    outcome
}

/// Root of the page. Owns the active-tab state.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  TabBar (sticky)                         |
/// +------------------------------------------+
/// |  Center: cards of the active tab         |
/// +------------------------------------------+
/// |  Footer (active tab icon)                |
/// +------------------------------------------+
/// ```
///
/// The state is handed down as signals and a single command callback; no
/// child writes it directly.
#[component]
pub fn PageShell(catalog: &'static ContentCatalog, initial_tab: Option<TabKey>) -> impl IntoView {
    let tabs = RwSignal::new(initial_state(initial_tab));
    let descriptors = tabs.with_untracked(|state| state.descriptors().to_vec());

    let active = Memo::new(move |_| tabs.with(|state| state.active_key()));
    let active_icon = Memo::new(move |_| tabs.with(|state| state.active_icon()));
    let meta = &catalog.meta;

    let on_command = Callback::new(move |command: TabCommand| {
        apply_command(tabs, command);
    });

    view! {
        <div class="page">
            <div class="page__container">
                <Header meta=meta />
                <TabBar descriptors=descriptors active=active on_command=on_command />
                <Center catalog=catalog active=active />
                <Footer text=meta.footer.clone() active_icon=active_icon />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{default_tabs, IconRef};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Memo over the active key that counts how often it recomputes.
    fn counted_active(tabs: RwSignal<TabBarState>) -> (Memo<TabKey>, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let active = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            tabs.with(|state| state.active_key())
        });
        (active, runs)
    }

    #[test]
    fn test_command_switches_and_repeats_are_silent() {
        let tabs = RwSignal::new(TabBarState::default());
        let (active, runs) = counted_active(tabs);
        let active_icon = Memo::new(move |_| tabs.with(|state| state.active_icon()));

        assert_eq!(active.get(), TabKey::Intro);
        assert_eq!(active_icon.get(), IconRef::BookOpen);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        assert_eq!(
            apply_command(tabs, TabCommand::Select(TabKey::Glossario)),
            SelectOutcome::Changed {
                from: TabKey::Intro,
                to: TabKey::Glossario
            }
        );
        assert_eq!(active.get(), TabKey::Glossario);
        assert_eq!(active_icon.get(), IconRef::ListChecks);
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        assert_eq!(
            apply_command(tabs, TabCommand::Select(TabKey::Glossario)),
            SelectOutcome::Unchanged
        );
        assert_eq!(active.get(), TabKey::Glossario);
        assert_eq!(runs.load(Ordering::SeqCst), 2);

        assert!(apply_command(tabs, TabCommand::Next).is_changed());
        assert_eq!(active.get(), TabKey::Resultados);
        assert_eq!(active_icon.get(), IconRef::LineChart);
        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unconfigured_selection_is_silent() {
        let state = TabBarState::new(default_tabs()[..3].to_vec()).unwrap();
        let tabs = RwSignal::new(state);
        let (active, runs) = counted_active(tabs);
        assert_eq!(active.get(), TabKey::Intro);

        assert_eq!(
            apply_command(tabs, TabCommand::Select(TabKey::Referencias)),
            SelectOutcome::Ignored
        );
        assert_eq!(active.get(), TabKey::Intro);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        assert!(apply_command(tabs, TabCommand::Last).is_changed());
        assert_eq!(active.get(), TabKey::Glossario);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_initial_state_from_query() {
        assert_eq!(initial_state(None).active_key(), TabKey::Intro);
        assert_eq!(
            initial_state(Some(TabKey::Discussao)).active_key(),
            TabKey::Discussao
        );
    }
}
