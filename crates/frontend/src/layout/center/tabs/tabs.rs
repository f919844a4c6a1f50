use crate::layout::center::tabs::tab::Tab;
use contracts::{TabCommand, TabDescriptor, TabKey};
use leptos::prelude::*;

/// Sticky strip of section buttons.
///
/// Clicks and arrow/Home/End keys are reported as [`TabCommand`]s; the
/// owner decides what happens to the active tab.
#[component]
pub fn TabBar(
    descriptors: Vec<TabDescriptor>,
    #[prop(into)] active: Signal<TabKey>,
    on_command: Callback<TabCommand>,
) -> impl IntoView {
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if let Some(command) = TabCommand::from_key_name(&ev.key()) {
            ev.prevent_default();
            on_command.run(command);
        }
    };

    view! {
        <nav data-zone="tabs" class="tabs-bar">
            <div class="tabs-bar__list" role="tablist" on:keydown=on_keydown>
                {descriptors
                    .into_iter()
                    .map(|tab| view! { <Tab tab=tab active=active on_command=on_command /> })
                    .collect_view()}
            </div>
        </nav>
    }
}
