use crate::shared::icons::icon;
use contracts::{TabCommand, TabDescriptor, TabKey};
use leptos::prelude::*;

#[component]
pub fn Tab(
    tab: TabDescriptor,
    #[prop(into)] active: Signal<TabKey>,
    on_command: Callback<TabCommand>,
) -> impl IntoView {
    let key = tab.key;
    let is_active = Memo::new(move |_| active.get() == key);

    let tab_index = move || if is_active.get() { "0" } else { "-1" };
    let on_click = move |_| on_command.run(TabCommand::Select(key));

    view! {
        <button
            type="button"
            role="tab"
            class="tab"
            class:active=move || is_active.get()
            aria-pressed=move || is_active.get().to_string()
            aria-selected=move || is_active.get().to_string()
            tabindex=tab_index
            data-tab-key=key.code()
            data-icon=tab.icon.name()
            on:click=on_click
        >
            {icon(tab.icon)}
            <span>{tab.label}</span>
        </button>
    }
}
