use crate::shared::icons::icon;
use contracts::IconRef;
use leptos::prelude::*;

/// Attribution line, prefixed with the icon of the active tab.
#[component]
pub fn Footer(text: String, #[prop(into)] active_icon: Signal<IconRef>) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content">
                {move || icon(active_icon.get())}
                <span>{text}</span>
            </div>
        </footer>
    }
}
