use crate::shared::components::CardAnimated;
use contracts::ToneToken;
use leptos::prelude::*;

fn card_class(tone: ToneToken) -> String {
    format!("section-card {}", tone.css_class())
}

/// Titled card with a tone background.
///
/// Unknown tones never reach this component: [`ToneToken`] parsing already
/// folds them into `ToneToken::Default`.
#[component]
pub fn ContentCard(
    /// Card heading, omitted when absent
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Background tone
    #[prop(optional)]
    tone: ToneToken,
    /// Entrance animation delay
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <CardAnimated class=card_class(tone) delay_ms=delay_ms>
            {move || title.get().map(|title| view! {
                <h3 class="section-card__title">{title}</h3>
            })}
            <div class="section-card__body">{children()}</div>
        </CardAnimated>
    }
}
