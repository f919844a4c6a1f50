use crate::shared::components::ContentCard;
use crate::shared::rich_text::RichText;
use contracts::{ContentCatalog, TabKey};
use leptos::prelude::*;

/// Step between the entrance animations of consecutive cards.
const CARD_STAGGER_MS: u32 = 40;
/// Cards past this index appear together with the last staggered one.
const MAX_STAGGERED: usize = 8;

fn card_delay(index: usize) -> u32 {
    index.min(MAX_STAGGERED) as u32 * CARD_STAGGER_MS
}

/// Content region: the cards of the active tab.
///
/// The whole section is rebuilt on every tab change, so the cards mount
/// again and their entrance animation replays.
#[component]
pub fn Center(catalog: &'static ContentCatalog, #[prop(into)] active: Signal<TabKey>) -> impl IntoView {
    let section = move || {
        let key = active.get();
        let payload = catalog.payload(key);
        log::debug!("Rendering section '{}' ({} cards)", key, payload.cards.len());

        if payload.is_empty() {
            return view! {
                <div class="placeholder">"Conteúdo indisponível."</div>
            }
            .into_any();
        }

        view! {
            <section
                class=format!("section-content {}", payload.layout.css_class())
                data-tab-key=key.code()
            >
                {payload
                    .cards
                    .iter()
                    .enumerate()
                    .map(|(index, card)| {
                        view! {
                            <ContentCard
                                title=card.title.clone()
                                tone=card.tone
                                delay_ms=card_delay(index)
                            >
                                <RichText blocks=card.blocks.clone() />
                            </ContentCard>
                        }
                    })
                    .collect_view()}
            </section>
        }
        .into_any()
    };

    view! {
        <main data-zone="center" class="app-main">
            {section}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_delay_is_staggered_and_capped() {
        assert_eq!(card_delay(0), 0);
        assert_eq!(card_delay(1), 40);
        assert_eq!(card_delay(3), 120);
        assert_eq!(card_delay(MAX_STAGGERED), 320);
        assert_eq!(card_delay(25), 320);
    }
}
