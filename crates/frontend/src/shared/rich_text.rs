use contracts::{Block, Inline};
use leptos::prelude::*;

fn inline_view(run: Inline) -> AnyView {
    match run {
        Inline::Text(text) => text.into_any(),
        Inline::Strong { text } => view! { <strong>{text}</strong> }.into_any(),
        Inline::Emphasis { text } => view! { <em>{text}</em> }.into_any(),
        Inline::Code { text } => view! { <code>{text}</code> }.into_any(),
        Inline::Link { href, text } => view! {
            <a href=href target="_blank" rel="noopener noreferrer">{text}</a>
        }
        .into_any(),
    }
}

fn runs_view(runs: Vec<Inline>) -> impl IntoView {
    runs.into_iter().map(inline_view).collect_view()
}

fn items_view(items: Vec<Vec<Inline>>) -> impl IntoView {
    items
        .into_iter()
        .map(|runs| view! { <li>{runs_view(runs)}</li> })
        .collect_view()
}

fn block_view(block: Block) -> AnyView {
    match block {
        Block::Paragraph(runs) => view! { <p>{runs_view(runs)}</p> }.into_any(),
        Block::Bullets(items) => view! { <ul>{items_view(items)}</ul> }.into_any(),
        Block::Numbered(items) => view! { <ol>{items_view(items)}</ol> }.into_any(),
    }
}

/// Renders paragraphs and lists of a content card.
#[component]
pub fn RichText(blocks: Vec<Block>) -> impl IntoView {
    blocks.into_iter().map(block_view).collect_view()
}
