use contracts::PageMeta;
use leptos::prelude::*;

#[component]
pub fn Header(meta: &'static PageMeta) -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__text">
                    <h1 class="header__title">{meta.title.as_str()}</h1>
                    <p class="header__authors">{meta.authors.as_str()}</p>
                    <a class="header__link" href=meta.paper_href.as_str() target="_blank" rel="noopener noreferrer">
                        {meta.paper_label.as_str()}
                    </a>
                </div>
                <div class="header__badge">
                    <div class="header__badge-title">{meta.badge_title.as_str()}</div>
                    <div class="header__badge-subtitle">{meta.badge_subtitle.as_str()}</div>
                </div>
            </div>
        </header>
    }
}
