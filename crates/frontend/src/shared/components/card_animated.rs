//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `styles/layout.css` (`@keyframes card-appear`):
//! карточка поднимается на 10px и проявляется из прозрачности.
//! Контент доступен сразу, анимация ничего не блокирует.
//!
//! # Пример
//! ```text
//! <CardAnimated>
//!     <p>"Контент"</p>
//! </CardAnimated>
//!
//! // Третья карточка в списке, с дополнительным классом
//! <CardAnimated class="section-card" delay_ms=80>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Inline-стиль с анимацией появления, стартующей через `delay_ms`.
pub fn animated_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.25s ease-out {}ms both;", delay_ms)
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
///
/// # Props
/// - `class`    — дополнительные CSS-классы карточки.
/// - `delay_ms` — задержка анимации (для каскадного появления списка).
/// - `children` — содержимое карточки.
#[component]
pub fn CardAnimated(
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style=animated_style(delay_ms)>
            {children()}
        </Card>
    }
}
