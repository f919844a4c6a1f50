use crate::layout::PageShell;
use crate::shared::query::PageQuery;
use contracts::ContentCatalog;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let catalog = match ContentCatalog::bundled() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Failed to load page content: {:#}", err);
            ContentCatalog::empty()
        }
    };

    // `?tab=<code>` picks the initially active section.
    let initial_tab = PageQuery::from_location().tab();

    view! {
        <ConfigProvider>
            <PageShell catalog=catalog initial_tab=initial_tab />
        </ConfigProvider>
    }
}
