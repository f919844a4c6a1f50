//! Shared model of the paper summary page.
//!
//! Everything here is platform independent: the frontend crate renders it,
//! the tests exercise it natively.

pub mod content;
pub mod tabs;
pub mod tone;

pub use content::{Block, ContentCatalog, ContentPayload, Inline, Layout, PageMeta, SectionCard};
pub use tabs::{
    default_tabs, IconRef, SelectOutcome, TabBar, TabCommand, TabDescriptor, TabError, TabKey,
};
pub use tone::ToneToken;
