pub mod components;
pub mod icons;
pub mod query;
pub mod rich_text;
