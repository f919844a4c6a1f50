pub mod center;
pub mod footer;
pub mod header;
pub mod page_shell;

pub use page_shell::PageShell;
