pub mod page_shell;

pub use page_shell::PageShell;
