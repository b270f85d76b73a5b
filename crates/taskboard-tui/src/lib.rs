/*
[INPUT]:  Public API exports for taskboard-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - terminal presentation layer over taskboard-core
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod config;
pub mod events;
pub mod form;
pub mod runtime;
pub mod snackbar;
pub mod ui;

mod terminal;

// Re-export main types for convenience
pub use app::AppState;
pub use config::BoardConfig;
pub use runtime::run_tui;
