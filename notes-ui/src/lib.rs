pub mod app;
pub mod config;
pub mod sidebar;
pub mod store;

pub use app::NotesApp;
pub use config::{load_sidebar_config, parse_sidebar_config, SidebarConfig};
pub use sidebar::*;
pub use store::{NoteStore, StoreError};
