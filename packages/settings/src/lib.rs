// ABOUTME: Client-side settings synchronization core
// ABOUTME: Working copy, per-section save lifecycles and custom CSS injection

pub mod error;
pub mod state;
pub mod store;
pub mod style;

pub use error::{SyncError, SyncResult};
pub use state::SectionSaveState;
pub use store::{
    LoadOutcome, SettingsSyncStore, SyncMode, Toggle, LOAD_FAILED_MESSAGE, SETTINGS_UNAVAILABLE,
};
pub use style::{HeadStyleHost, StyleBlock, StyleHost, StyleInjector};
