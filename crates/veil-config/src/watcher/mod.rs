//! Watches the world store file so a long-running process can reload and
//! recompile when it is edited externally.

mod store_watcher;


pub use store_watcher::{StoreWatcher, DEFAULT_DEBOUNCE};
