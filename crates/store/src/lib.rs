//! Shared App Group container for the home-screen widget.
//!
//! - [`SharedStore`]: key-value container (`FileStore` on disk, `MemoryStore` in process)
//! - [`WidgetHost`]: host-application operations (initialize, update, save/load config)
//! - [`EntryProvider`]: widget-side reads that turn stored documents into entries
//! - [`StoreWatcher`]: change notifications for a container directory

pub mod host;
pub mod provider;
pub mod store;
pub mod watcher;

pub use host::{WidgetHost, DEFAULT_WIDGET_KIND};
pub use provider::{EntryProvider, Timeline, WidgetEntry};
pub use store::{FileStore, MemoryStore, SharedStore, WIDGET_CONFIG_KEY, WIDGET_DATA_KEY};
pub use watcher::StoreWatcher;
