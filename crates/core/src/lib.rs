pub mod content;
pub mod error;
pub mod event;
pub mod size;

pub use content::WidgetContent;
pub use error::{Result, WidgetError};
pub use event::Message;
pub use size::{SizeClass, DEFAULT_REFRESH_INTERVAL_SECS};
