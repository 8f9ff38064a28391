use crate::store::{FileStore, SharedStore, WIDGET_CONFIG_KEY, WIDGET_DATA_KEY};
use hw_core::{Message, Result, SizeClass, WidgetError};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Widget kind reloaded after every data update.
pub const DEFAULT_WIDGET_KIND: &str = "SuperHomeWidget";

/// Host-application side of the widget: writes content and config into the
/// shared container and asks for timeline reloads.
///
/// Every container operation fails with [`WidgetError::NotInitialized`] until
/// [`WidgetHost::initialize`] has opened an App Group.
#[derive(Debug)]
pub struct WidgetHost {
    /// Directory under which each App Group gets its own container.
    containers: PathBuf,
    kind:       String,
    store:      Option<FileStore>,
    signals:    mpsc::Sender<Message>,
}

impl WidgetHost {
    pub fn new(containers: impl Into<PathBuf>, signals: mpsc::Sender<Message>) -> Self {
        Self {
            containers: containers.into(),
            kind:       DEFAULT_WIDGET_KIND.to_string(),
            store:      None,
            signals,
        }
    }

    /// Override the widget kind named in reload signals.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Open the container for `app_group_id`.  May be called again to switch
    /// groups.
    pub fn initialize(&mut self, app_group_id: &str) -> Result<()> {
        let id = app_group_id.trim();
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(WidgetError::InvalidArgument("appGroupId is required".to_string()));
        }

        self.store = Some(FileStore::open(self.containers.join(id))?);
        info!("Widget host initialized for App Group '{id}'.");
        Ok(())
    }

    /// Store new widget content and reload the widget's timelines.
    pub fn update_widget_data(&self, data: &Map<String, Value>, size: SizeClass) -> Result<()> {
        let store = self.store()?;
        store.set(WIDGET_DATA_KEY, &serde_json::to_vec(data)?)?;
        info!("Widget data updated ({size}).");

        self.signal(Message::ReloadTimelines {
            kind: self.kind.clone(),
            size,
        });
        Ok(())
    }

    pub fn refresh_all(&self) {
        self.signal(Message::ReloadAllTimelines);
    }

    pub fn refresh(&self, size: SizeClass) {
        self.signal(Message::ReloadTimelines {
            kind: self.kind.clone(),
            size,
        });
    }

    /// Store the style/config document.  Widgets pick it up on their next
    /// timeline request; no reload is signalled.
    pub fn save_config(&self, config: &Map<String, Value>) -> Result<()> {
        let store = self.store()?;
        store.set(WIDGET_CONFIG_KEY, &serde_json::to_vec(config)?)?;
        info!("Widget config saved.");
        Ok(())
    }

    /// The stored config document, or `None` when nothing readable is stored.
    pub fn load_config(&self) -> Result<Option<Map<String, Value>>> {
        let store = self.store()?;
        let Some(bytes) = store.get(WIDGET_CONFIG_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) | Err(_) => {
                warn!("Stored '{WIDGET_CONFIG_KEY}' is not a JSON object; reporting none.");
                Ok(None)
            }
        }
    }

    fn store(&self) -> Result<&FileStore> {
        self.store.as_ref().ok_or(WidgetError::NotInitialized)
    }

    fn signal(&self, message: Message) {
        if let Err(e) = self.signals.try_send(message) {
            warn!("Dropping refresh signal: {e}");
        }
    }
}
