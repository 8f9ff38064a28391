use crate::store::{SharedStore, WIDGET_CONFIG_KEY, WIDGET_DATA_KEY};
use chrono::{DateTime, Duration, Local};
use hw_config::{RawDocument, StyleConfig};
use hw_core::{SizeClass, WidgetContent};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Everything needed to render one widget at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEntry {
    pub date:    DateTime<Local>,
    pub content: WidgetContent,
    pub style:   StyleConfig,
    pub size:    SizeClass,
}

/// Entries to show plus the moment the widget should be asked again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub entries:      Vec<WidgetEntry>,
    pub next_refresh: DateTime<Local>,
}

/// Builds widget entries from the shared container.
///
/// Nothing is cached: every call re-reads the store, so a host update is
/// picked up on the next request.
#[derive(Debug)]
pub struct EntryProvider<S> {
    store: S,
}

impl<S: SharedStore> EntryProvider<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Entry shown while the real one loads: no content, size preset style.
    pub fn placeholder(&self, size: SizeClass) -> WidgetEntry {
        WidgetEntry {
            date:    Local::now(),
            content: WidgetContent::default(),
            style:   StyleConfig::preset_for(size),
            size,
        }
    }

    pub fn entry(&self, size: SizeClass) -> WidgetEntry {
        self.entry_at(size, Local::now())
    }

    pub fn entry_at(&self, size: SizeClass, date: DateTime<Local>) -> WidgetEntry {
        self.build_entry(size, date, self.load_config().as_ref())
    }

    pub fn timeline(&self, size: SizeClass) -> Timeline {
        self.timeline_at(size, Local::now())
    }

    /// Single-entry timeline refreshed after `widgets.<size>.refreshInterval`.
    /// The config is read once so the entry and the refresh date agree.
    pub fn timeline_at(&self, size: SizeClass, now: DateTime<Local>) -> Timeline {
        let config = self.load_config();
        let interval = hw_config::refresh_interval(config.as_ref(), size);
        let interval = i64::try_from(interval).unwrap_or(i64::MAX);
        let next_refresh = Duration::try_seconds(interval)
            .and_then(|d| now.checked_add_signed(d))
            .unwrap_or(now);

        Timeline {
            entries: vec![self.build_entry(size, now, config.as_ref())],
            next_refresh,
        }
    }

    /// The stored config document, if present and readable.
    pub fn load_config(&self) -> Option<RawDocument> {
        let bytes = self.read(WIDGET_CONFIG_KEY)?;
        match hw_config::parse(&bytes) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!("Ignoring unreadable '{WIDGET_CONFIG_KEY}': {e}");
                None
            }
        }
    }

    fn build_entry(
        &self,
        size: SizeClass,
        date: DateTime<Local>,
        config: Option<&RawDocument>,
    ) -> WidgetEntry {
        WidgetEntry {
            date,
            content: self.load_content(config),
            style:   hw_config::resolve(config, size),
            size,
        }
    }

    /// Content fallback chain: pushed data, then `data.initialData` from the
    /// config, then the built-in sample.
    fn load_content(&self, config: Option<&RawDocument>) -> WidgetContent {
        if let Some(data) = self.read(WIDGET_DATA_KEY).and_then(|b| decode_object(&b)) {
            return WidgetContent::from_map(&data);
        }
        if let Some(initial) = config.and_then(RawDocument::initial_data) {
            debug!("No pushed widget data; using config initialData.");
            return WidgetContent::from_map(initial);
        }
        debug!("No widget data anywhere; using sample content.");
        WidgetContent::sample()
    }

    fn read(&self, key: &str) -> Option<Vec<u8>> {
        match self.store.get(key) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Cannot read '{key}' from shared store: {e}");
                None
            }
        }
    }
}

fn decode_object(bytes: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            warn!("Ignoring unreadable '{WIDGET_DATA_KEY}': {e}");
            None
        }
    }
}
