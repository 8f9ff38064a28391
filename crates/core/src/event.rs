use crate::size::SizeClass;

/// Signals that flow from the host side to whatever drives widget refreshes.
///
/// Sources:
/// - `WidgetHost` operations → `ReloadTimelines`, `ReloadAllTimelines`
/// - Store watcher task      → `StoreChanged`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ── Refresh ───────────────────────────────────────────────────────────────
    /// Reload every timeline of the given widget kind.
    ReloadTimelines {
        kind: String,
        /// Size that triggered the reload.
        size: SizeClass,
    },
    /// Reload every widget timeline regardless of kind.
    ReloadAllTimelines,

    // ── Store ─────────────────────────────────────────────────────────────────
    /// A file in the shared container was created or modified.
    StoreChanged,
}
