//! Registry storage.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::resolve::Resolver;
use super::value::OptionValue;

/// Option name -> value for one component.
pub type OptionMap = BTreeMap<String, OptionValue>;

/// Component name -> options.
pub type DefaultsTable = BTreeMap<String, OptionMap>;

/// The snapshot every registry starts from and returns to on reset.
#[must_use]
pub fn builtin_defaults() -> DefaultsTable {
    let entries: [(&str, Vec<(&str, OptionValue)>); 11] = [
        (
            "FlipCard",
            vec![
                ("height", "300px".into()),
                ("width", "100%".into()),
                ("duration", "0.6s".into()),
            ],
        ),
        (
            "TiltCard",
            vec![("max_tilt", "15deg".into()), ("duration", "0.3s".into())],
        ),
        ("RevealCard", vec![("overlay_opacity", "0.9".into())]),
        ("DotsLoader", vec![("variant", "primary".into())]),
        (
            "RingLoader",
            vec![("variant", "primary".into()), ("size", "3rem".into())],
        ),
        ("TypewriterLoader", vec![("variant", "primary".into())]),
        (
            "PolygonLoader",
            vec![("variant", "primary".into()), ("sides", OptionValue::Int(6))],
        ),
        (
            "ScrollReveal",
            vec![
                ("direction", "up".into()),
                ("delay", "0s".into()),
                ("duration", "0.6s".into()),
            ],
        ),
        ("ParallaxSection", vec![("speed", "0.5".into())]),
        (
            "SlideMenuNavbar",
            vec![("position", "left".into()), ("width", "280px".into())],
        ),
        ("MegaMenuNavbar", vec![("columns", OptionValue::Int(3))]),
    ];

    entries
        .into_iter()
        .map(|(component, options)| {
            let map = options
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            (component.to_string(), map)
        })
        .collect()
}

/// Shared, cheaply clonable handle to the component defaults table.
///
/// Clones share state: a default set through one handle is visible to every
/// component rendered with another. Writes are expected during application
/// bootstrap; request handlers only read.
#[derive(Debug, Clone)]
pub struct DefaultsRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Debug)]
struct RegistryInner {
    /// Immutable table restored by [`DefaultsRegistry::reset`].
    snapshot: DefaultsTable,
    /// Live table.
    table: RwLock<DefaultsTable>,
}

impl Default for DefaultsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultsRegistry {
    /// Registry seeded from [`builtin_defaults`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_snapshot(builtin_defaults())
    }

    /// Registry with no defaults at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_snapshot(DefaultsTable::new())
    }

    /// Registry seeded from (and resettable to) `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: DefaultsTable) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                table: RwLock::new(snapshot.clone()),
                snapshot,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, DefaultsTable> {
        self.inner.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DefaultsTable> {
        self.inner
            .table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the options for `component`; empty when it was never registered.
    #[must_use]
    pub fn get(&self, component: &str) -> OptionMap {
        self.read().get(component).cloned().unwrap_or_default()
    }

    /// Merge `options` into the entry for `component`, creating it if absent.
    ///
    /// Keys not mentioned keep their current value. No validation is applied.
    pub fn set<I, K, V>(&self, component: &str, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        let mut table = self.write();
        let entry = table.entry(component.to_string()).or_default();
        let before = entry.len();
        entry.extend(options.into_iter().map(|(k, v)| (k.into(), v.into())));
        debug!(
            name: "community.defaults.set",
            component = %component,
            keys = entry.len(),
            added = entry.len() - before,
            "Component defaults updated"
        );
    }

    /// Merge every entry of `table` (used to seed defaults from configuration).
    pub fn extend(&self, table: DefaultsTable) {
        for (component, options) in table {
            self.set(&component, options);
        }
    }

    /// Discard all changes and restore the built-in snapshot.
    pub fn reset(&self) {
        *self.write() = self.inner.snapshot.clone();
        debug!(name: "community.defaults.reset", "Component defaults reset");
    }

    /// Names of every component currently holding an entry, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Copy of the snapshot restored by [`reset`](Self::reset).
    #[must_use]
    pub fn snapshot(&self) -> DefaultsTable {
        self.inner.snapshot.clone()
    }

    /// Resolution view for one component, taken from the current table.
    #[must_use]
    pub fn resolver(&self, component: &'static str) -> Resolver {
        Resolver::new(component, self.get(component))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_component_is_empty() {
        let defaults = DefaultsRegistry::new();
        assert!(defaults.get("NonExistentComponent").is_empty());
    }

    #[test]
    fn test_get_returns_copy() {
        let defaults = DefaultsRegistry::new();
        let mut first = defaults.get("FlipCard");
        first.insert("height".into(), "999px".into());
        first.clear();
        assert_eq!(defaults.get("FlipCard")["height"], OptionValue::from("300px"));
    }

    #[test]
    fn test_set_merges() {
        let defaults = DefaultsRegistry::new();
        defaults.set("FlipCard", [("height", "500px")]);
        defaults.set("FlipCard", [("duration", "1s")]);

        let flip = defaults.get("FlipCard");
        assert_eq!(flip["height"], OptionValue::from("500px"));
        assert_eq!(flip["duration"], OptionValue::from("1s"));
        assert_eq!(flip["width"], OptionValue::from("100%"));
    }

    #[test]
    fn test_reset_drops_added_components() {
        let defaults = DefaultsRegistry::new();
        let original = defaults.get("FlipCard");
        defaults.set("FlipCard", [("height", "999px")]);
        defaults.set("Widget", [("size", "10px")]);
        assert!(defaults.list().contains(&"Widget".to_string()));

        defaults.reset();
        assert_eq!(defaults.get("FlipCard"), original);
        assert!(defaults.get("Widget").is_empty());
        assert!(!defaults.list().contains(&"Widget".to_string()));
    }

    #[test]
    fn test_reset_is_repeatable() {
        let defaults = DefaultsRegistry::new();
        defaults.set("FlipCard", [("height", "1px")]);
        defaults.reset();
        defaults.set("FlipCard", [("height", "2px")]);
        defaults.reset();
        assert_eq!(defaults.get("FlipCard")["height"], OptionValue::from("300px"));
        assert_eq!(defaults.snapshot(), builtin_defaults());
    }

    #[test]
    fn test_clones_share_state() {
        let defaults = DefaultsRegistry::new();
        let other = defaults.clone();
        other.set("RingLoader", [("size", "5rem")]);
        assert_eq!(defaults.get("RingLoader")["size"], OptionValue::from("5rem"));
    }

    #[test]
    fn test_separate_registries_are_isolated() {
        let a = DefaultsRegistry::new();
        let b = DefaultsRegistry::new();
        a.set("DotsLoader", [("variant", "danger")]);
        assert_eq!(b.get("DotsLoader")["variant"], OptionValue::from("primary"));
    }

    #[test]
    fn test_list_builtin() {
        let names = DefaultsRegistry::new().list();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"FlipCard".to_string()));
        assert!(names.contains(&"DotsLoader".to_string()));
    }

    #[test]
    fn test_extend_merges_tables() {
        let defaults = DefaultsRegistry::new();
        let mut table = DefaultsTable::new();
        table.insert(
            "MegaMenuNavbar".into(),
            OptionMap::from([("columns".to_string(), OptionValue::Int(4))]),
        );
        defaults.extend(table);
        assert_eq!(defaults.get("MegaMenuNavbar")["columns"], OptionValue::Int(4));
    }
}
