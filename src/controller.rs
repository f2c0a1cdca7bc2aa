//! Root state container for the editor
//!
//! Owns the one `ThemeConfig` of the running program. All changes go through
//! its operations; observers hear about every change after it happened.

use tracing::{debug, info, warn};

use crate::config::{ThemeConfig, ThemeUpdate};
use crate::font::FontLoader;
use crate::persistence::Persistence;
use crate::transfer::{self, ImportError};

/// Something that reacts to theme changes
pub trait ConfigObserver {
    fn config_changed(&mut self, previous: &ThemeConfig, current: &ThemeConfig);
}

/// Saves the theme after every change
pub struct PersistenceObserver {
    persistence: Persistence,
}

impl PersistenceObserver {
    pub fn new(persistence: Persistence) -> Self {
        Self { persistence }
    }
}

impl ConfigObserver for PersistenceObserver {
    fn config_changed(&mut self, _previous: &ThemeConfig, current: &ThemeConfig) {
        self.persistence.save(current);
    }
}

pub struct ThemeController {
    config: ThemeConfig,
    revision: u64,
    fonts: FontLoader,
    observers: Vec<Box<dyn ConfigObserver>>,
}

impl ThemeController {
    /// Start from the persisted theme (unless `fresh`), or the default one
    pub fn start(persistence: Persistence, fonts: FontLoader, fresh: bool) -> Self {
        let config = if fresh {
            info!("Starting from the default theme (--fresh)");
            ThemeConfig::default()
        } else {
            persistence.load().unwrap_or_default()
        };

        let mut controller = Self {
            config,
            revision: 0,
            fonts,
            observers: vec![Box::new(PersistenceObserver::new(persistence))],
        };
        controller.fonts.ensure_font(&controller.config.typography.family);
        controller
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Bumped on every change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn fonts(&self) -> &FontLoader {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontLoader {
        &mut self.fonts
    }

    /// Replace the theme with whatever `updater` derives from the current one
    pub fn set_config(&mut self, updater: impl FnOnce(&ThemeConfig) -> ThemeConfig) -> bool {
        let next = updater(&self.config);
        self.replace(next)
    }

    pub fn apply(&mut self, update: ThemeUpdate) -> bool {
        self.set_config(|config| config.apply(update))
    }

    /// Swap in an imported document. On error the theme is unchanged.
    pub fn import_config(&mut self, raw: &str) -> Result<(), ImportError> {
        let candidate = transfer::import_config(raw)
            .inspect_err(|err| warn!(error = %err, "Rejected imported theme"))?;
        info!("Imported theme");
        self.replace(candidate);
        Ok(())
    }

    pub fn reset_to_default(&mut self) {
        info!("Resetting theme to defaults");
        self.replace(ThemeConfig::default());
        self.fonts.ensure_font(&self.config.typography.family);
    }

    fn replace(&mut self, next: ThemeConfig) -> bool {
        if next == self.config {
            debug!("Theme unchanged");
            return false;
        }

        let previous = std::mem::replace(&mut self.config, next);
        self.revision += 1;

        self.fonts.config_changed(&previous, &self.config);
        for observer in &mut self.observers {
            observer.config_changed(&previous, &self.config);
        }
        true
    }
}

#[cfg(test)]
impl ThemeController {
    fn with_observer(mut self, observer: Box<dyn ConfigObserver>) -> Self {
        self.observers.push(observer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Alignment, NumericField, Variant};
    use crate::constants::storage;
    use crate::font::tests::RecordingSource;
    use crate::persistence::tests::BrokenStore;
    use crate::persistence::{KeyValueStore, MemoryStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        changes: Rc<RefCell<Vec<(ThemeConfig, ThemeConfig)>>>,
    }

    impl ConfigObserver for Recorder {
        fn config_changed(&mut self, previous: &ThemeConfig, current: &ThemeConfig) {
            self.changes.borrow_mut().push((previous.clone(), current.clone()));
        }
    }

    fn start(store: MemoryStore, source: RecordingSource) -> ThemeController {
        ThemeController::start(
            Persistence::new(Box::new(store)),
            FontLoader::new(Box::new(source)),
            false,
        )
    }

    fn stored(store: &MemoryStore) -> Option<ThemeConfig> {
        store
            .get(storage::THEME_KEY)
            .unwrap()
            .map(|text| serde_json::from_str(&text).unwrap())
    }

    #[test]
    fn test_start_uses_default_and_loads_its_font() {
        let source = RecordingSource::default();
        let controller = start(MemoryStore::default(), source.clone());
        assert_eq!(controller.config(), &ThemeConfig::default());
        assert_eq!(source.requests.borrow().as_slice(), ["Inter"]);
    }

    #[test]
    fn test_start_restores_persisted_theme() {
        let mut store = MemoryStore::default();
        let saved = ThemeConfig::default().apply(ThemeUpdate::FontFamily("Roboto".to_string()));
        store
            .set(storage::THEME_KEY, &serde_json::to_string(&saved).unwrap())
            .unwrap();

        let source = RecordingSource::default();
        let controller = start(store, source.clone());
        assert_eq!(controller.config(), &saved);
        assert_eq!(source.requests.borrow().as_slice(), ["Roboto"]);
    }

    #[test]
    fn test_fresh_start_ignores_persisted_theme() {
        let mut store = MemoryStore::default();
        let saved = ThemeConfig::default().apply(ThemeUpdate::Variant(Variant::LayoutB));
        store
            .set(storage::THEME_KEY, &serde_json::to_string(&saved).unwrap())
            .unwrap();

        let controller = ThemeController::start(
            Persistence::new(Box::new(store)),
            FontLoader::new(Box::new(RecordingSource::default())),
            true,
        );
        assert_eq!(controller.config(), &ThemeConfig::default());
    }

    #[test]
    fn test_start_survives_broken_store() {
        let mut controller = ThemeController::start(
            Persistence::new(Box::new(BrokenStore)),
            FontLoader::new(Box::new(RecordingSource::default())),
            false,
        );
        assert_eq!(controller.config(), &ThemeConfig::default());
        assert!(controller.apply(ThemeUpdate::ButtonAlign(Alignment::Center)));
        assert_eq!(controller.config().button.align, Alignment::Center);
    }

    #[test]
    fn test_every_change_is_persisted() {
        let store = MemoryStore::default();
        let mut controller = start(store.clone(), RecordingSource::default());

        controller.apply(ThemeUpdate::Numeric(NumericField::CardRadius, 30.0));
        assert_eq!(stored(&store).unwrap().general.card_radius, 30.0);

        controller.set_config(|config| config.apply(ThemeUpdate::Variant(Variant::LayoutB)));
        assert_eq!(stored(&store).unwrap().variant, Variant::LayoutB);
    }

    #[test]
    fn test_unchanged_update_does_not_notify() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let mut controller = start(MemoryStore::default(), RecordingSource::default())
            .with_observer(Box::new(Recorder { changes: changes.clone() }));

        assert!(!controller.apply(ThemeUpdate::ButtonAlign(Alignment::Right)));
        assert_eq!(controller.revision(), 0);
        assert!(changes.borrow().is_empty());

        assert!(controller.apply(ThemeUpdate::ButtonAlign(Alignment::Left)));
        assert_eq!(controller.revision(), 1);
        let (previous, current) = changes.borrow()[0].clone();
        assert_eq!(previous.button.align, Alignment::Right);
        assert_eq!(current.button.align, Alignment::Left);
    }

    #[test]
    fn test_font_family_change_triggers_loader() {
        let source = RecordingSource::default();
        let mut controller = start(MemoryStore::default(), source.clone());

        controller.apply(ThemeUpdate::FontFamily("Poppins".to_string()));
        controller.apply(ThemeUpdate::FontFamily("Inter".to_string()));
        controller.apply(ThemeUpdate::FontFamily("Poppins".to_string()));

        assert_eq!(source.requests.borrow().as_slice(), ["Inter", "Poppins"]);
        assert_eq!(controller.fonts().registered_count(), 2);
    }

    #[test]
    fn test_import_invalid_json_leaves_theme_unchanged() {
        let mut controller = start(MemoryStore::default(), RecordingSource::default());
        controller.apply(ThemeUpdate::Variant(Variant::LayoutB));
        let before = controller.config().clone();

        let err = controller.import_config("definitely not json").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
        assert_eq!(controller.config(), &before);
    }

    #[test]
    fn test_import_without_typography_leaves_theme_unchanged() {
        let mut controller = start(MemoryStore::default(), RecordingSource::default());
        let before = controller.config().clone();

        let err = controller.import_config(r#"{"button": {"radius": 3}}"#).unwrap_err();
        assert!(matches!(err, ImportError::Validation(_)));
        assert_eq!(controller.config(), &before);
        assert_eq!(controller.revision(), 0);
    }

    #[test]
    fn test_import_replaces_whole_theme_and_persists() {
        let store = MemoryStore::default();
        let mut controller = start(store.clone(), RecordingSource::default());
        let incoming = ThemeConfig::default()
            .apply(ThemeUpdate::FontFamily("Roboto".to_string()))
            .apply(ThemeUpdate::Numeric(NumericField::FontSize, 40.0));

        controller
            .import_config(&transfer::export_json(&incoming).unwrap())
            .unwrap();

        assert_eq!(controller.config(), &incoming);
        assert_eq!(stored(&store), Some(incoming));
    }

    #[test]
    fn test_reset_restores_every_default() {
        let source = RecordingSource::default();
        let mut controller = start(MemoryStore::default(), source.clone());
        controller.apply(ThemeUpdate::FontFamily("Roboto".to_string()));
        controller.apply(ThemeUpdate::Numeric(NumericField::StrokeWeight, 6.0));
        controller.apply(ThemeUpdate::GalleryImages(vec!["file:///a.png".to_string()]));

        controller.reset_to_default();

        assert_eq!(controller.config(), &ThemeConfig::default());
        assert_eq!(source.requests.borrow().as_slice(), ["Inter", "Roboto"]);
    }
}
