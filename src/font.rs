//! Web-font style loading for the preview, backed by fontconfig
//!
//! Each family is requested at most once per run. Loaded faces are added to
//! an owned `egui::FontDefinitions` that the GUI installs on the next frame.

use anyhow::{Context, Result, anyhow};
use fontconfig::{Fontconfig, Pattern};
use std::collections::HashSet;
use std::ffi::CString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ThemeConfig;
use crate::constants::typography::SYSTEM_FONT;
use crate::controller::ConfigObserver;

/// Font formats egui can lay out, as reported by fontconfig
const SUPPORTED_FORMATS: &[&str] = &["TrueType", "CFF"];

/// Extensions accepted when fontconfig does not report a format
const SUPPORTED_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// Contents of a font file and the face to use inside it
#[derive(Debug, Clone)]
pub struct FontFile {
    pub bytes: Vec<u8>,
    /// Face index within a collection, 0 for single-face files
    pub index: u32,
}

/// Where font bytes for a family come from
pub trait FontSource {
    fn load(&self, family: &str) -> Result<FontFile>;
}

/// Resolves families through the system fontconfig database
pub struct FontconfigSource;

impl FontSource for FontconfigSource {
    fn load(&self, family: &str) -> Result<FontFile> {
        let (path, index) = find_font_path(family)?;
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        Ok(FontFile { bytes, index })
    }
}

/// Find the font file and face index fontconfig picks for a family name
pub fn find_font_path(family: &str) -> Result<(PathBuf, u32)> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    let mut pattern = Pattern::new(&fc);
    let family_cstr =
        CString::new(family).with_context(|| format!("Invalid family name: {}", family))?;
    pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);

    let matched = pattern.font_match();

    // Fontconfig does fuzzy matching and may return a fallback family
    if let Some(matched_family) = matched.get_string(fontconfig::FC_FAMILY) {
        if !matched_family.eq_ignore_ascii_case(family) {
            return Err(anyhow!(
                "Font '{}' not found - fontconfig returned family '{}' instead",
                family,
                matched_family
            ));
        }
    }

    let file_path = matched
        .filename()
        .with_context(|| format!("No font file found for '{}'", family))?;

    let path = PathBuf::from(file_path);
    if !path.exists() {
        return Err(anyhow!(
            "Font file path '{}' does not exist",
            path.display()
        ));
    }

    check_font_format(matched.get_string(fontconfig::FC_FONTFORMAT), &path)?;

    let index = matched
        .face_index()
        .and_then(|index| u32::try_from(index).ok())
        .unwrap_or(0);

    debug!(family = family, path = %path.display(), index = index, "Resolved font path via fontconfig");
    Ok((path, index))
}

/// Reject bitmap and Type 1 fonts (PCF, BDF, PFB) that egui cannot parse
fn check_font_format(format: Option<&str>, path: &Path) -> Result<()> {
    let supported = match format {
        Some(format) => SUPPORTED_FORMATS.contains(&format),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext))),
    };

    if supported {
        Ok(())
    } else {
        Err(anyhow!(
            "Unsupported font format {} for '{}'",
            format.unwrap_or("(unknown)"),
            path.display()
        ))
    }
}

/// Make sure egui will be able to parse the face before it is handed over
fn check_face(file: &FontFile) -> Result<()> {
    ttf_parser::Face::parse(&file.bytes, file.index)
        .map(|_| ())
        .map_err(|err| anyhow!("Unparseable font data (face {}): {}", file.index, err))
}

/// Per-run registry of requested font families
pub struct FontLoader {
    source: Box<dyn FontSource>,
    requested: HashSet<String>,
    definitions: egui::FontDefinitions,
    /// Registered in `definitions` but not yet handed to the GUI
    pending: Vec<String>,
    /// Handed to the GUI this frame; usable from the next one
    activating: Vec<String>,
    active: HashSet<String>,
}

impl FontLoader {
    pub fn new(source: Box<dyn FontSource>) -> Self {
        Self {
            source,
            requested: HashSet::new(),
            definitions: egui::FontDefinitions::default(),
            pending: Vec::new(),
            activating: Vec::new(),
            active: HashSet::new(),
        }
    }

    /// Make sure `family` is available to the preview. Fire-and-forget:
    /// a family is only ever requested once, whether or not it loaded.
    pub fn ensure_font(&mut self, family: &str) {
        let family = family.trim();
        if family.is_empty() || family == SYSTEM_FONT {
            return;
        }
        if !self.requested.insert(family.to_string()) {
            debug!(family = family, "Font already requested");
            return;
        }

        let loaded = self.source.load(family).and_then(|file| {
            check_face(&file)?;
            Ok(file)
        });

        match loaded {
            Ok(file) => {
                self.register(family, file);
                info!(family = family, "Registered font family");
            }
            Err(err) => {
                warn!(family = family, error = ?err, "Font unavailable, preview falls back to the default font");
            }
        }
    }

    fn register(&mut self, family: &str, file: FontFile) {
        let data = egui::FontData {
            index: file.index,
            ..egui::FontData::from_owned(file.bytes)
        };
        self.definitions.font_data.insert(family.to_string(), Arc::new(data));

        let mut stack = vec![family.to_string()];
        if let Some(fallback) = self.definitions.families.get(&egui::FontFamily::Proportional) {
            stack.extend(fallback.iter().cloned());
        }
        self.definitions
            .families
            .insert(egui::FontFamily::Name(family.into()), stack);

        self.pending.push(family.to_string());
    }

    /// Number of font faces registered so far
    pub fn registered_count(&self) -> usize {
        self.definitions
            .families
            .keys()
            .filter(|family| matches!(family, egui::FontFamily::Name(_)))
            .count()
    }

    /// Promote families handed over last frame. Call at the start of a frame.
    pub fn begin_frame(&mut self) {
        self.active.extend(self.activating.drain(..));
    }

    /// Updated definitions to install, once per batch of new families
    pub fn take_pending(&mut self) -> Option<egui::FontDefinitions> {
        if self.pending.is_empty() {
            return None;
        }
        self.activating.append(&mut self.pending);
        Some(self.definitions.clone())
    }

    /// Whether text may be laid out with `FontFamily::Name(family)`
    pub fn is_active(&self, family: &str) -> bool {
        self.active.contains(family)
    }
}

impl ConfigObserver for FontLoader {
    fn config_changed(&mut self, previous: &ThemeConfig, current: &ThemeConfig) {
        if previous.typography.family != current.typography.family {
            self.ensure_font(&current.typography.family);
        }
    }
}
