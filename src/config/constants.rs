//! Symbolic option tables.
//!
//! Each table maps the human-readable option names callers use in props
//! to the values the platform layer understands. The tables are immutable
//! and exposed so callers can reference symbolic names instead of raw
//! platform strings.

/// An immutable symbolic-name lookup table.
///
/// Entries pair a symbolic name with its platform-level value. Lookup is
/// linear; tables are tiny and fixed at compile time.
#[derive(Debug, Clone, Copy)]
pub struct ConstantTable {
    entries: &'static [(&'static str, &'static str)],
}

impl ConstantTable {
    /// Creates a table from a static entry slice.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Resolves a symbolic name to its platform value, if recognized.
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(symbol, _)| *symbol == name)
            .map(|(_, value)| *value)
    }

    /// Returns the raw entry slice.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// Which physical camera to stream from.
///
/// The platform facing-mode strings are carried verbatim from the web
/// camera layer this component fronts.
pub const FACING: ConstantTable =
    ConstantTable::new(&[("back", "user"), ("front", "environment")]);

/// Preview aspect policy.
pub const ASPECT: ConstantTable = ConstantTable::new(&[("fill", "true")]);

/// Preview orientation policy.
pub const ORIENTATION: ConstantTable = ConstantTable::new(&[("auto", "true")]);

/// Still image vs video capture.
pub const CAPTURE_MODE: ConstantTable = ConstantTable::new(&[("still", "true")]);

/// Where captured media is delivered.
pub const CAPTURE_TARGET: ConstantTable = ConstantTable::new(&[("cameraRoll", "true")]);

/// Capture quality preset.
pub const CAPTURE_QUALITY: ConstantTable = ConstantTable::new(&[("high", "true")]);

/// Flash behavior during capture.
pub const FLASH_MODE: ConstantTable = ConstantTable::new(&[("off", "true")]);

/// Torch (continuous light) behavior.
pub const TORCH_MODE: ConstantTable = ConstantTable::new(&[("off", "true")]);

/// Symbolic capture-mode name for video.
///
/// No platform value exists for it in the tables; the capture path compares
/// the effective mode against this name to pick the video branch.
pub const MODE_VIDEO: &str = "video";
