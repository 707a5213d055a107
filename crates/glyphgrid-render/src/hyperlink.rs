#![forbid(unsafe_code)]

//! OSC 8 hyperlink table.
//!
//! Cells store an 8-bit id; the table maps ids back to link targets. Id 0 is
//! the empty "no link" target and is always present.
//!
//! ```
//! use glyphgrid_render::hyperlink::HyperlinkTable;
//!
//! let mut links = HyperlinkTable::new();
//! let id = links.register("https://example.com");
//! assert_eq!(id, 1);
//! assert_eq!(links.register("https://example.com"), id);
//! assert_eq!(links.get(id), "https://example.com");
//! assert_eq!(links.get(200), "");
//! ```

use std::collections::HashMap;

/// Maximum number of entries, the "no link" entry included.
pub const MAX_HYPERLINKS: usize = u8::MAX as usize;

/// Registry of hyperlink targets for one grid.
#[derive(Debug, Clone)]
pub struct HyperlinkTable {
    /// Targets indexed by id; slot 0 is `""`.
    targets: Vec<String>,
    lookup: HashMap<String, u8>,
}

impl HyperlinkTable {
    pub fn new() -> Self {
        let mut lookup = HashMap::new();
        lookup.insert(String::new(), 0);
        Self {
            targets: vec![String::new()],
            lookup,
        }
    }

    /// Id for `target`, registering it if needed.
    ///
    /// Registering the same target again returns the same id. Once the table
    /// holds [`MAX_HYPERLINKS`] entries, new targets map to 0 (no link).
    pub fn register(&mut self, target: &str) -> u8 {
        if let Some(&id) = self.lookup.get(target) {
            return id;
        }
        let Ok(id) = u8::try_from(self.targets.len()) else {
            return 0;
        };
        if usize::from(id) >= MAX_HYPERLINKS {
            glyphgrid_core::debug!(link = target, "hyperlink table full, dropping link");
            return 0;
        }
        self.targets.push(target.to_owned());
        self.lookup.insert(target.to_owned(), id);
        id
    }

    /// Target for `id`, or `""` if `id` was never handed out.
    #[inline]
    pub fn get(&self, id: u8) -> &str {
        self.targets
            .get(usize::from(id))
            .map_or("", String::as_str)
    }

    /// Drop every target except the "no link" entry.
    pub fn clear(&mut self) {
        self.targets.truncate(1);
        self.lookup.retain(|_, id| *id == 0);
    }

    /// Number of entries, the "no link" entry included.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether only the "no link" entry is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.len() <= 1
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.targets.len() >= MAX_HYPERLINKS
    }
}

impl Default for HyperlinkTable {
    fn default() -> Self {
        Self::new()
    }
}
