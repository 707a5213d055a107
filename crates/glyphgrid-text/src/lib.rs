#![forbid(unsafe_code)]

//! Unicode text engine for glyphgrid.
//!
//! - [`codepoint`] - UTF-8/16/32 decoding with resumable errors, canonical encoding
//! - [`classify`] - control / combining / full-width classification
//! - [`word_break`] - UAX #29 word-break property lookup
//! - [`glyph`] - segmentation into terminal glyphs, navigation, width
//! - [`WidthCache`] - LRU cache for width measurements
//!
//! # Example
//! ```
//! use glyphgrid_text::{segment_to_glyphs, string_width, glyph_next};
//!
//! let text = "e\u{301}中!";
//! assert_eq!(segment_to_glyphs(text), ["e\u{301}", "中", "", "!"]);
//! assert_eq!(string_width(text), Some(4));
//! assert_eq!(glyph_next(text, 0), 3);
//!
//! // Control characters cannot be measured.
//! assert_eq!(string_width("tab\there"), None);
//! ```

pub mod classify;
pub mod codepoint;
pub mod glyph;
pub mod tables;
pub mod width_cache;
pub mod word_break;

pub use classify::{char_class, char_width, is_combining, is_control, is_full_width, CharClass};
pub use codepoint::{
    codepoints, decode_utf16, decode_utf32, decode_utf8, encode_utf16, encode_utf8,
    string_to_utf16, utf16_to_string, utf32_to_string, CodepointSpan, Decoded, InvalidSequence,
    Utf8Codepoints,
};
pub use glyph::{
    cell_to_glyph_index, glyph_count, glyph_iterate, glyph_next, glyph_previous, glyphs,
    segment_to_glyphs, string_width, Glyphs, PLACEHOLDER,
};
pub use width_cache::{CacheStats, WidthCache, DEFAULT_CACHE_CAPACITY};
pub use word_break::{word_break_properties, word_break_property, WordBreakProperty};
