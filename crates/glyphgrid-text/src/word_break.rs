#![forbid(unsafe_code)]

//! Unicode word-break property lookup (UAX #29).
//!
//! Only the property is reported here; boundary rules belong to whoever
//! consumes the sequence (cursor motion, word selection).

use core::fmt;

use crate::classify::{char_class, lookup, CharClass};
use crate::codepoint::codepoints;
use crate::tables::WORD_BREAK;

/// Word-break property of a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordBreakProperty {
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
}

impl WordBreakProperty {
    /// Property value alias as spelled in the Unicode Character Database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CR => "CR",
            Self::LF => "LF",
            Self::Newline => "Newline",
            Self::Extend => "Extend",
            Self::ZWJ => "ZWJ",
            Self::RegionalIndicator => "Regional_Indicator",
            Self::Format => "Format",
            Self::Katakana => "Katakana",
            Self::HebrewLetter => "Hebrew_Letter",
            Self::ALetter => "ALetter",
            Self::SingleQuote => "Single_Quote",
            Self::DoubleQuote => "Double_Quote",
            Self::MidNumLet => "MidNumLet",
            Self::MidLetter => "MidLetter",
            Self::MidNum => "MidNum",
            Self::Numeric => "Numeric",
            Self::ExtendNumLet => "ExtendNumLet",
            Self::WSegSpace => "WSegSpace",
        }
    }
}

impl fmt::Display for WordBreakProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word-break property of `ch`.
///
/// Code points absent from the table are treated as `ALetter`.
#[must_use]
pub fn word_break_property(ch: char) -> WordBreakProperty {
    lookup(&WORD_BREAK, u32::from(ch), |iv| (iv.first, iv.last))
        .map_or(WordBreakProperty::ALetter, |iv| iv.property)
}

/// Word-break properties of every measurable, non-combining code point of
/// `text`, in order. Control characters and combining marks are skipped.
#[must_use]
pub fn word_break_properties(text: &str) -> Vec<WordBreakProperty> {
    codepoints(text.as_bytes())
        .filter_map(|span| span.ch)
        .filter(|&ch| !matches!(char_class(ch), CharClass::Control | CharClass::Combining))
        .map(word_break_property)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use WordBreakProperty as W;

    #[test]
    fn single_lookups() {
        assert_eq!(word_break_property('a'), W::ALetter);
        assert_eq!(word_break_property('Z'), W::ALetter);
        assert_eq!(word_break_property('7'), W::Numeric);
        assert_eq!(word_break_property(' '), W::WSegSpace);
        assert_eq!(word_break_property('_'), W::ExtendNumLet);
        assert_eq!(word_break_property('\''), W::SingleQuote);
        assert_eq!(word_break_property('"'), W::DoubleQuote);
        assert_eq!(word_break_property('.'), W::MidNumLet);
        assert_eq!(word_break_property(':'), W::MidLetter);
        assert_eq!(word_break_property(','), W::MidNum);
        assert_eq!(word_break_property('\r'), W::CR);
        assert_eq!(word_break_property('\n'), W::LF);
        assert_eq!(word_break_property('\u{200D}'), W::ZWJ);
        assert_eq!(word_break_property('א'), W::HebrewLetter);
        assert_eq!(word_break_property('カ'), W::Katakana);
        assert_eq!(word_break_property('\u{1F1E6}'), W::RegionalIndicator);
    }

    #[test]
    fn unlisted_code_points_default_to_aletter() {
        // CJK ideographs and punctuation outside the table.
        assert_eq!(word_break_property('中'), W::ALetter);
        assert_eq!(word_break_property('!'), W::ALetter);
    }

    #[test]
    fn sequence_skips_controls_and_combining() {
        assert_eq!(
            word_break_properties("a1 \x07e\u{301}"),
            vec![W::ALetter, W::Numeric, W::WSegSpace, W::ALetter]
        );
        assert!(word_break_properties("").is_empty());
    }

    #[test]
    fn display_uses_ucd_names() {
        assert_eq!(W::HebrewLetter.to_string(), "Hebrew_Letter");
        assert_eq!(W::WSegSpace.to_string(), "WSegSpace");
    }
}
