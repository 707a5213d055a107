#![forbid(unsafe_code)]

//! Static Unicode classification tables.
//!
//! Generated from `WordBreakProperty.txt` (Extend and word-break intervals) and
//! the East Asian Wide data used by Markus Kuhn's `wcwidth` (Unicode 13.0).
//! Every table is sorted by `first` and its intervals never overlap, which is
//! what the binary searches in [`crate::classify`] and [`crate::word_break`]
//! rely on. Do not edit by hand.

use crate::word_break::WordBreakProperty as Wbp;

/// Inclusive code point interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// First code point (inclusive).
    pub first: u32,
    /// Last code point (inclusive).
    pub last: u32,
}

const fn iv(first: u32, last: u32) -> Interval {
    Interval { first, last }
}

/// Inclusive code point interval tagged with a word-break property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInterval {
    /// First code point (inclusive).
    pub first: u32,
    /// Last code point (inclusive).
    pub last: u32,
    /// Property shared by every code point in the interval.
    pub property: Wbp,
}

const fn pv(first: u32, last: u32, property: Wbp) -> PropertyInterval {
    PropertyInterval {
        first,
        last,
        property,
    }
}

/// Zero-width code points that merge into the preceding glyph.
pub static EXTEND: [Interval; 294] = [
    iv(0x0300, 0x036F),
    iv(0x0483, 0x0489),
    iv(0x0591, 0x05BD),
    iv(0x05BF, 0x05BF),
    iv(0x05C1, 0x05C2),
    iv(0x05C4, 0x05C5),
    iv(0x05C7, 0x05C7),
    iv(0x0610, 0x061A),
    iv(0x064B, 0x065F),
    iv(0x0670, 0x0670),
    iv(0x06D6, 0x06DC),
    iv(0x06DF, 0x06E4),
    iv(0x06E7, 0x06E8),
    iv(0x06EA, 0x06ED),
    iv(0x0711, 0x0711),
    iv(0x0730, 0x074A),
    iv(0x07A6, 0x07B0),
    iv(0x07EB, 0x07F3),
    iv(0x07FD, 0x07FD),
    iv(0x0816, 0x0819),
    iv(0x081B, 0x0823),
    iv(0x0825, 0x0827),
    iv(0x0829, 0x082D),
    iv(0x0859, 0x085B),
    iv(0x08D3, 0x08E1),
    iv(0x08E3, 0x0903),
    iv(0x093A, 0x093C),
    iv(0x093E, 0x094F),
    iv(0x0951, 0x0957),
    iv(0x0962, 0x0963),
    iv(0x0981, 0x0983),
    iv(0x09BC, 0x09BC),
    iv(0x09BE, 0x09C4),
    iv(0x09C7, 0x09C8),
    iv(0x09CB, 0x09CD),
    iv(0x09D7, 0x09D7),
    iv(0x09E2, 0x09E3),
    iv(0x09FE, 0x09FE),
    iv(0x0A01, 0x0A03),
    iv(0x0A3C, 0x0A3C),
    iv(0x0A3E, 0x0A42),
    iv(0x0A47, 0x0A48),
    iv(0x0A4B, 0x0A4D),
    iv(0x0A51, 0x0A51),
    iv(0x0A70, 0x0A71),
    iv(0x0A75, 0x0A75),
    iv(0x0A81, 0x0A83),
    iv(0x0ABC, 0x0ABC),
    iv(0x0ABE, 0x0AC5),
    iv(0x0AC7, 0x0AC9),
    iv(0x0ACB, 0x0ACD),
    iv(0x0AE2, 0x0AE3),
    iv(0x0AFA, 0x0AFF),
    iv(0x0B01, 0x0B03),
    iv(0x0B3C, 0x0B3C),
    iv(0x0B3E, 0x0B44),
    iv(0x0B47, 0x0B48),
    iv(0x0B4B, 0x0B4D),
    iv(0x0B55, 0x0B57),
    iv(0x0B62, 0x0B63),
    iv(0x0B82, 0x0B82),
    iv(0x0BBE, 0x0BC2),
    iv(0x0BC6, 0x0BC8),
    iv(0x0BCA, 0x0BCD),
    iv(0x0BD7, 0x0BD7),
    iv(0x0C00, 0x0C04),
    iv(0x0C3E, 0x0C44),
    iv(0x0C46, 0x0C48),
    iv(0x0C4A, 0x0C4D),
    iv(0x0C55, 0x0C56),
    iv(0x0C62, 0x0C63),
    iv(0x0C81, 0x0C83),
    iv(0x0CBC, 0x0CBC),
    iv(0x0CBE, 0x0CC4),
    iv(0x0CC6, 0x0CC8),
    iv(0x0CCA, 0x0CCD),
    iv(0x0CD5, 0x0CD6),
    iv(0x0CE2, 0x0CE3),
    iv(0x0D00, 0x0D03),
    iv(0x0D3B, 0x0D3C),
    iv(0x0D3E, 0x0D44),
    iv(0x0D46, 0x0D48),
    iv(0x0D4A, 0x0D4D),
    iv(0x0D57, 0x0D57),
    iv(0x0D62, 0x0D63),
    iv(0x0D81, 0x0D83),
    iv(0x0DCA, 0x0DCA),
    iv(0x0DCF, 0x0DD4),
    iv(0x0DD6, 0x0DD6),
    iv(0x0DD8, 0x0DDF),
    iv(0x0DF2, 0x0DF3),
    iv(0x0E31, 0x0E31),
    iv(0x0E34, 0x0E3A),
    iv(0x0E47, 0x0E4E),
    iv(0x0EB1, 0x0EB1),
    iv(0x0EB4, 0x0EBC),
    iv(0x0EC8, 0x0ECD),
    iv(0x0F18, 0x0F19),
    iv(0x0F35, 0x0F35),
    iv(0x0F37, 0x0F37),
    iv(0x0F39, 0x0F39),
    iv(0x0F3E, 0x0F3F),
    iv(0x0F71, 0x0F84),
    iv(0x0F86, 0x0F87),
    iv(0x0F8D, 0x0F97),
    iv(0x0F99, 0x0FBC),
    iv(0x0FC6, 0x0FC6),
    iv(0x102B, 0x103E),
    iv(0x1056, 0x1059),
    iv(0x105E, 0x1060),
    iv(0x1062, 0x1064),
    iv(0x1067, 0x106D),
    iv(0x1071, 0x1074),
    iv(0x1082, 0x108D),
    iv(0x108F, 0x108F),
    iv(0x109A, 0x109D),
    iv(0x135D, 0x135F),
    iv(0x1712, 0x1714),
    iv(0x1732, 0x1734),
    iv(0x1752, 0x1753),
    iv(0x1772, 0x1773),
    iv(0x17B4, 0x17D3),
    iv(0x17DD, 0x17DD),
    iv(0x180B, 0x180D),
    iv(0x1885, 0x1886),
    iv(0x18A9, 0x18A9),
    iv(0x1920, 0x192B),
    iv(0x1930, 0x193B),
    iv(0x1A17, 0x1A1B),
    iv(0x1A55, 0x1A5E),
    iv(0x1A60, 0x1A7C),
    iv(0x1A7F, 0x1A7F),
    iv(0x1AB0, 0x1AC0),
    iv(0x1B00, 0x1B04),
    iv(0x1B34, 0x1B44),
    iv(0x1B6B, 0x1B73),
    iv(0x1B80, 0x1B82),
    iv(0x1BA1, 0x1BAD),
    iv(0x1BE6, 0x1BF3),
    iv(0x1C24, 0x1C37),
    iv(0x1CD0, 0x1CD2),
    iv(0x1CD4, 0x1CE8),
    iv(0x1CED, 0x1CED),
    iv(0x1CF4, 0x1CF4),
    iv(0x1CF7, 0x1CF9),
    iv(0x1DC0, 0x1DF9),
    iv(0x1DFB, 0x1DFF),
    iv(0x200C, 0x200C),
    iv(0x20D0, 0x20F0),
    iv(0x2CEF, 0x2CF1),
    iv(0x2D7F, 0x2D7F),
    iv(0x2DE0, 0x2DFF),
    iv(0x302A, 0x302F),
    iv(0x3099, 0x309A),
    iv(0xA66F, 0xA672),
    iv(0xA674, 0xA67D),
    iv(0xA69E, 0xA69F),
    iv(0xA6F0, 0xA6F1),
    iv(0xA802, 0xA802),
    iv(0xA806, 0xA806),
    iv(0xA80B, 0xA80B),
    iv(0xA823, 0xA827),
    iv(0xA82C, 0xA82C),
    iv(0xA880, 0xA881),
    iv(0xA8B4, 0xA8C5),
    iv(0xA8E0, 0xA8F1),
    iv(0xA8FF, 0xA8FF),
    iv(0xA926, 0xA92D),
    iv(0xA947, 0xA953),
    iv(0xA980, 0xA983),
    iv(0xA9B3, 0xA9C0),
    iv(0xA9E5, 0xA9E5),
    iv(0xAA29, 0xAA36),
    iv(0xAA43, 0xAA43),
    iv(0xAA4C, 0xAA4D),
    iv(0xAA7B, 0xAA7D),
    iv(0xAAB0, 0xAAB0),
    iv(0xAAB2, 0xAAB4),
    iv(0xAAB7, 0xAAB8),
    iv(0xAABE, 0xAABF),
    iv(0xAAC1, 0xAAC1),
    iv(0xAAEB, 0xAAEF),
    iv(0xAAF5, 0xAAF6),
    iv(0xABE3, 0xABEA),
    iv(0xABEC, 0xABED),
    iv(0xFB1E, 0xFB1E),
    iv(0xFE00, 0xFE0F),
    iv(0xFE20, 0xFE2F),
    iv(0xFF9E, 0xFF9F),
    iv(0x101FD, 0x101FD),
    iv(0x102E0, 0x102E0),
    iv(0x10376, 0x1037A),
    iv(0x10A01, 0x10A03),
    iv(0x10A05, 0x10A06),
    iv(0x10A0C, 0x10A0F),
    iv(0x10A38, 0x10A3A),
    iv(0x10A3F, 0x10A3F),
    iv(0x10AE5, 0x10AE6),
    iv(0x10D24, 0x10D27),
    iv(0x10EAB, 0x10EAC),
    iv(0x10F46, 0x10F50),
    iv(0x11000, 0x11002),
    iv(0x11038, 0x11046),
    iv(0x1107F, 0x11082),
    iv(0x110B0, 0x110BA),
    iv(0x11100, 0x11102),
    iv(0x11127, 0x11134),
    iv(0x11145, 0x11146),
    iv(0x11173, 0x11173),
    iv(0x11180, 0x11182),
    iv(0x111B3, 0x111C0),
    iv(0x111C9, 0x111CC),
    iv(0x111CE, 0x111CF),
    iv(0x1122C, 0x11237),
    iv(0x1123E, 0x1123E),
    iv(0x112DF, 0x112EA),
    iv(0x11300, 0x11303),
    iv(0x1133B, 0x1133C),
    iv(0x1133E, 0x11344),
    iv(0x11347, 0x11348),
    iv(0x1134B, 0x1134D),
    iv(0x11357, 0x11357),
    iv(0x11362, 0x11363),
    iv(0x11366, 0x1136C),
    iv(0x11370, 0x11374),
    iv(0x11435, 0x11446),
    iv(0x1145E, 0x1145E),
    iv(0x114B0, 0x114C3),
    iv(0x115AF, 0x115B5),
    iv(0x115B8, 0x115C0),
    iv(0x115DC, 0x115DD),
    iv(0x11630, 0x11640),
    iv(0x116AB, 0x116B7),
    iv(0x1171D, 0x1172B),
    iv(0x1182C, 0x1183A),
    iv(0x11930, 0x11935),
    iv(0x11937, 0x11938),
    iv(0x1193B, 0x1193E),
    iv(0x11940, 0x11940),
    iv(0x11942, 0x11943),
    iv(0x119D1, 0x119D7),
    iv(0x119DA, 0x119E0),
    iv(0x119E4, 0x119E4),
    iv(0x11A01, 0x11A0A),
    iv(0x11A33, 0x11A39),
    iv(0x11A3B, 0x11A3E),
    iv(0x11A47, 0x11A47),
    iv(0x11A51, 0x11A5B),
    iv(0x11A8A, 0x11A99),
    iv(0x11C2F, 0x11C36),
    iv(0x11C38, 0x11C3F),
    iv(0x11C92, 0x11CA7),
    iv(0x11CA9, 0x11CB6),
    iv(0x11D31, 0x11D36),
    iv(0x11D3A, 0x11D3A),
    iv(0x11D3C, 0x11D3D),
    iv(0x11D3F, 0x11D45),
    iv(0x11D47, 0x11D47),
    iv(0x11D8A, 0x11D8E),
    iv(0x11D90, 0x11D91),
    iv(0x11D93, 0x11D97),
    iv(0x11EF3, 0x11EF6),
    iv(0x16AF0, 0x16AF4),
    iv(0x16B30, 0x16B36),
    iv(0x16F4F, 0x16F4F),
    iv(0x16F51, 0x16F87),
    iv(0x16F8F, 0x16F92),
    iv(0x16FE4, 0x16FE4),
    iv(0x16FF0, 0x16FF1),
    iv(0x1BC9D, 0x1BC9E),
    iv(0x1D165, 0x1D169),
    iv(0x1D16D, 0x1D172),
    iv(0x1D17B, 0x1D182),
    iv(0x1D185, 0x1D18B),
    iv(0x1D1AA, 0x1D1AD),
    iv(0x1D242, 0x1D244),
    iv(0x1DA00, 0x1DA36),
    iv(0x1DA3B, 0x1DA6C),
    iv(0x1DA75, 0x1DA75),
    iv(0x1DA84, 0x1DA84),
    iv(0x1DA9B, 0x1DA9F),
    iv(0x1DAA1, 0x1DAAF),
    iv(0x1E000, 0x1E006),
    iv(0x1E008, 0x1E018),
    iv(0x1E01B, 0x1E021),
    iv(0x1E023, 0x1E024),
    iv(0x1E026, 0x1E02A),
    iv(0x1E130, 0x1E136),
    iv(0x1E2EC, 0x1E2EF),
    iv(0x1E8D0, 0x1E8D6),
    iv(0x1E944, 0x1E94A),
    iv(0x1F3FB, 0x1F3FF),
    iv(0xE0020, 0xE007F),
    iv(0xE0100, 0xE01EF),
];

/// Code points displayed over two terminal cells.
pub static FULL_WIDTH: [Interval; 116] = [
    iv(0x1100, 0x115F),
    iv(0x231A, 0x231B),
    iv(0x2329, 0x232A),
    iv(0x23E9, 0x23EC),
    iv(0x23F0, 0x23F0),
    iv(0x23F3, 0x23F3),
    iv(0x25FD, 0x25FE),
    iv(0x2614, 0x2615),
    iv(0x2648, 0x2653),
    iv(0x267F, 0x267F),
    iv(0x2693, 0x2693),
    iv(0x26A1, 0x26A1),
    iv(0x26AA, 0x26AB),
    iv(0x26BD, 0x26BE),
    iv(0x26C4, 0x26C5),
    iv(0x26CE, 0x26CE),
    iv(0x26D4, 0x26D4),
    iv(0x26EA, 0x26EA),
    iv(0x26F2, 0x26F3),
    iv(0x26F5, 0x26F5),
    iv(0x26FA, 0x26FA),
    iv(0x26FD, 0x26FD),
    iv(0x2705, 0x2705),
    iv(0x270A, 0x270B),
    iv(0x2728, 0x2728),
    iv(0x274C, 0x274C),
    iv(0x274E, 0x274E),
    iv(0x2753, 0x2755),
    iv(0x2757, 0x2757),
    iv(0x2795, 0x2797),
    iv(0x27B0, 0x27B0),
    iv(0x27BF, 0x27BF),
    iv(0x2B1B, 0x2B1C),
    iv(0x2B50, 0x2B50),
    iv(0x2B55, 0x2B55),
    iv(0x2E80, 0x2E99),
    iv(0x2E9B, 0x2EF3),
    iv(0x2F00, 0x2FD5),
    iv(0x2FF0, 0x2FFB),
    iv(0x3000, 0x303E),
    iv(0x3041, 0x3096),
    iv(0x3099, 0x30FF),
    iv(0x3105, 0x312F),
    iv(0x3131, 0x318E),
    iv(0x3190, 0x31E3),
    iv(0x31F0, 0x321E),
    iv(0x3220, 0x3247),
    iv(0x3250, 0x4DBF),
    iv(0x4E00, 0xA48C),
    iv(0xA490, 0xA4C6),
    iv(0xA960, 0xA97C),
    iv(0xAC00, 0xD7A3),
    iv(0xF900, 0xFAFF),
    iv(0xFE10, 0xFE19),
    iv(0xFE30, 0xFE52),
    iv(0xFE54, 0xFE66),
    iv(0xFE68, 0xFE6B),
    iv(0xFF01, 0xFF60),
    iv(0xFFE0, 0xFFE6),
    iv(0x16FE0, 0x16FE4),
    iv(0x16FF0, 0x16FF1),
    iv(0x17000, 0x187F7),
    iv(0x18800, 0x18CD5),
    iv(0x18D00, 0x18D08),
    iv(0x1B000, 0x1B11E),
    iv(0x1B150, 0x1B152),
    iv(0x1B164, 0x1B167),
    iv(0x1B170, 0x1B2FB),
    iv(0x1F004, 0x1F004),
    iv(0x1F0CF, 0x1F0CF),
    iv(0x1F18E, 0x1F18E),
    iv(0x1F191, 0x1F19A),
    iv(0x1F200, 0x1F202),
    iv(0x1F210, 0x1F23B),
    iv(0x1F240, 0x1F248),
    iv(0x1F250, 0x1F251),
    iv(0x1F260, 0x1F265),
    iv(0x1F300, 0x1F320),
    iv(0x1F32D, 0x1F335),
    iv(0x1F337, 0x1F37C),
    iv(0x1F37E, 0x1F393),
    iv(0x1F3A0, 0x1F3CA),
    iv(0x1F3CF, 0x1F3D3),
    iv(0x1F3E0, 0x1F3F0),
    iv(0x1F3F4, 0x1F3F4),
    iv(0x1F3F8, 0x1F43E),
    iv(0x1F440, 0x1F440),
    iv(0x1F442, 0x1F4FC),
    iv(0x1F4FF, 0x1F53D),
    iv(0x1F54B, 0x1F54E),
    iv(0x1F550, 0x1F567),
    iv(0x1F57A, 0x1F57A),
    iv(0x1F595, 0x1F596),
    iv(0x1F5A4, 0x1F5A4),
    iv(0x1F5FB, 0x1F64F),
    iv(0x1F680, 0x1F6C5),
    iv(0x1F6CC, 0x1F6CC),
    iv(0x1F6D0, 0x1F6D2),
    iv(0x1F6D5, 0x1F6D7),
    iv(0x1F6EB, 0x1F6EC),
    iv(0x1F6F4, 0x1F6FC),
    iv(0x1F7E0, 0x1F7EB),
    iv(0x1F90C, 0x1F93A),
    iv(0x1F93C, 0x1F945),
    iv(0x1F947, 0x1F978),
    iv(0x1F97A, 0x1F9CB),
    iv(0x1F9CD, 0x1F9FF),
    iv(0x1FA70, 0x1FA74),
    iv(0x1FA78, 0x1FA7A),
    iv(0x1FA80, 0x1FA86),
    iv(0x1FA90, 0x1FAA8),
    iv(0x1FAB0, 0x1FAB6),
    iv(0x1FAC0, 0x1FAC2),
    iv(0x1FAD0, 0x1FAD6),
    iv(0x20000, 0x2FFFD),
    iv(0x30000, 0x3FFFD),
];

/// Word-break property intervals. Code points outside every interval are
/// [`Wbp::ALetter`].
pub static WORD_BREAK: [PropertyInterval; 648] = [
    pv(0x000A, 0x000A, Wbp::LF),
    pv(0x000B, 0x000C, Wbp::Newline),
    pv(0x000D, 0x000D, Wbp::CR),
    pv(0x0020, 0x0020, Wbp::WSegSpace),
    pv(0x0022, 0x0022, Wbp::DoubleQuote),
    pv(0x0027, 0x0027, Wbp::SingleQuote),
    pv(0x002C, 0x002C, Wbp::MidNum),
    pv(0x002E, 0x002E, Wbp::MidNumLet),
    pv(0x0030, 0x0039, Wbp::Numeric),
    pv(0x003A, 0x003A, Wbp::MidLetter),
    pv(0x003B, 0x003B, Wbp::MidNum),
    pv(0x003C, 0x005E, Wbp::ALetter),
    pv(0x005F, 0x005F, Wbp::ExtendNumLet),
    pv(0x0060, 0x0084, Wbp::ALetter),
    pv(0x0085, 0x0085, Wbp::Newline),
    pv(0x0086, 0x00AC, Wbp::ALetter),
    pv(0x00AD, 0x00AD, Wbp::Format),
    pv(0x00AE, 0x00B6, Wbp::ALetter),
    pv(0x00B7, 0x00B7, Wbp::MidLetter),
    pv(0x00B8, 0x02FF, Wbp::ALetter),
    pv(0x0300, 0x036F, Wbp::Extend),
    pv(0x0370, 0x037D, Wbp::ALetter),
    pv(0x037E, 0x037E, Wbp::MidNum),
    pv(0x037F, 0x0386, Wbp::ALetter),
    pv(0x0387, 0x0387, Wbp::MidLetter),
    pv(0x0388, 0x0482, Wbp::ALetter),
    pv(0x0483, 0x0489, Wbp::Extend),
    pv(0x048A, 0x055E, Wbp::ALetter),
    pv(0x055F, 0x055F, Wbp::MidLetter),
    pv(0x0560, 0x0588, Wbp::ALetter),
    pv(0x0589, 0x0589, Wbp::MidNum),
    pv(0x058A, 0x0590, Wbp::ALetter),
    pv(0x0591, 0x05BD, Wbp::Extend),
    pv(0x05BF, 0x05BF, Wbp::Extend),
    pv(0x05C1, 0x05C2, Wbp::Extend),
    pv(0x05C4, 0x05C5, Wbp::Extend),
    pv(0x05C7, 0x05C7, Wbp::Extend),
    pv(0x05D0, 0x05EA, Wbp::HebrewLetter),
    pv(0x05EF, 0x05F2, Wbp::HebrewLetter),
    pv(0x05F3, 0x05F3, Wbp::ALetter),
    pv(0x05F4, 0x05F4, Wbp::MidLetter),
    pv(0x0600, 0x0605, Wbp::Format),
    pv(0x060C, 0x060D, Wbp::MidNum),
    pv(0x0610, 0x061A, Wbp::Extend),
    pv(0x061C, 0x061C, Wbp::Format),
    pv(0x061D, 0x064A, Wbp::ALetter),
    pv(0x064B, 0x065F, Wbp::Extend),
    pv(0x0660, 0x0669, Wbp::Numeric),
    pv(0x066B, 0x066B, Wbp::Numeric),
    pv(0x066C, 0x066C, Wbp::MidNum),
    pv(0x066D, 0x066F, Wbp::ALetter),
    pv(0x0670, 0x0670, Wbp::Extend),
    pv(0x0671, 0x06D5, Wbp::ALetter),
    pv(0x06D6, 0x06DC, Wbp::Extend),
    pv(0x06DD, 0x06DD, Wbp::Format),
    pv(0x06DF, 0x06E4, Wbp::Extend),
    pv(0x06E5, 0x06E6, Wbp::ALetter),
    pv(0x06E7, 0x06E8, Wbp::Extend),
    pv(0x06EA, 0x06ED, Wbp::Extend),
    pv(0x06EE, 0x06EF, Wbp::ALetter),
    pv(0x06F0, 0x06F9, Wbp::Numeric),
    pv(0x06FA, 0x070E, Wbp::ALetter),
    pv(0x070F, 0x070F, Wbp::Format),
    pv(0x0710, 0x0710, Wbp::ALetter),
    pv(0x0711, 0x0711, Wbp::Extend),
    pv(0x0712, 0x072F, Wbp::ALetter),
    pv(0x0730, 0x074A, Wbp::Extend),
    pv(0x074B, 0x07A5, Wbp::ALetter),
    pv(0x07A6, 0x07B0, Wbp::Extend),
    pv(0x07B1, 0x07BF, Wbp::ALetter),
    pv(0x07C0, 0x07C9, Wbp::Numeric),
    pv(0x07CA, 0x07EA, Wbp::ALetter),
    pv(0x07EB, 0x07F3, Wbp::Extend),
    pv(0x07F4, 0x07F7, Wbp::ALetter),
    pv(0x07F8, 0x07F8, Wbp::MidNum),
    pv(0x07F9, 0x07FC, Wbp::ALetter),
    pv(0x07FD, 0x07FD, Wbp::Extend),
    pv(0x07FE, 0x0815, Wbp::ALetter),
    pv(0x0816, 0x0819, Wbp::Extend),
    pv(0x081A, 0x081A, Wbp::ALetter),
    pv(0x081B, 0x0823, Wbp::Extend),
    pv(0x0824, 0x0824, Wbp::ALetter),
    pv(0x0825, 0x0827, Wbp::Extend),
    pv(0x0828, 0x0828, Wbp::ALetter),
    pv(0x0829, 0x082D, Wbp::Extend),
    pv(0x082E, 0x0858, Wbp::ALetter),
    pv(0x0859, 0x085B, Wbp::Extend),
    pv(0x085C, 0x08D2, Wbp::ALetter),
    pv(0x08D3, 0x08E1, Wbp::Extend),
    pv(0x08E2, 0x08E2, Wbp::Format),
    pv(0x08E3, 0x0903, Wbp::Extend),
    pv(0x0904, 0x0939, Wbp::ALetter),
    pv(0x093A, 0x093C, Wbp::Extend),
    pv(0x093D, 0x093D, Wbp::ALetter),
    pv(0x093E, 0x094F, Wbp::Extend),
    pv(0x0950, 0x0950, Wbp::ALetter),
    pv(0x0951, 0x0957, Wbp::Extend),
    pv(0x0958, 0x0961, Wbp::ALetter),
    pv(0x0962, 0x0963, Wbp::Extend),
    pv(0x0966, 0x096F, Wbp::Numeric),
    pv(0x0970, 0x0980, Wbp::ALetter),
    pv(0x0981, 0x0983, Wbp::Extend),
    pv(0x0984, 0x09BB, Wbp::ALetter),
    pv(0x09BC, 0x09BC, Wbp::Extend),
    pv(0x09BD, 0x09BD, Wbp::ALetter),
    pv(0x09BE, 0x09C4, Wbp::Extend),
    pv(0x09C7, 0x09C8, Wbp::Extend),
    pv(0x09CB, 0x09CD, Wbp::Extend),
    pv(0x09CE, 0x09D6, Wbp::ALetter),
    pv(0x09D7, 0x09D7, Wbp::Extend),
    pv(0x09D8, 0x09E1, Wbp::ALetter),
    pv(0x09E2, 0x09E3, Wbp::Extend),
    pv(0x09E6, 0x09EF, Wbp::Numeric),
    pv(0x09F0, 0x09FD, Wbp::ALetter),
    pv(0x09FE, 0x09FE, Wbp::Extend),
    pv(0x0A01, 0x0A03, Wbp::Extend),
    pv(0x0A04, 0x0A3B, Wbp::ALetter),
    pv(0x0A3C, 0x0A3C, Wbp::Extend),
    pv(0x0A3E, 0x0A42, Wbp::Extend),
    pv(0x0A47, 0x0A48, Wbp::Extend),
    pv(0x0A4B, 0x0A4D, Wbp::Extend),
    pv(0x0A51, 0x0A51, Wbp::Extend),
    pv(0x0A52, 0x0A65, Wbp::ALetter),
    pv(0x0A66, 0x0A6F, Wbp::Numeric),
    pv(0x0A70, 0x0A71, Wbp::Extend),
    pv(0x0A72, 0x0A74, Wbp::ALetter),
    pv(0x0A75, 0x0A75, Wbp::Extend),
    pv(0x0A81, 0x0A83, Wbp::Extend),
    pv(0x0A84, 0x0ABB, Wbp::ALetter),
    pv(0x0ABC, 0x0ABC, Wbp::Extend),
    pv(0x0ABD, 0x0ABD, Wbp::ALetter),
    pv(0x0ABE, 0x0AC5, Wbp::Extend),
    pv(0x0AC7, 0x0AC9, Wbp::Extend),
    pv(0x0ACB, 0x0ACD, Wbp::Extend),
    pv(0x0ACE, 0x0AE1, Wbp::ALetter),
    pv(0x0AE2, 0x0AE3, Wbp::Extend),
    pv(0x0AE6, 0x0AEF, Wbp::Numeric),
    pv(0x0AF0, 0x0AF9, Wbp::ALetter),
    pv(0x0AFA, 0x0AFF, Wbp::Extend),
    pv(0x0B01, 0x0B03, Wbp::Extend),
    pv(0x0B04, 0x0B3B, Wbp::ALetter),
    pv(0x0B3C, 0x0B3C, Wbp::Extend),
    pv(0x0B3D, 0x0B3D, Wbp::ALetter),
    pv(0x0B3E, 0x0B44, Wbp::Extend),
    pv(0x0B47, 0x0B48, Wbp::Extend),
    pv(0x0B4B, 0x0B4D, Wbp::Extend),
    pv(0x0B55, 0x0B57, Wbp::Extend),
    pv(0x0B58, 0x0B61, Wbp::ALetter),
    pv(0x0B62, 0x0B63, Wbp::Extend),
    pv(0x0B66, 0x0B6F, Wbp::Numeric),
    pv(0x0B70, 0x0B81, Wbp::ALetter),
    pv(0x0B82, 0x0B82, Wbp::Extend),
    pv(0x0B83, 0x0BBD, Wbp::ALetter),
    pv(0x0BBE, 0x0BC2, Wbp::Extend),
    pv(0x0BC6, 0x0BC8, Wbp::Extend),
    pv(0x0BCA, 0x0BCD, Wbp::Extend),
    pv(0x0BCE, 0x0BD6, Wbp::ALetter),
    pv(0x0BD7, 0x0BD7, Wbp::Extend),
    pv(0x0BE6, 0x0BEF, Wbp::Numeric),
    pv(0x0C00, 0x0C04, Wbp::Extend),
    pv(0x0C05, 0x0C3D, Wbp::ALetter),
    pv(0x0C3E, 0x0C44, Wbp::Extend),
    pv(0x0C46, 0x0C48, Wbp::Extend),
    pv(0x0C4A, 0x0C4D, Wbp::Extend),
    pv(0x0C55, 0x0C56, Wbp::Extend),
    pv(0x0C57, 0x0C61, Wbp::ALetter),
    pv(0x0C62, 0x0C63, Wbp::Extend),
    pv(0x0C66, 0x0C6F, Wbp::Numeric),
    pv(0x0C70, 0x0C80, Wbp::ALetter),
    pv(0x0C81, 0x0C83, Wbp::Extend),
    pv(0x0C84, 0x0CBB, Wbp::ALetter),
    pv(0x0CBC, 0x0CBC, Wbp::Extend),
    pv(0x0CBD, 0x0CBD, Wbp::ALetter),
    pv(0x0CBE, 0x0CC4, Wbp::Extend),
    pv(0x0CC6, 0x0CC8, Wbp::Extend),
    pv(0x0CCA, 0x0CCD, Wbp::Extend),
    pv(0x0CD5, 0x0CD6, Wbp::Extend),
    pv(0x0CD7, 0x0CE1, Wbp::ALetter),
    pv(0x0CE2, 0x0CE3, Wbp::Extend),
    pv(0x0CE6, 0x0CEF, Wbp::Numeric),
    pv(0x0CF0, 0x0CFF, Wbp::ALetter),
    pv(0x0D00, 0x0D03, Wbp::Extend),
    pv(0x0D04, 0x0D3A, Wbp::ALetter),
    pv(0x0D3B, 0x0D3C, Wbp::Extend),
    pv(0x0D3D, 0x0D3D, Wbp::ALetter),
    pv(0x0D3E, 0x0D44, Wbp::Extend),
    pv(0x0D46, 0x0D48, Wbp::Extend),
    pv(0x0D4A, 0x0D4D, Wbp::Extend),
    pv(0x0D4E, 0x0D56, Wbp::ALetter),
    pv(0x0D57, 0x0D57, Wbp::Extend),
    pv(0x0D58, 0x0D61, Wbp::ALetter),
    pv(0x0D62, 0x0D63, Wbp::Extend),
    pv(0x0D66, 0x0D6F, Wbp::Numeric),
    pv(0x0D70, 0x0D80, Wbp::ALetter),
    pv(0x0D81, 0x0D83, Wbp::Extend),
    pv(0x0D84, 0x0DC9, Wbp::ALetter),
    pv(0x0DCA, 0x0DCA, Wbp::Extend),
    pv(0x0DCF, 0x0DD4, Wbp::Extend),
    pv(0x0DD6, 0x0DD6, Wbp::Extend),
    pv(0x0DD8, 0x0DDF, Wbp::Extend),
    pv(0x0DE6, 0x0DEF, Wbp::Numeric),
    pv(0x0DF2, 0x0DF3, Wbp::Extend),
    pv(0x0E31, 0x0E31, Wbp::Extend),
    pv(0x0E34, 0x0E3A, Wbp::Extend),
    pv(0x0E47, 0x0E4E, Wbp::Extend),
    pv(0x0E50, 0x0E59, Wbp::Numeric),
    pv(0x0EB1, 0x0EB1, Wbp::Extend),
    pv(0x0EB4, 0x0EBC, Wbp::Extend),
    pv(0x0EC8, 0x0ECD, Wbp::Extend),
    pv(0x0ED0, 0x0ED9, Wbp::Numeric),
    pv(0x0EDA, 0x0F17, Wbp::ALetter),
    pv(0x0F18, 0x0F19, Wbp::Extend),
    pv(0x0F20, 0x0F29, Wbp::Numeric),
    pv(0x0F35, 0x0F35, Wbp::Extend),
    pv(0x0F37, 0x0F37, Wbp::Extend),
    pv(0x0F39, 0x0F39, Wbp::Extend),
    pv(0x0F3E, 0x0F3F, Wbp::Extend),
    pv(0x0F40, 0x0F70, Wbp::ALetter),
    pv(0x0F71, 0x0F84, Wbp::Extend),
    pv(0x0F86, 0x0F87, Wbp::Extend),
    pv(0x0F88, 0x0F8C, Wbp::ALetter),
    pv(0x0F8D, 0x0F97, Wbp::Extend),
    pv(0x0F99, 0x0FBC, Wbp::Extend),
    pv(0x0FC6, 0x0FC6, Wbp::Extend),
    pv(0x102B, 0x103E, Wbp::Extend),
    pv(0x1040, 0x1049, Wbp::Numeric),
    pv(0x1056, 0x1059, Wbp::Extend),
    pv(0x105E, 0x1060, Wbp::Extend),
    pv(0x1062, 0x1064, Wbp::Extend),
    pv(0x1067, 0x106D, Wbp::Extend),
    pv(0x1071, 0x1074, Wbp::Extend),
    pv(0x1082, 0x108D, Wbp::Extend),
    pv(0x108F, 0x108F, Wbp::Extend),
    pv(0x1090, 0x1099, Wbp::Numeric),
    pv(0x109A, 0x109D, Wbp::Extend),
    pv(0x109E, 0x135C, Wbp::ALetter),
    pv(0x135D, 0x135F, Wbp::Extend),
    pv(0x1360, 0x167F, Wbp::ALetter),
    pv(0x1680, 0x1680, Wbp::WSegSpace),
    pv(0x1681, 0x1711, Wbp::ALetter),
    pv(0x1712, 0x1714, Wbp::Extend),
    pv(0x1715, 0x1731, Wbp::ALetter),
    pv(0x1732, 0x1734, Wbp::Extend),
    pv(0x1735, 0x1751, Wbp::ALetter),
    pv(0x1752, 0x1753, Wbp::Extend),
    pv(0x1754, 0x1771, Wbp::ALetter),
    pv(0x1772, 0x1773, Wbp::Extend),
    pv(0x17B4, 0x17D3, Wbp::Extend),
    pv(0x17DD, 0x17DD, Wbp::Extend),
    pv(0x17E0, 0x17E9, Wbp::Numeric),
    pv(0x180B, 0x180D, Wbp::Extend),
    pv(0x180E, 0x180E, Wbp::Format),
    pv(0x1810, 0x1819, Wbp::Numeric),
    pv(0x181A, 0x1884, Wbp::ALetter),
    pv(0x1885, 0x1886, Wbp::Extend),
    pv(0x1887, 0x18A8, Wbp::ALetter),
    pv(0x18A9, 0x18A9, Wbp::Extend),
    pv(0x18AA, 0x191F, Wbp::ALetter),
    pv(0x1920, 0x192B, Wbp::Extend),
    pv(0x1930, 0x193B, Wbp::Extend),
    pv(0x1946, 0x194F, Wbp::Numeric),
    pv(0x19D0, 0x19D9, Wbp::Numeric),
    pv(0x19DA, 0x1A16, Wbp::ALetter),
    pv(0x1A17, 0x1A1B, Wbp::Extend),
    pv(0x1A55, 0x1A5E, Wbp::Extend),
    pv(0x1A60, 0x1A7C, Wbp::Extend),
    pv(0x1A7F, 0x1A7F, Wbp::Extend),
    pv(0x1A80, 0x1A89, Wbp::Numeric),
    pv(0x1A90, 0x1A99, Wbp::Numeric),
    pv(0x1AB0, 0x1AC0, Wbp::Extend),
    pv(0x1B00, 0x1B04, Wbp::Extend),
    pv(0x1B05, 0x1B33, Wbp::ALetter),
    pv(0x1B34, 0x1B44, Wbp::Extend),
    pv(0x1B45, 0x1B4F, Wbp::ALetter),
    pv(0x1B50, 0x1B59, Wbp::Numeric),
    pv(0x1B6B, 0x1B73, Wbp::Extend),
    pv(0x1B80, 0x1B82, Wbp::Extend),
    pv(0x1B83, 0x1BA0, Wbp::ALetter),
    pv(0x1BA1, 0x1BAD, Wbp::Extend),
    pv(0x1BAE, 0x1BAF, Wbp::ALetter),
    pv(0x1BB0, 0x1BB9, Wbp::Numeric),
    pv(0x1BBA, 0x1BE5, Wbp::ALetter),
    pv(0x1BE6, 0x1BF3, Wbp::Extend),
    pv(0x1BF4, 0x1C23, Wbp::ALetter),
    pv(0x1C24, 0x1C37, Wbp::Extend),
    pv(0x1C40, 0x1C49, Wbp::Numeric),
    pv(0x1C4A, 0x1C4F, Wbp::ALetter),
    pv(0x1C50, 0x1C59, Wbp::Numeric),
    pv(0x1C5A, 0x1CCF, Wbp::ALetter),
    pv(0x1CD0, 0x1CD2, Wbp::Extend),
    pv(0x1CD4, 0x1CE8, Wbp::Extend),
    pv(0x1CE9, 0x1CEC, Wbp::ALetter),
    pv(0x1CED, 0x1CED, Wbp::Extend),
    pv(0x1CEE, 0x1CF3, Wbp::ALetter),
    pv(0x1CF4, 0x1CF4, Wbp::Extend),
    pv(0x1CF5, 0x1CF6, Wbp::ALetter),
    pv(0x1CF7, 0x1CF9, Wbp::Extend),
    pv(0x1CFA, 0x1DBF, Wbp::ALetter),
    pv(0x1DC0, 0x1DF9, Wbp::Extend),
    pv(0x1DFB, 0x1DFF, Wbp::Extend),
    pv(0x1E00, 0x1FFF, Wbp::ALetter),
    pv(0x2000, 0x2006, Wbp::WSegSpace),
    pv(0x2008, 0x200A, Wbp::WSegSpace),
    pv(0x200C, 0x200C, Wbp::Extend),
    pv(0x200D, 0x200D, Wbp::ZWJ),
    pv(0x200E, 0x200F, Wbp::Format),
    pv(0x2018, 0x2019, Wbp::MidNumLet),
    pv(0x2024, 0x2024, Wbp::MidNumLet),
    pv(0x2027, 0x2027, Wbp::MidLetter),
    pv(0x2028, 0x2029, Wbp::Newline),
    pv(0x202A, 0x202E, Wbp::Format),
    pv(0x202F, 0x202F, Wbp::ExtendNumLet),
    pv(0x203F, 0x2040, Wbp::ExtendNumLet),
    pv(0x2044, 0x2044, Wbp::MidNum),
    pv(0x2054, 0x2054, Wbp::ExtendNumLet),
    pv(0x205F, 0x205F, Wbp::WSegSpace),
    pv(0x2060, 0x2064, Wbp::Format),
    pv(0x2066, 0x206F, Wbp::Format),
    pv(0x2070, 0x20CF, Wbp::ALetter),
    pv(0x20D0, 0x20F0, Wbp::Extend),
    pv(0x20F1, 0x2CEE, Wbp::ALetter),
    pv(0x2CEF, 0x2CF1, Wbp::Extend),
    pv(0x2CF2, 0x2D7E, Wbp::ALetter),
    pv(0x2D7F, 0x2D7F, Wbp::Extend),
    pv(0x2D80, 0x2DDF, Wbp::ALetter),
    pv(0x2DE0, 0x2DFF, Wbp::Extend),
    pv(0x2E00, 0x2FFF, Wbp::ALetter),
    pv(0x3000, 0x3000, Wbp::WSegSpace),
    pv(0x3001, 0x3029, Wbp::ALetter),
    pv(0x302A, 0x302F, Wbp::Extend),
    pv(0x3031, 0x3035, Wbp::Katakana),
    pv(0x3036, 0x3098, Wbp::ALetter),
    pv(0x3099, 0x309A, Wbp::Extend),
    pv(0x309B, 0x309C, Wbp::Katakana),
    pv(0x30A0, 0x30FA, Wbp::Katakana),
    pv(0x30FC, 0x30FF, Wbp::Katakana),
    pv(0x3100, 0x31EF, Wbp::ALetter),
    pv(0x31F0, 0x31FF, Wbp::Katakana),
    pv(0x32D0, 0x32FE, Wbp::Katakana),
    pv(0x3300, 0x3357, Wbp::Katakana),
    pv(0x3358, 0xA61F, Wbp::ALetter),
    pv(0xA620, 0xA629, Wbp::Numeric),
    pv(0xA62A, 0xA66E, Wbp::ALetter),
    pv(0xA66F, 0xA672, Wbp::Extend),
    pv(0xA674, 0xA67D, Wbp::Extend),
    pv(0xA67E, 0xA69D, Wbp::ALetter),
    pv(0xA69E, 0xA69F, Wbp::Extend),
    pv(0xA6A0, 0xA6EF, Wbp::ALetter),
    pv(0xA6F0, 0xA6F1, Wbp::Extend),
    pv(0xA6F2, 0xA801, Wbp::ALetter),
    pv(0xA802, 0xA802, Wbp::Extend),
    pv(0xA803, 0xA805, Wbp::ALetter),
    pv(0xA806, 0xA806, Wbp::Extend),
    pv(0xA807, 0xA80A, Wbp::ALetter),
    pv(0xA80B, 0xA80B, Wbp::Extend),
    pv(0xA80C, 0xA822, Wbp::ALetter),
    pv(0xA823, 0xA827, Wbp::Extend),
    pv(0xA82C, 0xA82C, Wbp::Extend),
    pv(0xA82D, 0xA87F, Wbp::ALetter),
    pv(0xA880, 0xA881, Wbp::Extend),
    pv(0xA882, 0xA8B3, Wbp::ALetter),
    pv(0xA8B4, 0xA8C5, Wbp::Extend),
    pv(0xA8D0, 0xA8D9, Wbp::Numeric),
    pv(0xA8E0, 0xA8F1, Wbp::Extend),
    pv(0xA8F2, 0xA8FE, Wbp::ALetter),
    pv(0xA8FF, 0xA8FF, Wbp::Extend),
    pv(0xA900, 0xA909, Wbp::Numeric),
    pv(0xA90A, 0xA925, Wbp::ALetter),
    pv(0xA926, 0xA92D, Wbp::Extend),
    pv(0xA92E, 0xA946, Wbp::ALetter),
    pv(0xA947, 0xA953, Wbp::Extend),
    pv(0xA954, 0xA97F, Wbp::ALetter),
    pv(0xA980, 0xA983, Wbp::Extend),
    pv(0xA984, 0xA9B2, Wbp::ALetter),
    pv(0xA9B3, 0xA9C0, Wbp::Extend),
    pv(0xA9C1, 0xA9CF, Wbp::ALetter),
    pv(0xA9D0, 0xA9D9, Wbp::Numeric),
    pv(0xA9E5, 0xA9E5, Wbp::Extend),
    pv(0xA9F0, 0xA9F9, Wbp::Numeric),
    pv(0xA9FA, 0xAA28, Wbp::ALetter),
    pv(0xAA29, 0xAA36, Wbp::Extend),
    pv(0xAA37, 0xAA42, Wbp::ALetter),
    pv(0xAA43, 0xAA43, Wbp::Extend),
    pv(0xAA44, 0xAA4B, Wbp::ALetter),
    pv(0xAA4C, 0xAA4D, Wbp::Extend),
    pv(0xAA50, 0xAA59, Wbp::Numeric),
    pv(0xAA7B, 0xAA7D, Wbp::Extend),
    pv(0xAAB0, 0xAAB0, Wbp::Extend),
    pv(0xAAB2, 0xAAB4, Wbp::Extend),
    pv(0xAAB7, 0xAAB8, Wbp::Extend),
    pv(0xAABE, 0xAABF, Wbp::Extend),
    pv(0xAAC1, 0xAAC1, Wbp::Extend),
    pv(0xAAC2, 0xAAEA, Wbp::ALetter),
    pv(0xAAEB, 0xAAEF, Wbp::Extend),
    pv(0xAAF0, 0xAAF4, Wbp::ALetter),
    pv(0xAAF5, 0xAAF6, Wbp::Extend),
    pv(0xAAF7, 0xABE2, Wbp::ALetter),
    pv(0xABE3, 0xABEA, Wbp::Extend),
    pv(0xABEC, 0xABED, Wbp::Extend),
    pv(0xABF0, 0xABF9, Wbp::Numeric),
    pv(0xABFA, 0xFB1C, Wbp::ALetter),
    pv(0xFB1D, 0xFB1D, Wbp::HebrewLetter),
    pv(0xFB1E, 0xFB1E, Wbp::Extend),
    pv(0xFB1F, 0xFB28, Wbp::HebrewLetter),
    pv(0xFB2A, 0xFB36, Wbp::HebrewLetter),
    pv(0xFB38, 0xFB3C, Wbp::HebrewLetter),
    pv(0xFB3E, 0xFB3E, Wbp::HebrewLetter),
    pv(0xFB40, 0xFB41, Wbp::HebrewLetter),
    pv(0xFB43, 0xFB44, Wbp::HebrewLetter),
    pv(0xFB46, 0xFB4F, Wbp::HebrewLetter),
    pv(0xFB50, 0xFDFF, Wbp::ALetter),
    pv(0xFE00, 0xFE0F, Wbp::Extend),
    pv(0xFE10, 0xFE10, Wbp::MidNum),
    pv(0xFE13, 0xFE13, Wbp::MidLetter),
    pv(0xFE14, 0xFE14, Wbp::MidNum),
    pv(0xFE20, 0xFE2F, Wbp::Extend),
    pv(0xFE33, 0xFE34, Wbp::ExtendNumLet),
    pv(0xFE4D, 0xFE4F, Wbp::ExtendNumLet),
    pv(0xFE50, 0xFE50, Wbp::MidNum),
    pv(0xFE52, 0xFE52, Wbp::MidNumLet),
    pv(0xFE54, 0xFE54, Wbp::MidNum),
    pv(0xFE55, 0xFE55, Wbp::MidLetter),
    pv(0xFE56, 0xFEFE, Wbp::ALetter),
    pv(0xFEFF, 0xFEFF, Wbp::Format),
    pv(0xFF07, 0xFF07, Wbp::MidNumLet),
    pv(0xFF0C, 0xFF0C, Wbp::MidNum),
    pv(0xFF0E, 0xFF0E, Wbp::MidNumLet),
    pv(0xFF10, 0xFF19, Wbp::Numeric),
    pv(0xFF1A, 0xFF1A, Wbp::MidLetter),
    pv(0xFF1B, 0xFF1B, Wbp::MidNum),
    pv(0xFF1C, 0xFF3E, Wbp::ALetter),
    pv(0xFF3F, 0xFF3F, Wbp::ExtendNumLet),
    pv(0xFF40, 0xFF65, Wbp::ALetter),
    pv(0xFF66, 0xFF9D, Wbp::Katakana),
    pv(0xFF9E, 0xFF9F, Wbp::Extend),
    pv(0xFFA0, 0xFFF8, Wbp::ALetter),
    pv(0xFFF9, 0xFFFB, Wbp::Format),
    pv(0xFFFC, 0x101FC, Wbp::ALetter),
    pv(0x101FD, 0x101FD, Wbp::Extend),
    pv(0x101FE, 0x102DF, Wbp::ALetter),
    pv(0x102E0, 0x102E0, Wbp::Extend),
    pv(0x102E1, 0x10375, Wbp::ALetter),
    pv(0x10376, 0x1037A, Wbp::Extend),
    pv(0x1037B, 0x1049F, Wbp::ALetter),
    pv(0x104A0, 0x104A9, Wbp::Numeric),
    pv(0x104AA, 0x10A00, Wbp::ALetter),
    pv(0x10A01, 0x10A03, Wbp::Extend),
    pv(0x10A05, 0x10A06, Wbp::Extend),
    pv(0x10A0C, 0x10A0F, Wbp::Extend),
    pv(0x10A10, 0x10A37, Wbp::ALetter),
    pv(0x10A38, 0x10A3A, Wbp::Extend),
    pv(0x10A3F, 0x10A3F, Wbp::Extend),
    pv(0x10A40, 0x10AE4, Wbp::ALetter),
    pv(0x10AE5, 0x10AE6, Wbp::Extend),
    pv(0x10AE7, 0x10D23, Wbp::ALetter),
    pv(0x10D24, 0x10D27, Wbp::Extend),
    pv(0x10D30, 0x10D39, Wbp::Numeric),
    pv(0x10D3A, 0x10EAA, Wbp::ALetter),
    pv(0x10EAB, 0x10EAC, Wbp::Extend),
    pv(0x10EAD, 0x10F45, Wbp::ALetter),
    pv(0x10F46, 0x10F50, Wbp::Extend),
    pv(0x10F51, 0x10FFF, Wbp::ALetter),
    pv(0x11000, 0x11002, Wbp::Extend),
    pv(0x11003, 0x11037, Wbp::ALetter),
    pv(0x11038, 0x11046, Wbp::Extend),
    pv(0x11066, 0x1106F, Wbp::Numeric),
    pv(0x1107F, 0x11082, Wbp::Extend),
    pv(0x11083, 0x110AF, Wbp::ALetter),
    pv(0x110B0, 0x110BA, Wbp::Extend),
    pv(0x110BD, 0x110BD, Wbp::Format),
    pv(0x110CD, 0x110CD, Wbp::Format),
    pv(0x110CE, 0x110EF, Wbp::ALetter),
    pv(0x110F0, 0x110F9, Wbp::Numeric),
    pv(0x11100, 0x11102, Wbp::Extend),
    pv(0x11103, 0x11126, Wbp::ALetter),
    pv(0x11127, 0x11134, Wbp::Extend),
    pv(0x11136, 0x1113F, Wbp::Numeric),
    pv(0x11140, 0x11144, Wbp::ALetter),
    pv(0x11145, 0x11146, Wbp::Extend),
    pv(0x11147, 0x11172, Wbp::ALetter),
    pv(0x11173, 0x11173, Wbp::Extend),
    pv(0x11174, 0x1117F, Wbp::ALetter),
    pv(0x11180, 0x11182, Wbp::Extend),
    pv(0x11183, 0x111B2, Wbp::ALetter),
    pv(0x111B3, 0x111C0, Wbp::Extend),
    pv(0x111C1, 0x111C8, Wbp::ALetter),
    pv(0x111C9, 0x111CC, Wbp::Extend),
    pv(0x111CE, 0x111CF, Wbp::Extend),
    pv(0x111D0, 0x111D9, Wbp::Numeric),
    pv(0x111DA, 0x1122B, Wbp::ALetter),
    pv(0x1122C, 0x11237, Wbp::Extend),
    pv(0x1123E, 0x1123E, Wbp::Extend),
    pv(0x1123F, 0x112DE, Wbp::ALetter),
    pv(0x112DF, 0x112EA, Wbp::Extend),
    pv(0x112F0, 0x112F9, Wbp::Numeric),
    pv(0x11300, 0x11303, Wbp::Extend),
    pv(0x11304, 0x1133A, Wbp::ALetter),
    pv(0x1133B, 0x1133C, Wbp::Extend),
    pv(0x1133D, 0x1133D, Wbp::ALetter),
    pv(0x1133E, 0x11344, Wbp::Extend),
    pv(0x11347, 0x11348, Wbp::Extend),
    pv(0x1134B, 0x1134D, Wbp::Extend),
    pv(0x1134E, 0x11356, Wbp::ALetter),
    pv(0x11357, 0x11357, Wbp::Extend),
    pv(0x11358, 0x11361, Wbp::ALetter),
    pv(0x11362, 0x11363, Wbp::Extend),
    pv(0x11366, 0x1136C, Wbp::Extend),
    pv(0x11370, 0x11374, Wbp::Extend),
    pv(0x11375, 0x11434, Wbp::ALetter),
    pv(0x11435, 0x11446, Wbp::Extend),
    pv(0x11447, 0x1144F, Wbp::ALetter),
    pv(0x11450, 0x11459, Wbp::Numeric),
    pv(0x1145E, 0x1145E, Wbp::Extend),
    pv(0x1145F, 0x114AF, Wbp::ALetter),
    pv(0x114B0, 0x114C3, Wbp::Extend),
    pv(0x114C4, 0x114CF, Wbp::ALetter),
    pv(0x114D0, 0x114D9, Wbp::Numeric),
    pv(0x114DA, 0x115AE, Wbp::ALetter),
    pv(0x115AF, 0x115B5, Wbp::Extend),
    pv(0x115B8, 0x115C0, Wbp::Extend),
    pv(0x115C1, 0x115DB, Wbp::ALetter),
    pv(0x115DC, 0x115DD, Wbp::Extend),
    pv(0x115DE, 0x1162F, Wbp::ALetter),
    pv(0x11630, 0x11640, Wbp::Extend),
    pv(0x11641, 0x1164F, Wbp::ALetter),
    pv(0x11650, 0x11659, Wbp::Numeric),
    pv(0x1165A, 0x116AA, Wbp::ALetter),
    pv(0x116AB, 0x116B7, Wbp::Extend),
    pv(0x116B8, 0x116BF, Wbp::ALetter),
    pv(0x116C0, 0x116C9, Wbp::Numeric),
    pv(0x1171D, 0x1172B, Wbp::Extend),
    pv(0x11730, 0x11739, Wbp::Numeric),
    pv(0x1173A, 0x1182B, Wbp::ALetter),
    pv(0x1182C, 0x1183A, Wbp::Extend),
    pv(0x1183B, 0x118DF, Wbp::ALetter),
    pv(0x118E0, 0x118E9, Wbp::Numeric),
    pv(0x118EA, 0x1192F, Wbp::ALetter),
    pv(0x11930, 0x11935, Wbp::Extend),
    pv(0x11937, 0x11938, Wbp::Extend),
    pv(0x1193B, 0x1193E, Wbp::Extend),
    pv(0x1193F, 0x1193F, Wbp::ALetter),
    pv(0x11940, 0x11940, Wbp::Extend),
    pv(0x11941, 0x11941, Wbp::ALetter),
    pv(0x11942, 0x11943, Wbp::Extend),
    pv(0x11950, 0x11959, Wbp::Numeric),
    pv(0x1195A, 0x119D0, Wbp::ALetter),
    pv(0x119D1, 0x119D7, Wbp::Extend),
    pv(0x119DA, 0x119E0, Wbp::Extend),
    pv(0x119E1, 0x119E3, Wbp::ALetter),
    pv(0x119E4, 0x119E4, Wbp::Extend),
    pv(0x119E5, 0x11A00, Wbp::ALetter),
    pv(0x11A01, 0x11A0A, Wbp::Extend),
    pv(0x11A0B, 0x11A32, Wbp::ALetter),
    pv(0x11A33, 0x11A39, Wbp::Extend),
    pv(0x11A3A, 0x11A3A, Wbp::ALetter),
    pv(0x11A3B, 0x11A3E, Wbp::Extend),
    pv(0x11A47, 0x11A47, Wbp::Extend),
    pv(0x11A48, 0x11A50, Wbp::ALetter),
    pv(0x11A51, 0x11A5B, Wbp::Extend),
    pv(0x11A5C, 0x11A89, Wbp::ALetter),
    pv(0x11A8A, 0x11A99, Wbp::Extend),
    pv(0x11A9A, 0x11C2E, Wbp::ALetter),
    pv(0x11C2F, 0x11C36, Wbp::Extend),
    pv(0x11C38, 0x11C3F, Wbp::Extend),
    pv(0x11C40, 0x11C4F, Wbp::ALetter),
    pv(0x11C50, 0x11C59, Wbp::Numeric),
    pv(0x11C5A, 0x11C91, Wbp::ALetter),
    pv(0x11C92, 0x11CA7, Wbp::Extend),
    pv(0x11CA9, 0x11CB6, Wbp::Extend),
    pv(0x11CB7, 0x11D30, Wbp::ALetter),
    pv(0x11D31, 0x11D36, Wbp::Extend),
    pv(0x11D3A, 0x11D3A, Wbp::Extend),
    pv(0x11D3C, 0x11D3D, Wbp::Extend),
    pv(0x11D3F, 0x11D45, Wbp::Extend),
    pv(0x11D46, 0x11D46, Wbp::ALetter),
    pv(0x11D47, 0x11D47, Wbp::Extend),
    pv(0x11D50, 0x11D59, Wbp::Numeric),
    pv(0x11D5A, 0x11D89, Wbp::ALetter),
    pv(0x11D8A, 0x11D8E, Wbp::Extend),
    pv(0x11D90, 0x11D91, Wbp::Extend),
    pv(0x11D93, 0x11D97, Wbp::Extend),
    pv(0x11D98, 0x11D9F, Wbp::ALetter),
    pv(0x11DA0, 0x11DA9, Wbp::Numeric),
    pv(0x11DAA, 0x11EF2, Wbp::ALetter),
    pv(0x11EF3, 0x11EF6, Wbp::Extend),
    pv(0x11EF7, 0x1342F, Wbp::ALetter),
    pv(0x13430, 0x13438, Wbp::Format),
    pv(0x13439, 0x16A5F, Wbp::ALetter),
    pv(0x16A60, 0x16A69, Wbp::Numeric),
    pv(0x16A6A, 0x16AEF, Wbp::ALetter),
    pv(0x16AF0, 0x16AF4, Wbp::Extend),
    pv(0x16AF5, 0x16B2F, Wbp::ALetter),
    pv(0x16B30, 0x16B36, Wbp::Extend),
    pv(0x16B37, 0x16B4F, Wbp::ALetter),
    pv(0x16B50, 0x16B59, Wbp::Numeric),
    pv(0x16B5A, 0x16F4E, Wbp::ALetter),
    pv(0x16F4F, 0x16F4F, Wbp::Extend),
    pv(0x16F50, 0x16F50, Wbp::ALetter),
    pv(0x16F51, 0x16F87, Wbp::Extend),
    pv(0x16F8F, 0x16F92, Wbp::Extend),
    pv(0x16F93, 0x16FE3, Wbp::ALetter),
    pv(0x16FE4, 0x16FE4, Wbp::Extend),
    pv(0x16FF0, 0x16FF1, Wbp::Extend),
    pv(0x1B000, 0x1B000, Wbp::Katakana),
    pv(0x1B164, 0x1B167, Wbp::Katakana),
    pv(0x1B168, 0x1BC9C, Wbp::ALetter),
    pv(0x1BC9D, 0x1BC9E, Wbp::Extend),
    pv(0x1BCA0, 0x1BCA3, Wbp::Format),
    pv(0x1D165, 0x1D169, Wbp::Extend),
    pv(0x1D16D, 0x1D172, Wbp::Extend),
    pv(0x1D173, 0x1D17A, Wbp::Format),
    pv(0x1D17B, 0x1D182, Wbp::Extend),
    pv(0x1D185, 0x1D18B, Wbp::Extend),
    pv(0x1D1AA, 0x1D1AD, Wbp::Extend),
    pv(0x1D242, 0x1D244, Wbp::Extend),
    pv(0x1D245, 0x1D7CD, Wbp::ALetter),
    pv(0x1D7CE, 0x1D7FF, Wbp::Numeric),
    pv(0x1DA00, 0x1DA36, Wbp::Extend),
    pv(0x1DA3B, 0x1DA6C, Wbp::Extend),
    pv(0x1DA75, 0x1DA75, Wbp::Extend),
    pv(0x1DA84, 0x1DA84, Wbp::Extend),
    pv(0x1DA9B, 0x1DA9F, Wbp::Extend),
    pv(0x1DAA1, 0x1DAAF, Wbp::Extend),
    pv(0x1E000, 0x1E006, Wbp::Extend),
    pv(0x1E008, 0x1E018, Wbp::Extend),
    pv(0x1E01B, 0x1E021, Wbp::Extend),
    pv(0x1E023, 0x1E024, Wbp::Extend),
    pv(0x1E026, 0x1E02A, Wbp::Extend),
    pv(0x1E02B, 0x1E12F, Wbp::ALetter),
    pv(0x1E130, 0x1E136, Wbp::Extend),
    pv(0x1E137, 0x1E13F, Wbp::ALetter),
    pv(0x1E140, 0x1E149, Wbp::Numeric),
    pv(0x1E14A, 0x1E2EB, Wbp::ALetter),
    pv(0x1E2EC, 0x1E2EF, Wbp::Extend),
    pv(0x1E2F0, 0x1E2F9, Wbp::Numeric),
    pv(0x1E2FA, 0x1E8CF, Wbp::ALetter),
    pv(0x1E8D0, 0x1E8D6, Wbp::Extend),
    pv(0x1E8D7, 0x1E943, Wbp::ALetter),
    pv(0x1E944, 0x1E94A, Wbp::Extend),
    pv(0x1E94B, 0x1E94F, Wbp::ALetter),
    pv(0x1E950, 0x1E959, Wbp::Numeric),
    pv(0x1E95A, 0x1F1E5, Wbp::ALetter),
    pv(0x1F1E6, 0x1F1FF, Wbp::RegionalIndicator),
    pv(0x1F3FB, 0x1F3FF, Wbp::Extend),
    pv(0x1FBF0, 0x1FBF9, Wbp::Numeric),
    pv(0xE0001, 0xE0001, Wbp::Format),
    pv(0xE0020, 0xE007F, Wbp::Extend),
    pv(0xE0100, 0xE01EF, Wbp::Extend),
];
