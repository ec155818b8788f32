//! Glyph codes and their Unicode translation.
//!
//! Cells store 8-bit glyph codes: ASCII in the low half, the CP437 upper
//! half for box-drawing and block characters. The presenter translates
//! codes to Unicode only at the device boundary; the buffer never holds
//! anything wider than a byte.

/// Box-drawing glyph style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxStyle {
    /// Single-line border glyphs.
    Single,
    /// Double-line border glyphs.
    Double,
}

/// The six glyph codes making up a box outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxGlyphs {
    /// Top/bottom edge glyph.
    pub horizontal: u8,
    /// Left/right edge glyph.
    pub vertical: u8,
    /// Top-left corner glyph.
    pub top_left: u8,
    /// Top-right corner glyph.
    pub top_right: u8,
    /// Bottom-left corner glyph.
    pub bottom_left: u8,
    /// Bottom-right corner glyph.
    pub bottom_right: u8,
}

impl BoxStyle {
    /// Returns the CP437 glyph set for this style.
    ///
    /// The two sets are disjoint.
    pub const fn glyphs(self) -> BoxGlyphs {
        match self {
            BoxStyle::Single => BoxGlyphs {
                horizontal: 196,
                vertical: 179,
                top_left: 218,
                top_right: 191,
                bottom_left: 192,
                bottom_right: 217,
            },
            BoxStyle::Double => BoxGlyphs {
                horizontal: 205,
                vertical: 186,
                top_left: 201,
                top_right: 187,
                bottom_left: 200,
                bottom_right: 188,
            },
        }
    }
}

/// CP437 upper half (0x80..=0xFF).
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Translates an 8-bit glyph code to the character the device should show.
///
/// Glyph `0` and the control range render blank.
pub fn glyph_to_char(glyph: u8) -> char {
    match glyph {
        0x00..=0x1F | 0x7F => ' ',
        0x20..=0x7E => glyph as char,
        0x80..=0xFF => CP437_HIGH[(glyph - 0x80) as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_glyph_sets_disjoint() {
        let s = BoxStyle::Single.glyphs();
        let d = BoxStyle::Double.glyphs();
        let single = [
            s.horizontal,
            s.vertical,
            s.top_left,
            s.top_right,
            s.bottom_left,
            s.bottom_right,
        ];
        let double = [
            d.horizontal,
            d.vertical,
            d.top_left,
            d.top_right,
            d.bottom_left,
            d.bottom_right,
        ];
        for g in single {
            assert!(!double.contains(&g));
        }
    }

    #[test]
    fn test_glyph_to_char_ascii() {
        assert_eq!(glyph_to_char(b'A'), 'A');
        assert_eq!(glyph_to_char(b' '), ' ');
        assert_eq!(glyph_to_char(b'~'), '~');
    }

    #[test]
    fn test_glyph_to_char_blank() {
        assert_eq!(glyph_to_char(0), ' ');
        assert_eq!(glyph_to_char(0x1B), ' ');
        assert_eq!(glyph_to_char(0x7F), ' ');
    }

    #[test]
    fn test_glyph_to_char_box_drawing() {
        assert_eq!(glyph_to_char(179), '│');
        assert_eq!(glyph_to_char(196), '─');
        assert_eq!(glyph_to_char(218), '┌');
        assert_eq!(glyph_to_char(191), '┐');
        assert_eq!(glyph_to_char(192), '└');
        assert_eq!(glyph_to_char(217), '┘');
        assert_eq!(glyph_to_char(186), '║');
        assert_eq!(glyph_to_char(205), '═');
        assert_eq!(glyph_to_char(201), '╔');
        assert_eq!(glyph_to_char(187), '╗');
        assert_eq!(glyph_to_char(200), '╚');
        assert_eq!(glyph_to_char(188), '╝');
    }

    #[test]
    fn test_glyph_to_char_blocks() {
        assert_eq!(glyph_to_char(176), '░');
        assert_eq!(glyph_to_char(219), '█');
    }
}
