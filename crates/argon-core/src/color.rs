//! Console colors and packed cell attributes.
//!
//! Colors follow the classic 8-entry console palette, each available in a
//! [`Normal`](Intensity::Normal) or [`Bright`](Intensity::Bright) variant.
//! A foreground/background pair packs into a single [`Attribute`] byte:
//! the low nibble holds the foreground color OR'd with its intensity bit,
//! the high nibble the background pair.

/// One of the eight base console colors.
///
/// The discriminants match the console attribute encoding and are part of
/// the packed [`Attribute`] wire format; do not reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Black.
    Black = 0,
    /// Blue.
    Blue = 1,
    /// Green.
    Green = 2,
    /// Cyan.
    Cyan = 3,
    /// Red.
    Red = 4,
    /// Magenta.
    Magenta = 5,
    /// Yellow.
    Yellow = 6,
    /// White.
    White = 7,
}

impl Color {
    /// All eight colors in attribute-encoding order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Decodes a color from the low three bits of an attribute nibble.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x7 {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Yellow,
            _ => Color::White,
        }
    }
}

/// Normal or bright variant of a base color.
///
/// `Bright` is the intensity bit of an attribute nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Intensity {
    /// Standard intensity.
    #[default]
    Normal = 0,
    /// High intensity.
    Bright = 8,
}

impl Intensity {
    /// Decodes the intensity bit of an attribute nibble.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        if bits & 0x8 != 0 {
            Intensity::Bright
        } else {
            Intensity::Normal
        }
    }
}

/// A packed foreground/background color-and-intensity byte.
///
/// Layout: `bbbb_ffff` where each nibble is a 3-bit [`Color`] OR'd with
/// the [`Intensity`] bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Attribute(u8);

impl Attribute {
    /// The default attribute: White/Normal on Black/Normal (`0x07`).
    pub const DEFAULT: Attribute = Attribute::new(
        Color::White,
        Intensity::Normal,
        Color::Black,
        Intensity::Normal,
    );

    /// Packs a foreground/background pair into an attribute byte.
    #[inline]
    pub const fn new(fg: Color, fg_mode: Intensity, bg: Color, bg_mode: Intensity) -> Self {
        Attribute((fg as u8 | fg_mode as u8) | ((bg as u8 | bg_mode as u8) << 4))
    }

    /// Reinterprets a raw attribute byte.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Attribute(bits)
    }

    /// Returns the raw packed byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the foreground color.
    #[inline]
    pub const fn fg(self) -> Color {
        Color::from_bits(self.0)
    }

    /// Returns the foreground intensity.
    #[inline]
    pub const fn fg_intensity(self) -> Intensity {
        Intensity::from_bits(self.0)
    }

    /// Returns the background color.
    #[inline]
    pub const fn bg(self) -> Color {
        Color::from_bits(self.0 >> 4)
    }

    /// Returns the background intensity.
    #[inline]
    pub const fn bg_intensity(self) -> Intensity {
        Intensity::from_bits(self.0 >> 4)
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::DEFAULT
    }
}

/// The currently selected foreground/background colors of a session.
///
/// Mutated only by [`set`](ColorState::set); read by every drawing
/// primitive that writes a cell without an explicit color argument.
/// Changes take effect on the next primitive call and have no retroactive
/// effect on already-written cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorState {
    /// Current foreground color.
    pub foreground: Color,
    /// Current foreground intensity.
    pub foreground_mode: Intensity,
    /// Current background color.
    pub background: Color,
    /// Current background intensity.
    pub background_mode: Intensity,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            foreground_mode: Intensity::Normal,
            background: Color::Black,
            background_mode: Intensity::Normal,
        }
    }
}

impl ColorState {
    /// Selects a new foreground/background pair. Always succeeds.
    #[inline]
    pub fn set(&mut self, fg: Color, fg_mode: Intensity, bg: Color, bg_mode: Intensity) {
        self.foreground = fg;
        self.foreground_mode = fg_mode;
        self.background = bg;
        self.background_mode = bg_mode;
    }

    /// Packs the current selection into an attribute byte.
    #[inline]
    pub const fn attribute(&self) -> Attribute {
        Attribute::new(
            self.foreground,
            self.foreground_mode,
            self.background,
            self.background_mode,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_color_discriminants() {
        assert_eq!(Color::Black as u8, 0);
        assert_eq!(Color::Blue as u8, 1);
        assert_eq!(Color::Green as u8, 2);
        assert_eq!(Color::Cyan as u8, 3);
        assert_eq!(Color::Red as u8, 4);
        assert_eq!(Color::Magenta as u8, 5);
        assert_eq!(Color::Yellow as u8, 6);
        assert_eq!(Color::White as u8, 7);
    }

    #[test]
    fn test_attribute_packing() {
        let attr = Attribute::new(
            Color::Red,
            Intensity::Bright,
            Color::Blue,
            Intensity::Normal,
        );
        // fg nibble: 4 | 8 = 0xC, bg nibble: 1
        assert_eq!(attr.bits(), 0x1C);
        assert_eq!(attr.fg(), Color::Red);
        assert_eq!(attr.fg_intensity(), Intensity::Bright);
        assert_eq!(attr.bg(), Color::Blue);
        assert_eq!(attr.bg_intensity(), Intensity::Normal);
    }

    #[test]
    fn test_attribute_default() {
        assert_eq!(Attribute::DEFAULT.bits(), 0x07);
        assert_eq!(Attribute::default(), Attribute::DEFAULT);
    }

    #[test]
    fn test_attribute_round_trip_all_pairs() {
        for &fg in &Color::ALL {
            for &bg in &Color::ALL {
                for fg_mode in [Intensity::Normal, Intensity::Bright] {
                    for bg_mode in [Intensity::Normal, Intensity::Bright] {
                        let attr = Attribute::new(fg, fg_mode, bg, bg_mode);
                        assert_eq!(attr.fg(), fg);
                        assert_eq!(attr.fg_intensity(), fg_mode);
                        assert_eq!(attr.bg(), bg);
                        assert_eq!(attr.bg_intensity(), bg_mode);
                        assert_eq!(Attribute::from_bits(attr.bits()), attr);
                    }
                }
            }
        }
    }

    #[test]
    fn test_color_state_default() {
        let state = ColorState::default();
        assert_eq!(state.foreground, Color::White);
        assert_eq!(state.background, Color::Black);
        assert_eq!(state.attribute(), Attribute::DEFAULT);
    }

    #[test]
    fn test_color_state_set() {
        let mut state = ColorState::default();
        state.set(
            Color::Green,
            Intensity::Bright,
            Color::Magenta,
            Intensity::Normal,
        );
        let attr = state.attribute();
        assert_eq!(attr.fg(), Color::Green);
        assert_eq!(attr.fg_intensity(), Intensity::Bright);
        assert_eq!(attr.bg(), Color::Magenta);
    }
}
