//! The color model: terminal colors, layers, and text modifiers.
//!
//! A [`Color`] is one of three mutually exclusive variants. The variant is
//! selected by construction and fixed thereafter:
//!
//! ```
//! # use ansimark::color::{AnsiColor, Color};
//! assert_eq!(Color::from(AnsiColor::Red).ansi(), Some(AnsiColor::Red));
//! assert_eq!(Color::from(123).index(), Some(123));
//! assert_eq!(Color::from((1, 1, 255)).rgb(), Some((1, 1, 255)));
//! assert_eq!(Color::default(), Color::Ansi(AnsiColor::Default));
//! ```
//!
//! Names for colors and modifiers are case-sensitive and capitalized, just as
//! in format strings:
//!
//! ```
//! # use ansimark::color::{AnsiColor, Modifier};
//! assert_eq!(AnsiColor::from_name("Magenta"), Some(AnsiColor::Magenta));
//! assert_eq!(Modifier::from_name("Strikethrough"), Some(Modifier::Strikethrough));
//! assert_eq!(Modifier::from_name("bold"), None);
//! ```

/// The eight base ANSI colors plus the terminal's default color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// The terminal's default color.
    #[default]
    Default,
}

impl AnsiColor {
    /// Get an iterator over all named colors, in declaration order.
    pub fn all() -> AnsiColorIterator {
        AnsiColorIterator::new()
    }

    /// Look up the named color with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|color| color.name() == name)
    }

    /// Get this color's name.
    pub const fn name(&self) -> &'static str {
        use AnsiColor::*;

        match self {
            Black => "Black",
            Red => "Red",
            Green => "Green",
            Yellow => "Yellow",
            Blue => "Blue",
            Magenta => "Magenta",
            Cyan => "Cyan",
            White => "White",
            Default => "Default",
        }
    }

    /// Get the SGR parameter for this color on the given layer.
    pub const fn sgr(&self, layer: Layer) -> u8 {
        use AnsiColor::*;

        let base = match self {
            Black => 30,
            Red => 31,
            Green => 32,
            Yellow => 33,
            Blue => 34,
            Magenta => 35,
            Cyan => 36,
            White => 37,
            Default => 39,
        };

        base + layer.offset()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over named colors.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Debug)]
pub struct AnsiColorIterator {
    index: usize,
}

impl AnsiColorIterator {
    const COLORS: [AnsiColor; 9] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::Default,
    ];

    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for AnsiColorIterator {
    type Item = AnsiColor;

    fn next(&mut self) -> Option<Self::Item> {
        let color = Self::COLORS.get(self.index).copied()?;
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for AnsiColorIterator {
    fn len(&self) -> usize {
        Self::COLORS.len().saturating_sub(self.index)
    }
}

impl std::iter::FusedIterator for AnsiColorIterator {}

// ====================================================================================================================

/// A terminal color.
///
/// Each variant carries exactly the data it needs, so there is no way to read
/// the value of an inactive variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the named colors.
    Ansi(AnsiColor),
    /// An index into the 256-color palette.
    Indexed(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Determine whether this color is a named color.
    pub const fn is_ansi(&self) -> bool {
        matches!(self, Self::Ansi(_))
    }

    /// Determine whether this color is a palette index.
    pub const fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed(_))
    }

    /// Determine whether this color is a 24-bit color.
    pub const fn is_rgb(&self) -> bool {
        matches!(self, Self::Rgb(..))
    }

    /// Get the named color, if this color is one.
    pub const fn ansi(&self) -> Option<AnsiColor> {
        match self {
            Self::Ansi(color) => Some(*color),
            _ => None,
        }
    }

    /// Get the palette index, if this color is one.
    pub const fn index(&self) -> Option<u8> {
        match self {
            Self::Indexed(index) => Some(*index),
            _ => None,
        }
    }

    /// Get the red, green, and blue components, if this color is a 24-bit
    /// color.
    pub const fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Rgb(r, g, b) => Some((*r, *g, *b)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Ansi(AnsiColor::Default)
    }
}

impl From<AnsiColor> for Color {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Self::Indexed(value)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::Rgb(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(value[0], value[1], value[2])
    }
}

// ====================================================================================================================

/// The layer a color applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground, i.e., the text itself.
    #[default]
    Foreground,
    /// The background behind the text.
    Background,
}

impl Layer {
    /// Determine whether this layer is the background layer.
    pub const fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }

    /// Get the offset for SGR parameters of named colors on this layer.
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }

    /// Get the leading SGR parameter for palette and 24-bit colors on this
    /// layer.
    pub const fn extended(&self) -> u8 {
        38 + self.offset()
    }
}

// ====================================================================================================================

/// A text modifier.
///
/// The discriminant is the SGR parameter for enabling the modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Modifier {
    Bold = 1,
    Faint = 2,
    Italic = 3,
    Underline = 4,
    Blink = 5,
    Reverse = 7,
    Hidden = 8,
    Strikethrough = 9,
}

impl Modifier {
    const ALL: [Modifier; 8] = [
        Modifier::Bold,
        Modifier::Faint,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Blink,
        Modifier::Reverse,
        Modifier::Hidden,
        Modifier::Strikethrough,
    ];

    /// Get all modifiers, in declaration order.
    pub const fn all() -> [Modifier; 8] {
        Self::ALL
    }

    /// Look up the modifier with the given name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|modifier| modifier.name() == name)
    }

    /// Get this modifier's name.
    pub const fn name(&self) -> &'static str {
        use Modifier::*;

        match self {
            Bold => "Bold",
            Faint => "Faint",
            Italic => "Italic",
            Underline => "Underline",
            Blink => "Blink",
            Reverse => "Reverse",
            Hidden => "Hidden",
            Strikethrough => "Strikethrough",
        }
    }

    /// Get the SGR parameter for enabling this modifier.
    pub const fn enable_sgr(&self) -> u8 {
        *self as u8
    }

    /// Get the SGR parameter for disabling this modifier.
    ///
    /// Bold shares its disable parameter 22 with faint, since many terminals
    /// treat 21 as double underline.
    pub const fn disable_sgr(&self) -> u8 {
        match self {
            Self::Bold => 22,
            _ => *self as u8 + 20,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AnsiColor, Color, Layer, Modifier};

    #[test]
    fn test_ansi_color() {
        assert_eq!(AnsiColor::all().len(), 9);
        assert_eq!(AnsiColor::all().last(), Some(AnsiColor::Default));
        for color in AnsiColor::all() {
            assert_eq!(AnsiColor::from_name(color.name()), Some(color));
        }
        assert_eq!(AnsiColor::from_name("red"), None);
        assert_eq!(AnsiColor::from_name("Purple"), None);

        assert_eq!(AnsiColor::Black.sgr(Layer::Foreground), 30);
        assert_eq!(AnsiColor::White.sgr(Layer::Foreground), 37);
        assert_eq!(AnsiColor::Default.sgr(Layer::Foreground), 39);
        assert_eq!(AnsiColor::Red.sgr(Layer::Background), 41);
        assert_eq!(AnsiColor::Default.sgr(Layer::Background), 49);
    }

    #[test]
    fn test_color() {
        let named = Color::from(AnsiColor::Cyan);
        assert!(named.is_ansi());
        assert!(!named.is_indexed());
        assert_eq!(named.index(), None);

        let indexed = Color::from(220);
        assert!(indexed.is_indexed());
        assert_eq!(indexed.rgb(), None);

        let rgb = Color::from([1, 2, 3]);
        assert!(rgb.is_rgb());
        assert_eq!(rgb, Color::from((1, 2, 3)));
        assert_eq!(rgb.ansi(), None);

        // Equal payloads in different variants are different colors.
        assert_ne!(Color::from(1), Color::from((1, 0, 0)));
        assert_eq!(Color::default().ansi(), Some(AnsiColor::Default));
    }

    #[test]
    fn test_modifier() {
        for modifier in Modifier::all() {
            assert_eq!(Modifier::from_name(modifier.name()), Some(modifier));
            if modifier != Modifier::Bold {
                assert_eq!(modifier.disable_sgr(), modifier.enable_sgr() + 20);
            }
        }

        assert_eq!(Modifier::Bold.enable_sgr(), 1);
        assert_eq!(Modifier::Bold.disable_sgr(), 22);
        assert_eq!(Modifier::Faint.disable_sgr(), 22);
        assert_eq!(Modifier::Reverse.enable_sgr(), 7);
        assert_eq!(Modifier::Reverse.disable_sgr(), 27);
        assert_eq!(Modifier::Strikethrough.disable_sgr(), 29);
        assert_eq!(Modifier::from_name("Red"), None);
    }
}
