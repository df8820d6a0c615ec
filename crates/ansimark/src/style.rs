//! Styles pairing one color with text modifiers.
//!
//! A [`Style`] computes its escape sequences once, upon construction, and
//! then applies them to any number of texts. Applying a style produces a
//! [`Painted`] text, which holds the rendered bytes and writes them on demand.
//! Unlike a block in a format string, a style does not start with a reset.
//!
//! ```
//! # use ansimark::color::{AnsiColor, Modifier};
//! # use ansimark::Style;
//! let warning = Style::new(AnsiColor::Yellow, [Modifier::Bold]);
//! assert_eq!(warning.apply("careful").as_str(), "\x1b[33m\x1b[1mcareful\x1b[0m");
//! assert_eq!(warning.apply("careful").text(), "careful");
//! ```

use std::io::{IsTerminal, Result, Write};
use std::ops::Range;

use crate::color::{Color, Layer, Modifier};
use crate::sgr::{SetColor, SetModifier, RESET};

/// A terminal style.
///
/// Styles are immutable. Their escape prefix always reflects their color and
/// modifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    color: Color,
    modifiers: Vec<Modifier>,
    prefix: String,
}

impl Style {
    /// Create a new style from a foreground color and modifiers.
    ///
    /// The modifiers are applied in the given order. Duplicates are applied
    /// repeatedly.
    pub fn new<C, M>(color: C, modifiers: M) -> Self
    where
        C: Into<Color>,
        M: IntoIterator<Item = Modifier>,
    {
        let color = color.into();
        let modifiers: Vec<Modifier> = modifiers.into_iter().collect();
        let prefix = Self::render_prefix(color, &modifiers);
        Self {
            color,
            modifiers,
            prefix,
        }
    }

    fn render_prefix(color: Color, modifiers: &[Modifier]) -> String {
        let mut prefix = SetColor(color, Layer::Foreground).to_string();
        for modifier in modifiers {
            prefix.push_str(&SetModifier(*modifier).to_string());
        }
        prefix
    }

    /// Get the color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the modifiers.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Get the escape sequences for this style.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Create a new style with the given color instead.
    #[must_use = "styles are immutable"]
    pub fn with_color<C: Into<Color>>(&self, color: C) -> Self {
        Self::new(color, self.modifiers.iter().copied())
    }

    /// Create a new style with the modifier added last.
    #[must_use = "styles are immutable"]
    pub fn with_modifier(&self, modifier: Modifier) -> Self {
        Self::new(
            self.color,
            self.modifiers.iter().copied().chain(std::iter::once(modifier)),
        )
    }

    /// Apply this style to the given text.
    ///
    /// The result renders this style's prefix, the text, and a reset. The
    /// style itself is not modified.
    pub fn apply(&self, text: &str) -> Painted {
        let mut bytes = String::with_capacity(self.prefix.len() + text.len() + RESET.len());
        bytes.push_str(&self.prefix);
        let start = bytes.len();
        bytes.push_str(text);
        let end = bytes.len();
        bytes.push_str(RESET);

        Painted {
            bytes,
            text: start..end,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color::default(), [])
    }
}

/// Displaying a style writes its escape sequences.
impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)
    }
}

// ------------------------------------------------------------------------------------------------

/// A text with a style applied.
///
/// Displaying a painted text or writing it with [`Painted::write_to`] emits
/// the escape sequences, the text, and a reset.
/// [`Painted::write_if_terminal`] emits the escape sequences only if the sink
/// is a terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Painted {
    bytes: String,
    text: Range<usize>,
}

impl Painted {
    /// Get the rendered string with escape sequences.
    pub fn as_str(&self) -> &str {
        &self.bytes
    }

    /// Get the text without escape sequences.
    pub fn text(&self) -> &str {
        &self.bytes[self.text.clone()]
    }

    /// Write the rendered string to the sink.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        sink.write_all(self.bytes.as_bytes())
    }

    /// Write the rendered string to the sink if it is a terminal, and the
    /// text only otherwise.
    pub fn write_if_terminal<W: Write + IsTerminal>(&self, sink: &mut W) -> Result<()> {
        if sink.is_terminal() {
            self.write_to(sink)
        } else {
            sink.write_all(self.text().as_bytes())
        }
    }
}

impl AsRef<str> for Painted {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Painted> for String {
    fn from(value: Painted) -> Self {
        value.bytes
    }
}

impl std::fmt::Display for Painted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.bytes)
    }
}

#[cfg(test)]
mod test {
    use super::Style;
    use crate::color::{AnsiColor, Color, Modifier};

    #[test]
    fn test_apply() {
        let style = Style::new(AnsiColor::Red, [Modifier::Bold, Modifier::Underline]);
        assert_eq!(style.prefix(), "\x1b[31m\x1b[1m\x1b[4m");
        assert_eq!(
            style.apply("x").as_str(),
            "\x1b[31m\x1b[1m\x1b[4mx\x1b[0m"
        );

        // Applying does not change the style.
        let before = style.clone();
        let _ = style.apply("y");
        assert_eq!(style, before);
    }

    #[test]
    fn test_colors_and_duplicates() {
        let style = Style::new(Color::from(200), [Modifier::Italic, Modifier::Italic]);
        assert_eq!(format!("{}", style), "\x1b[38;5;200m\x1b[3m\x1b[3m");

        let style = Style::new(Color::from((10, 20, 30)), []);
        assert_eq!(style.apply("").as_str(), "\x1b[38;2;10;20;30m\x1b[0m");

        assert_eq!(Style::default().prefix(), "\x1b[39m");
        assert!(Style::default().modifiers().is_empty());
    }

    #[test]
    fn test_with() {
        let style = Style::new(AnsiColor::Blue, [Modifier::Faint]);
        let changed = style.with_color(AnsiColor::Green).with_modifier(Modifier::Blink);
        assert_eq!(changed.color(), Color::Ansi(AnsiColor::Green));
        assert_eq!(changed.modifiers(), [Modifier::Faint, Modifier::Blink]);
        assert_eq!(changed.prefix(), "\x1b[32m\x1b[2m\x1b[5m");
        assert_eq!(style.prefix(), "\x1b[34m\x1b[2m");
    }

    #[test]
    fn test_painted() -> std::io::Result<()> {
        let painted = Style::new(AnsiColor::Cyan, [Modifier::Reverse]).apply("héllo");
        assert_eq!(painted.text(), "héllo");
        assert_eq!(format!("{}", painted), painted.as_str());

        let mut sink = Vec::new();
        painted.write_to(&mut sink)?;
        assert_eq!(sink, "\x1b[36m\x1b[7mhéllo\x1b[0m".as_bytes());

        // Files are not terminals.
        let path = std::env::temp_dir().join(format!("ansimark-painted-{}", std::process::id()));
        let mut file = std::fs::File::create(&path)?;
        painted.write_if_terminal(&mut file)?;
        drop(file);
        let written = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path)?;
        assert_eq!(written, "héllo");

        assert_eq!(String::from(painted), "\x1b[36m\x1b[7mhéllo\x1b[0m");
        Ok(())
    }
}
