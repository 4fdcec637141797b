//! Styling requests for formatted mentions
//!
//! The formatter only decides *which* emphasis a mention gets. Rendering
//! that emphasis is left to a `Styler`.

use std::str::FromStr;

use colored::{Color, Colorize};

/// Emphasis requested for a resolved mention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// A followed source.
    Bold,
    /// The viewer themself: bold in the highlight colour.
    BoldHighlight,
}

impl Style {
    /// Named colour for this style, if any.
    pub fn color_name(&self) -> Option<&'static str> {
        match self {
            Style::Bold => None,
            Style::BoldHighlight => Some("magenta"),
        }
    }
}

/// Renders a style request into decorated text.
pub trait Styler {
    fn style(&self, text: &str, style: Style) -> String;
}

/// Leaves text undecorated.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn style(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

/// Terminal escape codes via `colored`. Honours `NO_COLOR` and tty detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn style(&self, text: &str, style: Style) -> String {
        match style.color_name().and_then(|name| Color::from_str(name).ok()) {
            Some(color) => text.color(color).bold().to_string(),
            None => text.bold().to_string(),
        }
    }
}
