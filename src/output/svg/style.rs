//! SVG styling primitives: text anchoring, fonts and stroke dashes.

use std::fmt;

use crate::layout::{Font, LineDash};

use super::format::{coord, html_escape};

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// `stroke-dasharray` value for a dash style, scaled to the stroke width.
#[must_use]
pub fn dash_array(dash: LineDash, width: f64) -> Option<String> {
    match dash {
        LineDash::Solid => None,
        LineDash::Dot => {
            let unit = width.max(1.0);
            Some(format!("{},{}", coord(unit), coord(unit * 2.0)))
        }
    }
}

/// `font-family`, `font-size` and `fill` attributes for a text element.
#[must_use]
pub fn font_attributes(font: &Font) -> String {
    format!(
        r#"font-family="{}" font-size="{}" fill="{}""#,
        html_escape(&font.family),
        coord(font.size),
        html_escape(&font.color)
    )
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
