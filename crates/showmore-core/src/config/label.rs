// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Label attributes and resolved configuration

use crate::color::Rgba8Srgb;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Truncation mode
///
/// Each variant other than `None` carries its budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrimMode {
    /// No truncation
    #[default]
    None,
    /// Truncate to a number of lines
    Lines(usize),
    /// Truncate to a number of characters
    Length(usize),
}

/// Raw label attributes
///
/// Every attribute is optional; [`Self::resolve`] applies defaults. Negative
/// values of `max_lines` and `max_length` mean "unset".
///
/// This is serializable (using `feature = "serde"`) with the following
/// fields, all optional:
///
/// > `text`: `String` \
/// > `collapsed_text`: `String` \
/// > `expanded_text`: `String` \
/// > `max_lines`: `i64` \
/// > `max_length`: `i64` \
/// > `trailer_color`: `String` (HTML colour code) \
/// > `expanded_trailer_color`: `String` \
/// > `show_expanded_trailer`: `bool` \
/// > `ellipsize_max_lines`: `i64`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelAttributes {
    pub text: Option<String>,
    pub collapsed_text: Option<String>,
    pub expanded_text: Option<String>,
    pub max_lines: Option<i64>,
    pub max_length: Option<i64>,
    pub trailer_color: Option<String>,
    pub expanded_trailer_color: Option<String>,
    pub show_expanded_trailer: Option<bool>,
    pub ellipsize_max_lines: Option<i64>,
}

impl LabelAttributes {
    /// Construct with all attributes absent
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from `(name, value)` pairs
    ///
    /// See [`Self::set`].
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut attrs = Self::new();
        for (name, value) in pairs {
            attrs.set(name, value);
        }
        attrs
    }

    /// Set attribute `name` from a string value
    ///
    /// Names are the field names of this struct; `-` is accepted in place of
    /// `_`. Unknown names and malformed values are logged and ignored.
    /// Returns `true` if the attribute was set.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let name = name.trim().replace('-', "_");
        match name.as_str() {
            "text" => self.text = Some(value.to_string()),
            "collapsed_text" => self.collapsed_text = Some(value.to_string()),
            "expanded_text" => self.expanded_text = Some(value.to_string()),
            "trailer_color" => self.trailer_color = Some(value.to_string()),
            "expanded_trailer_color" => self.expanded_trailer_color = Some(value.to_string()),
            "max_lines" | "max_length" | "ellipsize_max_lines" => {
                let Ok(n) = value.trim().parse::<i64>() else {
                    log::warn!("LabelAttributes::set: {name}: expected integer, found {value:?}");
                    return false;
                };
                match name.as_str() {
                    "max_lines" => self.max_lines = Some(n),
                    "max_length" => self.max_length = Some(n),
                    _ => self.ellipsize_max_lines = Some(n),
                }
            }
            "show_expanded_trailer" => {
                let Ok(b) = value.trim().parse::<bool>() else {
                    log::warn!("LabelAttributes::set: {name}: expected bool, found {value:?}");
                    return false;
                };
                self.show_expanded_trailer = Some(b);
            }
            _ => {
                log::warn!("LabelAttributes::set: unknown attribute {name:?}");
                return false;
            }
        }
        true
    }

    /// Resolve to a configuration, applying defaults
    ///
    /// This never fails: absent or malformed values use defaults.
    pub fn resolve(&self) -> LabelConfig {
        let defaults = LabelConfig::default();
        LabelConfig {
            collapsed_text: self
                .collapsed_text
                .clone()
                .unwrap_or(defaults.collapsed_text),
            expanded_text: self
                .expanded_text
                .clone()
                .unwrap_or(defaults.expanded_text),
            max_lines: budget(self.max_lines),
            max_length: budget(self.max_length),
            trailer_color: color_or(self.trailer_color.as_deref(), defaults.trailer_color),
            expanded_trailer_color: color_or(
                self.expanded_trailer_color.as_deref(),
                defaults.expanded_trailer_color,
            ),
            show_expanded_trailer: self
                .show_expanded_trailer
                .unwrap_or(defaults.show_expanded_trailer),
            ellipsize_max_lines: budget(self.ellipsize_max_lines),
        }
    }

    /// Get the text, treating absent text as empty
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

fn budget(value: Option<i64>) -> Option<usize> {
    value.and_then(|n| usize::try_from(n).ok())
}

fn color_or(value: Option<&str>, default: Rgba8Srgb) -> Rgba8Srgb {
    match value.map(str::parse::<Rgba8Srgb>) {
        None => default,
        Some(Ok(color)) => color,
        Some(Err(err)) => {
            log::warn!("LabelAttributes::resolve: bad color {value:?}: {err}; using {default}");
            default
        }
    }
}

/// Resolved label configuration
///
/// This is serializable (using `feature = "serde"`); missing fields take
/// their default values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelConfig {
    /// Trailer shown after truncated text
    #[cfg_attr(feature = "serde", serde(default = "defaults::collapsed_text"))]
    pub collapsed_text: String,

    /// Trailer shown after expanded text
    #[cfg_attr(feature = "serde", serde(default = "defaults::expanded_text"))]
    pub expanded_text: String,

    /// Truncation budget in lines
    ///
    /// Takes priority over [`Self::max_length`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_lines: Option<usize>,

    /// Truncation budget in characters
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_length: Option<usize>,

    /// Colour of the collapsed trailer
    #[cfg_attr(feature = "serde", serde(default = "defaults::trailer_color"))]
    pub trailer_color: Rgba8Srgb,

    /// Colour of the expanded trailer
    #[cfg_attr(feature = "serde", serde(default = "defaults::trailer_color"))]
    pub expanded_trailer_color: Rgba8Srgb,

    /// Show the expanded trailer in line-truncation mode
    ///
    /// In character-truncation mode the expanded trailer is always shown. In
    /// line-truncation mode it is shown only if this is set; otherwise the
    /// expanded text has no link and can only be collapsed programmatically.
    #[cfg_attr(feature = "serde", serde(default))]
    pub show_expanded_trailer: bool,

    /// Render-time line limit used when no truncation budget is set
    ///
    /// The host ellipsizes at this many lines; no trailer is added.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ellipsize_max_lines: Option<usize>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            collapsed_text: defaults::collapsed_text(),
            expanded_text: defaults::expanded_text(),
            max_lines: None,
            max_length: None,
            trailer_color: defaults::trailer_color(),
            expanded_trailer_color: defaults::trailer_color(),
            show_expanded_trailer: false,
            ellipsize_max_lines: None,
        }
    }
}

impl LabelConfig {
    /// Resolve the truncation mode
    ///
    /// `max_lines` takes priority over `max_length`.
    pub fn mode(&self) -> TrimMode {
        match (self.max_lines, self.max_length) {
            (Some(n), _) => TrimMode::Lines(n),
            (None, Some(n)) => TrimMode::Length(n),
            (None, None) => TrimMode::None,
        }
    }
}

mod defaults {
    use crate::color::Rgba8Srgb;

    pub fn collapsed_text() -> String {
        "Show more".to_string()
    }
    pub fn expanded_text() -> String {
        "Show less".to_string()
    }
    pub fn trailer_color() -> Rgba8Srgb {
        Rgba8Srgb::rgb(0x3F, 0x51, 0xB5)
    }
}
