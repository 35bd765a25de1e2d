//! Checkbox style: colors, label strings and font family.
//!
//! A style can be built in code or loaded from TOML or YAML. Colors are
//! written as CSS strings (`"black"`, `"#CBCBCB"`, `"#ddd"`). Missing keys
//! keep their defaults, so a document only needs the values it changes:
//!
//! ```
//! use pillswitch_widgets::CheckboxStyle;
//!
//! let style = CheckboxStyle::from_toml_str(r##"
//! on_color = "#34c759"
//! on_text = "I"
//! off_text = "O"
//! "##).expect("valid style");
//! assert_eq!(style.on_text, "I");
//! assert_eq!(style.font, "Arial");
//! ```

use pillswitch_core::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading or editing a [`CheckboxStyle`].
#[derive(Debug, Error)]
pub enum StyleError {
    /// TOML document could not be parsed.
    #[error("invalid TOML style: {0}")]
    Toml(#[from] toml::de::Error),

    /// Style could not be written as TOML.
    #[error("failed to serialize style as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// YAML document could not be parsed.
    #[error("invalid YAML style: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A color string was not a CSS color.
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    /// A color role name was not recognized.
    #[error("unknown color role '{0}'")]
    UnknownRole(String),
}

/// Visual configuration of an [`IosCheckbox`](crate::IosCheckbox).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxStyle {
    /// Background when enabled and on
    #[serde(with = "css_color")]
    pub on_color: Color,
    /// Background when enabled and off; also the knob fill
    #[serde(with = "css_color")]
    pub off_color: Color,
    /// Background when disabled
    #[serde(with = "css_color")]
    pub disabled_color: Color,
    /// Label color when enabled and on
    #[serde(with = "css_color")]
    pub text_on_color: Color,
    /// Label color when enabled and off
    #[serde(with = "css_color")]
    pub text_off_color: Color,
    /// Label color when disabled
    #[serde(with = "css_color")]
    pub text_disabled_color: Color,
    /// Outline when enabled
    #[serde(with = "css_color")]
    pub enabled_border_color: Color,
    /// Outline when disabled
    #[serde(with = "css_color")]
    pub disabled_border_color: Color,
    /// Label shown when on
    pub on_text: String,
    /// Label shown when off
    pub off_text: String,
    /// Font family for the label
    pub font: String,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self {
            on_color: Color::BLACK,
            off_color: Color::rgb8(0xcb, 0xcb, 0xcb),
            disabled_color: Color::rgb8(0xdd, 0xdd, 0xdd),
            text_on_color: Color::WHITE,
            text_off_color: Color::BLACK,
            text_disabled_color: Color::GRAY,
            enabled_border_color: Color::BLACK,
            disabled_border_color: Color::GRAY,
            on_text: "ON".to_string(),
            off_text: "OFF".to_string(),
            font: "Arial".to_string(),
        }
    }
}

impl CheckboxStyle {
    /// Load a style from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a style from a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Write the full style as TOML.
    pub fn to_toml_string(&self) -> Result<String, StyleError> {
        Ok(toml::to_string(self)?)
    }

    /// Get the color assigned to `role`.
    #[must_use]
    pub const fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::On => self.on_color,
            ColorRole::Off => self.off_color,
            ColorRole::Disabled => self.disabled_color,
            ColorRole::TextOn => self.text_on_color,
            ColorRole::TextOff => self.text_off_color,
            ColorRole::TextDisabled => self.text_disabled_color,
            ColorRole::EnabledBorder => self.enabled_border_color,
            ColorRole::DisabledBorder => self.disabled_border_color,
        }
    }

    /// Assign `color` to `role`.
    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        let slot = match role {
            ColorRole::On => &mut self.on_color,
            ColorRole::Off => &mut self.off_color,
            ColorRole::Disabled => &mut self.disabled_color,
            ColorRole::TextOn => &mut self.text_on_color,
            ColorRole::TextOff => &mut self.text_off_color,
            ColorRole::TextDisabled => &mut self.text_disabled_color,
            ColorRole::EnabledBorder => &mut self.enabled_border_color,
            ColorRole::DisabledBorder => &mut self.disabled_border_color,
        };
        *slot = color;
    }

    /// Parse `css` and assign it to the role named `role`.
    pub fn set_css_color(&mut self, role: &str, css: &str) -> Result<(), StyleError> {
        let role: ColorRole = role.parse()?;
        self.set_color(role, Color::from_css(css)?);
        Ok(())
    }
}

/// The eight configurable colors of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// `on_color`
    On,
    /// `off_color`
    Off,
    /// `disabled_color`
    Disabled,
    /// `text_on_color`
    TextOn,
    /// `text_off_color`
    TextOff,
    /// `text_disabled_color`
    TextDisabled,
    /// `enabled_border_color`
    EnabledBorder,
    /// `disabled_border_color`
    DisabledBorder,
}

impl FromStr for ColorRole {
    type Err = StyleError;

    /// Accepts the field name with or without the `_color` suffix,
    /// in `snake_case` or `camelCase`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .trim_end_matches("_color")
            .trim_end_matches("Color")
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "disabled" => Ok(Self::Disabled),
            "texton" => Ok(Self::TextOn),
            "textoff" => Ok(Self::TextOff),
            "textdisabled" => Ok(Self::TextDisabled),
            "enabledborder" => Ok(Self::EnabledBorder),
            "disabledborder" => Ok(Self::DisabledBorder),
            _ => Err(StyleError::UnknownRole(s.to_string())),
        }
    }
}

mod css_color {
    use pillswitch_core::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_css(&raw).map_err(serde::de::Error::custom)
    }
}
