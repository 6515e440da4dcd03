//! Configuration for a code field.
//!
//! [`CodeFieldConfig`] is the typed, immutable-per-mount configuration.
//! [`ConfigFile`] is its serde mirror for JSON documents: every field is
//! optional, string enums and colors are parsed leniently, and anything that
//! does not parse becomes a [`ConfigDiagnostic`] plus the default value.
//!
//! Diagnostics never stop a field from mounting. They are logged with
//! `tracing::warn!` and the widget carries on with best-effort values.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::warn;

use crate::theme::CellVariant;
use crate::types::{Attr, Rgba, Spacing};

// =============================================================================
// Layout position
// =============================================================================

/// Horizontal placement of the cells inside the field container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPosition {
    Left,
    Right,
    #[default]
    Center,
    /// Cells spread across the container, spacing left to the layout.
    FullWidth,
}

impl LayoutPosition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::FullWidth => "full-width",
        }
    }
}

impl FromStr for LayoutPosition {
    type Err = ConfigDiagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            "full-width" | "full_width" | "fullwidth" | "full" => Ok(Self::FullWidth),
            _ => Err(ConfigDiagnostic::UnknownPosition(s.to_string())),
        }
    }
}

// =============================================================================
// Style overrides
// =============================================================================

/// Container-level overrides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerStyle {
    pub padding: Spacing,
    pub background: Option<Rgba>,
}

/// Overrides layered over every cell's variant style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellOverrides {
    pub color: Option<Rgba>,
    pub background: Option<Rgba>,
    pub attrs: Attr,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverrides {
    pub container: ContainerStyle,
    pub cell: CellOverrides,
}

// =============================================================================
// Diagnostics & errors
// =============================================================================

/// Non-fatal misconfiguration. Reported, never raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigDiagnostic {
    #[error("compare_with_code has {actual} characters but code_length is {expected}")]
    TargetLengthMismatch { expected: usize, actual: usize },
    #[error("unknown input position {0:?}, expected one of left, right, center, full-width")]
    UnknownPosition(String),
    #[error("unknown cell variant {0:?}, falling back to no border")]
    UnknownVariant(String),
    #[error("invalid color {value:?} for {field}")]
    InvalidColor { field: &'static str, value: String },
    #[error("code_length must be at least 1, using 1")]
    ZeroLength,
}

/// Failure to read a configuration document at all.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// CodeFieldConfig
// =============================================================================

/// Typed configuration of one code field.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeFieldConfig {
    /// Number of cells. Values below 1 are treated as 1.
    pub code_length: usize,
    /// Expected code. Its length should equal `code_length`.
    pub compare_with_code: Option<String>,
    pub position: LayoutPosition,
    pub variant: CellVariant,
    /// Cell edge length in host units.
    pub size: u16,
    /// Spacing between neighbouring cells.
    pub space: u16,
    pub border_width: u16,
    pub active_color: Rgba,
    pub inactive_color: Rgba,
    /// Compare against `compare_with_code` ignoring letter case.
    pub ignore_case: bool,
    /// Request focus on the first cell at mount.
    pub auto_focus: bool,
    pub overrides: StyleOverrides,
}

impl Default for CodeFieldConfig {
    fn default() -> Self {
        Self {
            code_length: 5,
            compare_with_code: None,
            position: LayoutPosition::Center,
            variant: CellVariant::default(),
            size: 40,
            space: 8,
            border_width: 1,
            active_color: Rgba::WHITE,
            inactive_color: Rgba::new(255, 255, 255, 51),
            ignore_case: false,
            auto_focus: true,
            overrides: StyleOverrides::default(),
        }
    }
}

impl CodeFieldConfig {
    /// Effective number of cells (never zero).
    pub fn cell_count(&self) -> usize {
        self.code_length.max(1)
    }

    /// Check the typed configuration for misconfiguration.
    pub fn diagnostics(&self) -> Vec<ConfigDiagnostic> {
        let mut found = Vec::new();

        if self.code_length == 0 {
            found.push(ConfigDiagnostic::ZeroLength);
        }

        if let Some(target) = &self.compare_with_code {
            let actual = target.chars().count();
            if actual != self.cell_count() {
                found.push(ConfigDiagnostic::TargetLengthMismatch {
                    expected: self.cell_count(),
                    actual,
                });
            }
        }

        found
    }

    /// Log every diagnostic at `warn` level. Returns how many were logged.
    pub fn report_diagnostics(&self) -> usize {
        let found = self.diagnostics();
        log_diagnostics(&found);
        found.len()
    }

    /// Parse a JSON document, returning the config and any parse diagnostics.
    pub fn from_json(json: &str) -> Result<(Self, Vec<ConfigDiagnostic>), ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Ok(file.into_config())
    }

    /// Load a JSON document from disk.
    pub fn load(path: &Path) -> Result<(Self, Vec<ConfigDiagnostic>), ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

fn log_diagnostics(found: &[ConfigDiagnostic]) {
    for diagnostic in found {
        warn!(target: "spark_code_field::config", "{diagnostic}");
    }
}

// =============================================================================
// ConfigFile - serde mirror
// =============================================================================

/// Serialized form of [`CodeFieldConfig`].
///
/// Accepts snake_case keys and the camelCase prop names used by mobile apps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(alias = "codeLength")]
    pub code_length: Option<usize>,
    #[serde(alias = "compareWithCode")]
    pub compare_with_code: Option<String>,
    #[serde(alias = "inputPosition")]
    pub position: Option<String>,
    #[serde(alias = "className")]
    pub variant: Option<String>,
    pub size: Option<u16>,
    pub space: Option<u16>,
    #[serde(alias = "cellBorderWidth")]
    pub border_width: Option<u16>,
    #[serde(alias = "activeColor")]
    pub active_color: Option<String>,
    #[serde(alias = "inactiveColor")]
    pub inactive_color: Option<String>,
    #[serde(alias = "ignoreCase")]
    pub ignore_case: Option<bool>,
    #[serde(alias = "autoFocus")]
    pub auto_focus: Option<bool>,
    pub overrides: OverridesFile,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OverridesFile {
    pub container_padding: Option<u16>,
    pub container_background: Option<String>,
    pub cell_color: Option<String>,
    pub cell_background: Option<String>,
    pub bold: bool,
    pub underline: bool,
}

impl ConfigFile {
    /// Resolve into a typed config. Unparseable values fall back to defaults.
    pub fn into_config(self) -> (CodeFieldConfig, Vec<ConfigDiagnostic>) {
        let defaults = CodeFieldConfig::default();
        let mut found = Vec::new();

        let position = match self.position.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|diag| {
                found.push(diag);
                defaults.position
            }),
            None => defaults.position,
        };

        let variant = match self.variant.as_deref() {
            Some(raw) => CellVariant::from_name(raw).unwrap_or_else(|diag| {
                found.push(diag);
                CellVariant::NoBorder
            }),
            None => defaults.variant,
        };

        let mut color = |field: &'static str, raw: Option<String>| -> Option<Rgba> {
            let raw = raw?;
            let parsed = Rgba::parse(&raw);
            if parsed.is_none() {
                found.push(ConfigDiagnostic::InvalidColor { field, value: raw });
            }
            parsed
        };

        let active_color = color("active_color", self.active_color).unwrap_or(defaults.active_color);
        let inactive_color =
            color("inactive_color", self.inactive_color).unwrap_or(defaults.inactive_color);

        let mut attrs = Attr::NONE;
        if self.overrides.bold {
            attrs |= Attr::BOLD;
        }
        if self.overrides.underline {
            attrs |= Attr::UNDERLINE;
        }

        let overrides = StyleOverrides {
            container: ContainerStyle {
                padding: Spacing::all(self.overrides.container_padding.unwrap_or(0)),
                background: color("container_background", self.overrides.container_background),
            },
            cell: CellOverrides {
                color: color("cell_color", self.overrides.cell_color),
                background: color("cell_background", self.overrides.cell_background),
                attrs,
            },
        };

        let config = CodeFieldConfig {
            code_length: self.code_length.unwrap_or(defaults.code_length),
            compare_with_code: self.compare_with_code.filter(|code| !code.is_empty()),
            position,
            variant,
            size: self.size.unwrap_or(defaults.size),
            space: self.space.unwrap_or(defaults.space),
            border_width: self.border_width.unwrap_or(defaults.border_width),
            active_color,
            inactive_color,
            ignore_case: self.ignore_case.unwrap_or(defaults.ignore_case),
            auto_focus: self.auto_focus.unwrap_or(defaults.auto_focus),
            overrides,
        };

        // Typed-config checks are logged once, by `report_diagnostics` at mount.
        log_diagnostics(&found);
        found.extend(config.diagnostics());

        (config, found)
    }
}

// =============================================================================
// Tests
// =============================================================================
