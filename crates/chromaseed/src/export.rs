//! Exporting schemes as source code.
//!
//! An export covers the six [`ExportCombination`]s of light and dark mode with
//! default, medium, and high contrast. Each format lists every role but the
//! palette key colors, which only matter while deriving a scheme.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dynamic::{DynamicScheme, Role, Variant};
use crate::Argb;

/// One of the six exported combinations of mode and contrast level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportCombination {
    /// The camelCase name.
    pub name: &'static str,
    /// Whether the scheme is dark.
    pub is_dark: bool,
    /// The contrast level.
    pub contrast_level: f64,
}

impl ExportCombination {
    /// All exported combinations in order.
    pub const ALL: [ExportCombination; 6] = [
        Self::new("light", false, 0.0),
        Self::new("lightMediumContrast", false, 0.5),
        Self::new("lightHighContrast", false, 1.0),
        Self::new("dark", true, 0.0),
        Self::new("darkMediumContrast", true, 0.5),
        Self::new("darkHighContrast", true, 1.0),
    ];

    const fn new(name: &'static str, is_dark: bool, contrast_level: f64) -> Self {
        Self {
            name,
            is_dark,
            contrast_level,
        }
    }

    /// Create the scheme for this combination.
    pub fn scheme(&self, source: Argb, variant: Variant) -> DynamicScheme {
        DynamicScheme::new(source, variant, self.is_dark, self.contrast_level)
    }
}

/// Create the schemes for all six combinations.
pub fn export_schemes(source: Argb, variant: Variant) -> Vec<(ExportCombination, DynamicScheme)> {
    tracing::debug!(%source, %variant, "exporting schemes");
    ExportCombination::ALL
        .iter()
        .map(|combination| (*combination, combination.scheme(source, variant)))
        .collect()
}

fn exported_roles(scheme: &DynamicScheme) -> impl Iterator<Item = (Role, Argb)> + '_ {
    scheme.iter().filter(|(role, _)| !role.is_key_color())
}

/// Convert a camelCase name to kebab-case.
fn kebab_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a camelCase name to PascalCase.
fn pascal_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        result.push(first.to_ascii_uppercase());
        result.push_str(chars.as_str());
    }
    result
}

// --------------------------------------------------------------------------------------------------------------------

/// Export the schemes as Kotlin color constants for Jetpack Compose.
///
/// ```
/// # use chromaseed::{export::export_kotlin, Argb, Variant};
/// let kotlin = export_kotlin(Argb::new(0xff67_50a4), Variant::TonalSpot);
/// assert!(kotlin.contains("val primaryLight = Color(0xFF65558F)\n"));
/// assert!(kotlin.contains("val primaryDark = Color(0xFFCFBDFE)\n"));
/// ```
pub fn export_kotlin(source: Argb, variant: Variant) -> String {
    let mut output = String::from("package com.example.ui.theme\n\nimport androidx.compose.ui.graphics.Color\n");

    for (combination, scheme) in export_schemes(source, variant) {
        let suffix = pascal_case(combination.name);
        output.push('\n');
        for (role, color) in exported_roles(&scheme) {
            output.push_str(&format!(
                "val {}{} = Color(0x{:08X})\n",
                role.name(),
                suffix,
                color
            ));
        }
    }

    output
}

/// Export the schemes as CSS custom properties.
///
/// ```
/// # use chromaseed::{export::export_css, Argb, Variant};
/// let css = export_css(Argb::new(0xff67_50a4), Variant::TonalSpot);
/// assert!(css.contains("  --md-sys-color-primary-light: #65558f;\n"));
/// assert!(css.contains("  --md-sys-color-on-primary-dark-high-contrast: #000000;\n"));
/// ```
pub fn export_css(source: Argb, variant: Variant) -> String {
    let mut output = String::from(":root {\n");

    for (index, (combination, scheme)) in export_schemes(source, variant).into_iter().enumerate() {
        if 0 < index {
            output.push('\n');
        }

        let suffix = kebab_case(combination.name);
        for (role, color) in exported_roles(&scheme) {
            output.push_str(&format!(
                "  --md-sys-color-{}-{}: {};\n",
                kebab_case(role.name()),
                suffix,
                color.with_alpha(0xff)
            ));
        }
    }

    output.push_str("}\n");
    output
}

// --------------------------------------------------------------------------------------------------------------------

/// One exported scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedScheme {
    pub name: String,
    pub is_dark: bool,
    pub contrast_level: f64,
    pub colors: BTreeMap<Role, Argb>,
}

/// The document written by [`export_json`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub source: Argb,
    pub variant: Variant,
    pub schemes: Vec<ExportedScheme>,
}

impl ExportDocument {
    /// Create the export document for the source color and variant.
    pub fn new(source: Argb, variant: Variant) -> Self {
        let schemes = export_schemes(source, variant)
            .into_iter()
            .map(|(combination, scheme)| ExportedScheme {
                name: combination.name.to_owned(),
                is_dark: combination.is_dark,
                contrast_level: combination.contrast_level,
                colors: exported_roles(&scheme).collect(),
            })
            .collect();

        Self {
            source,
            variant,
            schemes,
        }
    }
}

/// Export the schemes as pretty-printed JSON.
pub fn export_json(source: Argb, variant: Variant) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportDocument::new(source, variant))
}

// ====================================================================================================================
