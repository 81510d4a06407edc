//! Canonical schema for the CSS build configuration.
//!
//! The asset pipeline consumes a single `tailwind.config.js`. That file is
//! generated from [`TailwindConfig::canonical`] by the `gen-tailwind` binary,
//! so the typed value here is the one source of truth: a second, divergent
//! definition is a generation-time error ([`TailwindConfig::resolve_duplicate`]),
//! never something to be silently merged over.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildConfigError {
    #[error("scan paths must include at least one template glob")]
    MissingTemplateGlob,
    #[error("scan paths must include at least one script glob")]
    MissingScriptGlob,
    #[error("expected exactly one extra breakpoint, found {0}")]
    BreakpointCount(usize),
    #[error("conflicting build configuration definitions: {fields:?} differ")]
    Conflict { fields: Vec<&'static str> },
}

/// Extra breakpoint merged ahead of the framework defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyframeStop {
    /// Offset within the animation, e.g. `"0%"`.
    pub offset: String,
    /// CSS declarations at this offset. Numeric values render unquoted.
    pub declarations: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyframes {
    pub name: String,
    pub stops: Vec<KeyframeStop>,
}

/// Shorthand binding a keyframes name to a usable animation utility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationBinding {
    pub name: String,
    pub shorthand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowToken {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ThemeExtension {
    pub screens: Vec<Breakpoint>,
    pub keyframes: Vec<Keyframes>,
    pub animations: Vec<AnimationBinding>,
    pub drop_shadows: Vec<ShadowToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailwindConfig {
    /// Globs scanned for utility-class usage.
    pub content: Vec<String>,
    pub theme: ThemeExtension,
    pub plugins: Vec<String>,
}

impl TailwindConfig {
    /// The one configuration the asset pipeline builds from.
    pub fn canonical() -> Self {
        Self {
            content: vec![
                "./templates/**/*.html".to_owned(),
                "./assets/**/*.js".to_owned(),
            ],
            theme: ThemeExtension {
                screens: vec![Breakpoint {
                    name: "xs".to_owned(),
                    min_width: "485px".to_owned(),
                }],
                keyframes: vec![Keyframes {
                    name: "fadein".to_owned(),
                    stops: vec![
                        KeyframeStop {
                            offset: "0%".to_owned(),
                            declarations: vec![("opacity".to_owned(), "0".to_owned())],
                        },
                        KeyframeStop {
                            offset: "100%".to_owned(),
                            declarations: vec![("opacity".to_owned(), "100".to_owned())],
                        },
                    ],
                }],
                animations: vec![AnimationBinding {
                    name: "fadein".to_owned(),
                    shorthand: "fadein 2s forwards".to_owned(),
                }],
                drop_shadows: vec![ShadowToken {
                    name: "gray".to_owned(),
                    value: "0 1px 2px rgba(243,244,246.1)".to_owned(),
                }],
            },
            plugins: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), BuildConfigError> {
        if !self.content.iter().any(|glob| glob.ends_with(".html")) {
            return Err(BuildConfigError::MissingTemplateGlob);
        }
        if !self.content.iter().any(|glob| glob.ends_with(".js")) {
            return Err(BuildConfigError::MissingScriptGlob);
        }
        if self.theme.screens.len() != 1 {
            return Err(BuildConfigError::BreakpointCount(self.theme.screens.len()));
        }
        Ok(())
    }

    /// Collapses two definitions of the configuration into one.
    ///
    /// Identical definitions are fine (one is dead and superseded); divergent
    /// ones are an error naming the differing fields.
    pub fn resolve_duplicate(a: &Self, b: &Self) -> Result<Self, BuildConfigError> {
        let mut fields = Vec::new();
        if a.content != b.content {
            fields.push("content");
        }
        if a.theme != b.theme {
            fields.push("theme");
        }
        if a.plugins != b.plugins {
            fields.push("plugins");
        }

        if fields.is_empty() {
            Ok(a.clone())
        } else {
            Err(BuildConfigError::Conflict { fields })
        }
    }

    /// Renders the ESM named-export module form consumed by the CSS build.
    pub fn to_module_source(&self) -> String {
        let mut out = String::new();
        out.push_str("/** @type {import('tailwindcss').Config} */\n");
        out.push_str("const defaultTheme = require(\"tailwindcss/defaultTheme\");\n\n");

        out.push_str("export const content = [");
        for (i, glob) in self.content.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("\"{glob}\""));
        }
        out.push_str("];\n\n");

        out.push_str("export const theme = {\n    extend: {\n");

        out.push_str("        screens: {\n");
        for breakpoint in &self.theme.screens {
            out.push_str(&format!(
                "            {}: \"{}\",\n",
                breakpoint.name, breakpoint.min_width
            ));
        }
        out.push_str("            ...defaultTheme.screens,\n");
        out.push_str("        },\n");

        out.push_str("        keyframes: {\n");
        for keyframes in &self.theme.keyframes {
            out.push_str(&format!("            {}: {{\n", keyframes.name));
            for stop in &keyframes.stops {
                out.push_str(&format!("                \"{}\": {{ ", stop.offset));
                for (i, (property, value)) in stop.declarations.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&format!("{}: {}", property, js_value(value)));
                }
                out.push_str(" },\n");
            }
            out.push_str("            },\n");
        }
        out.push_str("        },\n");

        out.push_str("        animation: {\n");
        for animation in &self.theme.animations {
            out.push_str(&format!(
                "            {}: \"{}\",\n",
                animation.name, animation.shorthand
            ));
        }
        out.push_str("        },\n");

        out.push_str("        dropShadow: {\n");
        for shadow in &self.theme.drop_shadows {
            out.push_str(&format!(
                "            {}: \"{}\",\n",
                shadow.name, shadow.value
            ));
        }
        out.push_str("        },\n");

        out.push_str("    },\n};\n\n");

        out.push_str("export const plugins = [");
        for (i, plugin) in self.plugins.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(plugin);
        }
        out.push_str("];\n");

        out
    }
}

/// Bare number when the value is numeric, quoted string otherwise.
fn js_value(value: &str) -> String {
    if value.parse::<f64>().is_ok() {
        value.to_owned()
    } else {
        format!("\"{value}\"")
    }
}
