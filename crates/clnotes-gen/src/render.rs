//! Note rendering: fixed text templates selected by symbol kind.
//!
//! Commands get the verbose "full" form with an IMPORTANT admonition and a
//! braced attribute reference; enums get the terse "short" form. Both forms
//! cover the same five availability patterns, and every file is wrapped in
//! the same header and footer boilerplate.

use clnotes_registry::SymbolKind;

use crate::classify::Availability;

/// Boilerplate at the top of every generated file.
pub const HEADER: &str = "\
// Copyright 2017-2023 The Khronos Group. This work is licensed under a
// Creative Commons Attribution 4.0 International License; see
// http://creativecommons.org/licenses/by/4.0/
";

/// Boilerplate at the end of every generated file.
pub const FOOTER: &str = "\n";

/// Verbose note body, used for commands.
pub fn full_note(name: &str, availability: &Availability) -> String {
    match availability {
        Availability::Baseline => {
            format!("\n// Intentionally empty, {name} has always been present.")
        }
        Availability::DeprecatedSince { deprecated_by } => format!(
            "\nIMPORTANT: {{{name}}} is <<unified-spec, deprecated by>> version {deprecated_by}."
        ),
        Availability::MissingBefore { version } => {
            format!("\nIMPORTANT: {{{name}}} is <<unified-spec, missing before>> version {version}.")
        }
        Availability::MissingBeforeDeprecated {
            version,
            deprecated_by,
        } => format!(
            "\nIMPORTANT: {{{name}}} is <<unified-spec, missing before>> version {version} \
             and <<unified-spec, deprecated by>> version {deprecated_by}."
        ),
        Availability::RequiresExtension { extension } => {
            format!("\nIMPORTANT: {name} requires {extension}.")
        }
    }
}

/// Terse note body, used for enums.
pub fn short_note(name: &str, availability: &Availability) -> String {
    match availability {
        Availability::Baseline => {
            format!("// Intentionally empty, {name} has always been present.")
        }
        Availability::DeprecatedSince { deprecated_by } => {
            format!("<<unified-spec, Deprecated by>> version {deprecated_by}.")
        }
        Availability::MissingBefore { version } => {
            format!("<<unified-spec, Missing before>> version {version}.")
        }
        Availability::MissingBeforeDeprecated {
            version,
            deprecated_by,
        } => format!(
            "<<unified-spec, Missing before>> version {version} \
             and <<unified-spec, deprecated by>> version {deprecated_by}."
        ),
        Availability::RequiresExtension { extension } => {
            format!("{name} requires {extension}.")
        }
    }
}

/// A complete note file: header, kind-selected body, footer.
pub fn render_note(kind: SymbolKind, name: &str, availability: &Availability) -> String {
    let body = match kind {
        SymbolKind::Command => full_note(name, availability),
        SymbolKind::Enum => short_note(name, availability),
    };
    format!("{HEADER}{body}{FOOTER}")
}
