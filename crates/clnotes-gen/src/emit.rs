//! The per-kind generation pass: walk containers, classify each symbol,
//! write one note file per unique name.

use std::collections::HashSet;
use std::path::Path;

use clnotes_registry::{Registry, SymbolKind};

use crate::classify::{deprecated_by, Availability};
use crate::error::Result;
use crate::render::render_note;

/// Outcome of one generation pass.
#[derive(Debug)]
pub struct GenerationReport {
    pub kind: SymbolKind,
    /// Every entry occurrence visited, including skipped duplicates.
    pub total: usize,
    /// Written symbols introduced after 1.0, by version or extension.
    pub newer_than_baseline: usize,
    /// Written symbols carrying a deprecation.
    pub deprecated: usize,
    /// Duplicate-occurrence warnings, in encounter order.
    pub warnings: Vec<String>,
}

impl GenerationReport {
    fn new(kind: SymbolKind) -> Self {
        GenerationReport {
            kind,
            total: 0,
            newer_than_baseline: 0,
            deprecated: 0,
            warnings: Vec::new(),
        }
    }

    /// The run summary line for this kind.
    pub fn summary_line(&self) -> String {
        format!(
            "Found {} API {}s, {} newer than 1.0, {} are deprecated.",
            self.total, self.kind, self.newer_than_baseline, self.deprecated
        )
    }
}

/// Generate one note file per unique symbol of `kind` reachable from a
/// feature or extension container.
///
/// Features are visited before extensions, each category in document order,
/// and the first container to provide a name wins it; every later occurrence
/// is counted, warned about, and skipped. Files land in `out_dir` as
/// `<name>.asciidoc` and are unconditionally overwritten. The seen-name set
/// is local to this pass, so the two kind passes are fully independent.
pub fn generate(registry: &Registry, kind: SymbolKind, out_dir: &Path) -> Result<GenerationReport> {
    std::fs::create_dir_all(out_dir)?;

    let mut report = GenerationReport::new(kind);
    let mut seen: HashSet<String> = HashSet::new();
    let mut feature_owned: HashSet<String> = HashSet::new();

    for feature in registry.features_providing(kind) {
        for name in feature.entries(kind) {
            report.total += 1;
            if seen.contains(name) {
                report.warnings.push(duplicate_warning(name));
                continue;
            }

            let deprecated = deprecated_by(registry, kind, name)?;
            let availability = Availability::classify(&feature.number, deprecated);
            write_note(out_dir, kind, name, &availability, &mut report)?;

            seen.insert(name.to_string());
            feature_owned.insert(name.to_string());
        }
    }

    for extension in registry.extensions_providing(kind) {
        for name in extension.entries(kind) {
            report.total += 1;
            if seen.contains(name) {
                if feature_owned.contains(name) {
                    report.warnings.push(format!(
                        "WARNING: {name} exists as both a core version and extension API in the XML"
                    ));
                } else {
                    report.warnings.push(duplicate_warning(name));
                }
                continue;
            }

            // Extension-introduced symbols never carry a deprecation.
            let availability = Availability::classify(&extension.name, None);
            write_note(out_dir, kind, name, &availability, &mut report)?;

            seen.insert(name.to_string());
        }
    }

    Ok(report)
}

fn duplicate_warning(name: &str) -> String {
    format!("WARNING: duplicate require entry for {name}; keeping the first occurrence")
}

fn write_note(
    out_dir: &Path,
    kind: SymbolKind,
    name: &str,
    availability: &Availability,
    report: &mut GenerationReport,
) -> Result<()> {
    let contents = render_note(kind, name, availability);
    std::fs::write(out_dir.join(format!("{name}.asciidoc")), contents)?;

    if !matches!(
        availability,
        Availability::Baseline | Availability::DeprecatedSince { .. }
    ) {
        report.newer_than_baseline += 1;
    }
    if matches!(
        availability,
        Availability::DeprecatedSince { .. } | Availability::MissingBeforeDeprecated { .. }
    ) {
        report.deprecated += 1;
    }
    Ok(())
}
