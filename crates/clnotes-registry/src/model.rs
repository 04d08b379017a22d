//! Typed registry tree and structural lookups.
//!
//! The registry is parsed once into this immutable model; all later phases
//! query it through the lookup methods below and never mutate it.

use std::fmt;

/// The two symbol kinds the generator documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// An API entry point, e.g. `clEnqueueSVMMigrateMem`.
    Command,
    /// An enumerant, e.g. `CL_DEVICE_TYPE_GPU`.
    Enum,
}

impl SymbolKind {
    /// The XML element name used for entries of this kind.
    pub fn element_name(self) -> &'static str {
        match self {
            SymbolKind::Command => "command",
            SymbolKind::Enum => "enum",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// The parsed registry: feature (core version) and extension containers,
/// each in document order.
#[derive(Debug, Default)]
pub struct Registry {
    pub features: Vec<Feature>,
    pub extensions: Vec<Extension>,
}

/// A core API version definition, e.g. `<feature name="CL_VERSION_2_1" number="2.1">`.
#[derive(Debug)]
pub struct Feature {
    pub name: String,
    /// Version token, e.g. "1.2".
    pub number: String,
    pub requires: Vec<RequireGroup>,
}

/// An optional named capability, e.g. `<extension name="cl_khr_fp64">`.
#[derive(Debug)]
pub struct Extension {
    pub name: String,
    pub requires: Vec<RequireGroup>,
}

/// A `<require>` group of symbols needed by a feature or extension.
///
/// The optional comment is free text; a comment ending in
/// "deprecated in OpenCL <version>" marks every member as deprecated.
#[derive(Debug, Default)]
pub struct RequireGroup {
    pub comment: Option<String>,
    pub commands: Vec<String>,
    pub enums: Vec<String>,
}

impl RequireGroup {
    /// The entry names of one kind in this group, in document order.
    pub fn entries(&self, kind: SymbolKind) -> &[String] {
        match kind {
            SymbolKind::Command => &self.commands,
            SymbolKind::Enum => &self.enums,
        }
    }

    /// Whether this group contains a same-kind entry with the given name.
    pub fn contains(&self, kind: SymbolKind, name: &str) -> bool {
        self.entries(kind).iter().any(|entry| entry == name)
    }
}

impl Feature {
    /// All entries of one kind across this feature's require groups.
    pub fn entries(&self, kind: SymbolKind) -> impl Iterator<Item = &str> + '_ {
        self.requires
            .iter()
            .flat_map(move |group| group.entries(kind).iter().map(String::as_str))
    }

    /// Whether this feature requires at least one entry of the given kind.
    pub fn provides(&self, kind: SymbolKind) -> bool {
        self.requires.iter().any(|group| !group.entries(kind).is_empty())
    }
}

impl Extension {
    /// All entries of one kind across this extension's require groups.
    pub fn entries(&self, kind: SymbolKind) -> impl Iterator<Item = &str> + '_ {
        self.requires
            .iter()
            .flat_map(move |group| group.entries(kind).iter().map(String::as_str))
    }

    /// Whether this extension requires at least one entry of the given kind.
    pub fn provides(&self, kind: SymbolKind) -> bool {
        self.requires.iter().any(|group| !group.entries(kind).is_empty())
    }
}

impl Registry {
    /// Features that require at least one entry of `kind`, in document order.
    pub fn features_providing(&self, kind: SymbolKind) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(move |feature| feature.provides(kind))
    }

    /// Extensions that require at least one entry of `kind`, in document order.
    pub fn extensions_providing(&self, kind: SymbolKind) -> impl Iterator<Item = &Extension> {
        self.extensions.iter().filter(move |ext| ext.provides(kind))
    }

    /// Every commented require group, anywhere in the document, that contains
    /// a same-kind entry named `name`. This is the lookup behind deprecation
    /// resolution.
    pub fn commented_groups_containing<'a>(
        &'a self,
        kind: SymbolKind,
        name: &'a str,
    ) -> impl Iterator<Item = &'a RequireGroup> {
        self.features
            .iter()
            .flat_map(|feature| feature.requires.iter())
            .chain(self.extensions.iter().flat_map(|ext| ext.requires.iter()))
            .filter(move |group| group.comment.is_some() && group.contains(kind, name))
    }
}
