//! Availability classification: when a symbol was introduced and whether it
//! has since been deprecated.

use clnotes_registry::{Registry, SymbolKind};

use crate::error::{GenError, Result};

/// Version token of the first OpenCL release. Symbols introduced here have
/// always been present.
pub const BASELINE_VERSION: &str = "1.0";

/// Extension names in the registry carry this prefix; any `added_in` token
/// without it is a core version number.
pub const EXTENSION_PREFIX: &str = "cl_";

/// Marker phrase in a require-group comment that flags its members as
/// deprecated. The deprecating version is the token that follows.
const DEPRECATION_MARKER: &str = "deprecated in OpenCL";

/// The five-way classification every note is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Present since 1.0, never deprecated.
    Baseline,
    /// Present since 1.0, deprecated by a later version.
    DeprecatedSince { deprecated_by: String },
    /// Introduced by a core version newer than 1.0.
    MissingBefore { version: String },
    /// Introduced after 1.0 and later deprecated.
    MissingBeforeDeprecated {
        version: String,
        deprecated_by: String,
    },
    /// Introduced by an extension. Extensions carry no deprecation.
    RequiresExtension { extension: String },
}

impl Availability {
    /// Combine an introduction token with an optional deprecating version.
    ///
    /// `added_in` is either a version number ("1.2") or an extension name
    /// ("cl_khr_fp64"), distinguished by the extension prefix.
    pub fn classify(added_in: &str, deprecated_by: Option<String>) -> Self {
        if added_in == BASELINE_VERSION {
            match deprecated_by {
                None => Availability::Baseline,
                Some(deprecated_by) => Availability::DeprecatedSince { deprecated_by },
            }
        } else if !added_in.starts_with(EXTENSION_PREFIX) {
            match deprecated_by {
                None => Availability::MissingBefore {
                    version: added_in.to_string(),
                },
                Some(deprecated_by) => Availability::MissingBeforeDeprecated {
                    version: added_in.to_string(),
                    deprecated_by,
                },
            }
        } else {
            Availability::RequiresExtension {
                extension: added_in.to_string(),
            }
        }
    }
}

/// Find the version that deprecates `name`, if any.
///
/// Scans every commented require group in the registry that contains a
/// same-kind entry for `name`. A comment containing the marker phrase must
/// read "... deprecated in OpenCL <version>"; the trailing token is the
/// deprecating version. A second match is a hard error, with both comments
/// attached.
pub fn deprecated_by(registry: &Registry, kind: SymbolKind, name: &str) -> Result<Option<String>> {
    let mut found: Option<(String, String)> = None;

    for group in registry.commented_groups_containing(kind, name) {
        let comment = group.comment.as_deref().unwrap_or_default();
        if !comment.contains(DEPRECATION_MARKER) {
            continue;
        }
        let version = deprecating_version(name, comment)?;
        if let Some((_, first)) = found {
            return Err(GenError::DuplicateDeprecation {
                name: name.to_string(),
                first,
                second: comment.to_string(),
            });
        }
        found = Some((version, comment.to_string()));
    }

    Ok(found.map(|(version, _)| version))
}

/// Extract the trailing version token from a comment known to contain the
/// marker phrase. The three tokens before it must be exactly the marker.
fn deprecating_version(name: &str, comment: &str) -> Result<String> {
    let words: Vec<&str> = comment.split(' ').collect();
    if words.len() < 4 || words[words.len() - 4..words.len() - 1].join(" ") != DEPRECATION_MARKER {
        return Err(GenError::MalformedDeprecationComment {
            name: name.to_string(),
            comment: comment.to_string(),
        });
    }
    Ok(words[words.len() - 1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clnotes_registry::parse_registry;

    #[test]
    fn baseline_without_deprecation() {
        assert_eq!(Availability::classify("1.0", None), Availability::Baseline);
    }

    #[test]
    fn baseline_with_deprecation() {
        assert_eq!(
            Availability::classify("1.0", Some("3.0".to_string())),
            Availability::DeprecatedSince {
                deprecated_by: "3.0".to_string()
            }
        );
    }

    #[test]
    fn newer_version() {
        assert_eq!(
            Availability::classify("2.1", None),
            Availability::MissingBefore {
                version: "2.1".to_string()
            }
        );
        assert_eq!(
            Availability::classify("1.1", Some("1.2".to_string())),
            Availability::MissingBeforeDeprecated {
                version: "1.1".to_string(),
                deprecated_by: "1.2".to_string()
            }
        );
    }

    #[test]
    fn extension_name() {
        assert_eq!(
            Availability::classify("cl_khr_fp64", None),
            Availability::RequiresExtension {
                extension: "cl_khr_fp64".to_string()
            }
        );
    }

    #[test]
    fn extracts_trailing_version_token() {
        let registry = parse_registry(
            r#"<registry>
                <feature name="CL_VERSION_1_0" number="1.0">
                    <require comment="Image creation APIs, deprecated in OpenCL 1.2">
                        <command name="clCreateImage2D"/>
                    </require>
                </feature>
            </registry>"#,
        )
        .unwrap();

        let version = deprecated_by(&registry, SymbolKind::Command, "clCreateImage2D").unwrap();
        assert_eq!(version.as_deref(), Some("1.2"));
    }

    #[test]
    fn no_marker_means_no_deprecation() {
        let registry = parse_registry(
            r#"<registry>
                <feature name="CL_VERSION_1_0" number="1.0">
                    <require comment="Core image APIs">
                        <command name="clCreateImage2D"/>
                    </require>
                </feature>
            </registry>"#,
        )
        .unwrap();

        assert_eq!(
            deprecated_by(&registry, SymbolKind::Command, "clCreateImage2D").unwrap(),
            None
        );
    }

    #[test]
    fn double_deprecation_is_a_typed_error() {
        let registry = parse_registry(
            r#"<registry>
                <feature name="CL_VERSION_1_0" number="1.0">
                    <require comment="deprecated in OpenCL 1.2">
                        <command name="clCreateImage2D"/>
                    </require>
                    <require comment="deprecated in OpenCL 2.0">
                        <command name="clCreateImage2D"/>
                    </require>
                </feature>
            </registry>"#,
        )
        .unwrap();

        let err = deprecated_by(&registry, SymbolKind::Command, "clCreateImage2D").unwrap_err();
        match err {
            GenError::DuplicateDeprecation { name, first, second } => {
                assert_eq!(name, "clCreateImage2D");
                assert_eq!(first, "deprecated in OpenCL 1.2");
                assert_eq!(second, "deprecated in OpenCL 2.0");
            }
            other => panic!("expected DuplicateDeprecation, got {other:?}"),
        }
    }

    #[test]
    fn marker_must_precede_trailing_token() {
        let registry = parse_registry(
            r#"<registry>
                <feature name="CL_VERSION_1_0" number="1.0">
                    <require comment="deprecated in OpenCL 2.0 and removed later">
                        <enum name="CL_FOO"/>
                    </require>
                </feature>
            </registry>"#,
        )
        .unwrap();

        assert!(matches!(
            deprecated_by(&registry, SymbolKind::Enum, "CL_FOO").unwrap_err(),
            GenError::MalformedDeprecationComment { .. }
        ));
    }
}
