//! XML registry parsing.
//!
//! Builds the typed tree from a registry document. Only `<command>` and
//! `<enum>` elements nested under a `<require>` group of a `<feature>` or
//! `<extension>` count as symbol entries; the registry's standalone
//! definitions of commands and enums elsewhere in the document are ignored.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{RegistryError, Result};
use crate::model::{Extension, Feature, Registry, RequireGroup};

enum Container {
    Feature(Feature),
    Extension(Extension),
}

impl Container {
    fn push_group(&mut self, group: RequireGroup) {
        match self {
            Container::Feature(feature) => feature.requires.push(group),
            Container::Extension(ext) => ext.requires.push(group),
        }
    }
}

/// Parse a registry document into the typed tree.
pub fn parse_registry(xml: &str) -> Result<Registry> {
    let mut reader = Reader::from_str(xml);
    let mut registry = Registry::default();
    let mut container: Option<Container> = None;
    let mut group: Option<RequireGroup> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                open_element(&e, false, &mut registry, &mut container, &mut group)?
            }
            Event::Empty(e) => {
                open_element(&e, true, &mut registry, &mut container, &mut group)?
            }
            Event::End(e) => {
                close_element(e.name().as_ref(), &mut registry, &mut container, &mut group)
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(registry)
}

fn open_element(
    e: &BytesStart<'_>,
    self_closing: bool,
    registry: &mut Registry,
    container: &mut Option<Container>,
    group: &mut Option<RequireGroup>,
) -> Result<()> {
    match e.name().as_ref() {
        b"feature" => {
            let feature = Feature {
                name: required_attr(e, "feature", "name")?,
                number: required_attr(e, "feature", "number")?,
                requires: Vec::new(),
            };
            if self_closing {
                registry.features.push(feature);
            } else {
                *container = Some(Container::Feature(feature));
            }
        }
        b"extension" => {
            let ext = Extension {
                name: required_attr(e, "extension", "name")?,
                requires: Vec::new(),
            };
            if self_closing {
                registry.extensions.push(ext);
            } else {
                *container = Some(Container::Extension(ext));
            }
        }
        b"require" if container.is_some() => {
            let new_group = RequireGroup {
                comment: optional_attr(e, "comment")?,
                ..RequireGroup::default()
            };
            if self_closing {
                if let Some(c) = container.as_mut() {
                    c.push_group(new_group);
                }
            } else {
                *group = Some(new_group);
            }
        }
        b"command" => {
            if let Some(g) = group.as_mut() {
                g.commands.push(required_attr(e, "command", "name")?);
            }
        }
        b"enum" => {
            if let Some(g) = group.as_mut() {
                g.enums.push(required_attr(e, "enum", "name")?);
            }
        }
        _ => {}
    }
    Ok(())
}

fn close_element(
    name: &[u8],
    registry: &mut Registry,
    container: &mut Option<Container>,
    group: &mut Option<RequireGroup>,
) {
    match name {
        b"require" => {
            if let (Some(c), Some(g)) = (container.as_mut(), group.take()) {
                c.push_group(g);
            }
        }
        b"feature" | b"extension" => match container.take() {
            Some(Container::Feature(feature)) => registry.features.push(feature),
            Some(Container::Extension(ext)) => registry.extensions.push(ext),
            None => {}
        },
        _ => {}
    }
}

fn required_attr(
    e: &BytesStart<'_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<String> {
    optional_attr(e, attribute)?.ok_or(RegistryError::MissingAttribute { element, attribute })
}

fn optional_attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SymbolKind;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <commands>
        <command>
            <proto>cl_int <name>clGetPlatformIDs</name></proto>
        </command>
    </commands>
    <enums name="Boolean">
        <enum value="0" name="CL_FALSE"/>
    </enums>
    <feature api="opencl" name="CL_VERSION_1_0" number="1.0">
        <require>
            <command name="clGetPlatformIDs"/>
            <enum name="CL_FALSE"/>
        </require>
        <require comment="Image APIs, deprecated in OpenCL 2.0">
            <command name="clCreateImage2D"/>
        </require>
    </feature>
    <feature api="opencl" name="CL_VERSION_2_1" number="2.1">
        <require>
            <command name="clEnqueueSVMMigrateMem"/>
        </require>
    </feature>
    <extensions>
        <extension name="cl_khr_gl_sharing" supported="opencl">
            <require>
                <command name="clCreateFromGLBuffer"/>
                <enum name="CL_GL_OBJECT_BUFFER"/>
            </require>
        </extension>
    </extensions>
</registry>"#;

    #[test]
    fn parses_features_and_extensions() {
        let registry = parse_registry(SAMPLE).unwrap();

        assert_eq!(registry.features.len(), 2);
        assert_eq!(registry.features[0].name, "CL_VERSION_1_0");
        assert_eq!(registry.features[0].number, "1.0");
        assert_eq!(registry.features[1].number, "2.1");

        assert_eq!(registry.extensions.len(), 1);
        assert_eq!(registry.extensions[0].name, "cl_khr_gl_sharing");
    }

    #[test]
    fn require_groups_keep_comments_and_entries() {
        let registry = parse_registry(SAMPLE).unwrap();
        let feature = &registry.features[0];

        assert_eq!(feature.requires.len(), 2);
        assert_eq!(feature.requires[0].comment, None);
        assert_eq!(feature.requires[0].commands, vec!["clGetPlatformIDs"]);
        assert_eq!(feature.requires[0].enums, vec!["CL_FALSE"]);
        assert_eq!(
            feature.requires[1].comment.as_deref(),
            Some("Image APIs, deprecated in OpenCL 2.0")
        );
    }

    #[test]
    fn standalone_definitions_are_not_entries() {
        // clGetPlatformIDs is defined under <commands> and CL_FALSE under
        // <enums>, but each must be counted exactly once, via the feature's
        // require group.
        let registry = parse_registry(SAMPLE).unwrap();
        let names: Vec<&str> = registry.features[0].entries(SymbolKind::Command).collect();
        assert_eq!(names, vec!["clGetPlatformIDs", "clCreateImage2D"]);
        let enums: Vec<&str> = registry.features[0].entries(SymbolKind::Enum).collect();
        assert_eq!(enums, vec!["CL_FALSE"]);
    }

    #[test]
    fn missing_required_attribute_is_fatal() {
        let xml = r#"<registry><feature name="CL_VERSION_1_0"><require/></feature></registry>"#;
        let err = parse_registry(xml).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingAttribute {
                element: "feature",
                attribute: "number"
            }
        ));
    }

    #[test]
    fn malformed_xml_is_fatal() {
        assert!(matches!(
            parse_registry("<registry><feature").unwrap_err(),
            RegistryError::Xml(_)
        ));
    }
}
