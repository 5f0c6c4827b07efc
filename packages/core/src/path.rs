// ABOUTME: Generic path-based field update over the settings document
// ABOUTME: Writes one leaf and keeps every sibling and nested key untouched

use serde_json::Value;
use thiserror::Error;

use crate::section::Section;
use crate::types::SettingsDocument;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Malformed field path: '{0}'")]
    Malformed(String),

    #[error("Unknown field '{path}' in section {section}")]
    UnknownField { section: Section, path: String },

    #[error("Field '{path}' in section {section} is not a single value")]
    NotALeaf { section: Section, path: String },

    #[error("Invalid value for '{path}' in section {section}: {reason}")]
    TypeMismatch {
        section: Section,
        path: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Set the leaf at `path` (dot-separated, relative to the section root) to
/// `value`.
///
/// Only existing keys can be addressed, so the set of ad slots and every other
/// key stays fixed. On error the document is left untouched.
pub fn update_field(
    doc: &mut SettingsDocument,
    section: Section,
    path: &str,
    value: Value,
) -> Result<(), PathError> {
    let segments: Vec<&str> = if path.is_empty() {
        Vec::new()
    } else {
        path.split('.').collect()
    };
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(PathError::Malformed(path.to_string()));
    }

    let mut tree =
        serde_json::to_value(&*doc).map_err(|e| PathError::Serialization(e.to_string()))?;

    let mut cursor = &mut tree;
    for segment in section.root_path().iter().copied().chain(segments) {
        cursor = match cursor {
            Value::Object(map) => match map.get_mut(segment) {
                Some(child) => child,
                None => {
                    return Err(PathError::UnknownField {
                        section,
                        path: path.to_string(),
                    })
                }
            },
            _ => {
                return Err(PathError::UnknownField {
                    section,
                    path: path.to_string(),
                })
            }
        };
    }

    if cursor.is_object() {
        return Err(PathError::NotALeaf {
            section,
            path: path.to_string(),
        });
    }
    *cursor = value;

    let updated: SettingsDocument =
        serde_json::from_value(tree).map_err(|e| PathError::TypeMismatch {
            section,
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    *doc = updated;
    Ok(())
}
