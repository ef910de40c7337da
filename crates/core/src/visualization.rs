//! Visualization requests and their edit instructions.
//!
//! A visualization asks the image vendor to re-render an uploaded photo
//! with one material or color changed. The vendor consumes a natural-
//! language edit instruction; the exact phrasings here are load-bearing
//! (the hosted img2img model was tuned against instructions of this form).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which surface of the property a visualization edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationKind {
    Paint,
    Fence,
    Roof,
    Flooring,
}

impl VisualizationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paint => "paint",
            Self::Fence => "fence",
            Self::Roof => "roof",
            Self::Flooring => "flooring",
        }
    }
}

/// A visualization choice with its per-kind options.
///
/// Wire shape: `{ "kind": "fence", "options": { "material": "...", "style": "..." } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum Visualization {
    Paint { color: String },
    Fence { material: String, style: String },
    Roof { color: String },
    Flooring { material: String },
}

impl Visualization {
    pub fn kind(&self) -> VisualizationKind {
        match self {
            Self::Paint { .. } => VisualizationKind::Paint,
            Self::Fence { .. } => VisualizationKind::Fence,
            Self::Roof { .. } => VisualizationKind::Roof,
            Self::Flooring { .. } => VisualizationKind::Flooring,
        }
    }

    /// The natural-language edit instruction sent to the image vendor.
    ///
    /// Rejects blank option values; the vendor silently returns the source
    /// image for instructions like "Add a  fence".
    pub fn edit_instruction(&self) -> Result<String, CoreError> {
        match self {
            Self::Paint { color } => {
                let color = required(color, "color")?;
                Ok(format!("Change the house exterior paint color to {color}"))
            }
            Self::Fence { material, style } => {
                let material = required(material, "material")?;
                let style = required(style, "style")?;
                Ok(format!("Add a {material} {style} fence"))
            }
            Self::Roof { color } => {
                let color = required(color, "color")?;
                Ok(format!("Change the roof to {color} shingles"))
            }
            Self::Flooring { material } => {
                let material = required(material, "material")?;
                Ok(format!("Replace the floor with {material} flooring"))
            }
        }
    }

    /// Short human-readable option summary for history entries.
    pub fn option_label(&self) -> String {
        match self {
            Self::Paint { color } | Self::Roof { color } => color.trim().to_string(),
            Self::Fence { material, style } => format!("{} {}", material.trim(), style.trim()),
            Self::Flooring { material } => material.trim().to_string(),
        }
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!(
            "Visualization option '{field}' must not be empty"
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_instruction() {
        let v = Visualization::Paint {
            color: "sage green".into(),
        };
        assert_eq!(
            v.edit_instruction().unwrap(),
            "Change the house exterior paint color to sage green"
        );
        assert_eq!(v.kind(), VisualizationKind::Paint);
    }

    #[test]
    fn fence_instruction() {
        let v = Visualization::Fence {
            material: "cedar".into(),
            style: "privacy".into(),
        };
        assert_eq!(v.edit_instruction().unwrap(), "Add a cedar privacy fence");
        assert_eq!(v.option_label(), "cedar privacy");
    }

    #[test]
    fn roof_instruction() {
        let v = Visualization::Roof {
            color: "charcoal".into(),
        };
        assert_eq!(
            v.edit_instruction().unwrap(),
            "Change the roof to charcoal shingles"
        );
    }

    #[test]
    fn flooring_instruction() {
        let v = Visualization::Flooring {
            material: "oak hardwood".into(),
        };
        assert_eq!(
            v.edit_instruction().unwrap(),
            "Replace the floor with oak hardwood flooring"
        );
    }

    #[test]
    fn blank_option_rejected() {
        let v = Visualization::Paint { color: "  ".into() };
        assert!(v.edit_instruction().is_err());

        let v = Visualization::Fence {
            material: "cedar".into(),
            style: String::new(),
        };
        assert!(v.edit_instruction().is_err());
    }

    #[test]
    fn options_are_trimmed() {
        let v = Visualization::Roof {
            color: " slate gray ".into(),
        };
        assert_eq!(
            v.edit_instruction().unwrap(),
            "Change the roof to slate gray shingles"
        );
    }

    #[test]
    fn wire_format_round_trip() {
        let json = r#"{"kind":"fence","options":{"material":"vinyl","style":"picket"}}"#;
        let v: Visualization = serde_json::from_str(json).unwrap();
        assert_eq!(v.kind(), VisualizationKind::Fence);

        let back = serde_json::to_value(&v).unwrap();
        assert_eq!(back["kind"], "fence");
        assert_eq!(back["options"]["material"], "vinyl");
    }

    #[test]
    fn unknown_kind_fails_deserialization() {
        let json = r#"{"kind":"driveway","options":{}}"#;
        assert!(serde_json::from_str::<Visualization>(json).is_err());
    }
}
