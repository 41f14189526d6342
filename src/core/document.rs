//! core::document
//!
//! JSON trail documents.
//!
//! # Schema Design
//!
//! A document is self-describing (`kind`, `schema_version`) and strictly
//! parsed: unknown fields are rejected. A trail is written as a list of
//! segments; a split's follow path is the remainder of the list that
//! contains it, so rejoins never need to be spelled out.
//!
//! ```json
//! {
//!   "kind": "trailwalk.trail",
//!   "schema_version": 1,
//!   "trail": [
//!     {"mountain": {"name": "a", "difficulty_level": 2, "length": 3}},
//!     {"split": {
//!       "top": [{"mountain": {"name": "b", "difficulty_level": 5, "length": 1}}],
//!       "bottom": []
//!     }},
//!     {"mountain": {"name": "c", "difficulty_level": 1, "length": 4}}
//!   ]
//! }
//! ```
//!
//! Split nesting in a parsed document is bounded by the JSON parser's own
//! nesting limit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::trail::{Trail, TrailStore};
use super::types::Mountain;

/// Kind identifier for trail documents.
pub const DOCUMENT_KIND: &str = "trailwalk.trail";

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read trail file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse trail document: {0}")]
    ParseError(String),

    #[error("invalid kind '{found}', expected '{}'", DOCUMENT_KIND)]
    InvalidKind { found: String },

    #[error("unsupported schema version {0}, supported: {SCHEMA_VERSION}")]
    UnsupportedVersion(u32),
}

/// Minimal envelope for checking kind and version before a full parse.
#[derive(Deserialize)]
struct DocumentEnvelope {
    kind: String,
    schema_version: u32,
}

/// One element of a segment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Segment {
    Mountain(Mountain),
    Split(SplitSegment),
}

/// The two branches of a split. Both rejoin at the next segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitSegment {
    pub top: Vec<Segment>,
    pub bottom: Vec<Segment>,
}

/// A trail document (v1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrailDocument {
    /// Kind identifier (always "trailwalk.trail")
    pub kind: String,

    /// Schema version (always 1 for this struct)
    pub schema_version: u32,

    /// The trail, as a segment list
    pub trail: Vec<Segment>,
}

impl TrailDocument {
    /// Wrap a segment list in a current-version document.
    pub fn new(trail: Vec<Segment>) -> Self {
        Self {
            kind: DOCUMENT_KIND.to_string(),
            schema_version: SCHEMA_VERSION,
            trail,
        }
    }

    /// Parse a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the kind or version is
    /// wrong, any field is unknown, or a mountain name is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use trailwalk::core::document::TrailDocument;
    ///
    /// let json = r#"{
    ///     "kind": "trailwalk.trail",
    ///     "schema_version": 1,
    ///     "trail": [{"mountain": {"name": "a", "difficulty_level": 1, "length": 2}}]
    /// }"#;
    ///
    /// let doc = TrailDocument::parse(json).unwrap();
    /// assert_eq!(doc.to_trail().collect_all_mountains().len(), 1);
    /// ```
    pub fn parse(json: &str) -> Result<Self, DocumentError> {
        let envelope: DocumentEnvelope =
            serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))?;

        if envelope.kind != DOCUMENT_KIND {
            return Err(DocumentError::InvalidKind {
                found: envelope.kind,
            });
        }

        match envelope.schema_version {
            1 => serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string())),
            v => Err(DocumentError::UnsupportedVersion(v)),
        }
    }

    /// Read and parse a document file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let contents = fs::read_to_string(path).map_err(|e| DocumentError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&contents)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // Plain data with string keys cannot fail to serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Build the trail this document describes.
    pub fn to_trail(&self) -> Trail {
        build_trail(&self.trail, Trail::empty())
    }

    /// Describe an existing trail as a document.
    ///
    /// The conversion uses an explicit stack of open splits, so trails
    /// built in code may nest arbitrarily deep.
    pub fn from_trail(trail: &Trail) -> Self {
        Self::new(segments_of(trail))
    }
}

fn build_trail(segments: &[Segment], follow: Trail) -> Trail {
    segments.iter().rev().fold(follow, |rest, segment| match segment {
        Segment::Mountain(mountain) => Trail::series(mountain.clone(), rest),
        Segment::Split(split) => Trail::split(
            build_trail(&split.top, Trail::empty()),
            build_trail(&split.bottom, Trail::empty()),
            rest,
        ),
    })
}

/// A split whose branches are still being converted.
struct OpenSplit<'a> {
    /// Segments before the split in the enclosing list.
    enclosing: Vec<Segment>,
    /// Finished top branch, once the walker has moved to the bottom.
    top: Option<Vec<Segment>>,
    bottom: &'a Trail,
    follow: &'a Trail,
}

fn segments_of(trail: &Trail) -> Vec<Segment> {
    let mut open: Vec<OpenSplit<'_>> = Vec::new();
    let mut current = Vec::new();
    let mut cursor = trail;

    loop {
        match cursor.store() {
            TrailStore::Series(series) => {
                current.push(Segment::Mountain(series.mountain.clone()));
                cursor = &series.following;
            }
            TrailStore::Split(split) => {
                open.push(OpenSplit {
                    enclosing: std::mem::take(&mut current),
                    top: None,
                    bottom: &split.path_bottom,
                    follow: &split.path_follow,
                });
                cursor = &split.path_top;
            }
            TrailStore::Empty => {
                let Some(innermost) = open.last_mut() else {
                    break;
                };
                if innermost.top.is_none() {
                    innermost.top = Some(std::mem::take(&mut current));
                    cursor = innermost.bottom;
                } else if let Some(done) = open.pop() {
                    let bottom = std::mem::replace(&mut current, done.enclosing);
                    current.push(Segment::Split(SplitSegment {
                        top: done.top.unwrap_or_default(),
                        bottom,
                    }));
                    cursor = done.follow;
                }
            }
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enumerate::collect_all_mountains;

    fn m(name: &str) -> Mountain {
        Mountain::new(name, 1, 1).unwrap()
    }

    fn single(name: &str) -> Trail {
        Trail::series(m(name), Trail::empty())
    }

    #[test]
    fn parse_full_document() {
        let json = r#"{
            "kind": "trailwalk.trail",
            "schema_version": 1,
            "trail": [
                {"mountain": {"name": "a", "difficulty_level": 2, "length": 3}},
                {"split": {
                    "top": [{"mountain": {"name": "b", "difficulty_level": 5, "length": 1}}],
                    "bottom": []
                }},
                {"mountain": {"name": "c", "difficulty_level": 1, "length": 4}}
            ]
        }"#;

        let doc = TrailDocument::parse(json).unwrap();
        let trail = doc.to_trail();

        let names: Vec<_> = collect_all_mountains(&trail)
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "c"]);
    }

    #[test]
    fn missing_branch_defaults_to_empty() {
        let json = r#"{
            "kind": "trailwalk.trail",
            "schema_version": 1,
            "trail": [{"split": {"top": [{"mountain": {"name": "x", "difficulty_level": 1, "length": 1}}]}}]
        }"#;

        let trail = TrailDocument::parse(json).unwrap().to_trail();
        assert_eq!(trail, Trail::split(single("x"), Trail::empty(), Trail::empty()));
    }

    #[test]
    fn wrong_kind_rejected() {
        let json = r#"{"kind": "other", "schema_version": 1, "trail": []}"#;
        assert!(matches!(
            TrailDocument::parse(json),
            Err(DocumentError::InvalidKind { .. })
        ));
    }

    #[test]
    fn future_version_rejected() {
        let json = r#"{"kind": "trailwalk.trail", "schema_version": 2, "trail": []}"#;
        assert!(matches!(
            TrailDocument::parse(json),
            Err(DocumentError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn unknown_fields_rejected() {
        let json = r#"{"kind": "trailwalk.trail", "schema_version": 1, "trail": [], "extra": 1}"#;
        assert!(matches!(
            TrailDocument::parse(json),
            Err(DocumentError::ParseError(_))
        ));

        let bad_mountain = r#"{"kind": "trailwalk.trail", "schema_version": 1, "trail": [
            {"mountain": {"name": "a", "difficulty_level": 1, "length": 1, "height": 9}}
        ]}"#;
        assert!(TrailDocument::parse(bad_mountain).is_err());
    }

    #[test]
    fn invalid_mountain_name_rejected() {
        let json = r#"{"kind": "trailwalk.trail", "schema_version": 1, "trail": [
            {"mountain": {"name": "", "difficulty_level": 1, "length": 1}}
        ]}"#;
        assert!(TrailDocument::parse(json).is_err());
    }

    #[test]
    fn from_trail_flattens_follow_paths() {
        let inner = Trail::split(single("a"), single("b"), single("c"));
        let trail = Trail::split(inner, single("d"), single("e"));

        let doc = TrailDocument::from_trail(&trail);

        let expected = vec![
            Segment::Split(SplitSegment {
                top: vec![
                    Segment::Split(SplitSegment {
                        top: vec![Segment::Mountain(m("a"))],
                        bottom: vec![Segment::Mountain(m("b"))],
                    }),
                    Segment::Mountain(m("c")),
                ],
                bottom: vec![Segment::Mountain(m("d"))],
            }),
            Segment::Mountain(m("e")),
        ];
        assert_eq!(doc.trail, expected);
        assert_eq!(doc.to_trail(), trail);
    }

    #[test]
    fn json_round_trip() {
        let trail = Trail::series(
            m("a"),
            Trail::split(single("b"), Trail::empty(), single("c")),
        );
        let doc = TrailDocument::from_trail(&trail);

        let parsed = TrailDocument::parse(&doc.to_json_pretty()).unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(parsed.to_trail(), trail);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = TrailDocument::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DocumentError::ReadError { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
