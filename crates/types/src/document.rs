use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

use crate::{PostingError, PostingRecord};

/// Source format of a posting document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Json,
  Yaml,
}

impl Format {
  /// `.json` files are JSON, everything else is read as YAML
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
      _ => Self::Yaml,
    }
  }
}

/// A document holds one posting or a list of them.
///
/// The top-level shape picks the variant, so errors inside a posting keep
/// their field name and position.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PostingDocument {
  Many(Vec<PostingRecord>),
  One(Box<PostingRecord>),
}

impl<'de> Deserialize<'de> for PostingDocument {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_any(DocumentVisitor)
  }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
  type Value = PostingDocument;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a posting or a list of postings")
  }

  fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
    let mut postings = Vec::with_capacity(seq.size_hint().unwrap_or(0));
    while let Some(posting) = seq.next_element::<PostingRecord>()? {
      postings.push(posting);
    }
    Ok(PostingDocument::Many(postings))
  }

  fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
    let posting = PostingRecord::deserialize(de::value::MapAccessDeserializer::new(map))?;
    Ok(PostingDocument::One(Box::new(posting)))
  }
}

impl PostingDocument {
  pub fn into_vec(self) -> Vec<PostingRecord> {
    match self {
      Self::Many(postings) => postings,
      Self::One(posting) => vec![*posting],
    }
  }
}

pub fn parse_postings(content: &str, format: Format) -> Result<Vec<PostingRecord>, PostingError> {
  let document: PostingDocument = match format {
    Format::Json => serde_json::from_str(content)?,
    Format::Yaml => serde_yaml::from_str(content)?,
  };
  Ok(document.into_vec())
}
