use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// Free text or an ordered list of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
  List(Vec<String>),
  Text(String),
}

impl TextOrList {
  pub fn is_empty(&self) -> bool {
    match self {
      Self::List(items) => items.is_empty(),
      Self::Text(text) => text.is_empty(),
    }
  }
}

impl From<&str> for TextOrList {
  fn from(text: &str) -> Self {
    Self::Text(text.to_string())
  }
}

impl From<Vec<String>> for TextOrList {
  fn from(items: Vec<String>) -> Self {
    Self::List(items)
  }
}

/// Qualifications are either one paragraph or grouped by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Qualifications {
  Text(String),
  Categories(IndexMap<String, TextOrList>),
}

impl Qualifications {
  pub fn is_empty(&self) -> bool {
    match self {
      Self::Text(text) => text.is_empty(),
      Self::Categories(categories) => categories.is_empty(),
    }
  }
}

/// A single team-structure value as written in the source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
  Flag(bool),
  Integer(i64),
  Float(f64),
  Text(String),
}

impl std::fmt::Display for ScalarValue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Flag(b) => write!(f, "{}", b),
      Self::Integer(n) => write!(f, "{}", n),
      Self::Float(n) => write!(f, "{}", n),
      Self::Text(s) => f.write_str(s),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamStructure {
  Text(String),
  Fields(IndexMap<String, ScalarValue>),
}

impl TeamStructure {
  pub fn is_empty(&self) -> bool {
    match self {
      Self::Text(text) => text.is_empty(),
      Self::Fields(fields) => fields.is_empty(),
    }
  }
}

/// Missing parts read as empty and are left out when rendered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
  #[serde(default)]
  pub deadline: String,
  #[serde(default)]
  pub instructions: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subject_line: Option<String>,
}

impl ApplicationInfo {
  pub fn is_empty(&self) -> bool {
    self.deadline.is_empty()
      && self.instructions.is_empty()
      && self.subject_line.as_ref().map_or(true, String::is_empty)
  }
}

/// Job posting as shown in the detail dialog.
///
/// Maps keep the key order of the source document, which is the order the
/// categories are rendered in. Optional fields of the wrong shape are dropped
/// with a warning rather than rejecting the posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingRecord {
  #[serde(rename = "jobTitle", alias = "title")]
  pub title: String,
  pub location: String,
  pub department: String,
  pub reports_to: String,
  pub compensation: String,
  #[serde(
    default,
    deserialize_with = "lenient::job_type",
    skip_serializing_if = "Option::is_none"
  )]
  pub job_type: Option<String>,
  pub role_overview: String,
  #[serde(rename = "keyResponsibilities", alias = "responsibilities")]
  pub responsibilities: IndexMap<String, Vec<String>>,
  #[serde(
    default,
    deserialize_with = "lenient::qualifications",
    skip_serializing_if = "Option::is_none"
  )]
  pub qualifications: Option<Qualifications>,
  #[serde(
    default,
    deserialize_with = "lenient::skills",
    skip_serializing_if = "Option::is_none"
  )]
  pub skills: Option<TextOrList>,
  #[serde(
    default,
    deserialize_with = "lenient::team_structure",
    skip_serializing_if = "Option::is_none"
  )]
  pub team_structure: Option<TeamStructure>,
  #[serde(
    default,
    deserialize_with = "lenient::benefits",
    skip_serializing_if = "Option::is_none"
  )]
  pub benefits: Option<TextOrList>,
  #[serde(
    default,
    deserialize_with = "lenient::application",
    skip_serializing_if = "Option::is_none"
  )]
  pub application: Option<ApplicationInfo>,
}

impl PostingRecord {
  /// Posting with only the required fields filled in
  pub fn new(
    title: impl Into<String>,
    location: impl Into<String>,
    department: impl Into<String>,
    reports_to: impl Into<String>,
    compensation: impl Into<String>,
    role_overview: impl Into<String>,
  ) -> Self {
    Self {
      title: title.into(),
      location: location.into(),
      department: department.into(),
      reports_to: reports_to.into(),
      compensation: compensation.into(),
      job_type: None,
      role_overview: role_overview.into(),
      responsibilities: IndexMap::new(),
      qualifications: None,
      skills: None,
      team_structure: None,
      benefits: None,
      application: None,
    }
  }

  pub fn with_responsibilities<I, S>(mut self, category: impl Into<String>, items: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .responsibilities
      .insert(category.into(), items.into_iter().map(Into::into).collect());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const MINIMAL: &str = r#"{
    "jobTitle": "Platform Engineer",
    "location": "Accra",
    "department": "Engineering",
    "reportsTo": "Head of Platform",
    "compensation": "GHS 4,000 / month",
    "roleOverview": "Keep the lights on.",
    "keyResponsibilities": {
      "operations": ["Run deploys", "Watch dashboards"],
      "teamLeadership": ["Mentor juniors"]
    }
  }"#;

  #[test]
  fn deserialize_required_fields_only() {
    let posting: PostingRecord = serde_json::from_str(MINIMAL).unwrap();
    assert_eq!(posting.title, "Platform Engineer");
    assert_eq!(posting.reports_to, "Head of Platform");
    assert!(posting.job_type.is_none());
    assert!(posting.qualifications.is_none());
    assert!(posting.skills.is_none());
    assert!(posting.team_structure.is_none());
    assert!(posting.benefits.is_none());
    assert!(posting.application.is_none());
  }

  #[test]
  fn responsibilities_keep_document_order() {
    let posting: PostingRecord = serde_json::from_str(MINIMAL).unwrap();
    let keys: Vec<&str> = posting.responsibilities.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["operations", "teamLeadership"]);
  }

  #[test]
  fn title_alias_is_accepted() {
    let json = MINIMAL.replace("jobTitle", "title");
    let posting: PostingRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(posting.title, "Platform Engineer");
  }

  #[test]
  fn qualifications_text_or_categories() {
    let text: Qualifications = serde_json::from_str(r#""Degree or equivalent""#).unwrap();
    assert_eq!(text, Qualifications::Text("Degree or equivalent".into()));

    let grouped: Qualifications = serde_json::from_str(
      r#"{"education": "BSc", "experience": ["3 years", "On-call"]}"#,
    )
    .unwrap();
    match grouped {
      Qualifications::Categories(map) => {
        assert_eq!(map["education"], TextOrList::Text("BSc".into()));
        assert_eq!(
          map["experience"],
          TextOrList::List(vec!["3 years".into(), "On-call".into()])
        );
      }
      other => panic!("expected categories, got {:?}", other),
    }
  }

  #[test]
  fn team_structure_scalars() {
    let team: TeamStructure =
      serde_json::from_str(r#"{"directReports": 3, "remote": true, "lead": "Ama"}"#).unwrap();
    match team {
      TeamStructure::Fields(fields) => {
        assert_eq!(fields["directReports"].to_string(), "3");
        assert_eq!(fields["remote"].to_string(), "true");
        assert_eq!(fields["lead"].to_string(), "Ama");
      }
      other => panic!("expected fields, got {:?}", other),
    }
  }

  fn with_field(field: &str, value: &str) -> PostingRecord {
    let json = format!("{}, \"{}\": {}}}", MINIMAL.trim_end().trim_end_matches('}'), field, value);
    serde_json::from_str(&json).unwrap()
  }

  #[test]
  fn malformed_optionals_are_dropped() {
    assert!(with_field("skills", "5").skills.is_none());
    assert!(with_field("skills", "[1, 2]").skills.is_none());
    assert!(with_field("benefits", r#"{"health": "yes"}"#).benefits.is_none());
    assert!(with_field("qualifications", r#"["BSc", "2 years"]"#).qualifications.is_none());
    assert!(with_field("teamStructure", "42").team_structure.is_none());
    assert!(with_field("application", r#""Email us""#).application.is_none());
    assert!(with_field("jobType", "[]").job_type.is_none());
  }

  #[test]
  fn team_structure_skips_non_scalar_entries() {
    let posting = with_field(
      "teamStructure",
      r#"{"lead": null, "members": ["a", "b"], "size": 4}"#,
    );
    match posting.team_structure {
      Some(TeamStructure::Fields(fields)) => {
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["size"], ScalarValue::Integer(4));
      }
      other => panic!("expected fields, got {:?}", other),
    }
  }

  #[test]
  fn qualifications_skip_malformed_categories() {
    let posting = with_field(
      "qualifications",
      r#"{"education": "BSc", "years": 3, "languages": ["Twi"]}"#,
    );
    match posting.qualifications {
      Some(Qualifications::Categories(map)) => {
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["education", "languages"]);
      }
      other => panic!("expected categories, got {:?}", other),
    }
  }

  #[test]
  fn partial_application_is_kept() {
    let application = with_field("application", r#"{"deadline": "Friday"}"#)
      .application
      .unwrap();
    assert_eq!(application.deadline, "Friday");
    assert!(application.instructions.is_empty());
    assert!(!application.is_empty());
    assert!(ApplicationInfo::default().is_empty());
  }

  #[test]
  fn null_optionals_are_absent() {
    assert!(with_field("skills", "null").skills.is_none());
  }

  #[test]
  fn empty_values_report_empty() {
    assert!(TextOrList::List(vec![]).is_empty());
    assert!(TextOrList::from("").is_empty());
    assert!(!TextOrList::from("Rust").is_empty());
    assert!(Qualifications::Categories(IndexMap::new()).is_empty());
    assert!(TeamStructure::Text(String::new()).is_empty());
  }

  #[test]
  fn serialize_skips_absent_optionals() {
    let posting = PostingRecord::new("T", "L", "D", "R", "C", "O")
      .with_responsibilities("general", ["One"]);
    let value = serde_json::to_value(&posting).unwrap();
    assert_eq!(value["jobTitle"], "T");
    assert!(value.get("skills").is_none());
    assert!(value.get("application").is_none());
    assert_eq!(value["keyResponsibilities"]["general"][0], "One");
  }
}
