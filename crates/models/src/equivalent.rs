use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Reference mapping of an AP exam score to the course it grants credit for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApEquivalent {
    pub id: u32,
    /// Exam abbreviation (e.g., "CSA")
    pub abbreviation: String,
    /// Exam name (e.g., "Computer Science A")
    pub name: String,
    /// Minimum qualifying score (e.g., "4", "4-5")
    pub score: String,
    /// Course credited for the exam
    pub course_id: String,
    pub course_name: String,
}

/// An AP equivalent applied to one student's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApEquivalentRecord {
    #[serde(flatten)]
    pub equivalent: ApEquivalent,
    /// Set once the record has consumed a course slot; never reset by another slot
    pub used: bool,
    /// Whether the consumed slot was a pathway slot
    pub pathway: bool,
}

impl ApEquivalentRecord {
    pub fn new(equivalent: ApEquivalent) -> Self {
        Self {
            equivalent,
            used: false,
            pathway: false,
        }
    }

    pub fn course_id(&self) -> &str {
        &self.equivalent.course_id
    }
}

/// Credit transferred from another institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCourse {
    pub course_id: String,
    pub name: String,
    pub credits: u32,
    pub used: bool,
    pub pathway: bool,
}

impl TransferCourse {
    pub fn new(course_id: String, name: String, credits: u32) -> Self {
        Self {
            course_id,
            name,
            credits,
            used: false,
            pathway: false,
        }
    }
}

/// Where the credit filling a slot comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditSource {
    #[serde(rename = "AP")]
    Ap,
    Transfer,
    Catalog,
}

impl FromStr for CreditSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ap" => Ok(Self::Ap),
            "transfer" => Ok(Self::Transfer),
            "catalog" | "course" => Ok(Self::Catalog),
            other => Err(format!("Unknown credit source: {other}")),
        }
    }
}

impl Display for CreditSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Ap => write!(f, "AP"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Catalog => write!(f, "Catalog"),
        }
    }
}

/// The placeholder a pathway or elective assignment replaced, kept so the
/// assignment can be undone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRef {
    pub slot_id: String,
    pub name: String,
    pub credits: u32,
    pub semester: u32,
    pub position: usize,
}

/// Progress toward a pathway category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayFulfillment {
    pub course_id: String,
    pub category: String,
    pub completed: bool,
    /// Present when the record was created by filling a pathway slot
    #[serde(default)]
    pub source: Option<CreditSource>,
    #[serde(default)]
    pub slot: Option<SlotRef>,
}

/// An elective slot filled with a concrete course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectiveFulfillment {
    pub course_id: String,
    pub source: CreditSource,
    pub slot: SlotRef,
}

/// A general-education category (e.g., "5f" → "Foundational Quantitative and
/// Computational Thinking")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayCategory {
    pub code: String,
    pub name: String,
}
