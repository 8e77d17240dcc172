use crate::requisite::Requisites;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// Marker carried by pathway placeholder identifiers (e.g. "Pathway 3")
pub const PATHWAY_MARKER: &str = "Pathway";
/// Marker carried by elective placeholder identifiers (e.g. "Free Elective")
pub const ELECTIVE_MARKER: &str = "Elective";

/// Whether an identifier denotes a pathway or elective placeholder rather
/// than a catalog course
pub fn is_placeholder_id(course_id: &str) -> bool {
    course_id.contains(PATHWAY_MARKER) || course_id.contains(ELECTIVE_MARKER)
}

/// Splits a course identifier such as "CS-2114" into its category and number
pub fn split_course_id(course_id: &str) -> (&str, &str) {
    course_id.split_once('-').unwrap_or((course_id, ""))
}

/// Type of instruction a course is delivered as
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumProperty, EnumIter,
)]
pub enum CourseType {
    #[strum(props(display = "Lecture", code = "L"))]
    Lecture,

    #[strum(props(display = "Lab", code = "B"))]
    Lab,

    #[strum(props(display = "Recitation", code = "C"))]
    Recitation,

    #[strum(props(display = "Research", code = "R"))]
    Research,

    #[strum(props(display = "Independent Study", code = "I"))]
    IndependentStudy,

    #[default]
    #[strum(props(display = "None", code = ""))]
    None,
}

impl FromStr for CourseType {
    type Err = ();

    /// Accepts either the single-letter timetable code or the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Ok(Self::iter()
            .find(|variant| {
                variant.get_str("code") == Some(s) || variant.get_str("display") == Some(s)
            })
            .unwrap_or_default())
    }
}

impl From<String> for CourseType {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or_default()
    }
}

impl Display for CourseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.get_str("display").unwrap_or_default())
    }
}

/// A catalog course. Reference data: created when the catalog is loaded and
/// only looked up afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier (e.g., "CS-2114")
    pub id: String,
    pub name: String,
    pub course_type: CourseType,
    pub credits: u32,
    #[serde(default)]
    pub prerequisites: Requisites,
    #[serde(default)]
    pub corequisites: Requisites,
    /// Pathway categories this course counts toward (e.g., "5f")
    #[serde(default)]
    pub pathways: Vec<String>,
    #[serde(default)]
    pub has_lab: bool,
    /// Minimum grade required by the checksheet, when one is listed
    #[serde(default)]
    pub min_grade: Option<String>,
}

impl Course {
    pub fn category(&self) -> &str {
        split_course_id(&self.id).0
    }

    pub fn number(&self) -> &str {
        split_course_id(&self.id).1
    }

    /// Whether this course counts toward the given pathway category
    pub fn satisfies_pathway(&self, category: &str) -> bool {
        self.pathways.iter().any(|p| p == category)
    }

    /// Whether either requisite list names `course_id`
    pub fn depends_on(&self, course_id: &str) -> bool {
        self.prerequisites.references(course_id) || self.corequisites.references(course_id)
    }
}
