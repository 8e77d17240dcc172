use serde::{Deserialize, Serialize};

/// Builds the identifier a checksheet is stored under (e.g., "CS-2022")
pub fn checksheet_id(major: &str, year: u16) -> String {
    format!("{}-{year}", major.trim().to_uppercase())
}

/// A course line on a checksheet semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEntry {
    pub course_id: String,
    pub name: String,
    pub credits: u32,
    /// Whether the line is an elective slot rather than a fixed course
    #[serde(default)]
    pub elective: bool,
}

/// One semester of the default plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterTemplate {
    /// 1-based semester number
    pub number: u32,
    pub total_credits: u32,
    pub courses: Vec<TemplateEntry>,
}

/// A checksheet course that counts toward a pathway category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayCourse {
    pub course_id: String,
    pub name: String,
    pub category: String,
}

/// The default semester-by-semester plan for a major and catalog year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecksheetTemplate {
    /// Major abbreviation (e.g., "CS")
    pub major: String,
    /// Full major name (e.g., "Computer Science")
    pub major_name: String,
    pub year: u16,
    pub school: String,
    /// Credits required to graduate
    pub total_credits: u32,
    pub semesters: Vec<SemesterTemplate>,
    /// Identifiers of checksheet courses that count toward a pathway
    #[serde(default)]
    pub pathway_ids: Vec<String>,
    #[serde(default)]
    pub pathways: Vec<PathwayCourse>,
}

impl ChecksheetTemplate {
    pub fn id(&self) -> String {
        checksheet_id(&self.major, self.year)
    }

    pub fn major(&self) -> Major {
        Major {
            code: self.major.clone(),
            name: self.major_name.clone(),
            school: self.school.clone(),
        }
    }
}

/// A supported major, taken from the checksheets offered for it
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
    pub code: String,
    pub name: String,
    pub school: String,
}
