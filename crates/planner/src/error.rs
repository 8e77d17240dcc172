use models::{equivalent::CreditSource, plan::InvariantViolation};
use thiserror::Error;

/// How a failure should be reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input
    Validation,
    /// A user, course, checksheet, semester or slot does not exist
    NotFound,
    AlreadyExists,
    /// The plan changed underneath the request
    Conflict,
    Storage,
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User ({0}) doesn't exist")]
    UserNotFound(String),

    #[error("User ({0}) already has a checksheet")]
    UserAlreadyExists(String),

    #[error("Course {0} doesn't exist")]
    CourseNotFound(String),

    #[error("Checksheet for {major} {year} doesn't exist")]
    TemplateNotFound { major: String, year: u16 },

    #[error("Semester {0} doesn't exist in the checksheet")]
    SemesterNotFound(u32),

    #[error("Course {course_id} doesn't exist in semester {semester}")]
    CourseNotInSemester { course_id: String, semester: u32 },

    #[error("Slot {slot_id} doesn't exist in semester {semester}")]
    SlotNotFound { slot_id: String, semester: u32 },

    #[error("AP equivalent {0} doesn't exist")]
    UnknownEquivalent(u32),

    #[error("No unused {credit} credit for {course_id}")]
    NoMatchingEquivalent {
        course_id: String,
        credit: CreditSource,
    },

    #[error("Course {course_id} doesn't satisfy pathway {category}")]
    PathwayTypeMismatch { course_id: String, category: String },

    #[error("Course {0} is already used in the checksheet")]
    CourseAlreadyUsed(String),

    #[error("Checksheet for {0} was modified concurrently")]
    Conflict(String),

    #[error("Checksheet is inconsistent: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl PlanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::PathwayTypeMismatch { .. } | Self::CourseAlreadyUsed(_) => {
                ErrorKind::Validation
            }
            Self::UserNotFound(_)
            | Self::CourseNotFound(_)
            | Self::TemplateNotFound { .. }
            | Self::SemesterNotFound(_)
            | Self::CourseNotInSemester { .. }
            | Self::SlotNotFound { .. }
            | Self::UnknownEquivalent(_)
            | Self::NoMatchingEquivalent { .. } => ErrorKind::NotFound,
            Self::UserAlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Invariant(_) | Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Wraps any displayable backend error as a storage failure
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
