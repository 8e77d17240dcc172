use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Separates requirement groups that must all be satisfied
pub const AND: char = '&';
/// Separates alternatives within a single requirement group
pub const OR: char = '|';

/// A set of alternative courses, any one of which satisfies the group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequisiteGroup(Vec<String>);

impl RequisiteGroup {
    pub fn new(alternatives: Vec<String>) -> Self {
        Self(alternatives)
    }

    pub fn alternatives(&self) -> &[String] {
        &self.0
    }

    /// Whether any alternative of this group appears in `satisfied`
    pub fn is_satisfied_by(&self, satisfied: &HashSet<&str>) -> bool {
        self.0.iter().any(|course| satisfied.contains(course.as_str()))
    }

    /// Whether `course_id` is one of the alternatives
    pub fn mentions(&self, course_id: &str) -> bool {
        self.0.iter().any(|course| course == course_id)
    }
}

impl Display for RequisiteGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.join(&OR.to_string()))
    }
}

/// A prerequisite or corequisite list: every group must be satisfied,
/// and a group is satisfied by any one of its alternatives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requisites(Vec<RequisiteGroup>);

impl Requisites {
    /// An empty list, which is vacuously satisfied
    pub fn none() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[RequisiteGroup] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Evaluate if every group is satisfied by the given courses
    pub fn evaluate(&self, satisfied: &HashSet<&str>) -> bool {
        self.0.iter().all(|group| group.is_satisfied_by(satisfied))
    }

    /// Returns the groups still outstanding once `satisfied` is taken into account.
    ///
    /// The receiver is left untouched so that a catalog record can be
    /// evaluated any number of times.
    pub fn without_satisfied(&self, satisfied: &HashSet<&str>) -> Self {
        Self(
            self.0
                .iter()
                .filter(|group| !group.is_satisfied_by(satisfied))
                .cloned()
                .collect(),
        )
    }

    /// Whether any group names `course_id` as an alternative
    pub fn references(&self, course_id: &str) -> bool {
        self.0.iter().any(|group| group.mentions(course_id))
    }
}

impl FromStr for Requisites {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = s
            .split(AND)
            .map(|group| {
                group
                    .split(OR)
                    .map(str::trim)
                    .filter(|course| !course.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|alternatives| !alternatives.is_empty())
            .map(RequisiteGroup)
            .collect();

        Ok(Self(groups))
    }
}

impl From<Vec<Vec<String>>> for Requisites {
    fn from(groups: Vec<Vec<String>>) -> Self {
        Self(groups.into_iter().map(RequisiteGroup).collect())
    }
}

impl Display for Requisites {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let groups: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", groups.join(&AND.to_string()))
    }
}

/// Parse a raw requisite string such as `"CS-2114|CS-2104&MATH-1225"`
pub fn parse_requisites(raw: &str) -> Requisites {
    raw.parse().unwrap_or_default()
}

// Requisites are stored in the same textual form they are loaded from
#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for Requisites {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => Ok(parse_requisites(&s)),
            Value::String(None) => Ok(Self::none()),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "Requisites".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<Requisites> for Value {
    fn from(requisites: Requisites) -> Self {
        Value::String(Some(Box::new(requisites.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for Requisites {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: Option<String> = res.try_get_by(index)?;

        Ok(val.as_deref().map(parse_requisites).unwrap_or_default())
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for Requisites {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<'a>(ids: &[&'a str]) -> HashSet<&'a str> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_basic_parsing() {
        let requisites = parse_requisites("CS-2114|CS-2104&MATH-1225");

        assert_eq!(
            requisites,
            Requisites::from(vec![
                vec!["CS-2114".to_string(), "CS-2104".to_string()],
                vec!["MATH-1225".to_string()],
            ])
        );
    }

    #[test]
    fn test_empty_is_vacuous() {
        let requisites = parse_requisites("");

        assert!(requisites.is_empty());
        assert!(requisites.evaluate(&HashSet::new()));
    }

    #[test]
    fn test_whitespace_and_stray_separators() {
        let requisites = parse_requisites(" CS-1114 & |MATH-1225| ");

        assert_eq!(requisites.len(), 2);
        assert_eq!(requisites.groups()[1].alternatives(), ["MATH-1225"]);
    }

    #[test]
    fn test_group_satisfaction() {
        let requisites = parse_requisites("CS-2114|CS-2104&MATH-1225");
        let satisfied = set(&["CS-2104"]);

        assert!(requisites.groups()[0].is_satisfied_by(&satisfied));
        assert!(!requisites.groups()[1].is_satisfied_by(&satisfied));
        assert!(!requisites.evaluate(&satisfied));
        assert!(requisites.evaluate(&set(&["CS-2114", "MATH-1225"])));
    }

    #[test]
    fn test_without_satisfied_leaves_original() {
        let requisites = parse_requisites("CS-2114|CS-2104&MATH-1225&MATH-1226");

        let remaining = requisites.without_satisfied(&set(&["CS-2104", "MATH-1226"]));

        assert_eq!(remaining, parse_requisites("MATH-1225"));
        assert_eq!(requisites.len(), 3);
    }

    #[test]
    fn test_adjacent_satisfied_groups_are_all_removed() {
        // Removing while iterating used to skip the group after a removal
        let requisites = parse_requisites("A&B&C");

        let remaining = requisites.without_satisfied(&set(&["A", "B"]));

        assert_eq!(remaining, parse_requisites("C"));
    }

    #[test]
    fn test_references() {
        let requisites = parse_requisites("CS-2114|CS-2104&MATH-1225");

        assert!(requisites.references("CS-2104"));
        assert!(!requisites.references("CS-1114"));
    }

    #[test]
    fn test_display_matches_source_format() {
        let raw = "CS-2114|CS-2104&MATH-1225";

        assert_eq!(parse_requisites(raw).to_string(), raw);
    }
}
