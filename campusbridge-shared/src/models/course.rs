use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::EnumIter;

/// Catalog sections offered by the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    Certification,
    Placement,
    Workshop,
}

impl CourseCategory {
    /// Canonical string used in query strings and route paths.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Certification => "certification",
            Self::Placement => "placement",
            Self::Workshop => "workshop",
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseCategory {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "certification" => Ok(Self::Certification),
            "placement" => Ok(Self::Placement),
            "workshop" => Ok(Self::Workshop),
            _ => Err("unknown course category"),
        }
    }
}

/// A single catalog entry as returned by `GET /courses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique identifier for the course.
    pub id: uuid::Uuid,

    /// Course title shown on cards and the syllabus page.
    pub title: String,

    /// Catalog section this course belongs to.
    pub category: CourseCategory,

    /// Price in whole rupees; zero for free workshops.
    pub price_inr: u32,

    /// Nominal duration in weeks.
    pub duration_weeks: u8,

    /// One-paragraph summary.
    pub summary: String,
}

/// Server-side catalog filters, serialized into the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseFilter {
    /// Restrict to a single catalog section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CourseCategory>,

    /// Free-text search over title and summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Result of `POST /courses/:id/enroll`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrollResponse {
    /// Identifier of the created enrollment record.
    pub enrollment_id: uuid::Uuid,

    /// Course the user enrolled in.
    pub course_id: uuid::Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use uuid::Uuid;

    #[test]
    fn category_roundtrip() {
        for category in CourseCategory::iter() {
            let text = category.as_str();
            assert_eq!(CourseCategory::from_str(text).unwrap(), category);
            assert_eq!(category.to_string(), text);
        }
        assert!(CourseCategory::from_str("bootcamp").is_err());
    }

    #[test]
    fn course_serialization_roundtrip() {
        let course = Course {
            id: Uuid::new_v4(),
            title: "Embedded Systems Certification".to_string(),
            category: CourseCategory::Certification,
            price_inr: 14_999,
            duration_weeks: 12,
            summary: "Twelve weeks of hands-on firmware work.".to_string(),
        };

        let serialized = serde_json::to_string(&course).unwrap();
        let deserialized: Course = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, course);
    }

    #[test]
    fn filter_skips_unset_fields() {
        let filter = CourseFilter {
            category: Some(CourseCategory::Workshop),
            search: None,
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("workshop"));
        assert!(!json.contains("search"));

        let empty = serde_json::to_string(&CourseFilter::default()).unwrap();
        assert_eq!(empty, "{}");
    }
}
