use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published blog article, `GET /blog` and `GET /blog/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    /// Numeric identifier used in `#/blog/detail?id=<n>` links.
    pub id: u64,

    /// Article title.
    pub title: String,

    /// Author display name.
    pub author: String,

    /// Publication timestamp.
    pub published_at: DateTime<Utc>,

    /// Rendered article body.
    pub body: String,
}

/// An internship listing, `GET /internships`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Internship {
    /// Unique identifier for the listing.
    pub id: uuid::Uuid,

    /// Position title.
    pub title: String,

    /// Hiring company name.
    pub company: String,

    /// City or "Remote".
    pub location: String,

    /// Monthly stipend in whole rupees.
    pub stipend_inr: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn blog_post_roundtrip() {
        let post = BlogPost {
            id: 42,
            title: "Cracking campus placements".to_string(),
            author: "CampusBridge Team".to_string(),
            published_at: Utc::now(),
            body: "Start early.".to_string(),
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: BlogPost = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn internship_roundtrip() {
        let listing = Internship {
            id: Uuid::new_v4(),
            title: "Backend Intern".to_string(),
            company: "Acme Devtools".to_string(),
            location: "Remote".to_string(),
            stipend_inr: 25_000,
        };
        let json = serde_json::to_string(&listing).unwrap();
        let back: Internship = serde_json::from_str(&json).unwrap();
        assert_eq!(back, listing);
    }
}
