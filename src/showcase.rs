//! Showcase data shared between the server and the hydrated client.
//!
//! The types here cross the server function boundary, so they stay free of
//! any server-only dependency. Loading lives in [`crate::feed`].

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// A single repository rendered as a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseItem {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    /// Primary source link.
    pub url: String,
    /// Live demo link, if the repository has one.
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub topics: Vec<String>,
    /// ISO 8601, display only.
    pub updated_at: String,
}

/// Result of one load: live items, or the fixed fallback set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseFeed {
    pub items: Vec<ShowcaseItem>,
    pub used_fallback: bool,
}

impl ShowcaseFeed {
    pub fn live(items: Vec<ShowcaseItem>) -> Self {
        Self {
            items,
            used_fallback: false,
        }
    }

    pub fn fallback() -> Self {
        Self {
            items: fallback_items(),
            used_fallback: true,
        }
    }
}

/// Sample projects shown when the listing endpoint can't be reached or parsed.
pub fn fallback_items() -> Vec<ShowcaseItem> {
    vec![
        sample(
            1,
            "E-Commerce Platform",
            "Full-stack e-commerce solution with React, Node.js, and Stripe integration",
            "https://demo.com",
            "TypeScript",
            (24, 8),
            &["react", "nodejs", "stripe", "mongodb"],
            "2024-01-15T10:00:00Z",
        ),
        sample(
            2,
            "Task Management App",
            "Collaborative task management with real-time updates and team features",
            "https://taskapp.com",
            "JavaScript",
            (18, 5),
            &["react", "socket.io", "postgresql"],
            "2024-01-10T14:30:00Z",
        ),
        sample(
            3,
            "Weather Dashboard",
            "Beautiful weather application with location-based forecasts and charts",
            "https://weather.com",
            "React",
            (12, 3),
            &["react", "api", "charts", "weather"],
            "2024-01-05T09:15:00Z",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u64,
    name: &str,
    description: &str,
    homepage: &str,
    language: &str,
    (stars, forks): (u32, u32),
    topics: &[&str],
    updated_at: &str,
) -> ShowcaseItem {
    ShowcaseItem {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        url: "https://github.com".to_string(),
        homepage: Some(homepage.to_string()),
        language: Some(language.to_string()),
        stars,
        forks,
        topics: topics.iter().map(ToString::to_string).collect(),
        updated_at: updated_at.to_string(),
    }
}

/// Loads the configured showcase. Never reports a listing failure as an
/// error; those come back as the fallback feed.
#[server]
pub async fn get_showcase() -> Result<ShowcaseFeed, ServerFnError> {
    let loader = use_context::<crate::feed::ShowcaseLoader>()
        .ok_or_else(|| ServerFnError::new("showcase loader missing from context"))?;

    Ok(loader.load().await)
}
