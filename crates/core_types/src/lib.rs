//! Core types for the folio portfolio.
//!
//! This crate defines the project record, the visitor's filter state and
//! the pure filter engine shared by the frontend and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier
    pub id: u32,
    /// Card title
    pub title: String,
    /// Short description shown on the card
    pub description: String,
    /// Image path; `None` or empty renders the placeholder glyph
    #[serde(default)]
    pub image: Option<String>,
    /// Tags in display order
    pub tags: Vec<String>,
    /// Live demo URL
    pub demo_url: String,
    /// Source repository URL
    pub repo_url: String,
}

impl Project {
    /// Create a new project without an image.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        demo_url: impl Into<String>,
        repo_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            demo_url: demo_url.into(),
            repo_url: repo_url.into(),
        }
    }

    /// Set the image path.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The image path, if the project has a non-empty one.
    pub fn image_path(&self) -> Option<&str> {
        self.image.as_deref().filter(|path| !path.is_empty())
    }
}

/// Lowercase and trim text for case-insensitive comparison.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// A change to the filter state caused by a visitor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The search input changed to this raw value.
    Search(String),
    /// A tag button was clicked.
    ToggleTag(String),
    /// The remove button on an active-filter chip was clicked.
    RemoveFilter(String),
}

impl Transition {
    /// Whether the page should scroll to the project list after this transition.
    pub fn scrolls_to_projects(&self) -> bool {
        matches!(self, Transition::ToggleTag(_) | Transition::RemoveFilter(_))
    }
}

/// The visitor's current search query and active tag filters.
///
/// Values are immutable: every transition returns a new state. The query is
/// always stored normalized, so construct states through [`FilterState::apply`]
/// or the `with_*` helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    active_filters: BTreeSet<String>,
}

impl FilterState {
    /// State with no query and no active filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// The normalized search query; empty means no search filter.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active tag filters in ascending order.
    pub fn active_filters(&self) -> impl Iterator<Item = &str> {
        self.active_filters.iter().map(String::as_str)
    }

    /// Whether `tag` is exactly one of the active filters.
    pub fn is_active(&self, tag: &str) -> bool {
        self.active_filters.contains(tag)
    }

    /// Whether neither a query nor a tag filter is in effect.
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.active_filters.is_empty()
    }

    /// Apply a transition. Every transition is accepted.
    pub fn apply(&self, transition: Transition) -> Self {
        match transition {
            Transition::Search(raw) => self.with_query(&raw),
            Transition::ToggleTag(tag) => self.with_tag_toggled(&tag),
            Transition::RemoveFilter(tag) => self.without_filter(&tag),
        }
    }

    /// Replace the query with the normalized form of `raw`.
    pub fn with_query(&self, raw: &str) -> Self {
        Self {
            query: normalize_text(raw),
            active_filters: self.active_filters.clone(),
        }
    }

    /// Add `tag` to the active filters, or remove it if already active.
    pub fn with_tag_toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if tag.is_empty() {
            return next;
        }
        if !next.active_filters.remove(tag) {
            next.active_filters.insert(tag.to_string());
        }
        next
    }

    /// Add `tag` to the active filters, keeping it if already active.
    pub fn with_filter(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if !tag.is_empty() {
            next.active_filters.insert(tag.to_string());
        }
        next
    }

    /// Remove `tag` from the active filters; a no-op if it is not active.
    pub fn without_filter(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.active_filters.remove(tag);
        next
    }

    /// Query is empty or found in the title, description or any tag.
    pub fn matches_search(&self, project: &Project) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.as_str();
        normalize_text(&project.title).contains(query)
            || normalize_text(&project.description).contains(query)
            || project
                .tags
                .iter()
                .any(|tag| normalize_text(tag).contains(query))
    }

    /// Every active filter names one of the project's tags.
    ///
    /// Multiple filters combine with AND: a project must carry all of them.
    pub fn matches_tags(&self, project: &Project) -> bool {
        self.active_filters.iter().all(|filter| {
            let filter = normalize_text(filter);
            project.tags.iter().any(|tag| normalize_text(tag) == filter)
        })
    }

    /// Both predicates hold for `project`.
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_search(project) && self.matches_tags(project)
    }
}

/// Projects matching `state`, in their original order.
pub fn filter_projects<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    projects.iter().filter(|p| state.matches(p)).collect()
}

/// Every distinct tag across `projects`, sorted ascending.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new(
                1,
                "Recipe Page",
                "Semantic HTML practice",
                &["HTML5", "SCSS"],
                "https://demo/1",
                "https://repo/1",
            ),
            Project::new(
                2,
                "Weather App",
                "Fetches a forecast",
                &["TypeScript", "SCSS"],
                "https://demo/2",
                "https://repo/2",
            ),
            Project::new(
                3,
                "Todo List",
                "Keeps track of chores",
                &["TypeScript"],
                "https://demo/3",
                "https://repo/3",
            ),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Recipe PAGE \n"), "recipe page");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_empty_state_returns_everything() {
        let projects = sample();
        let state = FilterState::new();

        assert!(state.is_unfiltered());
        assert_eq!(ids(&filter_projects(&projects, &state)), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let projects = sample();
        let upper = FilterState::new().with_query("RECIPE");
        let lower = FilterState::new().with_query("recipe");

        assert_eq!(upper, lower);
        assert_eq!(ids(&filter_projects(&projects, &upper)), vec![1]);
    }

    #[test]
    fn test_search_matches_description_and_tags() {
        let projects = sample();

        let by_description = FilterState::new().with_query("chores");
        assert_eq!(ids(&filter_projects(&projects, &by_description)), vec![3]);

        // Substring of a tag, not a whole tag
        let by_tag = FilterState::new().with_query("script");
        assert_eq!(ids(&filter_projects(&projects, &by_tag)), vec![2, 3]);
    }

    #[test]
    fn test_whitespace_only_query_is_no_filter() {
        let projects = sample();
        let state = FilterState::new().with_query("   ");

        assert_eq!(state.query(), "");
        assert_eq!(filter_projects(&projects, &state).len(), 3);
    }

    #[test]
    fn test_tag_filters_use_and_semantics() {
        let projects = sample();
        let state = FilterState::new()
            .with_tag_toggled("TypeScript")
            .with_tag_toggled("SCSS");

        assert_eq!(ids(&filter_projects(&projects, &state)), vec![2]);
    }

    #[test]
    fn test_tag_filter_is_case_insensitive() {
        let projects = sample();
        let state = FilterState::new().with_tag_toggled("scss");

        assert_eq!(ids(&filter_projects(&projects, &state)), vec![1, 2]);
        // Active marking is exact
        assert!(state.is_active("scss"));
        assert!(!state.is_active("SCSS"));
    }

    #[test]
    fn test_unknown_tag_returns_nothing() {
        let projects = sample();
        let state = FilterState::new().with_tag_toggled("Rust");

        assert!(filter_projects(&projects, &state).is_empty());
    }

    #[test]
    fn test_search_and_tags_combine() {
        let projects = sample();
        let state = FilterState::new()
            .with_tag_toggled("TypeScript")
            .with_query("todo");

        assert_eq!(ids(&filter_projects(&projects, &state)), vec![3]);
    }

    #[test]
    fn test_toggle_on_then_off_restores_state() {
        let before = FilterState::new().with_query("app").with_tag_toggled("SCSS");
        let after = before
            .with_tag_toggled("TypeScript")
            .with_tag_toggled("TypeScript");

        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_empty_tag_is_noop() {
        let state = FilterState::new().with_tag_toggled("");
        assert!(state.is_unfiltered());
    }

    #[test]
    fn test_with_filter_is_idempotent() {
        let once = FilterState::new().with_filter("Rust");
        let twice = once.with_filter("Rust");

        assert_eq!(once, twice);
        assert!(twice.is_active("Rust"));
        assert!(FilterState::new().with_filter("").is_unfiltered());
    }

    #[test]
    fn test_remove_filter() {
        let state = FilterState::new()
            .with_tag_toggled("SCSS")
            .with_tag_toggled("HTML5");

        let removed = state.without_filter("SCSS");
        assert_eq!(removed.active_filters().collect::<Vec<_>>(), vec!["HTML5"]);

        // Removing an inactive tag changes nothing
        assert_eq!(removed.without_filter("Rust"), removed);
    }

    #[test]
    fn test_apply_transitions() {
        let state = FilterState::new()
            .apply(Transition::Search("  Weather ".to_string()))
            .apply(Transition::ToggleTag("SCSS".to_string()))
            .apply(Transition::ToggleTag("HTML5".to_string()))
            .apply(Transition::RemoveFilter("HTML5".to_string()));

        assert_eq!(state.query(), "weather");
        assert_eq!(state.active_filters().collect::<Vec<_>>(), vec!["SCSS"]);
    }

    #[test]
    fn test_transition_scroll_behavior() {
        assert!(!Transition::Search("x".to_string()).scrolls_to_projects());
        assert!(Transition::ToggleTag("x".to_string()).scrolls_to_projects());
        assert!(Transition::RemoveFilter("x".to_string()).scrolls_to_projects());
    }

    #[test]
    fn test_filter_preserves_order() {
        let projects = sample();
        let state = FilterState::new().with_query("e");
        let filtered = filter_projects(&projects, &state);

        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| projects.iter().position(|p| p.id == f.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_all_tags_sorted_and_distinct() {
        let tags = all_tags(&sample());
        assert_eq!(tags, vec!["HTML5", "SCSS", "TypeScript"]);
    }

    #[test]
    fn test_image_path() {
        let project = sample().remove(0);
        assert_eq!(project.image_path(), None);

        let with_image = project.clone().with_image("/images/a.webp");
        assert_eq!(with_image.image_path(), Some("/images/a.webp"));

        let empty = project.with_image("");
        assert_eq!(empty.image_path(), None);
    }

    #[test]
    fn test_project_json_uses_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "T",
            "description": "D",
            "tags": ["A"],
            "demoUrl": "https://demo",
            "repoUrl": "https://repo"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.image, None);
        assert_eq!(project.demo_url, "https://demo");

        let out = serde_json::to_string(&project).unwrap();
        assert!(out.contains("\"repoUrl\""));
    }
}
