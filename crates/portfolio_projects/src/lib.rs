//! Project fixture for the folio portfolio.
//!
//! This crate ships the builtin list of portfolio projects and loads
//! alternative lists from JSON.

use core_types::Project;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors from project loading.
#[derive(Error, Debug)]
pub enum ProjectsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate project id: {0}")]
    DuplicateId(u32),

    #[error("project {0} has an empty title")]
    EmptyTitle(u32),
}

/// Result type for project operations.
pub type Result<T> = std::result::Result<T, ProjectsError>;

/// Load the builtin projects.
pub fn load_builtin_projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "Recipe Page",
            "This challenge will help you focus on writing semantic HTML. Ensure you think \
             through what HTML elements are most appropriate for each piece of content.",
            &["HTML5", "SCSS"],
            "https://recipe-page-silk-omega.vercel.app/",
            "https://github.com/edwinflz/recipe-page",
        )
        .with_image("/images/recipe-page.webp"),
        Project::new(
            2,
            "Social Links Profile",
            "In this small project, you'll build out your social link-sharing profile. You can \
             even personalize it and use it to share all your social profiles!",
            &["HTML5", "SCSS"],
            "https://social-links-profile-three-tau.vercel.app/",
            "https://github.com/edwinflz/social-links-profile",
        )
        .with_image("/images/social-links-profile.webp"),
        Project::new(
            3,
            "Blog Preview Card",
            "This HTML & CSS-only challenge is a perfect project for beginners getting up to \
             speed with HTML and CSS fundamentals, like HTML structure and the box model.",
            &["HTML5", "SCSS"],
            "https://blog-preview-card-bay-alpha.vercel.app/",
            "https://github.com/edwinflz/blog-preview-card",
        )
        .with_image("/images/blog-preview-card.webp"),
    ]
}

/// Check ids are unique and titles non-empty.
pub fn validate_projects(projects: &[Project]) -> Result<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id) {
            return Err(ProjectsError::DuplicateId(project.id));
        }
        if project.title.trim().is_empty() {
            return Err(ProjectsError::EmptyTitle(project.id));
        }
    }
    Ok(())
}

/// Load projects from a JSON string.
pub fn load_projects_from_json(json: &str) -> Result<Vec<Project>> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    validate_projects(&projects)?;
    Ok(projects)
}

/// Load projects from a JSON file.
pub fn load_projects_from_file(path: &Path) -> Result<Vec<Project>> {
    let content = std::fs::read_to_string(path)?;
    let projects = load_projects_from_json(&content)?;
    tracing::debug!(path = %path.display(), count = projects.len(), "loaded project fixture");
    Ok(projects)
}

/// Get a project by ID.
pub fn get_project_by_id(projects: &[Project], id: u32) -> Option<&Project> {
    projects.iter().find(|p| p.id == id)
}
