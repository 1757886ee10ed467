//! View model for the folio portfolio page.
//!
//! [`PageView::build`] projects the project list and the current
//! [`FilterState`] into everything a renderer needs to paint the page:
//! tag buttons, active-filter chips, and either project cards or the
//! "no results" placeholder. Nothing here touches a DOM, so the whole
//! page can be checked in plain unit tests.

use core_types::{FilterState, Project, all_tags, filter_projects};
use serde::Serialize;

/// Glyph shown in place of a missing project image.
pub const PLACEHOLDER_GLYPH: &str = "📦";

/// Label of the link to the live demo.
pub const DEMO_LABEL: &str = "Live Demo";

/// Label of the link to the source repository.
pub const REPO_LABEL: &str = "View Code";

/// Glyph on the active-filter chip's remove button.
pub const REMOVE_GLYPH: &str = "×";

/// Shown instead of the cards when nothing matches.
pub const NO_RESULTS_MESSAGE: &str = "No projects found.";

/// A clickable tag toggle in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagButton {
    pub label: String,
    pub active: bool,
}

impl TagButton {
    /// CSS classes for the button.
    pub fn class(&self) -> &'static str {
        if self.active {
            "filters__tag filters__tag--active"
        } else {
            "filters__tag"
        }
    }
}

/// What fills the image slot of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardImage {
    Image { src: String, alt: String },
    Placeholder { glyph: &'static str },
}

/// One rendered project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: CardImage,
    pub tags: Vec<String>,
    pub demo_url: String,
    pub repo_url: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let image = match project.image_path() {
            Some(src) => CardImage::Image {
                src: src.to_string(),
                alt: project.title.clone(),
            },
            None => CardImage::Placeholder {
                glyph: PLACEHOLDER_GLYPH,
            },
        };

        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            image,
            tags: project.tags.clone(),
            demo_url: project.demo_url.clone(),
            repo_url: project.repo_url.clone(),
        }
    }
}

/// The project area: cards, or the empty-result placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum ProjectListing {
    Cards(Vec<ProjectCard>),
    NoResults,
}

impl ProjectListing {
    /// Build the listing for the projects matching `state`.
    pub fn build(projects: &[Project], state: &FilterState) -> Self {
        let cards: Vec<ProjectCard> = filter_projects(projects, state)
            .into_iter()
            .map(ProjectCard::from)
            .collect();

        if cards.is_empty() {
            ProjectListing::NoResults
        } else {
            ProjectListing::Cards(cards)
        }
    }

    /// Cards to render; empty for [`ProjectListing::NoResults`].
    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            ProjectListing::Cards(cards) => cards,
            ProjectListing::NoResults => &[],
        }
    }

    /// Whether the "no results" placeholder replaces the cards.
    pub fn is_empty(&self) -> bool {
        matches!(self, ProjectListing::NoResults)
    }
}

/// Everything needed to paint the page for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// One button per distinct tag, sorted ascending.
    pub tags: Vec<TagButton>,
    /// One removable chip per active filter.
    pub active_filters: Vec<String>,
    pub listing: ProjectListing,
}

impl PageView {
    /// Derive the page from the full project list and the current state.
    pub fn build(projects: &[Project], state: &FilterState) -> Self {
        Self {
            tags: tag_buttons(projects, state),
            active_filters: state.active_filters().map(str::to_string).collect(),
            listing: ProjectListing::build(projects, state),
        }
    }
}

/// Tag buttons for every distinct tag, marking the active ones.
pub fn tag_buttons(projects: &[Project], state: &FilterState) -> Vec<TagButton> {
    all_tags(projects)
        .into_iter()
        .map(|label| TagButton {
            active: state.is_active(&label),
            label,
        })
        .collect()
}
