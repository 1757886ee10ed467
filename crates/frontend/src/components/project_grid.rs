//! Project container and the "no results" placeholder.

use view_model::{NO_RESULTS_MESSAGE, ProjectListing};
use yew::prelude::*;

use super::ProjectCard;
use crate::config::{NO_RESULTS_ID, PROJECTS_CONTAINER_ID};

/// Properties for ProjectGrid component.
#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub listing: ProjectListing,
    /// Attached to the project container; target of the post-filter scroll.
    pub container_ref: NodeRef,
}

/// Cards grid, hidden in favour of the placeholder when nothing matches.
#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    let (container_style, placeholder_style) = if props.listing.is_empty() {
        ("display: none", "display: block")
    } else {
        ("display: grid", "display: none")
    };

    html! {
        <>
            <div
                id={PROJECTS_CONTAINER_ID}
                class="projects"
                style={container_style}
                ref={props.container_ref.clone()}
            >
                { for props.listing.cards().iter().map(|card| html! {
                    <ProjectCard key={card.id} card={card.clone()} />
                })}
            </div>
            <div id={NO_RESULTS_ID} class="no-results" style={placeholder_style}>
                <p>{ NO_RESULTS_MESSAGE }</p>
            </div>
        </>
    }
}
