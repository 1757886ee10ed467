//! Project card component.

use view_model::{CardImage, DEMO_LABEL, ProjectCard as ProjectCardData, REPO_LABEL};
use yew::prelude::*;

/// Properties for ProjectCard component.
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub card: ProjectCardData,
}

/// A single project: image, title, tags, description and links.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let card = &props.card;

    let image = match &card.image {
        CardImage::Image { src, alt } => html! { <img src={src.clone()} alt={alt.clone()} /> },
        CardImage::Placeholder { glyph } => html! {
            <div class="project-card__image--placeholder">{ *glyph }</div>
        },
    };

    html! {
        <article class="project-card">
            <div class="project-card__image">
                { image }
            </div>
            <div class="project-card__content">
                <h2 class="project-card__title">{ &card.title }</h2>
                <div class="project-card__tags">
                    { for card.tags.iter().map(|tag| html! {
                        <span class="project-card__tag">{ tag }</span>
                    })}
                </div>
                <p class="project-card__description">{ &card.description }</p>
                <div class="project-card__actions">
                    <a
                        href={card.demo_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-card__button project-card__button--primary"
                    >
                        { DEMO_LABEL }
                    </a>
                    <a
                        href={card.repo_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-card__button project-card__button--secondary"
                    >
                        { REPO_LABEL }
                    </a>
                </div>
            </div>
        </article>
    }
}
