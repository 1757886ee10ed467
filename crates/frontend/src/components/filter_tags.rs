//! Tag toggle buttons.

use view_model::TagButton;
use yew::prelude::*;

use crate::config::FILTER_TAGS_ID;

/// Properties for FilterTags component.
#[derive(Properties, PartialEq)]
pub struct FilterTagsProps {
    pub tags: Vec<TagButton>,
    /// Receives the label of the clicked tag.
    pub on_toggle: Callback<String>,
}

/// Row of tag buttons, active ones highlighted.
#[function_component(FilterTags)]
pub fn filter_tags(props: &FilterTagsProps) -> Html {
    html! {
        <div id={FILTER_TAGS_ID} class="filters__tags">
            { for props.tags.iter().map(|tag| {
                let onclick = {
                    let on_toggle = props.on_toggle.clone();
                    let label = tag.label.clone();
                    Callback::from(move |_: MouseEvent| on_toggle.emit(label.clone()))
                };

                html! {
                    <button
                        key={tag.label.clone()}
                        type="button"
                        class={tag.class()}
                        data-tag={tag.label.clone()}
                        onclick={onclick}
                    >
                        { &tag.label }
                    </button>
                }
            })}
        </div>
    }
}
