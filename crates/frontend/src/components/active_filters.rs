//! Removable chips for the active tag filters.

use view_model::REMOVE_GLYPH;
use yew::prelude::*;

use crate::config::ACTIVE_FILTERS_ID;

/// Properties for ActiveFilters component.
#[derive(Properties, PartialEq)]
pub struct ActiveFiltersProps {
    pub filters: Vec<String>,
    /// Receives the tag whose remove button was clicked.
    pub on_remove: Callback<String>,
}

/// Active filter chips component.
#[function_component(ActiveFilters)]
pub fn active_filters(props: &ActiveFiltersProps) -> Html {
    html! {
        <div id={ACTIVE_FILTERS_ID} class="filters__active">
            { for props.filters.iter().map(|filter| {
                let onclick = {
                    let on_remove = props.on_remove.clone();
                    let filter = filter.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(filter.clone()))
                };

                html! {
                    <div key={filter.clone()} class="filters__active-tag">
                        { filter }
                        <button
                            type="button"
                            class="filters__remove-btn"
                            data-filter={filter.clone()}
                            aria-label={format!("Remove {filter} filter")}
                            onclick={onclick}
                        >
                            { REMOVE_GLYPH }
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
