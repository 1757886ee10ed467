//! Free-text search input.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{SEARCH_INPUT_ID, SEARCH_PLACEHOLDER};

/// Properties for SearchBar component.
#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Receives the raw input value on every keystroke.
    pub on_search: Callback<String>,
}

/// Search input component.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            on_search.emit(input.value());
        })
    };

    html! {
        <input
            id={SEARCH_INPUT_ID}
            type="search"
            class="filters__search"
            placeholder={SEARCH_PLACEHOLDER}
            oninput={oninput}
        />
    }
}
