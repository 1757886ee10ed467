//! Main application component.

use core_types::Transition;
use portfolio_projects::load_builtin_projects;
use view_model::PageView;
use yew::prelude::*;

use crate::components::{ActiveFilters, FilterTags, ProjectGrid, SearchBar};
use crate::config::FILTER_BAR_SCROLL_THRESHOLD_PX;
use crate::hooks::use_scrolled_past;
use crate::scroll::scroll_into_view_later;
use crate::state::PortfolioState;

/// Main application component.
///
/// Owns the filter state; every transition re-derives the whole page from
/// the full project list.
#[function_component(App)]
pub fn app() -> Html {
    let projects = use_memo((), |_| load_builtin_projects());
    let state = use_reducer(PortfolioState::default);
    let projects_ref = use_node_ref();
    let scrolled = use_scrolled_past(FILTER_BAR_SCROLL_THRESHOLD_PX);

    let dispatch = {
        let state = state.clone();
        let projects_ref = projects_ref.clone();
        Callback::from(move |transition: Transition| {
            let scroll = transition.scrolls_to_projects();
            state.dispatch(transition);
            if scroll {
                scroll_into_view_later(projects_ref.clone());
            }
        })
    };

    let view = PageView::build(&projects, state.filters());

    html! {
        <main class="portfolio">
            <section class={classes!("filters", scrolled.then_some("filters--scrolled"))}>
                <SearchBar on_search={dispatch.reform(Transition::Search)} />
                <FilterTags tags={view.tags} on_toggle={dispatch.reform(Transition::ToggleTag)} />
                <ActiveFilters
                    filters={view.active_filters}
                    on_remove={dispatch.reform(Transition::RemoveFilter)}
                />
            </section>
            <ProjectGrid listing={view.listing} container_ref={projects_ref} />
        </main>
    }
}
