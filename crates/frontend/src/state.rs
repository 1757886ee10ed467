//! Page state held by the app's reducer.

use core_types::{FilterState, Transition};
use std::rc::Rc;
use yew::Reducible;

/// Reducer state wrapping the current [`FilterState`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioState {
    filters: FilterState,
}

impl PortfolioState {
    /// The current search query and active tag filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }
}

impl Reducible for PortfolioState {
    type Action = Transition;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self {
            filters: self.filters.apply(action),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<Transition>) -> Rc<PortfolioState> {
        actions
            .into_iter()
            .fold(Rc::new(PortfolioState::default()), |state, action| {
                state.reduce(action)
            })
    }

    #[test]
    fn test_search_normalizes_query() {
        let state = reduce_all(vec![Transition::Search("  BLOG ".to_string())]);
        assert_eq!(state.filters().query(), "blog");
    }

    #[test]
    fn test_toggle_twice_returns_to_default() {
        let state = reduce_all(vec![
            Transition::ToggleTag("SCSS".to_string()),
            Transition::ToggleTag("SCSS".to_string()),
        ]);
        assert_eq!(*state, PortfolioState::default());
    }

    #[test]
    fn test_remove_filter_after_toggle() {
        let state = reduce_all(vec![
            Transition::ToggleTag("HTML5".to_string()),
            Transition::ToggleTag("SCSS".to_string()),
            Transition::RemoveFilter("HTML5".to_string()),
        ]);
        assert!(state.filters().is_active("SCSS"));
        assert!(!state.filters().is_active("HTML5"));
    }
}
