//! View state for the project gallery: category filter, card hover and
//! expansion, and switching between the card grid and a single project.

use std::collections::HashSet;

use crate::catalog::{Catalog, CategoryFilter, ProjectRecord};

/// Descriptions longer than this (in characters) get a "See more" toggle.
pub const DESCRIPTION_CLAMP_THRESHOLD: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryMode {
    #[default]
    Listing,
    Detail(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionMode {
    /// Short enough that clamping hides nothing, so no toggle.
    Clamped,
    /// Long and clamped; offer "See more".
    Collapsed,
    /// Long and shown in full; offer "See less".
    Expanded,
}

impl DescriptionMode {
    pub fn is_clamped(self) -> bool {
        !matches!(self, DescriptionMode::Expanded)
    }

    pub fn toggle_label(self) -> Option<&'static str> {
        match self {
            DescriptionMode::Clamped => None,
            DescriptionMode::Collapsed => Some("See more"),
            DescriptionMode::Expanded => Some("See less"),
        }
    }
}

/// A project from the currently filtered set. Only `GalleryViewState` hands
/// these out, so `open_project` can't be called with a hidden project.
#[derive(Debug, Clone, Copy)]
pub struct VisibleProject<'a> {
    record: &'a ProjectRecord,
}

impl<'a> VisibleProject<'a> {
    pub fn record(&self) -> &'a ProjectRecord {
        self.record
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryViewState {
    active_category: CategoryFilter,
    mode: GalleryMode,
    hovered_card: Option<String>,
    expanded_cards: HashSet<String>,
}

impl GalleryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    pub fn mode(&self) -> &GalleryMode {
        &self.mode
    }

    pub fn show_details(&self) -> bool {
        matches!(self.mode, GalleryMode::Detail(_))
    }

    pub fn selected_project(&self) -> Option<&str> {
        match &self.mode {
            GalleryMode::Detail(title) => Some(title),
            GalleryMode::Listing => None,
        }
    }

    pub fn hovered_card(&self) -> Option<&str> {
        self.hovered_card.as_deref()
    }

    pub fn is_hovered(&self, title: &str) -> bool {
        self.hovered_card.as_deref() == Some(title)
    }

    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded_cards.contains(title)
    }

    pub fn expanded_cards(&self) -> &HashSet<String> {
        &self.expanded_cards
    }

    pub fn visible_projects<'a>(&self, catalog: &'a Catalog) -> Vec<VisibleProject<'a>> {
        catalog
            .filter_by_category(self.active_category)
            .into_iter()
            .map(|record| VisibleProject { record })
            .collect()
    }

    pub fn visible_project<'a>(
        &self,
        catalog: &'a Catalog,
        title: &str,
    ) -> Option<VisibleProject<'a>> {
        catalog
            .get(title)
            .filter(|p| self.active_category.matches(p.category))
            .map(|record| VisibleProject { record })
    }

    /// The project shown in the detail view, if any.
    pub fn selected_record<'a>(&self, catalog: &'a Catalog) -> Option<&'a ProjectRecord> {
        self.selected_project().and_then(|t| catalog.get(t))
    }

    /// Changing the filter always leaves the detail view.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.active_category = category;
        self.mode = GalleryMode::Listing;
    }

    /// Ignores a token whose project the current filter no longer shows.
    /// The card grid unmounts without a `mouseleave`, so hover is cleared.
    pub fn open_project(&mut self, project: VisibleProject<'_>) {
        if !self.active_category.matches(project.record.category) {
            return;
        }
        self.hovered_card = None;
        self.mode = GalleryMode::Detail(project.record.title.clone());
    }

    pub fn close_detail(&mut self) {
        self.mode = GalleryMode::Listing;
    }

    pub fn hover(&mut self, title: Option<&str>) {
        self.hovered_card = title.map(str::to_string);
    }

    pub fn toggle_expand(&mut self, title: &str) {
        if !self.expanded_cards.remove(title) {
            self.expanded_cards.insert(title.to_string());
        }
    }

    pub fn description_mode(&self, project: &ProjectRecord) -> DescriptionMode {
        if project.description.chars().count() <= DESCRIPTION_CLAMP_THRESHOLD {
            DescriptionMode::Clamped
        } else if self.is_expanded(&project.title) {
            DescriptionMode::Expanded
        } else {
            DescriptionMode::Collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        tests::{record, six_record_catalog},
        Category,
    };

    fn open(state: &mut GalleryViewState, catalog: &Catalog, title: &str) {
        let p = state
            .visible_project(catalog, title)
            .expect("project should be visible");
        state.open_project(p);
    }

    fn assert_invariant(state: &GalleryViewState) {
        if state.show_details() {
            assert!(state.selected_project().is_some());
        }
    }

    #[test]
    fn test_defaults() {
        let state = GalleryViewState::new();
        assert_eq!(state.active_category(), CategoryFilter::All);
        assert_eq!(state.selected_project(), None);
        assert!(!state.show_details());
        assert_eq!(state.hovered_card(), None);
        assert!(state.expanded_cards().is_empty());
    }

    #[test]
    fn test_open_then_select_category() {
        let catalog = six_record_catalog();
        let mut state = GalleryViewState::new();

        open(&mut state, &catalog, "Scanner");
        assert!(state.show_details());
        assert_eq!(state.selected_project(), Some("Scanner"));
        assert_eq!(
            state.selected_record(&catalog).map(|p| p.category),
            Some(Category::FullStack)
        );

        state.select_category(CategoryFilter::Only(Category::Backend));
        assert!(!state.show_details());
        assert_eq!(state.selected_project(), None);
        assert_eq!(
            state.active_category(),
            CategoryFilter::Only(Category::Backend)
        );
        assert_eq!(*state.mode(), GalleryMode::Listing);
    }

    #[test]
    fn test_select_category_resets_from_any_state() {
        let catalog = six_record_catalog();
        for filter in CategoryFilter::options() {
            let mut state = GalleryViewState::new();
            state.select_category(filter);
            assert!(!state.show_details());

            if let Some(p) = state.visible_projects(&catalog).first().copied() {
                state.open_project(p);
                assert!(state.show_details());
            }
            state.hover(Some("Bot"));
            state.select_category(CategoryFilter::All);
            assert!(!state.show_details());
            assert_eq!(state.selected_project(), None);
            // hover is presentational and survives filter changes
            assert_eq!(state.hovered_card(), Some("Bot"));
        }
    }

    #[test]
    fn test_close_detail() {
        let catalog = six_record_catalog();
        let mut state = GalleryViewState::new();
        open(&mut state, &catalog, "Bot");
        state.close_detail();
        assert!(!state.show_details());
        assert_eq!(state.selected_project(), None);

        // closing again is a no-op
        state.close_detail();
        assert_eq!(*state.mode(), GalleryMode::Listing);
    }

    #[test]
    fn test_no_hover_glow_after_returning_to_grid() {
        let catalog = six_record_catalog();
        let mut state = GalleryViewState::new();
        state.hover(Some("Bot"));
        open(&mut state, &catalog, "Bot");
        assert_eq!(state.hovered_card(), None);

        state.close_detail();
        assert!(!state.is_hovered("Bot"));
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let catalog = six_record_catalog();
        let mut state = GalleryViewState::new();
        let shop = state
            .visible_project(&catalog, "Shop")
            .expect("visible under All");
        let events = state
            .visible_project(&catalog, "Events")
            .expect("visible under All");

        state.select_category(CategoryFilter::Only(Category::Frontend));
        state.open_project(shop);
        assert!(!state.show_details());
        assert_eq!(state.selected_project(), None);

        // still shown by the new filter, so it opens
        state.open_project(events);
        assert_eq!(state.selected_project(), Some("Events"));
    }

    #[test]
    fn test_hidden_projects_are_not_selectable() {
        let catalog = six_record_catalog();
        let mut state = GalleryViewState::new();
        state.select_category(CategoryFilter::Only(Category::Frontend));

        assert!(state.visible_project(&catalog, "Videos").is_none());
        assert!(state.visible_project(&catalog, "Missing").is_none());
        let visible = state
            .visible_projects(&catalog)
            .iter()
            .map(|p| p.record().title.clone())
            .collect::<Vec<_>>();
        assert_eq!(visible, vec!["Interior", "Events"]);
    }

    #[test]
    fn test_invariant_over_transition_sequence() {
        let catalog = six_record_catalog();
        let mut state = GalleryViewState::new();
        let filters = CategoryFilter::options().collect::<Vec<_>>();

        // deterministic walk mixing every trigger
        for step in 0..200usize {
            match step % 7 {
                0 => state.select_category(filters[step % filters.len()]),
                1 | 4 => {
                    let visible = state.visible_projects(&catalog);
                    if !visible.is_empty() {
                        state.open_project(visible[step % visible.len()]);
                    }
                }
                2 => state.close_detail(),
                3 => state.hover(Some(catalog.projects()[step % catalog.len()].title.as_str())),
                5 => state.toggle_expand(&catalog.projects()[step % catalog.len()].title),
                _ => state.hover(None),
            }
            assert_invariant(&state);
        }
    }

    #[test]
    fn test_toggle_expand_is_its_own_inverse() {
        let mut state = GalleryViewState::new();
        state.toggle_expand("Shop");
        let before = state.expanded_cards().clone();

        state.toggle_expand("Bot");
        state.toggle_expand("Bot");
        assert_eq!(*state.expanded_cards(), before);

        state.toggle_expand("Shop");
        state.toggle_expand("Shop");
        assert_eq!(*state.expanded_cards(), before);
        assert!(state.is_expanded("Shop"));
    }

    #[test]
    fn test_hover() {
        let mut state = GalleryViewState::new();
        state.hover(Some("Shop"));
        assert!(state.is_hovered("Shop"));
        assert!(!state.is_hovered("Bot"));
        state.hover(None);
        assert_eq!(state.hovered_card(), None);
    }

    #[test]
    fn test_description_mode_threshold() {
        let mut state = GalleryViewState::new();
        let mut p = record("Long", Category::Backend);

        p.description = "x".repeat(DESCRIPTION_CLAMP_THRESHOLD);
        assert_eq!(state.description_mode(&p), DescriptionMode::Clamped);
        state.toggle_expand("Long");
        // expanding a short description changes nothing
        assert_eq!(state.description_mode(&p), DescriptionMode::Clamped);
        state.toggle_expand("Long");

        p.description = "x".repeat(DESCRIPTION_CLAMP_THRESHOLD + 1);
        assert_eq!(state.description_mode(&p), DescriptionMode::Collapsed);
        assert_eq!(
            state.description_mode(&p).toggle_label(),
            Some("See more")
        );
        state.toggle_expand("Long");
        assert_eq!(state.description_mode(&p), DescriptionMode::Expanded);
        assert!(!state.description_mode(&p).is_clamped());
        assert_eq!(
            state.description_mode(&p).toggle_label(),
            Some("See less")
        );
    }

    #[test]
    fn test_threshold_counts_chars() {
        let state = GalleryViewState::new();
        let mut p = record("Wide", Category::Frontend);
        // 100 multi-byte characters is still at the threshold
        p.description = "é".repeat(DESCRIPTION_CLAMP_THRESHOLD);
        assert_eq!(state.description_mode(&p), DescriptionMode::Clamped);
    }
}
