use tracing::debug;

use crate::data::{CABINS, Cabin, Category};

// interaction state of the explore section
//
// the selected category and the search text are tracked so the controls
// render correctly, but neither narrows the listing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogView {
    selected: Category,
    search: String,
}

impl CatalogView {
    pub fn new() -> Self {
        CatalogView::default()
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected == category
    }

    pub fn select(&mut self, category: Category) {
        debug!({category = category.id()}, "category selected");
        self.selected = category;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn visible(&self) -> &'static [Cabin] {
        CABINS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_all() {
        let view = CatalogView::new();

        assert_eq!(view.selected(), Category::All);
        assert!(view.search().is_empty());
    }

    #[test]
    fn selecting_category_does_not_filter() {
        let mut view = CatalogView::new();
        let before = view.visible();

        view.select(Category::Romantic);

        assert!(view.is_selected(Category::Romantic));
        assert!(!view.is_selected(Category::All));
        assert_eq!(view.visible(), before);
    }

    #[test]
    fn search_text_is_only_recorded() {
        let mut view = CatalogView::new();

        view.set_search("Aspen");

        assert_eq!(view.search(), "Aspen");
        assert_eq!(view.visible().len(), CABINS.len());
    }
}
