use crate::domain::models::GameCategory;

/// One entry of the results-view category filter strip.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    /// `None` matches every category.
    pub category: Option<GameCategory>,
    pub label: &'static str,
}

impl CategoryFilter {
    pub fn new(category: Option<GameCategory>, label: &'static str) -> Self {
        Self { category, label }
    }
}

/// The category filters shown on the results view, in display order.
pub fn get_category_filters() -> Vec<CategoryFilter> {
    vec![
        CategoryFilter::new(None, "All Games"),
        CategoryFilter::new(Some(GameCategory::Main), "Main Events"),
        CategoryFilter::new(Some(GameCategory::Kids), "Kids Events"),
        CategoryFilter::new(Some(GameCategory::Fun), "Fun Events"),
        CategoryFilter::new(Some(GameCategory::Women), "Women Events"),
        CategoryFilter::new(Some(GameCategory::Men), "Men Events"),
    ]
}
