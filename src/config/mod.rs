pub mod categories;
pub mod settings;

pub use categories::{CategoryFilter, get_category_filters};
pub use settings::AppConfig;
