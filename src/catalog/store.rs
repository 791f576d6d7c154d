use std::ops::Deref;

use crate::models::FoodItem;

/// Immutable, ordered set of food items.
///
/// Row order is significant: selection ties are broken by it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Distinct cuisine tags in first-seen order.
    pub fn cuisines(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for tag in self.items.iter().flat_map(|f| f.tags.iter()) {
            if !seen.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
                seen.push(tag.clone());
            }
        }
        seen
    }
}

impl Deref for Catalog {
    type Target = [FoodItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}
