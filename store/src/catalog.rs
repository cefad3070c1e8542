//! Category list and the pure category filter used by the listing views.

use crate::models::Product;

/// The fixed marketplace categories, in display order.
pub const CATEGORIES: [&str; 10] = [
    "Books",
    "Electronics",
    "Furniture",
    "Clothing",
    "Notes",
    "Accessories",
    "Bikes",
    "Services",
    "Sports",
    "Event Tickets",
];

/// Filter products by category. `None` is the identity: every product, in
/// the original order. The input is never mutated.
pub fn filter_by_category(products: &[Product], selected: Option<&str>) -> Vec<Product> {
    match selected {
        None => products.to_vec(),
        Some(category) => products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id: ItemId::Number(id),
            title: format!("item {id}"),
            price: 1.0,
            image: String::new(),
            location: String::new(),
            date: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn selected_category_keeps_only_matches() {
        let products = vec![product(1, "Books"), product(2, "Electronics")];

        let filtered = filter_by_category(&products, Some("Books"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, ItemId::Number(1));
    }

    #[test]
    fn no_selection_is_identity() {
        let products = vec![product(1, "Books"), product(2, "Electronics")];

        let filtered = filter_by_category(&products, None);
        assert_eq!(filtered, products);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let products = vec![product(1, "Books")];
        assert!(filter_by_category(&products, Some("Bikes")).is_empty());
    }

    #[test]
    fn input_is_untouched() {
        let products = vec![product(1, "Books"), product(2, "Electronics")];
        let snapshot = products.clone();

        let _ = filter_by_category(&products, Some("Electronics"));
        assert_eq!(products, snapshot);
    }
}
