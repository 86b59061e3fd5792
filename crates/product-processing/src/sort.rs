use std::cmp::Ordering;

use product_core::Product;

/// Reorders the product's attributes by name.
pub fn apply(product: &mut Product) {
    product
        .attributes
        .sort_by(|a, b| compare_names(&a.name, &b.name));
}

// Case-insensitive order first; names that collide under case folding fall
// back to plain codepoint order, so the result is total and deterministic
// even for names differing only in case.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
