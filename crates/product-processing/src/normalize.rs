use product_core::Product;

/// The one attribute whose values are never rewritten.
const TITLE_ATTRIBUTE: &str = "title";

/// Capitalizes every attribute value in place, except for the `title`
/// attribute which passes through untouched.
pub fn apply(product: &mut Product) {
    for attribute in &mut product.attributes {
        if attribute.name == TITLE_ATTRIBUTE {
            continue;
        }
        for value in &mut attribute.values {
            if let Some(capitalized) = capitalize(value) {
                *value = capitalized;
            }
        }
    }
}

// Uppercases the first character and keeps the remainder exactly as it came
// in. Values of zero or one character keep their original casing, including a
// single lowercase letter.
fn capitalize(value: &str) -> Option<String> {
    let mut chars = value.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return None;
    }

    let mut capitalized = String::with_capacity(value.len());
    capitalized.extend(first.to_uppercase());
    capitalized.push_str(rest);
    Some(capitalized)
}
