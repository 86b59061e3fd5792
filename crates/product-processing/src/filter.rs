use product_core::{ExclusionList, Product};

/// Strips excluded values from every attribute. Comparison is case-sensitive
/// exact equality against whatever casing the values carry at this point in
/// the pipeline. An attribute that loses all of its values is dropped from
/// the product; the relative order of everything that survives is preserved.
pub fn apply(product: &mut Product, exclusion_list: &ExclusionList) {
    product.attributes.retain_mut(|attribute| {
        attribute
            .values
            .retain(|value| !exclusion_list.contains(value));
        !attribute.values.is_empty()
    });
}
