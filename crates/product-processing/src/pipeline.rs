use product_core::{ExclusionList, Product};

use crate::{filter, normalize, sort};

/// The fixed three-stage transformation applied to every inbound product.
/// The exclusion list is injected at construction and read-only afterwards,
/// so one pipeline instance can be shared across request handlers.
pub struct ProcessingPipeline {
    exclusion_list: ExclusionList,
}

impl ProcessingPipeline {
    pub fn new(exclusion_list: ExclusionList) -> Self {
        Self { exclusion_list }
    }

    pub fn exclusion_list(&self) -> &ExclusionList {
        &self.exclusion_list
    }

    /// Runs the stages in their required order. Filtering compares values as
    /// they look after normalization, so the first two stages are not
    /// interchangeable.
    pub fn run(&self, product: &mut Product) {
        // 1. capitalize attribute values
        normalize::apply(product);

        // 2. strip excluded values
        filter::apply(product, &self.exclusion_list);

        // 3. order attributes by name
        sort::apply(product);

        tracing::debug!(
            product_id = product.id,
            attributes = product.attributes.len(),
            "product processed"
        );
    }
}
