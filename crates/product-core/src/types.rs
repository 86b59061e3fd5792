// crates/product-core/src/types.rs

use serde::{Deserialize, Serialize};

/// A product as it travels over the wire: an id plus an ordered list of
/// attributes. The attribute order is meaningful, it is what the sort stage
/// rearranges and what the response returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub attributes: Vec<Attribute>,
}

impl Product {
    pub fn new(id: i64, attributes: Vec<Attribute>) -> Self {
        Self { id, attributes }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|att| att.name == name)
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|att| att.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}
