use std::fmt;
use serde::{Deserialize, Serialize};
use crate::catalog::CatalogError;

/// Sales category understood by the ingestion API.
///
/// Serialized as its integer code (`1..=4`), which is what the `categoria`
/// field carries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Beauty,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Beauty,
    ];

    pub fn code(self) -> i32 {
        match self {
            Category::Electronics => 1,
            Category::Clothing => 2,
            Category::Home => 3,
            Category::Beauty => 4,
        }
    }
}

impl TryFrom<i32> for Category {
    type Error = CatalogError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Category::Electronics),
            2 => Ok(Category::Clothing),
            3 => Ok(Category::Home),
            4 => Ok(Category::Beauty),
            other => Err(CatalogError::UnknownCategory(other)),
        }
    }
}

impl From<Category> for i32 {
    fn from(category: Category) -> Self {
        category.code()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Home => "home",
            Category::Beauty => "beauty",
        };
        f.write_str(name)
    }
}
