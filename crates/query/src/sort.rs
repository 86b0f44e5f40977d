use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use chronolux_catalog::Product;
use chronolux_core::StoreError;

/// Result ordering selected in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    NameAsc,
    NameDesc,
    /// New arrivals first; both groups keep their relative order.
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::Newest => "newest",
        }
    }

    /// Reorder `items` in place.
    ///
    /// Descending keys yield exactly the reverse of their ascending
    /// counterpart, ties included.
    pub fn apply(&self, items: &mut Vec<&Product>) {
        match self {
            SortKey::Featured => {}
            SortKey::PriceLow => items.sort_by_key(|p| p.price()),
            SortKey::PriceHigh => {
                items.sort_by_key(|p| p.price());
                items.reverse();
            }
            SortKey::NameAsc => items.sort_by(|a, b| compare_names(a.name(), b.name())),
            SortKey::NameDesc => {
                items.sort_by(|a, b| compare_names(a.name(), b.name()));
                items.reverse();
            }
            SortKey::Newest => {
                let (fresh, rest): (Vec<&Product>, Vec<&Product>) =
                    items.drain(..).partition(|p| p.is_new());
                items.extend(fresh);
                items.extend(rest);
            }
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| StoreError::validation(format!("unknown sort key: {s:?}")))
    }
}

/// Dictionary-style comparison: case-folded first, then exact bytes so the
/// order stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
