use core::str::FromStr;
use serde::{Deserialize, Serialize};

use chronolux_core::{Entity, ProductId, StoreError, StoreResult};

/// Watch category. Catalog generation cycles through these in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Luxury,
    Sport,
    Chronograph,
    Dress,
    Smart,
    Vintage,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Luxury,
        Category::Sport,
        Category::Chronograph,
        Category::Dress,
        Category::Smart,
        Category::Vintage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Luxury => "Luxury",
            Category::Sport => "Sport",
            Category::Chronograph => "Chronograph",
            Category::Dress => "Dress",
            Category::Smart => "Smart",
            Category::Vintage => "Vintage",
        }
    }
}

/// Watch manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Brand {
    Rolex,
    Omega,
    #[serde(rename = "TAG Heuer")]
    TagHeuer,
    Breitling,
    Cartier,
    #[serde(rename = "IWC")]
    Iwc,
    #[serde(rename = "Patek Philippe")]
    PatekPhilippe,
    #[serde(rename = "Audemars Piguet")]
    AudemarsPiguet,
}

impl Brand {
    pub const ALL: [Brand; 8] = [
        Brand::Rolex,
        Brand::Omega,
        Brand::TagHeuer,
        Brand::Breitling,
        Brand::Cartier,
        Brand::Iwc,
        Brand::PatekPhilippe,
        Brand::AudemarsPiguet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Rolex => "Rolex",
            Brand::Omega => "Omega",
            Brand::TagHeuer => "TAG Heuer",
            Brand::Breitling => "Breitling",
            Brand::Cartier => "Cartier",
            Brand::Iwc => "IWC",
            Brand::PatekPhilippe => "Patek Philippe",
            Brand::AudemarsPiguet => "Audemars Piguet",
        }
    }
}

/// Watch movement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Movement {
    Automatic,
    Manual,
    Quartz,
    Digital,
}

impl Movement {
    pub const ALL: [Movement; 4] = [
        Movement::Automatic,
        Movement::Manual,
        Movement::Quartz,
        Movement::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Automatic => "Automatic",
            Movement::Manual => "Manual",
            Movement::Quartz => "Quartz",
            Movement::Digital => "Digital",
        }
    }
}

macro_rules! impl_display_from_str {
    ($t:ty, $name:literal) => {
        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = StoreError;

            /// Case-insensitive match on the display name.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$t>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| StoreError::validation(format!("unknown {}: {s:?}", $name)))
            }
        }
    };
}

impl_display_from_str!(Category, "category");
impl_display_from_str!(Brand, "brand");
impl_display_from_str!(Movement, "movement");

/// Catalog product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    brand: Brand,
    /// Price in whole currency units.
    price: u64,
    movement: Movement,
    image: String,
    description: String,
    features: Vec<String>,
    is_new: bool,
    stock: u32,
}

/// Everything needed to build a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub brand: Brand,
    pub price: u64,
    pub movement: Movement,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
    pub is_new: bool,
    pub stock: u32,
}

impl Product {
    /// Largest stock a generated product can carry.
    pub const MAX_STOCK: u32 = 20;

    pub fn new(input: NewProduct) -> StoreResult<Self> {
        if input.id.get() == 0 {
            return Err(StoreError::validation("product id must be positive"));
        }
        if input.name.trim().is_empty() {
            return Err(StoreError::validation("name cannot be empty"));
        }
        if input.stock == 0 {
            return Err(StoreError::validation("stock must be at least 1"));
        }

        Ok(Self {
            id: input.id,
            name: input.name,
            category: input.category,
            brand: input.brand,
            price: input.price,
            movement: input.movement,
            image: input.image,
            description: input.description,
            features: input.features,
            is_new: input.is_new,
            stock: input.stock,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Case-insensitive substring match over name, category and brand.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
            || self.brand.as_str().to_lowercase().contains(needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
