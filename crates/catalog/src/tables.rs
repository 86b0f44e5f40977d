//! Fixed lookup tables the generator draws from.
//!
//! Lookups keyed by a category *name* fall back to generic values for names
//! outside the known set; typed lookups always hit.

use core::str::FromStr;

use crate::product::{Brand, Category, Movement};

/// Price band of a category: `base + uniform[0, spread)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub base: u64,
    pub spread: u64,
}

pub const FALLBACK_PRICE_BAND: PriceBand = PriceBand {
    base: 50_000,
    spread: 0,
};

pub const FALLBACK_DESCRIPTION: &str = "Premium timepiece with exceptional quality.";

const IMAGE_IDS: [&str; 10] = [
    "photo-1523170335258-f5ed11844a49",
    "photo-1587836374828-4dbafa94cf0e",
    "photo-1542496658-e33a6d0d50f6",
    "photo-1524805444758-089113d48a6d",
    "photo-1622434641406-a158123450f9",
    "photo-1611485988300-b7530defb8e2",
    "photo-1614164185128-e4ec99c436d7",
    "photo-1539874754764-5a96559165b0",
    "photo-1509048191080-d2984bad6ae5",
    "photo-1533139502658-0198f920d8e8",
];

const BASE_FEATURES: [&str; 3] = [
    "Sapphire Crystal Glass",
    "Stainless Steel Case",
    "2 Year International Warranty",
];

pub fn price_band(category: Category) -> PriceBand {
    let (base, spread) = match category {
        Category::Luxury => (150_000, 300_000),
        Category::Sport => (50_000, 100_000),
        Category::Chronograph => (75_000, 150_000),
        Category::Dress => (40_000, 80_000),
        Category::Smart => (25_000, 50_000),
        Category::Vintage => (100_000, 200_000),
    };
    PriceBand { base, spread }
}

/// Price band for a category given by name; unknown names get
/// [`FALLBACK_PRICE_BAND`].
///
/// The generator works on typed [`Category`] values and never reaches the
/// fallback; this entry point is kept for callers that only have a name
/// (imported feeds, query strings).
pub fn price_band_for_name(category: &str) -> PriceBand {
    Category::from_str(category)
        .map(price_band)
        .unwrap_or(FALLBACK_PRICE_BAND)
}

pub fn models(category: Category) -> &'static [&'static str] {
    match category {
        Category::Luxury => &["Royal", "Prestige", "Grand", "Elite", "Premier"],
        Category::Sport => &["Diver", "Racer", "Explorer", "Navigator", "Speedmaster"],
        Category::Chronograph => &["Chrono", "Tachymeter", "Flyback", "Split-Second", "Moonphase"],
        Category::Dress => &["Classic", "Elegance", "Refined", "Heritage", "Tradition"],
        Category::Smart => &["Connect", "Digital", "Tech", "Fusion", "Hybrid"],
        Category::Vintage => &["Retro", "Heritage", "Classic", "Antique", "Timeless"],
    }
}

pub fn description(category: Category, brand: Brand, model: &str) -> String {
    match category {
        Category::Luxury => format!(
            "Exquisite {brand} {model} timepiece featuring premium materials and exceptional craftsmanship. A symbol of status and refinement."
        ),
        Category::Sport => format!(
            "Rugged {brand} {model} designed for adventure. Water-resistant with enhanced durability for active lifestyles."
        ),
        Category::Chronograph => format!(
            "Precision {brand} {model} with advanced timing complications. Perfect for professionals who demand accuracy."
        ),
        Category::Dress => format!(
            "Elegant {brand} {model} with timeless design. The perfect accessory for formal occasions and business meetings."
        ),
        Category::Smart => format!(
            "Connected {brand} {model} combining traditional watchmaking with modern technology. Stay connected in style."
        ),
        Category::Vintage => format!(
            "Classic {brand} {model} with heritage design. A collector's piece that celebrates horological history."
        ),
    }
}

/// Description for a category given by name; unknown names get
/// [`FALLBACK_DESCRIPTION`].
///
/// Only reachable from callers holding a category name; typed callers use
/// [`description`].
pub fn description_for_name(category: &str, brand: Brand, model: &str) -> String {
    match Category::from_str(category) {
        Ok(category) => description(category, brand, model),
        Err(_) => FALLBACK_DESCRIPTION.to_string(),
    }
}

fn category_features(category: Category) -> [&'static str; 3] {
    match category {
        Category::Luxury => ["18K Gold Accents", "Hand-Finished Dial", "Alligator Leather Strap"],
        Category::Sport => ["200m Water Resistance", "Luminous Hands", "Unidirectional Bezel"],
        Category::Chronograph => ["Tachymeter Scale", "Date Display", "Sub-Dials"],
        Category::Dress => ["Ultra-Thin Case", "Roman Numerals", "Exhibition Case Back"],
        Category::Smart => ["Heart Rate Monitor", "GPS Tracking", "Wireless Charging"],
        Category::Vintage => ["Domed Crystal", "Manual Winding", "Aged Patina Dial"],
    }
}

/// Base features (movement first) followed by the category's own features.
pub fn features(category: Category, movement: Movement) -> Vec<String> {
    let mut out = Vec::with_capacity(1 + BASE_FEATURES.len() + 3);
    out.push(format!("{movement} Movement"));
    out.extend(BASE_FEATURES.iter().map(|f| f.to_string()));
    out.extend(category_features(category).iter().map(|f| f.to_string()));
    out
}

/// Photo URL for the `index`-th generated product.
pub fn image_url(index: usize) -> String {
    let photo = IMAGE_IDS[index % IMAGE_IDS.len()];
    format!("https://images.unsplash.com/{photo}?w=600&h=600&fit=crop&auto=format&q=80&sig={index}")
}
