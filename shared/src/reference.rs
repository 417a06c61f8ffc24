//! Static reference data
//!
//! The brand and category tables are fixed at build time and never mutated
//! or persisted by this client.

use crate::models::{Brand, Category, CategoryInfo};

/// Known instrument brands
pub const BRANDS: &[Brand] = &[
    Brand { id: 1, name: "Armstrong" },
    Brand { id: 2, name: "Bach" },
    Brand { id: 3, name: "Conn" },
    Brand { id: 4, name: "Conn-Selmer" },
    Brand { id: 5, name: "Cort" },
    Brand { id: 6, name: "Fender" },
    Brand { id: 7, name: "Gliga" },
    Brand { id: 8, name: "Hohner" },
    Brand { id: 9, name: "Jimbao" },
    Brand { id: 10, name: "Kalani" },
    Brand { id: 11, name: "Kawai" },
    Brand { id: 12, name: "Kurzweil" },
    Brand { id: 13, name: "Leblanc" },
    Brand { id: 14, name: "LP" },
    Brand { id: 15, name: "Ludwig" },
    Brand { id: 16, name: "Mahalo" },
    Brand { id: 17, name: "Medeli" },
    Brand { id: 18, name: "Pearl" },
    Brand { id: 19, name: "Roland" },
    Brand { id: 20, name: "Steinway & Sons" },
    Brand { id: 21, name: "Tom Grasso" },
    Brand { id: 22, name: "Tycoon" },
    Brand { id: 23, name: "Valencia" },
    Brand { id: 24, name: "Verona" },
    Brand { id: 25, name: "Yamaha" },
];

/// Product categories with their display icons
pub const CATEGORIES: &[Category] = &[
    Category { id: 1, name: "Guitars & Strings", icon: "/img/guitars.svg" },
    Category { id: 2, name: "Accordions", icon: "/img/square-sliders-vertical.svg" },
    Category { id: 3, name: "Pianos", icon: "/img/piano.svg" },
    Category { id: 4, name: "Percussion", icon: "/img/triangle-instrument.svg" },
    Category { id: 5, name: "Keyboards", icon: "/img/piano-keyboard.svg" },
    Category { id: 6, name: "Drum Kits", icon: "/img/drum.svg" },
    Category { id: 7, name: "Winds", icon: "/img/saxophone.svg" },
    Category { id: 8, name: "Violins & Violas", icon: "/img/violin.svg" },
];

/// Find a brand by id
///
/// Absence is an expected outcome (a custom brand), not an error.
pub fn find_brand_by_id(id: i64) -> Option<&'static Brand> {
    BRANDS.iter().find(|brand| brand.id == id)
}

/// Find a brand by exact name
pub fn find_brand_by_name(name: &str) -> Option<&'static Brand> {
    BRANDS.iter().find(|brand| brand.name == name)
}

/// Resolve the icon/name pair for a raw category id
///
/// The id arrives as the raw control value, so it is coerced to an integer
/// first; non-numeric or unknown input resolves to the empty pair.
pub fn find_category_info_by_id(id: &str) -> CategoryInfo {
    let Ok(id) = id.trim().parse::<i64>() else {
        return CategoryInfo::default();
    };

    match CATEGORIES.iter().find(|category| category.id == id) {
        Some(category) => CategoryInfo {
            icon: Some(category.icon),
            name: Some(category.name),
        },
        None => CategoryInfo::default(),
    }
}
