//! Static place catalog: restaurants, banks and government offices.
//!
//! The catalog is read-only seed data. Baseline queue sizes and wait times
//! are consulted once, at join time, to seed a new queue entry.

mod data;

use serde::{Deserialize, Serialize};

/// Place category. Serialized in lowercase to match the API paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurants,
    Banks,
    Government,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "restaurants" => Some(Category::Restaurants),
            "banks" => Some(Category::Banks),
            "government" => Some(Category::Government),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Restaurants => "restaurants",
            Category::Banks => "banks",
            Category::Government => "government",
        }
    }
}

/// A queueable location. `cuisine` is set for restaurants; `kind` and
/// `services` for banks and government offices. Absent fields are omitted
/// from the JSON representation.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub queue_size: u32,
    pub wait_time: u32,
    pub rating: f64,
    pub distance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
}

/// Category descriptor served by `GET /api/categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub color: String,
}

/// Read-only catalog of places grouped by category.
pub struct CatalogStore {
    categories: Vec<CategoryInfo>,
    restaurants: Vec<Place>,
    banks: Vec<Place>,
    government: Vec<Place>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            categories: data::categories(),
            restaurants: data::restaurants(),
            banks: data::banks(),
            government: data::government(),
        }
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn places(&self, category: Category) -> &[Place] {
        match category {
            Category::Restaurants => &self.restaurants,
            Category::Banks => &self.banks,
            Category::Government => &self.government,
        }
    }

    /// Find a place by id within a category.
    pub fn lookup(&self, category: Category, place_id: &str) -> Option<&Place> {
        self.places(category).iter().find(|p| p.id == place_id)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
