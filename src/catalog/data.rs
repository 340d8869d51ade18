//! Catalog seed data.

use super::{Category, CategoryInfo, Place};

fn restaurant(
    id: &str,
    name: &str,
    cuisine: &str,
    queue_size: u32,
    wait_time: u32,
    rating: f64,
    distance: &str,
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: Some(cuisine.to_string()),
        kind: None,
        queue_size,
        wait_time,
        rating,
        distance: distance.to_string(),
        services: None,
    }
}

fn office(
    id: &str,
    name: &str,
    kind: &str,
    queue_size: u32,
    wait_time: u32,
    rating: f64,
    distance: &str,
    services: &str,
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: None,
        kind: Some(kind.to_string()),
        queue_size,
        wait_time,
        rating,
        distance: distance.to_string(),
        services: Some(services.to_string()),
    }
}

pub(super) fn categories() -> Vec<CategoryInfo> {
    vec![
        CategoryInfo {
            id: Category::Restaurants,
            name: "Restaurants".to_string(),
            icon: "\u{1F37D}\u{FE0F}".to_string(),
            description: "Book your table".to_string(),
            color: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)".to_string(),
        },
        CategoryInfo {
            id: Category::Banks,
            name: "Banks".to_string(),
            icon: "\u{1F3E6}".to_string(),
            description: "Banking services".to_string(),
            color: "linear-gradient(135deg, #11998e 0%, #38ef7d 100%)".to_string(),
        },
        CategoryInfo {
            id: Category::Government,
            name: "Government".to_string(),
            icon: "\u{1F3DB}\u{FE0F}".to_string(),
            description: "Public services".to_string(),
            color: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)".to_string(),
        },
    ]
}

pub(super) fn restaurants() -> Vec<Place> {
    vec![
        restaurant("1", "Bella Italia", "Italian", 8, 25, 4.5, "0.5 km"),
        restaurant("2", "Sushi Palace", "Japanese", 12, 40, 4.7, "1.2 km"),
        restaurant("3", "The Burger Joint", "American", 5, 15, 4.3, "0.8 km"),
        restaurant("4", "Spice Garden", "Indian", 15, 50, 4.6, "2.1 km"),
        restaurant("5", "Taco Fiesta", "Mexican", 3, 10, 4.4, "0.3 km"),
        restaurant("6", "Dragon Wok", "Chinese", 9, 30, 4.5, "1.5 km"),
    ]
}

pub(super) fn banks() -> Vec<Place> {
    vec![
        office(
            "b1",
            "National Bank",
            "Commercial Bank",
            15,
            35,
            4.2,
            "0.7 km",
            "Account opening, Loans, Transfers",
        ),
        office(
            "b2",
            "City Credit Union",
            "Credit Union",
            8,
            20,
            4.5,
            "1.1 km",
            "Savings, Credit cards, Mortgages",
        ),
        office(
            "b3",
            "Federal Savings",
            "Savings Bank",
            12,
            28,
            4.3,
            "0.4 km",
            "Deposits, Withdrawals, Statements",
        ),
        office(
            "b4",
            "Trust Bank",
            "Investment Bank",
            6,
            15,
            4.6,
            "1.8 km",
            "Investment, Trading, Advisory",
        ),
    ]
}

pub(super) fn government() -> Vec<Place> {
    vec![
        office(
            "g1",
            "DMV Office",
            "Motor Vehicles",
            25,
            60,
            3.8,
            "2.5 km",
            "License renewal, Registration, ID cards",
        ),
        office(
            "g2",
            "Post Office",
            "Postal Services",
            10,
            25,
            4.1,
            "0.9 km",
            "Mail, Packages, Stamps",
        ),
        office(
            "g3",
            "City Hall",
            "Municipal Services",
            18,
            45,
            3.9,
            "1.3 km",
            "Permits, Licenses, Records",
        ),
        office(
            "g4",
            "Tax Office",
            "Revenue Services",
            20,
            50,
            3.7,
            "1.6 km",
            "Tax filing, Payments, Consultations",
        ),
        office(
            "g5",
            "Social Services",
            "Welfare Office",
            22,
            55,
            4.0,
            "2.0 km",
            "Benefits, Support, Applications",
        ),
    ]
}
