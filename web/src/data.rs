//! Mock catalog data standing in for a backend.

use store::{ItemId, Product};

fn product(
    id: u64,
    title: &str,
    price: f64,
    image: &str,
    location: &str,
    date: &str,
    category: &str,
) -> Product {
    Product {
        id: ItemId::Number(id),
        title: title.to_string(),
        price,
        image: image.to_string(),
        location: location.to_string(),
        date: date.to_string(),
        category: category.to_string(),
    }
}

pub fn trending_products() -> Vec<Product> {
    vec![
        product(
            1,
            "MacBook Air M1 (2020)",
            700.0,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&w=2626&q=80",
            "Engineering Building",
            "2 days ago",
            "Electronics",
        ),
        product(
            2,
            "Calculus Textbook 5th Edition",
            45.0,
            "https://images.unsplash.com/photo-1589998059171-988d887df646?auto=format&fit=crop&w=2576&q=80",
            "Science Library",
            "5 hours ago",
            "Books",
        ),
        product(
            3,
            "Dorm Room Desk Lamp",
            15.0,
            "https://images.unsplash.com/photo-1623910270704-3d40d01fd808?auto=format&fit=crop&w=2624&q=80",
            "West Campus",
            "1 day ago",
            "Furniture",
        ),
        product(
            4,
            "Bluetooth Headphones",
            50.0,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=2670&q=80",
            "Student Union",
            "3 days ago",
            "Electronics",
        ),
    ]
}

pub fn recent_products() -> Vec<Product> {
    vec![
        product(
            5,
            "Microwave (Like New)",
            35.0,
            "https://images.unsplash.com/photo-1585240989858-241ac51a0a07?auto=format&fit=crop&w=2670&q=80",
            "North Dorms",
            "Just now",
            "Electronics",
        ),
        product(
            6,
            "Psychology 101 Notes",
            20.0,
            "https://images.unsplash.com/photo-1532153955177-f59af40d6472?auto=format&fit=crop&w=2670&q=80",
            "Psychology Building",
            "Yesterday",
            "Notes",
        ),
        product(
            7,
            "Mini Fridge",
            75.0,
            "https://images.unsplash.com/photo-1571175443880-49e1d25b2bc5?auto=format&fit=crop&w=2670&q=80",
            "East Campus",
            "2 days ago",
            "Electronics",
        ),
        product(
            8,
            "Mountain Bike",
            120.0,
            "https://images.unsplash.com/photo-1606662172261-7693a8563592?auto=format&fit=crop&w=2670&q=80",
            "Fitness Center",
            "3 days ago",
            "Bikes",
        ),
        product(
            9,
            "Graphic Calculator",
            60.0,
            "https://images.unsplash.com/photo-1625680017970-0349d9cb56a5?auto=format&fit=crop&w=2574&q=80",
            "Math Department",
            "4 days ago",
            "Electronics",
        ),
        product(
            10,
            "Desk Chair",
            40.0,
            "https://images.unsplash.com/photo-1596162954151-cdcb4c0f70a8?auto=format&fit=crop&w=2574&q=80",
            "Graduate Housing",
            "1 week ago",
            "Furniture",
        ),
        product(
            11,
            "Mini Basketball Hoop",
            15.0,
            "https://images.unsplash.com/photo-1580159252577-9754aed01be7?auto=format&fit=crop&w=2574&q=80",
            "Sports Complex",
            "2 days ago",
            "Sports",
        ),
        product(
            12,
            "Engineering Project Kit",
            35.0,
            "https://images.unsplash.com/photo-1615212139852-a08fe8c5ebcb?auto=format&fit=crop&w=2670&q=80",
            "Engineering Lab",
            "5 days ago",
            "Electronics",
        ),
    ]
}

/// Every seeded product, trending first.
pub fn all_products() -> Vec<Product> {
    let mut products = trending_products();
    products.extend(recent_products());
    products
}
