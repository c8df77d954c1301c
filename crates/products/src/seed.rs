//! Reference catalog contents.

use crate::product::{AggregateRating, Availability, Price, Product};

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    category: [&str; 3],
    price_cents: u64,
    image: &str,
    brand: &str,
    sku: &str,
    rating: (f64, u32),
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.iter().map(|c| c.to_string()).collect(),
        price: Price::from_minor(price_cents),
        currency: "USD".to_string(),
        image: image.to_string(),
        availability: Availability::InStock,
        brand: brand.to_string(),
        sku: sku.to_string(),
        rating: Some(AggregateRating {
            value: rating.0,
            review_count: rating.1,
        }),
    }
}

pub(crate) fn reference_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Wireless Bluetooth Headphones Pro",
            "Premium wireless headphones with active noise cancellation, 30-hour battery life, and crystal-clear sound quality. Perfect for music lovers and professionals on the go.",
            ["Electronics", "Audio", "Headphones"],
            19_999,
            "/images/wireless-headphones-pro.jpg",
            "AudioTech",
            "ATH-WHP-001",
            (4.5, 324),
        ),
        product(
            "2",
            "Organic Cotton T-Shirt",
            "Comfortable and sustainable organic cotton t-shirt made from 100% certified organic materials. Soft, breathable, and perfect for everyday wear. Available in multiple colors.",
            ["Clothing", "Apparel", "T-Shirts"],
            2_999,
            "/images/organic-cotton-tshirt.jpg",
            "EcoWear",
            "EW-OC-TS-002",
            (4.7, 156),
        ),
        product(
            "3",
            "Stainless Steel Water Bottle",
            "Durable 32oz insulated stainless steel water bottle that keeps drinks cold for 24 hours or hot for 12 hours. BPA-free, leak-proof design with a wide mouth for easy cleaning.",
            ["Home & Kitchen", "Drinkware", "Water Bottles"],
            3_499,
            "/images/stainless-steel-bottle.jpg",
            "HydroLife",
            "HL-SSB-003",
            (4.8, 892),
        ),
        product(
            "4",
            "Premium Coffee Beans - Dark Roast",
            "Artisan-roasted single-origin coffee beans from Ethiopia. Rich, bold flavor with notes of chocolate and caramel. Perfect for espresso and drip coffee. 12oz bag.",
            ["Food & Beverage", "Coffee", "Coffee Beans"],
            1_899,
            "/images/premium-coffee-beans.jpg",
            "RoastMaster",
            "RM-PCB-005",
            (4.9, 234),
        ),
    ]
}
