use super::domain::{Product, ProductId, ProductStatus};

fn sizes(values: &[&str]) -> Vec<String> {
    values.iter().map(|size| size.to_string()).collect()
}

/// The sample catalog the storefront ships with before any admin edits.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("prod1"),
            name: "Classic White Shirt".to_string(),
            image: "https://images.unsplash.com/photo-1598033129183-c4f50c736f10".to_string(),
            price: 1200,
            discount_percentage: 20,
            category: "Men's".to_string(),
            subcategory: "Topwear".to_string(),
            description: Some(
                "A timeless classic white shirt that goes with everything. Made from premium cotton for comfort and durability."
                    .to_string(),
            ),
            sizes: sizes(&["S", "M", "L", "XL"]),
            stock: 45,
            rating: Some(4.5),
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("prod2"),
            name: "Blue Denim Jeans".to_string(),
            image: "https://images.unsplash.com/photo-1565084888279-aca607ecce0c".to_string(),
            price: 1800,
            discount_percentage: 15,
            category: "Men's".to_string(),
            subcategory: "Bottomwear".to_string(),
            description: Some(
                "Premium blue denim jeans with a perfect fit. Versatile and comfortable for everyday wear."
                    .to_string(),
            ),
            sizes: sizes(&["30", "32", "34", "36"]),
            stock: 32,
            rating: Some(4.3),
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("prod3"),
            name: "Floral Summer Dress".to_string(),
            image: "https://images.unsplash.com/photo-1496217590455-aa63a8550c23".to_string(),
            price: 1500,
            discount_percentage: 25,
            category: "Women's".to_string(),
            subcategory: "Summerwear".to_string(),
            description: Some(
                "Beautiful floral dress perfect for summer days. Lightweight fabric keeps you cool and comfortable."
                    .to_string(),
            ),
            sizes: sizes(&["XS", "S", "M", "L"]),
            stock: 28,
            rating: Some(4.7),
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("prod4"),
            name: "Sports Running Shoes".to_string(),
            image: "https://images.unsplash.com/photo-1608231387042-66d1773070a5".to_string(),
            price: 2200,
            discount_percentage: 10,
            category: "Men's Shoes".to_string(),
            subcategory: "Sports Shoes".to_string(),
            description: Some(
                "High-performance running shoes with superior cushioning and support for your daily runs."
                    .to_string(),
            ),
            sizes: sizes(&["7", "8", "9", "10", "11"]),
            stock: 18,
            rating: Some(4.6),
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("prod5"),
            name: "Winter Jacket".to_string(),
            image: "https://images.unsplash.com/photo-1611312449408-fcece27cdbb7".to_string(),
            price: 3500,
            discount_percentage: 0,
            category: "Men's".to_string(),
            subcategory: "Winterwear".to_string(),
            description: Some(
                "Warm and stylish winter jacket that protects from the cold while keeping you looking great."
                    .to_string(),
            ),
            sizes: sizes(&["M", "L", "XL", "XXL"]),
            stock: 15,
            rating: Some(4.8),
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("prod6"),
            name: "Casual T-Shirt".to_string(),
            image: "https://images.unsplash.com/photo-1581655353564-df123a1eb820".to_string(),
            price: 800,
            discount_percentage: 0,
            category: "Men's".to_string(),
            subcategory: "Topwear".to_string(),
            description: Some(
                "Comfortable casual t-shirt for everyday wear. Made from soft cotton fabric."
                    .to_string(),
            ),
            sizes: sizes(&["S", "M", "L", "XL"]),
            stock: 0,
            rating: Some(4.2),
            status: ProductStatus::OutOfStock,
        },
    ]
}
