use crate::models::InsertProperty;

fn property(
    name: &str,
    location: &str,
    description: &str,
    rental_price: &str,
    sale_price: &str,
    size: i32,
    bedrooms: i32,
    bathrooms: i32,
    image: &str,
    featured: bool,
) -> InsertProperty {
    InsertProperty {
        name: name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        rental_price: Some(rental_price.to_string()),
        sale_price: Some(sale_price.to_string()),
        size,
        bedrooms,
        bathrooms,
        image: image.to_string(),
        featured: Some(if featured { "true" } else { "false" }.to_string()),
    }
}

/// Fixed sample catalog shown on a fresh deployment. The memory backend
/// seeds it on construction; SQLite seeds it only into an empty table
/// outside production.
pub fn sample_properties() -> Vec<InsertProperty> {
    vec![
        property(
            "Vanilla Apartment",
            "Rehab City, New Cairo",
            "Luxurious 3-bedroom apartment with stunning city views, modern amenities, \
             and elegant interiors. Perfect for families seeking premium living.",
            "3500",
            "450000",
            180,
            3,
            2,
            "/assets/generated_images/Luxury_bedroom_interior_24da5850.png",
            true,
        ),
        property(
            "Hilton Nile Residence",
            "Maadi, Cairo",
            "Premium waterfront apartment with panoramic Nile views. Features include \
             marble flooring, designer kitchen, and exclusive amenities.",
            "4200",
            "520000",
            200,
            3,
            3,
            "/assets/generated_images/Luxury_kitchen_interior_50342f99.png",
            true,
        ),
        property(
            "Sky Tower Penthouse",
            "New Cairo",
            "Elegant penthouse suite with floor-to-ceiling windows and private terrace. \
             Experience luxury living at its finest with smart home integration.",
            "5500",
            "680000",
            250,
            4,
            4,
            "/assets/generated_images/Hero_luxury_apartment_interior_82aea2df.png",
            true,
        ),
        property(
            "Garden View Villa",
            "Heliopolis",
            "Spacious villa-style apartment with private garden and pool access. \
             Perfect blend of indoor-outdoor living with premium finishes.",
            "4800",
            "595000",
            220,
            4,
            3,
            "/assets/generated_images/Rooftop_pool_amenity_76940a51.png",
            true,
        ),
        property(
            "Executive Studio",
            "New Cairo",
            "Modern studio apartment ideal for professionals. Fully furnished with \
             contemporary design, high-speed internet, and 24/7 concierge.",
            "1800",
            "220000",
            65,
            1,
            1,
            "/assets/generated_images/Luxury_bathroom_interior_2cc7de56.png",
            false,
        ),
        property(
            "Diplomat Suite",
            "Maadi, Cairo",
            "Prestigious 2-bedroom suite in diplomatic district. Features include \
             marble bathrooms, gourmet kitchen, and private balcony.",
            "3200",
            "410000",
            150,
            2,
            2,
            "/assets/generated_images/Luxury_fitness_center_c4fd52da.png",
            false,
        ),
        property(
            "Oasis Residence",
            "Rehab City, New Cairo",
            "Serene apartment with garden views and resort-style amenities. Includes \
             gym access, swimming pool, and children's play area.",
            "2900",
            "365000",
            140,
            2,
            2,
            "/assets/generated_images/Luxury_fitness_center_c4fd52da.png",
            false,
        ),
        property(
            "Premium Loft",
            "New Cairo",
            "Contemporary loft apartment with high ceilings and open-plan design. \
             Features designer furniture and state-of-the-art appliances.",
            "3800",
            "475000",
            175,
            2,
            2,
            "/assets/generated_images/Luxury_bedroom_interior_24da5850.png",
            false,
        ),
    ]
}
