//! Default brand catalogue.

use crate::repositories::BrandRepo;
use crate::DbPool;

/// Manufacturer names inserted by [`seed_brands`].
pub const BRAND_NAMES: &[&str] = &[
    "Toyota",
    "Ford",
    "Chevrolet",
    "Honda",
    "Nissan",
    "Volkswagen",
    "Hyundai",
    "Kia",
    "Subaru",
    "Mazda",
    "Mercedes-Benz",
    "BMW",
    "Audi",
    "Lexus",
    "Jeep",
    "Dodge",
    "Ram",
    "GMC",
    "Buick",
    "Cadillac",
    "Chrysler",
    "Acura",
    "Infiniti",
    "Lincoln",
    "Volvo",
    "Porsche",
    "Jaguar",
    "Land Rover",
    "Mini",
    "Mitsubishi",
    "Fiat",
    "Alfa Romeo",
    "Genesis",
    "Tesla",
    "Polestar",
    "Suzuki",
    "Peugeot",
    "Renault",
    "Citroën",
    "Skoda",
    "Seat",
    "Saab",
    "Opel",
    "Holden",
    "Isuzu",
    "Dacia",
    "SsangYong",
    "Mahindra",
    "Tata",
    "Great Wall",
];

/// Insert every name in [`BRAND_NAMES`] that is not already stored.
///
/// Safe to run repeatedly. Returns the number of brands inserted.
pub async fn seed_brands(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let inserted = BrandRepo::seed(&mut conn, BRAND_NAMES).await?;
    tracing::info!(inserted, total = BRAND_NAMES.len(), "Seeded brands");
    Ok(inserted)
}
