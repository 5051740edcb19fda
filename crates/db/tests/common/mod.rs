use vehicle_manager_db::models::brand::CreateBrand;
use vehicle_manager_db::models::vehicle::CreateVehicle;
use vehicle_manager_db::DbPool;

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = vehicle_manager_db::connect_in_memory()
        .await
        .expect("in-memory pool");
    vehicle_manager_db::run_migrations(&pool)
        .await
        .expect("migrations");
    pool
}

pub fn new_brand(name: &str) -> CreateBrand {
    CreateBrand {
        name: name.to_string(),
    }
}

pub fn new_vehicle(brand_id: i64, model: &str, color: &str, year: i32) -> CreateVehicle {
    CreateVehicle {
        model: model.to_string(),
        brand_id,
        color: color.to_string(),
        year,
        description: None,
        is_sold: false,
    }
}
