pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_refresh_token_table;
mod m20251020_000003_create_motorbike_table;
mod m20251020_000004_create_motorbike_photo_table;
mod m20251020_000005_create_bluetooth_connection_table;
mod m20251020_000006_create_ride_table;
mod m20251020_000007_create_map_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_refresh_token_table::Migration),
            Box::new(m20251020_000003_create_motorbike_table::Migration),
            Box::new(m20251020_000004_create_motorbike_photo_table::Migration),
            Box::new(m20251020_000005_create_bluetooth_connection_table::Migration),
            Box::new(m20251020_000006_create_ride_table::Migration),
            Box::new(m20251020_000007_create_map_table::Migration),
        ]
    }
}
