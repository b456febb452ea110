//! OpenAPI document served by Swagger UI.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::model::{
    api::{ErrorDto, HealthDto},
    auth::{LoginDto, RefreshTokenDto, TokenPairDto},
    connection::{ConnectDto, ConnectionDto},
    map::{CreateMapDto, MapDto, UpdateMapDto},
    motorbike::{
        CreateMotorbikeDto, LockStatusDto, MotorbikeDto, MotorbikePhotoDto, MotorbikeStatusDto,
        UpdateLockStatusDto, UpdateMotorbikeDto, UpdateMotorbikeStatusDto,
    },
    ride::{CreateRideDto, RideDto, RidePhotoForm, UpdateRideDto},
    user::{CreateUserDto, UpdateMeDto, UpdateUserDto, UserDto, UserRoleDto, UserSummaryDto},
};

use super::controller::{auth, connection, health, map, motorbike, ride, user};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Motorbike Rental API",
        description = "Rent motorbikes: accounts, fleet registry, bluetooth pairing, rides and billing."
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "system", description = "Liveness and version"),
        (name = "auth", description = "Login, token refresh and logout"),
        (name = "user", description = "Accounts"),
        (name = "motorbike", description = "Motorbike registry, availability and lock state"),
        (name = "connection", description = "Bluetooth pairing between riders and motorbikes"),
        (name = "ride", description = "Ride lifecycle, photos and billing"),
        (name = "map", description = "Location metadata per motorbike")
    ),
    paths(
        health::health,
        health::version,
        auth::login,
        auth::admin_login,
        auth::refresh,
        auth::logout,
        user::register,
        user::create_admin,
        user::get_me,
        user::update_me,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        motorbike::create_motorbike,
        motorbike::get_motorbikes,
        motorbike::get_available_motorbikes,
        motorbike::get_maintenance_motorbikes,
        motorbike::get_rented_motorbikes,
        motorbike::get_motorbike,
        motorbike::update_motorbike,
        motorbike::delete_motorbike,
        motorbike::get_motorbike_photos,
        motorbike::update_motorbike_status,
        motorbike::update_motorbike_lock_status,
        connection::connect,
        connection::disconnect,
        connection::get_connections,
        connection::get_connection,
        connection::get_motorbike_connections,
        connection::get_user_connections,
        connection::delete_connection,
        ride::create_ride,
        ride::submit_ride_photo,
        ride::finish_ride,
        ride::get_rides,
        ride::get_ride,
        ride::update_ride,
        ride::delete_ride,
        ride::get_user_rides,
        ride::get_user_ride,
        ride::get_user_rides_between,
        ride::get_rides_between,
        ride::get_motorbike_rides,
        map::create_map,
        map::get_maps,
        map::get_map,
        map::update_map,
        map::delete_map,
        map::get_motorbike_map,
        map::update_motorbike_map,
    ),
    components(
        schemas(
            ErrorDto,
            HealthDto,
            LoginDto,
            RefreshTokenDto,
            TokenPairDto,
            UserDto,
            UserSummaryDto,
            UserRoleDto,
            CreateUserDto,
            UpdateUserDto,
            UpdateMeDto,
            MotorbikeDto,
            MotorbikePhotoDto,
            MotorbikeStatusDto,
            LockStatusDto,
            CreateMotorbikeDto,
            UpdateMotorbikeDto,
            UpdateMotorbikeStatusDto,
            UpdateLockStatusDto,
            ConnectionDto,
            ConnectDto,
            RideDto,
            CreateRideDto,
            UpdateRideDto,
            RidePhotoForm,
            MapDto,
            CreateMapDto,
            UpdateMapDto,
        )
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
