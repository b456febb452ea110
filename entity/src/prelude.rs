pub use super::bluetooth_connection::Entity as BluetoothConnection;
pub use super::map::Entity as Map;
pub use super::motorbike::Entity as Motorbike;
pub use super::motorbike_photo::Entity as MotorbikePhoto;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::ride::Entity as Ride;
pub use super::user::Entity as User;
