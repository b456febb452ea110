mod connection;
mod map;
mod motorbike;
mod refresh_token;
mod ride;
mod user;
