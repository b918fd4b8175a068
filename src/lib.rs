pub mod db;
pub mod error;
pub mod extract;
pub mod notification;
pub mod routes;
pub mod state;
pub mod user;
