pub mod contact;
pub mod health;
pub mod routes;

pub use routes::create_router;
