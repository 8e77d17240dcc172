pub mod checksheets;
pub mod courses;
pub mod health;
pub mod resources;
pub mod users;
