pub mod checksheet;
pub mod course;
pub mod plan;
pub mod resources;
pub mod user;
