pub mod checksheet;
pub mod course;
pub mod equivalent;
pub mod plan;
pub mod requisite;
