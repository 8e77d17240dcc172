pub mod catalog;
pub mod plan;

pub use catalog::CatalogService;
pub use plan::PlanService;
