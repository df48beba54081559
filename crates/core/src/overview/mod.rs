//! Month refresh: recurring synthesis followed by the month's aggregates.

mod overview_model;
mod overview_service;


pub use overview_model::MonthOverview;
pub use overview_service::{OverviewService, OverviewServiceTrait};
