pub mod plan;

pub use plan::{plan, ReconcilePlan};
