//! Routed Pages

mod home;
mod create_collector_point;

pub use home::Home;
pub use create_collector_point::CreateCollectorPoint;
