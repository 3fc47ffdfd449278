pub mod auth_service;
pub mod data_service;
pub mod viz_service;

pub use auth_service::AuthService;
pub use data_service::DataService;
pub use viz_service::{StatsFilter, VizService};
