pub mod country;
pub mod mineral;
pub mod production;
pub mod role;
pub mod site;
pub mod user;

pub use country::{Country, CountryView};
pub use mineral::{Mineral, MineralView};
pub use production::{ProductionStats, ProductionStatsView};
pub use role::Role;
pub use site::{Site, SiteView};
pub use user::{User, UserView};
