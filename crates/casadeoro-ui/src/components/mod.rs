//! Reusable widgets for the pitch page

mod button;
mod icons;
mod investment_chart;
mod location_viz;
mod menu_preview;
mod revenue_chart;
mod team_card;

pub use button::*;
pub use icons::*;
pub use investment_chart::*;
pub use location_viz::*;
pub use menu_preview::*;
pub use revenue_chart::*;
pub use team_card::*;

/// Attribute value that opts an element into reveal-on-scroll
pub const REVEAL: &str = "true";
