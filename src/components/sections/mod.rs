//! Page sections, in document order.
//!
//! Every navigable section renders its root element with the anchor id of
//! its `Section`, which is what the navigator measures.

mod contact;
mod experience;
mod financials;
mod footer;
mod hero;
mod location;
mod vision;

pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use financials::FinancialsSection;
pub use footer::SiteFooter;
pub use hero::HeroSection;
pub use location::LocationSection;
pub use vision::VisionSection;
