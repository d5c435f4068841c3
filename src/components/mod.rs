//! UI components for the Casa De Oro pitch page.
//!
//! Reusable widgets live in `casadeoro-ui`; these are the app-specific
//! pieces wired to the page shell context.

mod mobile_menu;
mod nav_bar;
pub mod scenes;
pub mod sections;

pub use mobile_menu::MobileMenu;
pub use nav_bar::NavBar;
pub use scenes::{ArchitectureBackdrop, HeroBackdrop, SceneDefs, SceneView};
