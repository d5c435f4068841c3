//! Casa De Oro UI Components
//!
//! Dioxus widgets for the pitch page, styled by the global stylesheet in the
//! desktop app.
//!
//! ## Design Language
//!
//! - **Gold (#C5A059)**: accents, highlights, the invest call-to-action
//! - **Casa Black (#0F0F0F)**: dark sections, the solid nav bar
//! - **Cream (#F9F8F4)**: page background
//! - **Stone (#2A2825)**: charts and secondary surfaces
//!
//! Widgets take no input from the page shell. Each owns its display data
//! (from `casadeoro_core::content`) and marks animated parts with
//! `data-reveal` so they play when scrolled into view.

pub mod components;

pub use components::*;
