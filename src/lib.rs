//! Tab-bar layout and rendering engine.
//!
//! The crate positions an ordered row of tabs inside a bar region, decides how
//! they are sized and justified, and emits primitive draw commands for each
//! tab's background, the active-tab highlight and the half-tab chevrons that
//! mark a row cut off at the bar's edge.
//!
//! Layout math (`layout`) is pure; drawing goes through the [`render::DrawSurface`]
//! trait and label/content placement through [`navbar::TabHost`], so the host
//! toolkit is always an injected collaborator.

pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod navbar;
pub mod render;

pub use error::NavBarError;
pub use navbar::{LayoutSnapshot, NavBar, Tab, TabHost, TabId, TabStyle};
