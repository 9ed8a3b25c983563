//! Scroll-synced section viewer. A page is parsed into titled sections
//! with a nav menu mirroring them; whichever sections currently sit
//! inside the viewport's activation band are marked active on every
//! pass.

pub mod config;
pub mod debug_log;
pub mod gui;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod spy;

pub use config::{Config, ThemeMode};
pub use nav::{build_entries, rebuild_menu, NavEntry, NavMenu};
pub use page::{Page, Section};
pub use scroll::ScrollAnimation;
pub use spy::{bounding_top, monitor_pass, ActivationBand, PageGeometry};
