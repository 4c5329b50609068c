// Portfolio page sections

/// Build tag shown in the footer (single source of truth)
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

mod experience;
mod footer;
mod icons;
mod nav;
mod profile;
mod projects;
mod skills;

pub use experience::ExperienceSection;
pub use footer::Footer;
pub use icons::{ICON_BRIEFCASE, ICON_CHEVRON_DOWN, ICON_CODE, ICON_LAYERS, Icon};
pub use nav::{NavBar, nav_link_class};
pub use profile::ProfileSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
