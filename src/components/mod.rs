mod about;
mod footer;
mod hero;
mod language_dot;
mod navbar;
mod project_card;
mod project_grid;
mod projects;
mod projects_placeholder;
mod reveal;
mod skills;

pub use about::About;
pub use footer::Footer;
pub use hero::Hero;
pub use language_dot::{language_color, LanguageDot, DEFAULT_LANGUAGE_COLOR};
pub use navbar::{Navbar, SocialLinks};
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use projects::Projects;
pub use projects_placeholder::{FallbackNotice, ProjectsPlaceholder};
pub use reveal::{stagger_delay_ms, Reveal};
pub use skills::Skills;
