//! Selection profiles.
//!
//! A profile is a saved snapshot of the selection record and the free-text
//! inputs, plus a few tool settings. Profiles are YAML by default; files with a
//! `.json` extension are read and written as JSON. Every section and field is
//! optional, so a partial profile fills the rest from the startup defaults.
//!
//! The profile path comes from `--profile`, else the `AIRBRUSH_PROFILE`
//! environment variable, else no profile is loaded and defaults are used.

mod model;
mod operations;


pub use model::{DEFAULT_PROFILE_FILE, HISTORY_ENV, PROFILE_ENV, Profile, ProfileFormat};
pub use operations::resolve_profile_path;
