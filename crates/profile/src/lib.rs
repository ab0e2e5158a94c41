// File: crates/profile/src/lib.rs
// Summary: Profile dashboard data: sign-in, the GraphQL query, reshaping and chart builders.

pub mod charts;
pub mod client;
pub mod error;
pub mod model;
pub mod reshape;

pub use charts::{audit_ratio_pie, interactions_radar, xp_bar, Colors, Dashboard};
pub use client::{parse_profile, sign_in, GraphQlClient};
pub use error::ProfileError;
pub use model::{ProfileData, PROFILE_QUERY};
pub use reshape::{count_interactions, groups, top_skills, xp_shares};
