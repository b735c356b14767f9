//! Team members module - domain models, services, and traits.

mod team_members_model;
mod team_members_service;
mod team_members_traits;

#[cfg(test)]
mod team_members_service_tests;

pub use team_members_model::{Mood, TeamMember};
pub use team_members_service::TeamMemberService;
pub use team_members_traits::{TeamMemberRepositoryTrait, TeamMemberServiceTrait};
