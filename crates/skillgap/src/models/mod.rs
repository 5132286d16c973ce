pub mod role;
pub mod skill;

pub use role::{ExperienceLevel, GrowthPotential, JobRole};
pub use skill::{SkillEntry, SkillLevel};
