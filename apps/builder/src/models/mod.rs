pub mod dates;
pub mod resume;
pub mod sample;

pub use resume::{
    Education, EntryId, Experience, PersonalInfo, Project, ResumeData, Skill, SkillCategory,
    SkillLevel,
};
