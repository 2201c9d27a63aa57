pub mod colors;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod sections;
pub mod skills;
