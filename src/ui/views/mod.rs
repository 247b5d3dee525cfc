pub mod dashboard;
pub mod lesson;
pub mod quiz;
pub mod results;
