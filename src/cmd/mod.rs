pub mod categories;
pub mod report;
pub mod summary;
