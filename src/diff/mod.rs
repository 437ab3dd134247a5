pub mod matcher;
pub mod report;
pub mod tokenization;
