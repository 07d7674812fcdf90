// Presentation layer - Command line and report rendering
pub mod cli;
pub mod report;
