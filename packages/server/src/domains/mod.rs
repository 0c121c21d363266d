// Business domains
pub mod orders;
