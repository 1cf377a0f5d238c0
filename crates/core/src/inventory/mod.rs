pub mod catalog;
pub mod criteria;
pub mod matcher;
