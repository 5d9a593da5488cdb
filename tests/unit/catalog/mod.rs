pub mod policy;
pub mod sorted;
