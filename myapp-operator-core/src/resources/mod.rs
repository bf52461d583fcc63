pub mod crd;
pub mod cronjob;
pub mod labels;
pub mod namespace;
pub mod policy;
