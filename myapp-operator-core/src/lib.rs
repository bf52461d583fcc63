pub mod helpers;
pub mod kubernetes;
pub mod resources;

pub const FIELD_MANAGER: &str = "myapp-operator";
