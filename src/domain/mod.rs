pub mod entities;
pub mod errors;
pub mod partial_update;
pub mod value_objects;
