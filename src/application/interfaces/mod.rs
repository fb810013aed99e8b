/// Resource adapter interface driving the generic CRUD service
pub mod resource;

pub use resource::*;
