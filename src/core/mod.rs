pub mod constants;
pub mod field;
pub mod geo;
pub mod zoom;
