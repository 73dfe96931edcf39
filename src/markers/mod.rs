pub mod descriptor;
pub mod handle;
pub mod location;
pub mod pool;
