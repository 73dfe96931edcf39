pub mod batcher;
pub mod dispatcher;
