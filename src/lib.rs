pub mod clean;
pub mod fetch;
pub mod model;
pub mod plot;
pub mod store;
pub mod types;
pub mod vector;
