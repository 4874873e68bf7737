pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

pub use endpoints::root::build_app;
