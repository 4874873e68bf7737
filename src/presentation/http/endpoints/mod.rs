pub mod health;
pub mod root;
pub mod stats;
pub mod users;
