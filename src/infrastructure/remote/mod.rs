pub mod http;

pub use http::HttpDashboardClient;
