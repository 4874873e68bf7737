pub mod stats;
pub mod user;

pub use stats::{GrowthPoint, SampleMetrics, UserStats};
pub use user::{NewUser, User, UserPatch, UserRole, UserStatus};
