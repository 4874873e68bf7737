use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: String,
    pub users: u64,
}

impl GrowthPoint {
    pub fn new(month: impl Into<String>, users: u64) -> Self {
        Self {
            month: month.into(),
            users,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub new_signups: u64,
    pub user_growth: Vec<GrowthPoint>,
}

/// Placeholder figures for the stats fields that are not derived from the
/// user collection. They never react to store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMetrics {
    new_signups: u64,
    user_growth: Vec<GrowthPoint>,
}

impl SampleMetrics {
    pub fn new(new_signups: u64, user_growth: Vec<GrowthPoint>) -> DomainResult<Self> {
        if let Some(pair) = user_growth.windows(2).find(|w| w[1].users < w[0].users) {
            return Err(DomainError::invalid(format!(
                "user growth must not decrease ({} -> {})",
                pair[0].month, pair[1].month
            )));
        }

        Ok(Self {
            new_signups,
            user_growth,
        })
    }

    pub fn new_signups(&self) -> u64 {
        self.new_signups
    }

    pub fn user_growth(&self) -> &[GrowthPoint] {
        &self.user_growth
    }
}

impl Default for SampleMetrics {
    fn default() -> Self {
        Self {
            new_signups: 5,
            user_growth: vec![
                GrowthPoint::new("Jan", 100),
                GrowthPoint::new("Feb", 150),
                GrowthPoint::new("Mar", 180),
                GrowthPoint::new("Apr", 220),
                GrowthPoint::new("May", 270),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_growth_is_non_decreasing() {
        let metrics = SampleMetrics::default();
        let rebuilt = SampleMetrics::new(metrics.new_signups(), metrics.user_growth().to_vec());
        assert_eq!(rebuilt, Ok(metrics));
    }

    #[test]
    fn decreasing_growth_is_rejected() {
        let err = SampleMetrics::new(
            0,
            vec![GrowthPoint::new("Jan", 10), GrowthPoint::new("Feb", 9)],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn stats_serialize_in_camel_case() {
        let stats = UserStats {
            total_users: 2,
            active_users: 1,
            new_signups: 5,
            user_growth: vec![GrowthPoint::new("Jan", 100)],
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalUsers"], 2);
        assert_eq!(json["activeUsers"], 1);
        assert_eq!(json["newSignups"], 5);
        assert_eq!(json["userGrowth"][0]["month"], "Jan");
    }
}
