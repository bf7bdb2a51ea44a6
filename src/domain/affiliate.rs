// src/domain/affiliate.rs
use crate::domain::tiers::TierProgress;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Affiliate {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub joined_at: NaiveDateTime,
}

/// Aggregates behind the client account page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffiliateStats {
    /// Approved + paid commissions.
    pub lifetime_earnings_cents: i64,
    /// Distinct customers on non-rejected commissions.
    pub referrals: i64,
    pub earned_this_month_cents: i64,
    pub pending_commissions_cents: i64,
    /// Payouts pending, processing or completed.
    pub committed_payouts_cents: i64,
}

impl AffiliateStats {
    pub fn available_balance_cents(&self) -> i64 {
        (self.lifetime_earnings_cents - self.committed_payouts_cents).max(0)
    }

    pub fn tier_progress(&self) -> TierProgress {
        TierProgress::compute(self.lifetime_earnings_cents, self.referrals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tiers::Tier;

    #[test]
    fn balance_never_negative() {
        let stats = AffiliateStats {
            lifetime_earnings_cents: 10_000,
            committed_payouts_cents: 12_000,
            ..AffiliateStats::default()
        };
        assert_eq!(stats.available_balance_cents(), 0);
    }

    #[test]
    fn balance_subtracts_committed_payouts() {
        let stats = AffiliateStats {
            lifetime_earnings_cents: 250_000,
            referrals: 12,
            committed_payouts_cents: 50_000,
            ..AffiliateStats::default()
        };
        assert_eq!(stats.available_balance_cents(), 200_000);
        assert_eq!(stats.tier_progress().current, Tier::Silver);
    }
}
