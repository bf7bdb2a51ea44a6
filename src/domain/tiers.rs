// src/domain/tiers.rs

/// Affiliate level. Both thresholds must be met to hold a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

pub struct TierThreshold {
    pub tier: Tier,
    pub min_earnings_cents: i64,
    pub min_referrals: i64,
    pub commission_rate_pct: u8,
}

/// Ascending; the first entry must have zero thresholds.
pub const TIER_THRESHOLDS: &[TierThreshold] = &[
    TierThreshold {
        tier: Tier::Bronze,
        min_earnings_cents: 0,
        min_referrals: 0,
        commission_rate_pct: 10,
    },
    TierThreshold {
        tier: Tier::Silver,
        min_earnings_cents: 100_000,
        min_referrals: 10,
        commission_rate_pct: 15,
    },
    TierThreshold {
        tier: Tier::Gold,
        min_earnings_cents: 500_000,
        min_referrals: 50,
        commission_rate_pct: 20,
    },
    TierThreshold {
        tier: Tier::Platinum,
        min_earnings_cents: 2_000_000,
        min_referrals: 200,
        commission_rate_pct: 25,
    },
];

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }

    pub fn threshold(&self) -> &'static TierThreshold {
        &TIER_THRESHOLDS[*self as usize]
    }

    pub fn commission_rate_pct(&self) -> u8 {
        self.threshold().commission_rate_pct
    }

    pub fn next(&self) -> Option<Tier> {
        TIER_THRESHOLDS.get(*self as usize + 1).map(|t| t.tier)
    }
}

/// Where an affiliate stands and what is left to reach the next tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierProgress {
    pub current: Tier,
    pub next: Option<Tier>,
    pub earnings_pct: u8,
    pub referrals_pct: u8,
    /// The slower of the two metrics.
    pub overall_pct: u8,
    pub earnings_remaining_cents: i64,
    pub referrals_remaining: i64,
}

impl TierProgress {
    pub fn compute(lifetime_earnings_cents: i64, referrals: i64) -> Self {
        let current = TIER_THRESHOLDS
            .iter()
            .rev()
            .find(|t| {
                lifetime_earnings_cents >= t.min_earnings_cents && referrals >= t.min_referrals
            })
            .map(|t| t.tier)
            .unwrap_or(Tier::Bronze);

        let Some(next) = current.next() else {
            return Self {
                current,
                next: None,
                earnings_pct: 100,
                referrals_pct: 100,
                overall_pct: 100,
                earnings_remaining_cents: 0,
                referrals_remaining: 0,
            };
        };

        let target = next.threshold();
        let earnings_pct = percent(lifetime_earnings_cents, target.min_earnings_cents);
        let referrals_pct = percent(referrals, target.min_referrals);

        Self {
            current,
            next: Some(next),
            earnings_pct,
            referrals_pct,
            overall_pct: earnings_pct.min(referrals_pct),
            earnings_remaining_cents: (target.min_earnings_cents - lifetime_earnings_cents).max(0),
            referrals_remaining: (target.min_referrals - referrals).max(0),
        }
    }
}

fn percent(value: i64, target: i64) -> u8 {
    if target <= 0 {
        return 100;
    }
    (value.max(0).saturating_mul(100) / target).clamp(0, 100) as u8
}
