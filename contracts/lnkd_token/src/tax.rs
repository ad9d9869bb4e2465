use crate::constants::{AUTO_BUY_TAX_BPS, BPS_DENOMINATOR, TAX_PERCENTAGE_BPS, TREASURY_TAX_BPS};
use ink::primitives::AccountId;

/// Direction of a movement relative to the registered liquidity pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    /// Neither side is a pair.
    Wallet,
    /// Pair → wallet.
    Buy,
    /// Wallet → pair.
    Sell,
    /// Pair → pair.
    PairToPair,
}

impl TradeKind {
    pub fn classify(from_is_pair: bool, to_is_pair: bool) -> Self {
        match (from_is_pair, to_is_pair) {
            (false, false) => TradeKind::Wallet,
            (true, false) => TradeKind::Buy,
            (false, true) => TradeKind::Sell,
            (true, true) => TradeKind::PairToPair,
        }
    }

    pub fn is_pool_facing(self) -> bool {
        self != TradeKind::Wallet
    }

    /// Only a buy or a sell against exactly one pair is taxable.
    pub fn is_taxable(self) -> bool {
        matches!(self, TradeKind::Buy | TradeKind::Sell)
    }

    /// Account whose last-trade timestamp a successful movement refreshes.
    /// A pair-to-pair move has no trader.
    pub fn trader(self, from: AccountId, to: AccountId) -> Option<AccountId> {
        match self {
            TradeKind::Buy => Some(to),
            TradeKind::PairToPair => None,
            TradeKind::Wallet | TradeKind::Sell => Some(from),
        }
    }
}

/// Per-movement split between recipient, treasury and the contract itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaxSplit {
    pub net: u128,
    pub treasury: u128,
    pub auto: u128,
}

impl TaxSplit {
    pub fn untaxed(amount: u128) -> Self {
        Self {
            net: amount,
            treasury: 0,
            auto: 0,
        }
    }

    /// `net = amount - amount*2%`, shares at 1% each, all truncating.
    ///
    /// The shares are truncated independently of the total tax, so
    /// `net + treasury + auto` can fall one unit short of `amount`; that unit
    /// is never debited.
    pub fn taxed(amount: u128) -> Option<Self> {
        let tax = bps_of(amount, TAX_PERCENTAGE_BPS)?;
        Some(Self {
            net: amount.checked_sub(tax)?,
            treasury: bps_of(amount, TREASURY_TAX_BPS)?,
            auto: bps_of(amount, AUTO_BUY_TAX_BPS)?,
        })
    }

    /// Total leaving the sender.
    pub fn debit(&self) -> Option<u128> {
        self.net.checked_add(self.treasury)?.checked_add(self.auto)
    }

    pub fn is_taxed(&self) -> bool {
        self.treasury > 0 || self.auto > 0
    }
}

fn bps_of(amount: u128, bps: u128) -> Option<u128> {
    amount.checked_mul(bps)?.checked_div(BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_add_up() {
        assert_eq!(TREASURY_TAX_BPS + AUTO_BUY_TAX_BPS, TAX_PERCENTAGE_BPS);
    }

    #[test]
    fn classify_covers_all_pairings() {
        assert_eq!(TradeKind::classify(false, false), TradeKind::Wallet);
        assert_eq!(TradeKind::classify(true, false), TradeKind::Buy);
        assert_eq!(TradeKind::classify(false, true), TradeKind::Sell);
        assert_eq!(TradeKind::classify(true, true), TradeKind::PairToPair);

        assert!(!TradeKind::Wallet.is_pool_facing());
        assert!(TradeKind::PairToPair.is_pool_facing());
        assert!(!TradeKind::PairToPair.is_taxable());
    }

    #[test]
    fn trader_is_the_non_pool_side() {
        let wallet = AccountId::from([1; 32]);
        let pair = AccountId::from([2; 32]);
        assert_eq!(TradeKind::Buy.trader(pair, wallet), Some(wallet));
        assert_eq!(TradeKind::Sell.trader(wallet, pair), Some(wallet));
        assert_eq!(TradeKind::Wallet.trader(wallet, pair), Some(wallet));
        assert_eq!(TradeKind::PairToPair.trader(pair, wallet), None);
    }

    #[test]
    fn hundred_units_split_98_1_1() {
        let split = TaxSplit::taxed(100).unwrap();
        assert_eq!(split, TaxSplit { net: 98, treasury: 1, auto: 1 });
        assert_eq!(split.debit(), Some(100));
        assert!(split.is_taxed());
    }

    #[test]
    fn truncation_remainder_is_not_debited() {
        // tax = 3, shares = 1 + 1: one unit stays with the sender
        let split = TaxSplit::taxed(199).unwrap();
        assert_eq!(split.net, 196);
        assert_eq!(split.debit(), Some(198));
    }

    #[test]
    fn dust_amounts_pay_no_tax() {
        let split = TaxSplit::taxed(49).unwrap();
        assert_eq!(split, TaxSplit::untaxed(49));
        assert!(!split.is_taxed());
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(TaxSplit::taxed(u128::MAX), None);
    }
}
