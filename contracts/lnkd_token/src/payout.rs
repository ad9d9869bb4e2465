use primitive_types::U256;

/// `floor(pool * balance / eligible_supply)`.
///
/// The product of two 18-decimal amounts overflows `u128`, so it is formed
/// in 256 bits. `None` on a zero denominator.
pub fn pro_rata_share(pool: u128, balance: u128, eligible_supply: u128) -> Option<u128> {
    if eligible_supply == 0 {
        return None;
    }
    let share = U256::from(pool)
        .checked_mul(U256::from(balance))?
        .checked_div(U256::from(eligible_supply))?;
    u128::try_from(share).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn floors_each_share() {
        assert_eq!(pro_rata_share(1_000, 1_000, 3_000), Some(333));
        assert_eq!(pro_rata_share(1_000, 2_000, 3_000), Some(666));
    }

    #[test]
    fn zero_supply_has_no_share() {
        assert_eq!(pro_rata_share(1_000, 0, 0), None);
    }

    #[test]
    fn full_supply_holder_takes_whole_pool() {
        let supply = 1_000_000_000 * ONE;
        assert_eq!(pro_rata_share(1_000_000 * ONE, supply, supply), Some(1_000_000 * ONE));
    }

    #[test]
    fn wide_intermediate_does_not_overflow() {
        let supply = 1_000_000_000 * ONE;
        let pool = 5_000_000 * ONE;
        assert_eq!(pro_rata_share(pool, supply / 4, supply), Some(pool / 4));
    }
}
