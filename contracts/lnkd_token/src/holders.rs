use ink::primitives::AccountId;
use ink::storage::Mapping;

/// Ordered index of reward-eligible holders.
///
/// `entries` is the dense sequence `0..len`, `positions` the reverse index
/// `account → slot`. Every operation touches a constant number of storage
/// cells: removal moves the last entry into the vacated slot and pops, so
/// slots are stable only until the next removal.
#[ink::storage_item]
#[cfg_attr(feature = "std", derive(Debug))]
pub struct HolderRegistry {
    entries: Mapping<u32, AccountId>,
    positions: Mapping<AccountId, u32>,
    len: u32,
}

impl HolderRegistry {
    pub fn new() -> Self {
        Self {
            entries: Mapping::new(),
            positions: Mapping::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, account: AccountId) -> bool {
        self.positions.contains(account)
    }

    /// Holder at `index`, or `None` past the end.
    pub fn get(&self, index: u32) -> Option<AccountId> {
        if index >= self.len {
            return None;
        }
        self.entries.get(index)
    }

    /// Appends `account`. Returns `false` if it was already present.
    pub fn insert(&mut self, account: AccountId) -> bool {
        if self.contains(account) {
            return false;
        }
        let slot = self.len;
        self.entries.insert(slot, &account);
        self.positions.insert(account, &slot);
        self.len = slot.saturating_add(1);
        true
    }

    /// Swap-and-pop removal. Returns `false` if `account` was not present.
    pub fn remove(&mut self, account: AccountId) -> bool {
        let Some(slot) = self.positions.get(account) else {
            return false;
        };
        let last = self.len.saturating_sub(1);

        if slot != last {
            if let Some(moved) = self.entries.get(last) {
                self.entries.insert(slot, &moved);
                self.positions.insert(moved, &slot);
            }
        }

        self.entries.remove(last);
        self.positions.remove(account);
        self.len = last;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(n: u8) -> AccountId {
        AccountId::from([n; 32])
    }

    fn filled(n: u8) -> HolderRegistry {
        let mut registry = HolderRegistry::new();
        for i in 1..=n {
            assert!(registry.insert(account(i)));
        }
        registry
    }

    #[ink::test]
    fn insert_appends_in_order() {
        let registry = filled(3);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(0), Some(account(1)));
        assert_eq!(registry.get(2), Some(account(3)));
        assert_eq!(registry.get(3), None);
    }

    #[ink::test]
    fn insert_twice_is_rejected() {
        let mut registry = filled(2);
        assert!(!registry.insert(account(1)));
        assert_eq!(registry.len(), 2);
    }

    #[ink::test]
    fn remove_middle_moves_last_into_slot() {
        let mut registry = filled(4);
        assert!(registry.remove(account(2)));

        assert_eq!(registry.len(), 3);
        assert!(!registry.contains(account(2)));
        assert_eq!(registry.get(1), Some(account(4)));
        assert_eq!(registry.get(3), None);

        // the moved entry's reverse index must follow it
        assert!(registry.remove(account(4)));
        assert_eq!(registry.get(1), Some(account(3)));
        assert_eq!(registry.len(), 2);
    }

    #[ink::test]
    fn remove_last_and_only() {
        let mut registry = filled(1);
        assert!(registry.remove(account(1)));
        assert!(registry.is_empty());
        assert_eq!(registry.get(0), None);
        assert!(registry.insert(account(1)));
        assert_eq!(registry.get(0), Some(account(1)));
    }

    #[ink::test]
    fn remove_absent_is_noop() {
        let mut registry = filled(2);
        assert!(!registry.remove(account(9)));
        assert_eq!(registry.len(), 2);
    }
}
