#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod holders;
mod payout;
mod tax;

pub mod constants {
    pub const TOKEN_NAME: &str = "LNKD Token";
    pub const TOKEN_SYMBOL: &str = "LNKD";
    pub const DECIMALS: u8 = 18;

    pub const SCALING_FACTOR: u128 = 1_000_000_000_000_000_000u128;
    pub const TOTAL_SUPPLY: u128 = 1_000_000_000 * SCALING_FACTOR;

    pub const BPS_DENOMINATOR: u128 = 10_000;

    /// 2% on every buy and sell against a registered pair.
    pub const TAX_PERCENTAGE_BPS: u128 = 200;
    /// 1% routed to the treasury wallet.
    pub const TREASURY_TAX_BPS: u128 = 100;
    /// 1% retained by the token contract for buy-back.
    pub const AUTO_BUY_TAX_BPS: u128 = 100;

    pub const FRONT_RUNNING_COOLDOWN_SECS: u64 = 30;
    /// Block timestamps are milliseconds.
    pub const FRONT_RUNNING_COOLDOWN_MS: u64 = FRONT_RUNNING_COOLDOWN_SECS * 1_000;

    pub const ZERO_ADDRESS: [u8; 32] = [0u8; 32];
}

/// # LNKD Token: Ledger, Tax Engine & Reward Distributor
///
/// Fixed-supply PSP22-shaped token. Every movement passes one gatekeeper
/// (`transfer_impl`) that applies, in order: pause, trading gate,
/// front-running cooldown, tax split, atomic commit, holder-index refresh.
///
/// ```text
/// TAX ROUTING (exactly one side is a registered pair, nobody excluded):
///   BUY / SELL (2.00%):  treasury 1.00%  |  contract 1.00%
///   wallet ↔ wallet, pair ↔ pair, any excluded side:  0%
/// ```
///
/// Rewards are paid in the configured stablecoin, pro rata to the LNKD
/// balances of registered holders. The holder index keeps a reverse map so
/// membership changes are O(1); payouts can be chunked with
/// `distribute_rewards_batch` so no single call has to walk every holder.
#[ink::contract]
mod lnkd_token {
    use crate::constants::*;
    use crate::holders::HolderRegistry;
    use crate::payout::pro_rata_share;
    use crate::tax::{TaxSplit, TradeKind};
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::env::DefaultEnvironment;
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    // =========================================================================
    // STORAGE
    // =========================================================================

    /// Stablecoin snapshot shared by the batches of one distribution round.
    ///
    /// Each batch pays out of the pool, so reading the live balance per batch
    /// would shrink later batches. A round opens at slot 0, continues only
    /// from `next`, and closes once a batch reaches the end of the registry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct BatchRound {
        pub pool: Balance,
        /// First slot the next batch must start at.
        pub next: u32,
    }

    #[ink(storage)]
    pub struct LnkdToken {
        // ── Ledger ────────────────────────────────────────────────────────
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // ── Access control ────────────────────────────────────────────────
        owner: AccountId,

        // ── Configuration ─────────────────────────────────────────────────
        treasury_wallet: AccountId,
        intl_token: AccountId,
        wbnb_token: AccountId,
        /// Reward asset.
        stablecoin: AccountId,
        pancake_router: AccountId,
        pancake_factory: AccountId,

        // ── Policy flags ──────────────────────────────────────────────────
        excluded_from_tax: Mapping<AccountId, bool>,
        excluded_from_rewards: Mapping<AccountId, bool>,
        liquidity_pairs: Mapping<AccountId, bool>,
        trading_enabled: bool,
        paused: bool,

        // ── Front-running guard ───────────────────────────────────────────
        last_trade_time: Mapping<AccountId, Timestamp>,

        // ── Rewards ───────────────────────────────────────────────────────
        holders: HolderRegistry,
        /// Σ balances of registered, non-excluded holders.
        eligible_supply: Balance,
        batch_round: Option<BatchRound>,
        total_rewards_distributed: Balance,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    /// Emitted on every taxed buy or sell, after the three movements.
    #[ink(event)]
    pub struct TaxCollected {
        #[ink(topic)]
        from: AccountId,
        treasury_share: Balance,
        auto_share: Balance,
    }

    #[ink(event)]
    pub struct HolderAdded {
        #[ink(topic)]
        account: AccountId,
        index: u32,
    }

    #[ink(event)]
    pub struct HolderRemoved {
        #[ink(topic)]
        account: AccountId,
    }

    /// One event per distribution call; `start..end` are registry slots.
    #[ink(event)]
    pub struct RewardsDistributed {
        pool: Balance,
        eligible_supply: Balance,
        start: u32,
        end: u32,
        paid: Balance,
    }

    #[ink(event)]
    pub struct TreasuryUpdated {
        previous: AccountId,
        updated: AccountId,
    }

    #[ink(event)]
    pub struct TaxExclusionSet {
        #[ink(topic)]
        account: AccountId,
        excluded: bool,
    }

    #[ink(event)]
    pub struct RewardExclusionSet {
        #[ink(topic)]
        account: AccountId,
        excluded: bool,
    }

    #[ink(event)]
    pub struct LiquidityPairSet {
        #[ink(topic)]
        pair: AccountId,
        enabled: bool,
    }

    #[ink(event)]
    pub struct TradingEnabled {
        timestamp: Timestamp,
    }

    #[ink(event)]
    pub struct PauseSet {
        paused: bool,
    }

    #[ink(event)]
    pub struct EmergencyWithdrawal {
        #[ink(topic)]
        token: AccountId,
        #[ink(topic)]
        to: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous: AccountId,
        #[ink(topic)]
        updated: AccountId,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Caller is not the contract owner.
        NotAuthorized,
        /// Sender cannot cover the full debit of the movement.
        InsufficientBalance,
        /// Spender's allowance is insufficient.
        InsufficientAllowance,
        /// Trading is not enabled and neither side is privileged.
        TradingDisabled,
        /// Pool-facing trade within 30 s of the sender's previous trade.
        CooldownActive,
        /// Contract is paused.
        Paused,
        /// The contract holds no reward asset.
        NothingToDistribute,
        /// No registered holder has a reward-eligible balance.
        NoEligibleSupply,
        /// Batch bounds are inverted or exceed the holder count.
        InvalidRange,
        /// Holder index past the end of the registry.
        IndexOutOfRange,
        /// The contract holds none of the requested asset.
        NothingToWithdraw,
        /// An arithmetic operation overflowed.
        Overflow,
        /// A cross-contract balance query failed.
        AssetCallFailed,
        /// A cross-contract asset transfer failed.
        TransferFailed,
    }

    // =========================================================================
    // CROSS-CONTRACT INTERFACE
    // =========================================================================

    /// Error type of a PSP22 asset, mirrored so replies decode.
    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Psp22Error {
        Custom(String),
        InsufficientBalance,
        InsufficientAllowance,
        ZeroRecipientAddress,
        ZeroSenderAddress,
        SafeTransferCheckFailed(String),
    }

    /// External assets held by this contract. Transfers always leave the
    /// contract's own account.
    pub trait AssetGateway {
        fn balance_of(&self, asset: AccountId, owner: AccountId) -> Result<Balance, Error>;
        fn transfer(&mut self, asset: AccountId, to: AccountId, amount: Balance)
            -> Result<(), Error>;
    }

    /// On-chain gateway: plain PSP22 calls.
    pub struct Psp22Gateway;

    impl AssetGateway for Psp22Gateway {
        fn balance_of(&self, asset: AccountId, owner: AccountId) -> Result<Balance, Error> {
            let result = build_call::<DefaultEnvironment>()
                .call(asset)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("PSP22::balance_of")))
                        .push_arg(owner),
                )
                .returns::<Balance>()
                .try_invoke();

            match result {
                Ok(Ok(balance)) => Ok(balance),
                _ => Err(Error::AssetCallFailed),
            }
        }

        fn transfer(&mut self, asset: AccountId, to: AccountId, amount: Balance) -> Result<(), Error> {
            let result = build_call::<DefaultEnvironment>()
                .call(asset)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("PSP22::transfer")))
                        .push_arg(to)
                        .push_arg(amount)
                        .push_arg(Vec::<u8>::new()),
                )
                .returns::<Result<(), Psp22Error>>()
                .try_invoke();

            match result {
                Ok(Ok(Ok(()))) => Ok(()),
                _ => Err(Error::TransferFailed),
            }
        }
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl LnkdToken {
        // ---------------------------------------------------------------------
        // Constructor
        // ---------------------------------------------------------------------

        /// Deploy the token.
        ///
        /// Mints the whole supply to the deployer and seeds the deployer as
        /// the sole holder. Deployer, treasury and this contract are excluded
        /// from tax and rewards; the zero address is excluded from rewards.
        /// Trading starts disabled.
        #[ink(constructor)]
        pub fn new(
            treasury: AccountId,
            intl_token: AccountId,
            wbnb_token: AccountId,
            stablecoin: AccountId,
            pancake_router: AccountId,
            pancake_factory: AccountId,
        ) -> Self {
            let caller = Self::env().caller();
            let this = Self::env().account_id();

            let mut balances = Mapping::default();
            balances.insert(caller, &TOTAL_SUPPLY);

            let mut excluded_from_tax = Mapping::default();
            for account in [caller, treasury, this] {
                excluded_from_tax.insert(account, &true);
            }

            let mut excluded_from_rewards = Mapping::default();
            for account in [AccountId::from(ZERO_ADDRESS), this, caller, treasury] {
                excluded_from_rewards.insert(account, &true);
            }

            let mut holders = HolderRegistry::new();
            holders.insert(caller);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(caller),
                value: TOTAL_SUPPLY,
            });
            Self::env().emit_event(HolderAdded {
                account: caller,
                index: 0,
            });

            Self {
                total_supply: TOTAL_SUPPLY,
                balances,
                allowances: Mapping::default(),
                owner: caller,
                treasury_wallet: treasury,
                intl_token,
                wbnb_token,
                stablecoin,
                pancake_router,
                pancake_factory,
                excluded_from_tax,
                excluded_from_rewards,
                liquidity_pairs: Mapping::default(),
                trading_enabled: false,
                paused: false,
                last_trade_time: Mapping::default(),
                holders,
                // the seeded deployer is reward-excluded
                eligible_supply: 0,
                batch_round: None,
                total_rewards_distributed: 0,
            }
        }

        // =====================================================================
        // PSP22 SURFACE
        // =====================================================================

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> Balance {
            self.balances.get(owner).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let from = self.env().caller();
            self.transfer_impl(from, to, value)
        }

        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval { owner, spender, value });
            Ok(())
        }

        /// Spends `value` of the caller's allowance, but only once the
        /// movement itself has gone through.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let caller = self.env().caller();
            let current_allowance = self.allowance(from, caller);
            if current_allowance < value {
                return Err(Error::InsufficientAllowance);
            }
            self.transfer_impl(from, to, value)?;
            self.allowances
                .insert((from, caller), &current_allowance.saturating_sub(value));
            Ok(())
        }

        // =====================================================================
        // THE GATEKEEPER
        // =====================================================================

        /// Single entry point for every LNKD movement.
        ///
        /// All checks run before the first write: a failing transfer leaves
        /// balances, the holder index and cooldown timestamps untouched.
        fn transfer_impl(
            &mut self,
            from: AccountId,
            to: AccountId,
            amount: Balance,
        ) -> Result<(), Error> {
            self.assert_not_paused()?;
            self.assert_trading_allowed(from, to)?;

            let kind = TradeKind::classify(self.is_liquidity_pair(from), self.is_liquidity_pair(to));
            let now = self.env().block_timestamp();
            self.assert_cooldown_elapsed(from, kind, now)?;

            let split = self.tax_split_for(from, to, kind, amount)?;
            let debit = split.debit().ok_or(Error::Overflow)?;
            if self.balance_of(from) < debit {
                return Err(Error::InsufficientBalance);
            }

            self.move_balance(from, to, split.net)?;
            if split.is_taxed() {
                let treasury = self.treasury_wallet;
                let this = self.env().account_id();
                self.move_balance(from, treasury, split.treasury)?;
                self.move_balance(from, this, split.auto)?;
                self.refresh_holder(treasury);
                self.refresh_holder(this);
                self.env().emit_event(TaxCollected {
                    from,
                    treasury_share: split.treasury,
                    auto_share: split.auto,
                });
            }
            self.refresh_holder(from);
            self.refresh_holder(to);

            if let Some(trader) = kind.trader(from, to) {
                self.last_trade_time.insert(trader, &now);
            }
            Ok(())
        }

        /// The one place the three flag sets decide a movement's tax.
        fn tax_split_for(
            &self,
            from: AccountId,
            to: AccountId,
            kind: TradeKind,
            amount: Balance,
        ) -> Result<TaxSplit, Error> {
            let exempt = self.is_excluded_from_tax(from) || self.is_excluded_from_tax(to);
            if exempt || !kind.is_taxable() {
                return Ok(TaxSplit::untaxed(amount));
            }
            TaxSplit::taxed(amount).ok_or(Error::Overflow)
        }

        fn assert_trading_allowed(&self, from: AccountId, to: AccountId) -> Result<(), Error> {
            if self.trading_enabled || self.bypasses_trading_gate(from) || self.bypasses_trading_gate(to) {
                return Ok(());
            }
            Err(Error::TradingDisabled)
        }

        fn bypasses_trading_gate(&self, account: AccountId) -> bool {
            account == self.owner
                || account == self.treasury_wallet
                || self.is_excluded_from_tax(account)
        }

        /// Checked against `from` only; a sender without a recorded trade
        /// has never traded and passes.
        fn assert_cooldown_elapsed(
            &self,
            from: AccountId,
            kind: TradeKind,
            now: Timestamp,
        ) -> Result<(), Error> {
            if !kind.is_pool_facing() || self.is_excluded_from_tax(from) {
                return Ok(());
            }
            match self.last_trade_time.get(from) {
                Some(last) if now.saturating_sub(last) < FRONT_RUNNING_COOLDOWN_MS => {
                    Err(Error::CooldownActive)
                }
                _ => Ok(()),
            }
        }

        // =====================================================================
        // REWARD DISTRIBUTION
        // =====================================================================

        /// Pay the contract's whole stablecoin balance to every holder pro
        /// rata. Returns the amount paid; floor-division dust stays behind.
        #[ink(message)]
        pub fn distribute_rewards(&mut self) -> Result<Balance, Error> {
            self.distribute_with(&mut Psp22Gateway, None)
        }

        /// Pay registry slots `start_index..end_index`.
        ///
        /// The denominator is always the eligible supply of the full
        /// registry and the pool is snapshotted by the batch starting at
        /// slot 0, so consecutive batches covering the registry once pay
        /// exactly what `distribute_rewards` would. A non-empty batch must
        /// start at 0 (opening a fresh round) or where the open round's
        /// previous batch ended; anything else fails `InvalidRange`.
        #[ink(message)]
        pub fn distribute_rewards_batch(
            &mut self,
            start_index: u32,
            end_index: u32,
        ) -> Result<Balance, Error> {
            self.distribute_with(&mut Psp22Gateway, Some((start_index, end_index)))
        }

        fn distribute_with(
            &mut self,
            gateway: &mut dyn AssetGateway,
            range: Option<(u32, u32)>,
        ) -> Result<Balance, Error> {
            self.only_owner()?;

            let count = self.holders.len();
            let (start, end) = range.unwrap_or((0, count));
            if start > end || end > count {
                return Err(Error::InvalidRange);
            }

            let resumed = match (range, self.batch_round) {
                (Some(_), Some(open)) if start == open.next => Some(open),
                _ => None,
            };
            if range.is_some() && start < end && start != 0 && resumed.is_none() {
                return Err(Error::InvalidRange);
            }

            let pool = match resumed {
                Some(open) => open.pool,
                None => self.held_balance(gateway, self.stablecoin)?,
            };
            if pool == 0 {
                return Err(Error::NothingToDistribute);
            }

            let eligible_supply = self.eligible_supply;
            if eligible_supply == 0 {
                return Err(Error::NoEligibleSupply);
            }

            let mut payouts = Vec::new();
            for index in start..end {
                let Some(holder) = self.holders.get(index) else {
                    continue;
                };
                // only the deployer seeded at genesis sits here while excluded
                if self.is_excluded_from_rewards(holder) {
                    continue;
                }
                let share = pro_rata_share(pool, self.balance_of(holder), eligible_supply)
                    .ok_or(Error::Overflow)?;
                if share > 0 {
                    payouts.push((holder, share));
                }
            }

            let mut paid: Balance = 0;
            for (holder, share) in payouts {
                gateway.transfer(self.stablecoin, holder, share)?;
                paid = paid.checked_add(share).ok_or(Error::Overflow)?;
            }

            self.batch_round = match range {
                None => None,
                Some(_) if start == end => self.batch_round,
                Some(_) => (end < count).then_some(BatchRound { pool, next: end }),
            };
            self.total_rewards_distributed = self.total_rewards_distributed.saturating_add(paid);

            self.env().emit_event(RewardsDistributed {
                pool,
                eligible_supply,
                start,
                end,
                paid,
            });
            Ok(paid)
        }

        fn held_balance(&self, gateway: &dyn AssetGateway, asset: AccountId) -> Result<Balance, Error> {
            gateway.balance_of(asset, self.env().account_id())
        }

        // =====================================================================
        // HOLDER REGISTRY
        // =====================================================================

        /// Insert when funded and eligible, drop when emptied.
        ///
        /// A newly inserted holder brings its whole balance into the eligible
        /// supply; an emptied one has nothing left to take out.
        fn refresh_holder(&mut self, account: AccountId) {
            let balance = self.balance_of(account);
            if balance > 0 && !self.is_excluded_from_rewards(account) {
                if self.holders.insert(account) {
                    self.eligible_supply = self.eligible_supply.saturating_add(balance);
                    self.env().emit_event(HolderAdded {
                        account,
                        index: self.holders.len().saturating_sub(1),
                    });
                }
            } else if balance == 0 {
                self.drop_holder(account);
            }
        }

        fn drop_holder(&mut self, account: AccountId) {
            if self.holders.remove(account) {
                self.env().emit_event(HolderRemoved { account });
            }
        }

        /// Whether `account`'s balance is part of the eligible supply.
        fn counts_toward_rewards(&self, account: AccountId) -> bool {
            self.holders.contains(account) && !self.is_excluded_from_rewards(account)
        }

        #[ink(message)]
        pub fn get_holders_count(&self) -> u32 {
            self.holders.len()
        }

        #[ink(message)]
        pub fn get_holder_at_index(&self, index: u32) -> Result<AccountId, Error> {
            self.holders.get(index).ok_or(Error::IndexOutOfRange)
        }

        #[ink(message)]
        pub fn is_holder(&self, account: AccountId) -> bool {
            self.holders.contains(account)
        }

        /// Registered holders that would receive a share right now.
        /// Walks the whole registry.
        #[ink(message)]
        pub fn get_eligible_holders_count(&self) -> u32 {
            let mut count = 0u32;
            for index in 0..self.holders.len() {
                if let Some(holder) = self.holders.get(index) {
                    if !self.is_excluded_from_rewards(holder) {
                        count = count.saturating_add(1);
                    }
                }
            }
            count
        }

        // =====================================================================
        // VIEW FUNCTIONS
        // =====================================================================

        #[ink(message)]
        pub fn name(&self) -> String { String::from(TOKEN_NAME) }

        #[ink(message)]
        pub fn symbol(&self) -> String { String::from(TOKEN_SYMBOL) }

        #[ink(message)]
        pub fn decimals(&self) -> u8 { DECIMALS }

        #[ink(message)]
        pub fn owner(&self) -> AccountId { self.owner }

        #[ink(message)]
        pub fn treasury_wallet(&self) -> AccountId { self.treasury_wallet }

        #[ink(message)]
        pub fn intl_token(&self) -> AccountId { self.intl_token }

        #[ink(message)]
        pub fn wbnb_token(&self) -> AccountId { self.wbnb_token }

        #[ink(message)]
        pub fn stablecoin(&self) -> AccountId { self.stablecoin }

        #[ink(message)]
        pub fn pancake_router(&self) -> AccountId { self.pancake_router }

        #[ink(message)]
        pub fn pancake_factory(&self) -> AccountId { self.pancake_factory }

        #[ink(message)]
        pub fn trading_enabled(&self) -> bool { self.trading_enabled }

        #[ink(message)]
        pub fn is_paused(&self) -> bool { self.paused }

        #[ink(message)]
        pub fn is_excluded_from_tax(&self, account: AccountId) -> bool {
            self.excluded_from_tax.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn is_excluded_from_rewards(&self, account: AccountId) -> bool {
            self.excluded_from_rewards.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn is_liquidity_pair(&self, account: AccountId) -> bool {
            self.liquidity_pairs.get(account).unwrap_or(false)
        }

        /// Millisecond timestamp of the account's last trade, 0 if none.
        #[ink(message)]
        pub fn last_trade_time(&self, account: AccountId) -> Timestamp {
            self.last_trade_time.get(account).unwrap_or(0)
        }

        /// `false` while a pool-facing trade from `account` would hit the
        /// cooldown.
        #[ink(message)]
        pub fn can_trade(&self, account: AccountId) -> bool {
            if self.is_excluded_from_tax(account) {
                return true;
            }
            let now = self.env().block_timestamp();
            self.last_trade_time
                .get(account)
                .map_or(true, |last| now.saturating_sub(last) >= FRONT_RUNNING_COOLDOWN_MS)
        }

        #[ink(message)]
        pub fn get_stablecoin_balance(&self) -> Result<Balance, Error> {
            self.held_balance(&Psp22Gateway, self.stablecoin)
        }

        #[ink(message)]
        pub fn get_wbnb_balance(&self) -> Result<Balance, Error> {
            self.held_balance(&Psp22Gateway, self.wbnb_token)
        }

        #[ink(message)]
        pub fn get_intl_balance(&self) -> Result<Balance, Error> {
            self.held_balance(&Psp22Gateway, self.intl_token)
        }

        /// Denominator the next distribution will use.
        #[ink(message)]
        pub fn get_eligible_supply(&self) -> Balance {
            self.eligible_supply
        }

        #[ink(message)]
        pub fn get_total_rewards_distributed(&self) -> Balance {
            self.total_rewards_distributed
        }

        /// Open batch round, if a chunked distribution is in progress.
        #[ink(message)]
        pub fn get_batch_round(&self) -> Option<BatchRound> {
            self.batch_round
        }

        #[ink(message)]
        pub fn tax_percentage(&self) -> u128 { TAX_PERCENTAGE_BPS }

        #[ink(message)]
        pub fn treasury_tax(&self) -> u128 { TREASURY_TAX_BPS }

        #[ink(message)]
        pub fn auto_buy_tax(&self) -> u128 { AUTO_BUY_TAX_BPS }

        /// Seconds.
        #[ink(message)]
        pub fn front_running_cooldown(&self) -> u64 { FRONT_RUNNING_COOLDOWN_SECS }

        // =====================================================================
        // ADMIN
        // =====================================================================

        #[ink(message)]
        pub fn set_treasury_wallet(&mut self, wallet: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            let previous = self.treasury_wallet;
            self.treasury_wallet = wallet;
            self.env().emit_event(TreasuryUpdated {
                previous,
                updated: wallet,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn set_tax_exclusion(&mut self, account: AccountId, excluded: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.excluded_from_tax.insert(account, &excluded);
            self.env().emit_event(TaxExclusionSet { account, excluded });
            Ok(())
        }

        /// Takes effect on the holder index immediately.
        #[ink(message)]
        pub fn set_reward_exclusion(&mut self, account: AccountId, excluded: bool) -> Result<(), Error> {
            self.only_owner()?;
            let counted = self.counts_toward_rewards(account);
            self.excluded_from_rewards.insert(account, &excluded);
            if excluded {
                if counted {
                    self.eligible_supply =
                        self.eligible_supply.saturating_sub(self.balance_of(account));
                }
                self.drop_holder(account);
            } else if self.holders.contains(account) {
                // the genesis deployer is registered while excluded
                if !counted {
                    self.eligible_supply =
                        self.eligible_supply.saturating_add(self.balance_of(account));
                }
            } else {
                self.refresh_holder(account);
            }
            self.env().emit_event(RewardExclusionSet { account, excluded });
            Ok(())
        }

        #[ink(message)]
        pub fn set_liquidity_pair(&mut self, pair: AccountId, enabled: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.liquidity_pairs.insert(pair, &enabled);
            self.env().emit_event(LiquidityPairSet { pair, enabled });
            Ok(())
        }

        /// Idempotent; there is no way back.
        #[ink(message)]
        pub fn enable_trading(&mut self) -> Result<(), Error> {
            self.only_owner()?;
            if !self.trading_enabled {
                self.trading_enabled = true;
                self.env().emit_event(TradingEnabled {
                    timestamp: self.env().block_timestamp(),
                });
            }
            Ok(())
        }

        #[ink(message)]
        pub fn pause(&mut self) -> Result<(), Error> {
            self.set_paused(true)
        }

        #[ink(message)]
        pub fn unpause(&mut self) -> Result<(), Error> {
            self.set_paused(false)
        }

        /// Move this contract's whole balance of `token` to `to`.
        ///
        /// `token` may be the reward asset, any other PSP22, or this contract
        /// itself, in which case the LNKD it holds moves as an untaxed ledger
        /// movement.
        #[ink(message)]
        pub fn emergency_withdraw_token(
            &mut self,
            token: AccountId,
            to: AccountId,
        ) -> Result<Balance, Error> {
            self.emergency_withdraw_with(&mut Psp22Gateway, token, to)
        }

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            let previous = self.owner;
            self.owner = new_owner;
            self.env().emit_event(OwnershipTransferred {
                previous,
                updated: new_owner,
            });
            Ok(())
        }

        fn set_paused(&mut self, paused: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.paused = paused;
            self.env().emit_event(PauseSet { paused });
            Ok(())
        }

        fn emergency_withdraw_with(
            &mut self,
            gateway: &mut dyn AssetGateway,
            token: AccountId,
            to: AccountId,
        ) -> Result<Balance, Error> {
            self.only_owner()?;
            let this = self.env().account_id();

            let amount = if token == this {
                self.balance_of(this)
            } else {
                self.held_balance(gateway, token)?
            };
            if amount == 0 {
                return Err(Error::NothingToWithdraw);
            }

            if token == this {
                self.move_balance(this, to, amount)?;
                self.refresh_holder(this);
                self.refresh_holder(to);
            } else {
                gateway.transfer(token, to, amount)?;
                if token == self.stablecoin {
                    self.batch_round = None;
                }
            }

            self.env().emit_event(EmergencyWithdrawal { token, to, amount });
            Ok(amount)
        }

        // =====================================================================
        // INTERNAL HELPERS
        // =====================================================================

        fn move_balance(&mut self, from: AccountId, to: AccountId, amount: Balance) -> Result<(), Error> {
            self.debit_balance(from, amount)?;
            self.credit_balance(to, amount)?;
            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value: amount,
            });
            Ok(())
        }

        fn debit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            if balance < amount {
                return Err(Error::InsufficientBalance);
            }
            if self.counts_toward_rewards(account) {
                self.eligible_supply = self.eligible_supply.saturating_sub(amount);
            }
            self.balances.insert(account, &balance.saturating_sub(amount));
            Ok(())
        }

        fn credit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            let new_balance = balance.checked_add(amount).ok_or(Error::Overflow)?;
            if self.counts_toward_rewards(account) {
                self.eligible_supply = self
                    .eligible_supply
                    .checked_add(amount)
                    .ok_or(Error::Overflow)?;
            }
            self.balances.insert(account, &new_balance);
            Ok(())
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotAuthorized);
            }
            Ok(())
        }

        fn assert_not_paused(&self) -> Result<(), Error> {
            if self.paused {
                return Err(Error::Paused);
            }
            Ok(())
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
