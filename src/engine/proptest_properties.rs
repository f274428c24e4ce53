//! Property-based tests using `proptest` for exchange invariants.
//!
//! 1. **Pair order-independence**: `(a, b)` and `(b, a)` resolve identically
//!    with `zeroth < first`.
//! 2. **Identical tokens**: always `TokensIdentical`, zero address included.
//! 3. **Output monotonicity**: a larger `amount_in` never yields less.
//! 4. **Identity at 18 decimals**: normalization is a no-op.
//! 5. **Floor rounding**: raw amounts never exceed the exact quotient.
//! 6. **Failed swaps are inert**: balances and events are unchanged.

#![allow(clippy::panic)]

use alloy_primitives::{Address, U256};
use proptest::prelude::*;

use crate::config::ExchangeConfig;
use crate::domain::{resolve_pair_id, Amount, Decimals, DirectionalRates, Pool, TokenAddress, TokenPair};
use crate::error::ExchangeError;
use crate::ledger::InMemoryLedger;
use crate::math::{pow10, to_raw_amount, INTERNAL_DECIMALS};
use crate::traits::TokenLedger;

use super::{Exchange, SettlementPlan};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ONE: u128 = 1_000_000_000_000_000_000;
const OWNER: Address = Address::repeat_byte(0x01);
const CUSTODY: Address = Address::repeat_byte(0x02);
const TRADER: Address = Address::repeat_byte(0x03);

fn aa() -> TokenAddress {
    TokenAddress::repeat_byte(0xAA)
}

fn bb() -> TokenAddress {
    TokenAddress::repeat_byte(0xBB)
}

fn dec(d: u8) -> Decimals {
    let Ok(d) = Decimals::new(d) else {
        panic!("valid decimals");
    };
    d
}

fn make_pool(rate: u128) -> Pool {
    let Ok(pair) = TokenPair::new(aa(), bb()) else {
        panic!("valid pair");
    };
    let Ok(rates) =
        DirectionalRates::resolve(aa(), &pair, Amount::from_u128(rate), Amount::from_u128(rate))
    else {
        panic!("valid rates");
    };
    Pool::new(pair, rates)
}

fn make_exchange(trader_balance: u128, custody_balance: u128, rate: u128) -> Exchange<InMemoryLedger> {
    let mut ledger = InMemoryLedger::new();
    let Ok(()) = ledger.register_token(aa(), 18) else {
        panic!("register");
    };
    let Ok(()) = ledger.register_token(bb(), 6) else {
        panic!("register");
    };
    let Ok(()) = ledger.mint(&aa(), &TRADER, Amount::from_u128(trader_balance)) else {
        panic!("mint");
    };
    let Ok(()) = ledger.mint(&bb(), &CUSTODY, Amount::from_u128(custody_balance)) else {
        panic!("mint");
    };
    let Ok(()) = ledger.approve(&aa(), &TRADER, &CUSTODY, Amount::MAX) else {
        panic!("approve");
    };
    let Ok(config) = ExchangeConfig::new(OWNER, CUSTODY) else {
        panic!("config");
    };
    let Ok(mut exchange) = Exchange::new(&config, ledger) else {
        panic!("exchange");
    };
    let Ok(_) = exchange.add_pool(
        &OWNER,
        aa(),
        bb(),
        Amount::from_u128(rate),
        Amount::from_u128(ONE),
    ) else {
        panic!("pool");
    };
    exchange
}

fn balances(exchange: &Exchange<InMemoryLedger>) -> [Amount; 4] {
    let read = |token: TokenAddress, holder: Address| {
        let Ok(b) = exchange.ledger().balance_of(&token, &holder) else {
            panic!("balance");
        };
        b
    };
    [
        read(aa(), TRADER),
        read(aa(), CUSTODY),
        read(bb(), TRADER),
        read(bb(), CUSTODY),
    ]
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn address_strategy() -> impl Strategy<Value = TokenAddress> {
    any::<[u8; 20]>().prop_map(TokenAddress::from_bytes)
}

fn rate_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000 * ONE
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000 * ONE
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_pair_id_order_independent(a in address_strategy(), b in address_strategy()) {
        prop_assume!(a != b && !a.is_zero() && !b.is_zero());
        let Ok(forward) = resolve_pair_id(a, b) else {
            panic!("distinct non-zero tokens must resolve");
        };
        let Ok(backward) = resolve_pair_id(b, a) else {
            panic!("distinct non-zero tokens must resolve");
        };
        prop_assert_eq!(forward, backward);
        prop_assert!(forward.1 < forward.2);
    }

    #[test]
    fn prop_identical_tokens_rejected(a in address_strategy()) {
        prop_assert_eq!(
            resolve_pair_id(a, a),
            Err(ExchangeError::TokensIdentical { token: a })
        );
    }

    #[test]
    fn prop_amount_out_monotonic(
        rate in rate_strategy(),
        small in amount_strategy(),
        extra in 0u128..=ONE,
    ) {
        let pool = make_pool(rate);
        let large = small + extra;
        let out = |amount: u128| {
            SettlementPlan::compute(&pool, aa(), Amount::from_u128(amount), dec(18), dec(18))
                .map(|plan| plan.amount_out())
        };
        match (out(small), out(large)) {
            (Ok(a), Ok(b)) => prop_assert!(a <= b, "out({})={} > out({})={}", small, a, large, b),
            // dust at the smaller size only
            (Err(ExchangeError::ImpossibleOperation { .. }), _) => {}
            (a, b) => prop_assert!(false, "unexpected results: {:?} / {:?}", a, b),
        }
    }

    #[test]
    fn prop_identity_at_internal_decimals(value in any::<u128>()) {
        let amount = Amount::from_u128(value);
        prop_assert_eq!(to_raw_amount(amount, Decimals::INTERNAL), Ok(amount));
    }

    #[test]
    fn prop_scale_down_never_rounds_up(value in any::<u128>(), decimals in 0u8..18) {
        let Ok(raw) = to_raw_amount(Amount::from_u128(value), dec(decimals)) else {
            panic!("scale-down cannot fail");
        };
        let Some(scale) = pow10(INTERNAL_DECIMALS - decimals) else {
            panic!("10^18 fits");
        };
        let Some(back) = raw.get().checked_mul(scale) else {
            panic!("raw * scale <= value");
        };
        prop_assert!(back <= U256::from(value));
        prop_assert!(U256::from(value) - back < scale);
    }

    #[test]
    fn prop_failed_swap_is_inert(
        trader_balance in 0u128..=10 * ONE,
        custody_balance in 0u128..=10_000_000,
        amount_in in 0u128..=20 * ONE,
        rate in rate_strategy(),
    ) {
        let mut exchange = make_exchange(trader_balance, custody_balance, rate);
        let before = balances(&exchange);
        let events_before = exchange.events().len();

        let result = exchange.swap(&TRADER, aa(), bb(), Amount::from_u128(amount_in));
        let after = balances(&exchange);

        match result {
            Ok(plan) => {
                let expected = Amount::new(before[0].get() - plan.raw_amount_in().get());
                prop_assert_eq!(after[0], expected);
                prop_assert_eq!(exchange.events().len(), events_before + 1);
            }
            Err(_) => {
                prop_assert_eq!(after, before);
                prop_assert_eq!(exchange.events().len(), events_before);
            }
        }
        prop_assert!(!exchange.reentrancy_guard().is_entered());
    }
}
