//! Fixed-rate exchange example.
//!
//! Demonstrates registering a USDC/DAI pool with asymmetric rates, quoting
//! and executing swaps across 6- and 18-decimal tokens, updating rates,
//! pausing, and withdrawing custody funds.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=rate_exchange=debug cargo run --example fixed_rate_swap
//! ```

use alloy_primitives::Address;
use rate_exchange::prelude::*;
use tracing_subscriber::EnvFilter;

const ONE: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rate_exchange=info".parse()?),
        )
        .init();

    println!("=== Fixed-Rate Exchange ===\n");

    // ── 1. Accounts and tokens ──────────────────────────────────────────
    let owner = Address::repeat_byte(0x01);
    let custody = Address::repeat_byte(0x02);
    let trader = Address::repeat_byte(0x03);
    let usdc = TokenAddress::repeat_byte(0xAA);
    let dai = TokenAddress::repeat_byte(0xBB);

    let mut ledger = InMemoryLedger::new();
    ledger.register_token(usdc, 6)?;
    ledger.register_token(dai, 18)?;
    ledger.mint(&usdc, &trader, Amount::from_u128(1_000_000_000))?; // 1 000 USDC
    ledger.mint(&dai, &custody, Amount::from_u128(10_000 * ONE))?;
    ledger.mint(&usdc, &custody, Amount::from_u128(10_000_000_000))?;
    ledger.approve(&usdc, &trader, &custody, Amount::MAX)?;

    // ── 2. Exchange with one pool ───────────────────────────────────────
    let config = ExchangeConfig::new(owner, custody)?;
    let mut exchange = Exchange::new(&config, ledger)?;
    let pair_id = exchange.add_pool(
        &owner,
        usdc,
        dai,
        Amount::from_u128(ONE * 99 / 100), // sell USDC at 0.99
        Amount::from_u128(ONE),            // sell DAI at 1.00
    )?;
    let (_, zeroth, first) = exchange.get_pool_id(dai, usdc)?;
    println!("Pool {pair_id}");
    println!("  zeroth = {zeroth}");
    println!("  first  = {first}\n");

    // ── 3. Quote, then swap 250 USDC ────────────────────────────────────
    let amount_in = Amount::from_u128(250 * ONE);
    let quote = exchange.quote(usdc, dai, amount_in)?;
    println!(
        "Quote: {} USDC raw -> {} DAI raw at rate {}",
        quote.raw_amount_in(),
        quote.raw_amount_out(),
        quote.rate()
    );

    let plan = exchange.swap(&trader, usdc, dai, amount_in)?;
    println!(
        "Swap:  trader now holds {} USDC raw and {} DAI raw\n",
        exchange.ledger().balance_of(&usdc, &trader)?,
        exchange.ledger().balance_of(&dai, &trader)?
    );
    assert_eq!(plan, quote);

    // ── 4. Dust is rejected, not settled for zero ───────────────────────
    match exchange.swap(&trader, usdc, dai, Amount::from_u128(1_000)) {
        Err(ExchangeError::ImpossibleOperation { raw_amount_in, raw_amount_out }) => println!(
            "Dust swap rejected: raw in {raw_amount_in}, raw out {raw_amount_out}\n"
        ),
        other => println!("Unexpected dust result: {other:?}\n"),
    }

    // ── 5. Administration ───────────────────────────────────────────────
    exchange.update_rate(&owner, dai, usdc, Amount::from_u128(ONE), Amount::from_u128(ONE))?;
    exchange.pause(&owner)?;
    println!(
        "Paused swap: {:?}",
        exchange.swap(&trader, usdc, dai, amount_in).map(|p| p.amount_out())
    );
    exchange.unpause(&owner)?;

    exchange.withdraw(&owner, usdc, Amount::from_u128(250_000_000))?;
    println!(
        "Owner withdrew {} USDC raw\n",
        exchange.ledger().balance_of(&usdc, &owner)?
    );

    // ── 6. Event log ────────────────────────────────────────────────────
    println!("Events:");
    for event in exchange.events().iter() {
        println!("  {}", serde_json::to_string(event)?);
    }

    Ok(())
}
