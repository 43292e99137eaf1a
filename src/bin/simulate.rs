//! Randomized account simulation
//!
//! Opens many accounts with random names and balances, applies random
//! deposits and withdrawals, and checks the account invariants after every
//! step.
//!
//! Run with: cargo run --bin simulate --release -- --accounts 1000 --operations 100

use std::time::Instant;

use anyhow::bail;
use rand::distributions::Alphanumeric;
use rand::Rng;
use rust_decimal::Decimal;

use guarded_account::logging::init_tracing;
use guarded_account::{Account, AccountConfig, AccountLimits, Config, DomainError};

#[derive(Debug, Default)]
struct Totals {
    opened: u64,
    refused_opens: u64,
    deposits: u64,
    refused_deposits: u64,
    withdrawals: u64,
    refused_withdrawals: u64,
}

fn arg_value(args: &[String], flag: &str, default: u64) -> u64 {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Random amount in cents within `[0, max_cents]`
fn random_amount<R: Rng>(rng: &mut R, max_cents: i64) -> Decimal {
    Decimal::new(rng.gen_range(0..=max_cents), 2)
}

fn random_username<R: Rng>(rng: &mut R) -> Option<String> {
    if rng.gen_ratio(1, 50) {
        return None;
    }
    let length = rng.gen_range(0..=12);
    Some(
        rng.sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect(),
    )
}

fn simulate_account<R: Rng>(
    rng: &mut R,
    limits: AccountLimits,
    operations: u64,
    totals: &mut Totals,
) -> anyhow::Result<()> {
    let max_cents: i64 = match limits
        .max_balance
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| i64::try_from(cents.trunc()).ok())
    {
        Some(cents) => cents,
        None => bail!("maximum balance {} does not fit in cents", limits.max_balance),
    };

    let config = AccountConfig {
        username: random_username(rng),
        initial_balance: random_amount(rng, max_cents / 10),
    };

    let mut account = match Account::with_limits(config, limits) {
        Ok(account) => account,
        Err(e) if e.is_construction_error() => {
            totals.refused_opens += 1;
            return Ok(());
        }
        Err(e) => bail!("unexpected construction error: {e}"),
    };
    totals.opened += 1;

    if account.balance().value() < limits.min_initial_balance {
        bail!("account opened below the floor: {}", account.balance());
    }

    for _ in 0..operations {
        let before = account.balance().value();
        let amount = random_amount(rng, max_cents / 4);

        if rng.gen_bool(0.5) {
            match account.deposit(amount) {
                Ok(()) => {
                    totals.deposits += 1;
                    if account.balance().value() != before + amount {
                        bail!("deposit of {amount} onto {before} gave {}", account.balance());
                    }
                }
                Err(DomainError::DepositExceedsMax { .. }) => {
                    totals.refused_deposits += 1;
                    if before + amount < limits.max_balance {
                        bail!("deposit of {amount} onto {before} refused below the ceiling");
                    }
                }
                Err(e) => bail!("unexpected deposit error: {e}"),
            }
            if account.balance().value() >= limits.max_balance {
                bail!("balance reached the ceiling: {}", account.balance());
            }
        } else {
            match account.withdraw(amount) {
                Ok(()) => {
                    totals.withdrawals += 1;
                    if account.balance().value() != before - amount {
                        bail!("withdrawal of {amount} from {before} gave {}", account.balance());
                    }
                }
                Err(DomainError::InsufficientFunds { .. }) => {
                    totals.refused_withdrawals += 1;
                    if amount <= before {
                        bail!("withdrawal of {amount} from {before} refused with enough funds");
                    }
                }
                Err(e) => bail!("unexpected withdrawal error: {e}"),
            }
        }

        if account.balance().value() < Decimal::ZERO {
            bail!("balance went negative: {}", account.balance());
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let args: Vec<String> = std::env::args().collect();
    let account_count = arg_value(&args, "--accounts", 1000);
    let operations = arg_value(&args, "--operations", 100);

    println!(
        "Simulation - {} accounts, {} operations each",
        account_count, operations
    );

    let mut rng = rand::thread_rng();
    let mut totals = Totals::default();
    let start = Instant::now();

    for i in 0..account_count {
        simulate_account(&mut rng, config.limits, operations, &mut totals)?;

        if (i + 1) % 1000 == 0 {
            tracing::info!(accounts = i + 1, "simulation progress");
        }
    }

    let elapsed = start.elapsed();
    let applied = totals.deposits + totals.withdrawals;
    let rate = applied as f64 / elapsed.as_secs_f64();

    println!("\n=== Simulation Results ===");
    println!("Accounts opened: {}", totals.opened);
    println!("Opens refused: {}", totals.refused_opens);
    println!("Deposits: {} ({} refused)", totals.deposits, totals.refused_deposits);
    println!(
        "Withdrawals: {} ({} refused)",
        totals.withdrawals, totals.refused_withdrawals
    );
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Rate: {:.0} operations/sec", rate);

    Ok(())
}
