//! Basic greedy and minimal-coin change making.
//!
//! Pays a handful of amounts with a canonical coin system (where greedy is
//! always optimal) and with a non-canonical one (where it is not).

use coin_change::core::amount::Amount;
use coin_change::core::denomination::DenominationSet;
use coin_change::optimization::enumeration::MinCoinEnumerator;
use coin_change::optimization::greedy::GreedyDecomposer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("━━━ Greedy change, coins 1, 2, 5, 10, 25, 50 ━━━\n");

    let coins = DenominationSet::new([1, 2, 5, 10, 25, 50])?;
    for payment in [93u64, 111, 113, 186, 256] {
        let change = GreedyDecomposer::decompose(&coins, Amount::from(payment));
        println!("  {:>5} = {}", payment, change);
    }

    println!("\n━━━ Minimal coins, coins 1, 3, 4, 6, 10, 25 ━━━\n");

    let coins = DenominationSet::new([1, 3, 4, 6, 10, 25])?;
    for payment in [7u64, 12, 32, 66, 82] {
        let solutions = MinCoinEnumerator::enumerate(&coins, Amount::from(payment));
        println!("  {}", solutions);
    }

    Ok(())
}
