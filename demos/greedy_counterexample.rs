//! Where greedy goes wrong.
//!
//! With coins {1, 3, 4}, greedy pays 6 as 4+1+1 while 3+3 needs one coin
//! fewer. Scans a range of amounts and reports every one where greedy loses.

use coin_change::core::amount::Amount;
use coin_change::core::denomination::DenominationSet;
use coin_change::optimization::comparison::ChangeComparison;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let coins = DenominationSet::new([1, 3, 4])?;

    println!("{}", ChangeComparison::compute(&coins, Amount::from(6)));

    println!("━━━ Amounts 0..=40 where greedy is not optimal ━━━\n");
    let mut misses = 0;
    for amount in 0..=40u64 {
        let comparison = ChangeComparison::compute(&coins, Amount::from(amount));
        if !comparison.greedy_is_optimal() {
            misses += 1;
            println!(
                "  {:>3}: greedy {} vs optimal {:?} ({:.2}x)",
                amount,
                comparison.greedy.decomposition.coin_count(),
                comparison.optimal.min_count(),
                comparison.excess_ratio()
            );
        }
    }
    println!("\n{} of 41 amounts pay more coins greedily.", misses);

    Ok(())
}
