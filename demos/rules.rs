//! cargo run --example=rules -- 'abc1' 'abb12'

use passlearn::*;

fn main() -> anyhow::Result<()> {
    let examples: Vec<_> = std::env::args().skip(1).collect();
    anyhow::ensure!(!examples.is_empty(), "Usage: rules <example>...");

    let rules = RuleSet::from_examples(&examples);
    println!("{rules}");
    println!();

    let space = SnapshotSpace::new(&rules);
    for snapshot in &space {
        let count = snapshot
            .count_passwords()
            .map_or_else(|| "overflow".to_owned(), |n| n.to_string());
        let label = snapshot.to_string();
        println!("{label:<12} len={:<3} candidates={count}", snapshot.len());
        for enumerator in snapshot.enumerators() {
            println!("    {enumerator}");
        }
    }

    println!();
    println!("snapshots: {}", space.len());
    match space.count_passwords() {
        Some(n) => println!("candidates: {n}"),
        None => println!("candidates: overflow"),
    }

    Ok(())
}
