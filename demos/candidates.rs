//! cargo run --example=candidates -- 20 'ab1'

use passlearn::*;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let limit: usize = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("Usage: candidates <limit> <example>..."))?
        .parse()?;

    let rules = RuleSet::from_examples(args);
    let space = SnapshotSpace::new(&rules);

    let candidates = space.iter().flat_map(Snapshot::iter_passwords).take(limit);
    for candidate in candidates {
        println!("{candidate}");
    }

    Ok(())
}
