//! RUST_LOG=passlearn=debug cargo run --release --example=crack -- 'p@s1' 'ab_1'
//!
//! 既知の正解を判定器として、例から学習した規則で見つかるかどうかを確かめる。

use passlearn::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passlearn=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let secret = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("Usage: crack <secret> <example>..."))?;
    let examples: Vec<_> = args.collect();
    anyhow::ensure!(!examples.is_empty(), "at least one example is required");

    let cracker = Cracker::from_examples(&examples);
    println!("{}", cracker.rules());

    let oracle = ExactMatch::new(secret);
    let found = cracker.find_with_progress(&oracle, |progress| {
        eprintln!(
            "[{}/{}] {} exhausted: {} candidates in {:.3?}",
            progress.index + 1,
            progress.total,
            progress.snapshot,
            progress.tested,
            progress.elapsed
        );
    });

    match found {
        Ok(Some(password)) => println!("Password: \"{password}\""),
        Ok(None) => println!("\"{}\" not found", oracle.secret()),
        Err(never) => match never {},
    }

    Ok(())
}
