use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::oracle::Oracle;
use crate::rules::RuleSet;
use crate::snapshot::Snapshot;
use crate::space::SnapshotSpace;

/// 学習した規則から候補を生成し、判定器で本当のパスワードを探す。
#[derive(Clone, Debug)]
pub struct Cracker {
    rules: RuleSet,
}

/// 1 つの `Snapshot` を調べ終えたときの進捗。
#[derive(Clone, Copy, Debug)]
pub struct SnapshotProgress<'a, 'r> {
    pub snapshot: &'a Snapshot<'r>,
    /// このスナップショットの序数(0 始まり)。
    pub index: usize,
    /// スナップショットの総数。
    pub total: usize,
    /// 判定器に渡した候補の数。
    pub tested: u64,
    pub elapsed: Duration,
}

impl Cracker {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// 例のパスワード群を学習して `Cracker` を作る。
    pub fn from_examples<I, S>(examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(RuleSet::from_examples(examples))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// 探索対象の全 `Snapshot` を返す。
    pub fn space(&self) -> SnapshotSpace<'_> {
        SnapshotSpace::new(&self.rules)
    }

    /// 判定器が真を返す最初の候補を返す。全候補を試しても見つからなければ `Ok(None)`。
    pub fn find<O: Oracle>(&self, oracle: &O) -> Result<Option<String>, O::Error> {
        self.find_with_progress(oracle, |_| {})
    }

    /// `find` と同じだが、`Snapshot` を 1 つ調べ終えるたびに `progress` を呼ぶ。
    pub fn find_with_progress<O, F>(
        &self,
        oracle: &O,
        mut progress: F,
    ) -> Result<Option<String>, O::Error>
    where
        O: Oracle,
        F: FnMut(&SnapshotProgress<'_, '_>),
    {
        let space = self.space();
        let total = space.len();
        info!(snapshots = total, "searching");

        for (index, snapshot) in space.iter().enumerate() {
            debug!(
                %snapshot,
                candidates = ?snapshot.count_passwords(),
                "searching snapshot"
            );
            let start = Instant::now();
            let mut tested = 0_u64;

            for candidate in snapshot.iter_passwords() {
                tested += 1;
                if oracle.verify(&candidate)? {
                    info!(%snapshot, tested, elapsed = ?start.elapsed(), "password found");
                    return Ok(Some(candidate));
                }
            }

            let elapsed = start.elapsed();
            info!(%snapshot, tested, ?elapsed, "snapshot exhausted");
            progress(&SnapshotProgress {
                snapshot,
                index,
                total,
                tested,
                elapsed,
            });
        }

        info!("no password found");
        Ok(None)
    }

    /// `find` を rayon のスレッドプールで並列に行う。
    ///
    /// 各ワーカーは判定器を呼ぶ前に共有フラグを確認し、
    /// いずれかのワーカーが正解を見つけるかエラーを返した時点で止まる。
    /// 複数の候補が同時に正解となった場合、どれが返るかは不定。
    #[cfg(feature = "parallel")]
    pub fn find_parallel<O>(&self, oracle: &O) -> Result<Option<String>, O::Error>
    where
        O: Oracle + Sync,
        O::Error: Send,
    {
        use std::sync::atomic::{AtomicBool, Ordering};

        use rayon::prelude::*;

        let space = self.space();
        let stop = AtomicBool::new(false);
        info!(snapshots = space.len(), "searching in parallel");

        let found = space.snapshots().par_iter().find_map_any(|snapshot| {
            let start = Instant::now();
            let mut tested = 0_u64;

            for candidate in snapshot.iter_passwords() {
                if stop.load(Ordering::Relaxed) {
                    debug!(%snapshot, tested, "snapshot cancelled");
                    return None;
                }
                tested += 1;
                match oracle.verify(&candidate) {
                    Ok(false) => {}
                    Ok(true) => {
                        stop.store(true, Ordering::Relaxed);
                        info!(%snapshot, tested, elapsed = ?start.elapsed(), "password found");
                        return Some(Ok(candidate));
                    }
                    Err(e) => {
                        stop.store(true, Ordering::Relaxed);
                        return Some(Err(e));
                    }
                }
            }

            info!(%snapshot, tested, elapsed = ?start.elapsed(), "snapshot exhausted");
            None
        });

        found.transpose()
    }
}
