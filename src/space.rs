use std::collections::HashSet;

use crate::class::CharClassRule;
use crate::rules::RuleSet;
use crate::snapshot::Snapshot;

/// 学習した規則から導かれる全ての `Snapshot`。
///
/// 発見順(パスワード長の昇順、同じ長さでは先頭の文字種ほどゆっくり変化する辞書順)を保持する。
#[derive(Clone, Debug)]
pub struct SnapshotSpace<'r> {
    snapshots: Vec<Snapshot<'r>>,
}

impl<'r> SnapshotSpace<'r> {
    /// 全ての `Snapshot` を列挙する。規則が未学習なら空になる。
    pub fn new(rules: &'r RuleSet) -> Self {
        let classes: Vec<_> = rules.valid_classes().collect();
        let mut seen = HashSet::new();
        let mut snapshots = Vec::new();

        if let Ok(lengths) = rules.length().enumerate() {
            if !classes.is_empty() {
                let mut counts = Vec::with_capacity(classes.len());
                for length in lengths {
                    let mut search = Search {
                        rules,
                        classes: &classes,
                        length,
                        seen: &mut seen,
                        snapshots: &mut snapshots,
                    };
                    search.dfs(&mut counts, 0);
                }
            }
        }

        Self { snapshots }
    }

    /// `Snapshot` を発見順で返す。
    pub fn snapshots(&self) -> &[Snapshot<'r>] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<'r>> {
        self.snapshots.iter()
    }

    /// `Snapshot` の数を返す。
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// 全 `Snapshot` の候補数の和を返す。`u128` に収まらなければ `None`。
    pub fn count_passwords(&self) -> Option<u128> {
        self.snapshots
            .iter()
            .try_fold(0_u128, |acc, snapshot| acc.checked_add(snapshot.count_passwords()?))
    }
}

impl<'a, 'r> IntoIterator for &'a SnapshotSpace<'r> {
    type Item = &'a Snapshot<'r>;
    type IntoIter = std::slice::Iter<'a, Snapshot<'r>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 1 つのパスワード長について文字数の割り当てを探索する。
struct Search<'a, 'r> {
    rules: &'r RuleSet,
    classes: &'a [&'r CharClassRule],
    length: usize,
    seen: &'a mut HashSet<Snapshot<'r>>,
    snapshots: &'a mut Vec<Snapshot<'r>>,
}

impl<'r> Search<'_, 'r> {
    fn dfs(&mut self, counts: &mut Vec<usize>, used: usize) {
        let index = counts.len();
        if index == self.classes.len() {
            if used == self.length {
                self.push(counts);
            }
            return;
        }

        // 残りの文字種で埋められる文字数の範囲。
        let rest = &self.classes[index + 1..];
        let rest_min: usize = rest.iter().filter_map(|rule| rule.count().min()).sum();
        let rest_max: usize = rest.iter().filter_map(|rule| rule.count().max()).sum();

        let Ok(range) = self.classes[index].count().enumerate() else {
            return;
        };
        for count in range {
            let total = used + count;
            if total + rest_min > self.length {
                break;
            }
            if total + rest_max < self.length {
                continue;
            }

            counts.push(count);
            self.dfs(counts, total);
            counts.pop();
        }
    }

    fn push(&mut self, counts: &[usize]) {
        if let Some(snapshot) = Snapshot::new(self.rules, counts) {
            if self.seen.insert(snapshot.clone()) {
                self.snapshots.push(snapshot);
            }
        }
    }
}
