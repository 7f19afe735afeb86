use itertools::{Itertools as _, Permutations};

use crate::class::CharClassRule;
use crate::combination::{ClassEnumerator, CombinationCursor};
use crate::math::factorial;
use crate::rules::RuleSet;

/// 有効な各文字種の文字数を 1 つに固定した割り当て。
///
/// 文字数の並びは `RuleSet::valid_classes()` と同順。
/// 等価性とハッシュは文字数の並びのみで決まる。
#[derive(Clone, Debug)]
pub struct Snapshot<'r> {
    rules: &'r RuleSet,
    counts: Box<[usize]>,
}

impl<'r> Snapshot<'r> {
    /// 文字数の割り当てから `Snapshot` を作る。
    ///
    /// 要素数が有効な文字種の数と異なるか、
    /// いずれかの文字数が学習した値域外なら `None` を返す。
    pub fn new(rules: &'r RuleSet, counts: &[usize]) -> Option<Self> {
        let n_class = rules.valid_classes().count();
        if counts.len() != n_class {
            return None;
        }
        if !rules
            .valid_classes()
            .zip(counts)
            .all(|(rule, &count)| rule.count().contains(count))
        {
            return None;
        }

        Some(Self {
            rules,
            counts: counts.into(),
        })
    }

    /// 文字種ごとの文字数を返す。
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// 対象の文字種の規則を返す。
    pub fn classes(&self) -> impl Iterator<Item = &'r CharClassRule> + Clone {
        self.rules.valid_classes()
    }

    /// パスワードの文字数(各文字種の文字数の和)を返す。
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    /// 文字種ごとの組合せ列挙器を返す。
    pub fn enumerators(&self) -> impl Iterator<Item = ClassEnumerator<'r>> + '_ {
        self.classes()
            .zip(self.counts.iter())
            .map(|(rule, &count)| ClassEnumerator::new(rule, count))
    }

    /// `iter_passwords()` が返す候補の数を返す(重複込み)。`u128` に収まらなければ `None`。
    ///
    /// 各構成文字列について `len()!` 通りの並びを全て返すので、
    /// `len()! * Π combination_count()` に等しい。
    pub fn count_passwords(&self) -> Option<u128> {
        self.enumerators()
            .try_fold(factorial(self.len() as u128)?, |acc, e| {
                acc.checked_mul(e.combination_count()?)
            })
    }

    /// 構成文字列(各文字種の組合せの連結)を全て返す。
    pub fn compositions(&self) -> Compositions {
        Compositions::new(self.enumerators())
    }

    /// 候補パスワードを全て返す。
    ///
    /// 構成文字列内の同じ文字を区別して並べ替えるので、同じ候補が複数回現れうる。
    pub fn iter_passwords(&self) -> Passwords {
        Passwords {
            compositions: self.compositions(),
            arrangements: None,
        }
    }
}

impl PartialEq for Snapshot<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for Snapshot<'_> {}

impl std::hash::Hash for Snapshot<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.counts.hash(state);
    }
}

impl std::fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.counts.iter().format("|"))
    }
}

/// 構成文字列を列挙するオドメータ。
///
/// 各文字種の組合せカーソルを桁とみなし、最後の文字種を最下位桁として進める。
#[derive(Clone, Debug)]
pub struct Compositions {
    pools: Vec<Vec<char>>,
    cursors: Vec<CombinationCursor>,
    exhausted: bool,
}

impl Compositions {
    fn new<'r>(enumerators: impl Iterator<Item = ClassEnumerator<'r>>) -> Self {
        let mut pools = Vec::new();
        let mut cursors = Vec::new();
        let mut exhausted = false;

        for enumerator in enumerators {
            match enumerator.cursor() {
                Some(cursor) => {
                    pools.push(enumerator.pool());
                    cursors.push(cursor);
                }
                // 選べる組合せが 1 つもない文字種があれば構成文字列も存在しない。
                None => exhausted = true,
            }
        }

        Self {
            pools,
            cursors,
            exhausted,
        }
    }

    fn current(&self) -> String {
        self.cursors
            .iter()
            .zip(&self.pools)
            .flat_map(|(cursor, pool)| cursor.indices().iter().map(move |&i| pool[i]))
            .collect()
    }
}

impl Iterator for Compositions {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let composition = self.current();

        // 繰り上がりが最上位桁を超えたら一周した。
        self.exhausted = !self.cursors.iter_mut().rev().any(CombinationCursor::advance);

        Some(composition)
    }
}

impl std::iter::FusedIterator for Compositions {}

/// `Snapshot::iter_passwords` の返すイテレータ。
pub struct Passwords {
    compositions: Compositions,
    arrangements: Option<Permutations<std::vec::IntoIter<char>>>,
}

impl Iterator for Passwords {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(arrangement) = self.arrangements.as_mut().and_then(Iterator::next) {
                return Some(arrangement.into_iter().collect());
            }

            let composition: Vec<char> = self.compositions.next()?.chars().collect();
            if composition.is_empty() {
                // 長さ 0 の並びは空文字列 1 つだけ。
                self.arrangements = None;
                return Some(String::new());
            }
            let len = composition.len();
            self.arrangements = Some(composition.into_iter().permutations(len));
        }
    }
}

impl std::fmt::Debug for Passwords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passwords")
            .field("compositions", &self.compositions)
            .finish_non_exhaustive()
    }
}
