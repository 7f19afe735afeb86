use crate::class::CharClassRule;
use crate::math::binomial;
use crate::range::InvalidRangeError;

/// `n` 個から `k` 個を選ぶ組合せの添字配列。辞書順に進める。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CombinationCursor {
    n: usize,
    indices: Vec<usize>,
}

impl CombinationCursor {
    /// 辞書順で最初の組合せ `[0, 1, .., k-1]` を作る。`k > n` なら組合せは存在せず `None` を返す。
    pub fn first(n: usize, k: usize) -> Option<Self> {
        (k <= n).then(|| Self {
            n,
            indices: (0..k).collect(),
        })
    }

    /// 選ばれた添字を昇順で返す。
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// 次の組合せに進める。
    ///
    /// 最後の組合せだった場合は最初の組合せに戻して `false` を返す。
    pub fn advance(&mut self) -> bool {
        let k = self.indices.len();

        for i in (0..k).rev() {
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }

        for (i, x) in self.indices.iter_mut().enumerate() {
            *x = i;
        }
        false
    }
}

/// 1 つの文字種から決まった個数の文字を選ぶ組合せを列挙する。
///
/// 文字種のアルファベットを重複上限の回数だけ並べた列から位置の組合せを選ぶので、
/// 1 つの組合せ内に同じ文字が上限回数まで現れうる。
#[derive(Clone, Copy, Debug)]
pub struct ClassEnumerator<'r> {
    rule: &'r CharClassRule,
    count: usize,
}

impl<'r> ClassEnumerator<'r> {
    pub fn new(rule: &'r CharClassRule, count: usize) -> Self {
        Self { rule, count }
    }

    /// `count` を文字種の文字数の値域に丸めて作る。
    pub fn clamped(rule: &'r CharClassRule, count: usize) -> Result<Self, InvalidRangeError> {
        let count = rule.count().ensure_within(count)?;
        Ok(Self::new(rule, count))
    }

    pub fn rule(&self) -> &'r CharClassRule {
        self.rule
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// 1 文字あたりの重複上限。学習した最大重複数と選ぶ個数の小さい方。
    pub fn duplication_cap(&self) -> usize {
        self.rule.duplication().max().unwrap_or(0).min(self.count)
    }

    /// 組合せを選ぶ元になる文字列(アルファベットの繰り返し)を返す。
    pub fn pool(&self) -> Vec<char> {
        self.rule
            .class()
            .alphabet()
            .repeat(self.duplication_cap())
            .chars()
            .collect()
    }

    fn pool_len(&self) -> usize {
        self.duplication_cap() * self.rule.class().alphabet_len()
    }

    /// 組合せの総数 `C(pool_len, count)` を返す。
    pub fn combination_count(&self) -> Option<u128> {
        binomial(self.pool_len() as u128, self.count as u128)
    }

    pub(crate) fn cursor(&self) -> Option<CombinationCursor> {
        CombinationCursor::first(self.pool_len(), self.count)
    }

    /// 組合せを辞書順に全て返す。ちょうど `combination_count()` 個。
    pub fn enumerate(&self) -> ClassCombinations {
        ClassCombinations {
            pool: self.pool(),
            cursor: self.cursor(),
        }
    }
}

impl std::fmt::Display for ClassEnumerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<8} count={}, duplication={}",
            self.rule.class().name(),
            self.count,
            self.duplication_cap()
        )
    }
}

/// `ClassEnumerator::enumerate` の返すイテレータ。
#[derive(Clone, Debug)]
pub struct ClassCombinations {
    pool: Vec<char>,
    cursor: Option<CombinationCursor>,
}

impl Iterator for ClassCombinations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let combination = cursor.indices().iter().map(|&i| self.pool[i]).collect();
        if !cursor.advance() {
            self.cursor = None;
        }

        Some(combination)
    }
}

impl std::iter::FusedIterator for ClassCombinations {}
