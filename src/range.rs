use std::ops::RangeInclusive;

use thiserror::Error;

/// 例から学習した整数量の値域(両端を含む)。
///
/// 初期状態は無効値で、最初の `restrict` で有効になる。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LearnedRange {
    min: usize,
    max: usize,
}

impl LearnedRange {
    /// 未学習状態の最小値。想定されるどの観測値よりも大きい。
    const SENTINEL_MIN: usize = usize::MAX;

    /// 未学習(無効)の値域を作る。
    pub const fn new() -> Self {
        Self {
            min: Self::SENTINEL_MIN,
            max: 0,
        }
    }

    /// 値域を広げて `value` を含むようにする。
    pub fn restrict(&mut self, value: usize) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// 値域が有効(`min <= max`)かどうかを返す。
    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// 最小値を返す。無効なら `None` を返す。
    pub fn min(&self) -> Option<usize> {
        self.is_valid().then_some(self.min)
    }

    /// 最大値を返す。無効なら `None` を返す。
    pub fn max(&self) -> Option<usize> {
        self.is_valid().then_some(self.max)
    }

    /// 値域が `[value, value]` に潰れているかどうかを返す。
    pub fn is_exactly(&self, value: usize) -> bool {
        self.min == value && self.max == value
    }

    /// `value` が値域内にあるかどうかを返す。無効な値域は何も含まない。
    pub fn contains(&self, value: usize) -> bool {
        self.is_valid() && (self.min..=self.max).contains(&value)
    }

    /// 値域内の全ての整数を昇順で返す。
    pub fn enumerate(&self) -> Result<RangeInclusive<usize>, InvalidRangeError> {
        self.check()?;
        Ok(self.min..=self.max)
    }

    /// `value` を値域内に丸める。
    pub fn ensure_within(&self, value: usize) -> Result<usize, InvalidRangeError> {
        self.check()?;
        Ok(value.clamp(self.min, self.max))
    }

    fn check(&self) -> Result<(), InvalidRangeError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(InvalidRangeError)
        }
    }
}

impl Default for LearnedRange {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LearnedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "[{}..{}]", self.min, self.max)
        } else {
            f.write_str("[invalid]")
        }
    }
}

/// 未学習の値域に対して値域を必要とする操作を行った。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("the operation cannot be used on a range with no observations")]
pub struct InvalidRangeError;
