use crate::range::LearnedRange;

/// 生成対象となる文字種。
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CharClass {
    Digit,
    Special,
    Lower,
    Upper,
}

impl CharClass {
    /// 全ての文字種を宣言順で返す。この順序が探索順を決める。
    pub const fn all() -> [Self; 4] {
        [Self::Digit, Self::Special, Self::Lower, Self::Upper]
    }

    /// 文字種の名前を返す。
    pub const fn name(self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Special => "special",
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }

    /// 文字種に属する文字を列挙順で返す。
    pub const fn alphabet(self) -> &'static str {
        match self {
            Self::Digit => "1234567890",
            Self::Special => "!\"#$%&'()*+,-./:;?@[\\]^_`{|}~",
            Self::Lower => "abcdefghijklmnopqrstuvwxyz",
            Self::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        }
    }

    /// 文字種に属する文字数を返す。
    pub fn alphabet_len(self) -> usize {
        self.alphabet().chars().count()
    }

    /// `c` がこの文字種に属するかどうかを返す。
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// `c` の属する文字種を返す。どれにも属さなければ `None` を返す。
    pub fn of(c: char) -> Option<Self> {
        Self::all().into_iter().find(|class| class.contains(c))
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 1 つの文字種について学習した規則。
///
/// `count` はパスワード内のこの文字種の文字数、
/// `duplication` は文字種内の各文字がパスワード内に現れる回数の値域。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CharClassRule {
    class: CharClass,
    count: LearnedRange,
    duplication: LearnedRange,
}

impl CharClassRule {
    /// 未学習の規則を作る。
    pub const fn new(class: CharClass) -> Self {
        Self {
            class,
            count: LearnedRange::new(),
            duplication: LearnedRange::new(),
        }
    }

    pub const fn class(&self) -> CharClass {
        self.class
    }

    pub const fn count(&self) -> &LearnedRange {
        &self.count
    }

    pub const fn duplication(&self) -> &LearnedRange {
        &self.duplication
    }

    /// 例のパスワードを 1 つ学習する。
    pub fn learn(&mut self, example: &str) {
        let class = self.class;

        self.count
            .restrict(example.chars().filter(|&c| class.contains(c)).count());

        // 例に現れない文字も 0 回として数える。
        for c in class.alphabet().chars() {
            self.duplication
                .restrict(example.chars().filter(|&x| x == c).count());
        }
    }

    /// 生成対象とすべき規則かどうかを返す。
    ///
    /// 文字種が一度も現れない場合、全ての例で重複が必須の場合、
    /// どの例でも文字種内の文字が現れない場合は無効。
    pub fn is_valid(&self) -> bool {
        if !(self.count.is_valid() && self.duplication.is_valid()) {
            return false;
        }
        if self.count.is_exactly(0) {
            return false;
        }
        self.duplication.min() == Some(0) && self.duplication.max() != Some(0)
    }
}

impl std::fmt::Display for CharClassRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<8} count in {}, duplication in {}",
            self.class.name(),
            self.count,
            self.duplication
        )
    }
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;

    #[test]
    fn test_class_alphabets_are_disjoint() {
        for (i, a) in CharClass::all().into_iter().enumerate() {
            for b in CharClass::all().into_iter().skip(i + 1) {
                assert!(a.alphabet().chars().all(|c| !b.contains(c)), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_class_alphabet_len() {
        assert_eq!(CharClass::Digit.alphabet_len(), 10);
        assert_eq!(CharClass::Special.alphabet_len(), 29);
        assert_eq!(CharClass::Lower.alphabet_len(), 26);
        assert_eq!(CharClass::Upper.alphabet_len(), 26);
    }

    #[test]
    fn test_class_of() {
        assert_eq!(CharClass::of('7'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('@'), Some(CharClass::Special));
        assert_eq!(CharClass::of('\\'), Some(CharClass::Special));
        assert_eq!(CharClass::of('q'), Some(CharClass::Lower));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Upper));
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('<'), None);
        assert_eq!(CharClass::of('あ'), None);
    }

    #[test]
    fn test_class_names() {
        assert_equal(
            CharClass::all().map(CharClass::name),
            ["digit", "special", "lower", "upper"],
        );
    }

    #[test]
    fn test_rule_learn() {
        let mut rule = CharClassRule::new(CharClass::Lower);
        assert!(!rule.is_valid());

        rule.learn("abb12");
        assert_eq!(rule.count().min(), Some(3));
        assert_eq!(rule.count().max(), Some(3));
        assert_eq!(rule.duplication().min(), Some(0));
        assert_eq!(rule.duplication().max(), Some(2));
        assert!(rule.is_valid());
        assert_eq!(
            rule.to_string(),
            "lower    count in [3..3], duplication in [0..2]"
        );
    }

    #[test]
    fn test_rule_absent_class_is_invalid() {
        let mut rule = CharClassRule::new(CharClass::Upper);
        rule.learn("abc1");
        rule.learn("xyz");

        assert!(rule.count().is_exactly(0));
        assert!(!rule.is_valid());
    }

    #[test]
    fn test_rule_every_char_present_is_invalid() {
        // 全ての文字が毎回現れるなら duplication.min は 0 にならない。
        let mut rule = CharClassRule::new(CharClass::Digit);
        rule.learn("1234567890");

        assert_eq!(rule.duplication().min(), Some(1));
        assert!(!rule.is_valid());
    }
}
