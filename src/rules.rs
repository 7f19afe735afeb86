use crate::class::{CharClass, CharClassRule};
use crate::range::LearnedRange;

/// 例のパスワード群から学習した規則の全体。
///
/// 学習が済んだら `SnapshotSpace` などの派生物に不変参照で渡す。
/// 派生物が生きている間は借用規則により追加学習できない。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuleSet {
    length: LearnedRange,
    rules: [CharClassRule; 4],
}

impl RuleSet {
    /// 未学習の規則を作る。
    pub fn new() -> Self {
        Self {
            length: LearnedRange::new(),
            rules: CharClass::all().map(CharClassRule::new),
        }
    }

    /// 例のパスワード群を全て学習した規則を作る。
    pub fn from_examples<I, S>(examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Self::new();
        for example in examples {
            rules.learn(example.as_ref());
        }
        rules
    }

    /// 例のパスワードを 1 つ学習する。学習順は結果に影響しない。
    pub fn learn(&mut self, example: &str) {
        self.length.restrict(example.chars().count());

        for rule in &mut self.rules {
            rule.learn(example);
        }
    }

    /// パスワード長の値域を返す。
    pub const fn length(&self) -> &LearnedRange {
        &self.length
    }

    /// 指定した文字種の規則を返す(無効なものも含む)。
    pub fn rule(&self, class: CharClass) -> &CharClassRule {
        // rules は CharClass::all() と同順。
        &self.rules[class as usize]
    }

    /// 生成対象となる規則のみを宣言順で返す。
    pub fn valid_classes(&self) -> impl Iterator<Item = &CharClassRule> + Clone + '_ {
        self.rules.iter().filter(|rule| rule.is_valid())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "password length in {}", self.length)?;
        for rule in self.valid_classes() {
            write!(f, "\n{rule}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;

    fn classes(rules: &RuleSet) -> Vec<CharClass> {
        rules.valid_classes().map(CharClassRule::class).collect()
    }

    #[test]
    fn test_rules_uninitialized() {
        let rules = RuleSet::new();

        assert!(!rules.length().is_valid());
        assert_eq!(rules.valid_classes().count(), 0);
        assert_eq!(rules.to_string(), "password length in [invalid]");
    }

    #[test]
    fn test_rules_digits_and_lower() {
        let rules = RuleSet::from_examples(["abc1", "abb12"]);

        assert_eq!(rules.length().min(), Some(4));
        assert_eq!(rules.length().max(), Some(5));
        assert_eq!(classes(&rules), [CharClass::Digit, CharClass::Lower]);

        let digit = rules.rule(CharClass::Digit);
        assert_equal(digit.count().enumerate().unwrap(), [1, 2]);
        assert_equal(digit.duplication().enumerate().unwrap(), [0, 1]);

        let lower = rules.rule(CharClass::Lower);
        assert_equal(lower.count().enumerate().unwrap(), [3]);
        assert_equal(lower.duplication().enumerate().unwrap(), [0, 1, 2]);
    }

    #[test]
    fn test_rules_digits_and_lower_fixed_length() {
        let rules = RuleSet::from_examples(["abcd1", "abb12"]);

        assert_eq!(rules.length().min(), Some(5));
        assert_eq!(rules.length().max(), Some(5));
        assert_eq!(classes(&rules), [CharClass::Digit, CharClass::Lower]);

        let lower = rules.rule(CharClass::Lower);
        assert_eq!(lower.count().min(), Some(3));
        assert_eq!(lower.count().max(), Some(4));
        assert_eq!(lower.duplication().max(), Some(2));
    }

    #[test]
    fn test_rules_rule_lookup_matches_class() {
        let rules = RuleSet::new();
        for class in CharClass::all() {
            assert_eq!(rules.rule(class).class(), class);
        }
    }

    #[test]
    fn test_rules_learn_twice_is_idempotent() {
        let mut once = RuleSet::new();
        once.learn("aB3$x");

        let mut twice = once.clone();
        twice.learn("aB3$x");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_rules_unclassified_chars_only_widen_length() {
        let rules = RuleSet::from_examples(["ab 1", "abc"]);

        assert_eq!(rules.length().min(), Some(3));
        assert_eq!(rules.length().max(), Some(4));
        assert_eq!(rules.rule(CharClass::Lower).count().max(), Some(3));
    }

    #[test]
    fn test_rules_empty_example() {
        let rules = RuleSet::from_examples([""]);

        assert!(rules.length().is_exactly(0));
        assert_eq!(rules.valid_classes().count(), 0);
    }

    #[test]
    fn test_rules_long_example() {
        let rules = RuleSet::from_examples(["a1".repeat(600_000)]);

        assert!(rules.length().is_exactly(1_200_000));
        assert_eq!(rules.rule(CharClass::Digit).count().min(), Some(600_000));
    }

    #[test]
    fn test_rules_display() {
        let rules = RuleSet::from_examples(["abc1", "abb12"]);

        assert_eq!(
            rules.to_string(),
            "password length in [4..5]\n\
             digit    count in [1..2], duplication in [0..1]\n\
             lower    count in [3..3], duplication in [0..2]"
        );
    }
}
