use passlearn::*;

#[test]
fn test_crack_learned_password() {
    let cracker = Cracker::from_examples(["ab_1"]);
    let oracle = ExactMatch::new("p@s1");

    assert_eq!(cracker.find(&oracle), Ok(Some("p@s1".to_owned())));
}

#[test]
fn test_crack_password_longer_than_some_examples() {
    let cracker = Cracker::from_examples(["a1", "bc2"]);

    assert_eq!(
        cracker.find(&ExactMatch::new("zz9")),
        Ok(None),
        "duplication was never observed"
    );
    assert_eq!(
        cracker.find(&ExactMatch::new("q7x")),
        Ok(Some("q7x".to_owned()))
    );
}

#[test]
fn test_crack_with_repeated_characters() {
    let cracker = Cracker::from_examples(["aa1", "b2"]);

    assert_eq!(
        cracker.find(&ExactMatch::new("9zz")),
        Ok(Some("9zz".to_owned()))
    );
}

#[test]
fn test_crack_unreachable_password() {
    let cracker = Cracker::from_examples(["a1", "b2"]);

    // 大文字は例に現れないので生成されない。
    assert_eq!(cracker.find(&ExactMatch::new("A1")), Ok(None));
    // 長さが学習した値域外。
    assert_eq!(cracker.find(&ExactMatch::new("a12")), Ok(None));
}

#[test]
fn test_crack_counts_every_candidate_until_exhaustion() {
    let cracker = Cracker::from_examples(["a1", "ab1"]);
    let expected = cracker.space().count_passwords().unwrap();

    let mut tested = 0_u128;
    let found = cracker.find_with_progress(&Predicate(|_: &str| false), |progress| {
        assert_eq!(
            progress.snapshot.count_passwords(),
            Some(u128::from(progress.tested))
        );
        tested += u128::from(progress.tested);
    });

    assert_eq!(found, Ok(None));
    assert_eq!(tested, expected);
}

#[test]
fn test_crack_oracle_error_aborts_search() {
    #[derive(Debug, PartialEq)]
    struct Unavailable;

    let cracker = Cracker::from_examples(["a1"]);
    let oracle = |_: &str| Err::<bool, _>(Unavailable);

    assert_eq!(cracker.find(&oracle), Err(Unavailable));
}
