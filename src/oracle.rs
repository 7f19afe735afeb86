use std::convert::Infallible;

/// 候補が本当のパスワードかどうかを判定するもの。
///
/// 同じ候補について何度呼ばれても同じ答えを返さなければならない。
/// エラーを返すと探索はその場で打ち切られ、エラーがそのまま呼び出し元に返る。
pub trait Oracle {
    type Error;

    fn verify(&self, candidate: &str) -> Result<bool, Self::Error>;
}

impl<F, E> Oracle for F
where
    F: Fn(&str) -> Result<bool, E>,
{
    type Error = E;

    fn verify(&self, candidate: &str) -> Result<bool, Self::Error> {
        self(candidate)
    }
}

/// 決まった 1 つの文字列のみを正解とする。テストや動作確認用。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactMatch {
    secret: String,
}

impl ExactMatch {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Oracle for ExactMatch {
    type Error = Infallible;

    fn verify(&self, candidate: &str) -> Result<bool, Self::Error> {
        Ok(candidate == self.secret)
    }
}

/// 失敗しない述語をそのまま判定に使う。
#[derive(Clone, Copy, Debug)]
pub struct Predicate<F>(pub F);

impl<F> Oracle for Predicate<F>
where
    F: Fn(&str) -> bool,
{
    type Error = Infallible;

    fn verify(&self, candidate: &str) -> Result<bool, Self::Error> {
        Ok((self.0)(candidate))
    }
}
