//! 候補数の計算に使う組合せ論ヘルパー。
//!
//! いずれも `u128` に収まらない場合は `None` を返す。

/// 二項係数 `C(n, k)` を返す。`k > n` なら 0。
///
/// `min(k, n - k)` 回の乗除算で求める。
/// i 回目の時点の値は `C(n, i + 1)` なので、各除算は割り切れる。
pub fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) は (i + 1) で割り切れる。オーバーフローを遅らせるため先に gcd で約分する。
        let d = gcd(acc, i + 1);
        acc = (acc / d).checked_mul(n - i)? / ((i + 1) / d);
    }

    Some(acc)
}

/// 順列の数 `P(n, k) = n! / (n - k)!` を返す。`k > n` なら 0。
pub fn permutations(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }

    (n - k + 1..=n).try_fold(1_u128, |acc, v| acc.checked_mul(v))
}

/// 階乗 `n!` を返す。
pub fn factorial(n: u128) -> Option<u128> {
    permutations(n, n)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
