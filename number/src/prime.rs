use util::{Error, Result};

use crate::{mul_mod, pow_mod_u64};

const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// 64bit整数全体で正しい判定を与えるMiller-Rabinの底
const BASES: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

/// 決定的Miller-Rabin法による素数判定
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in SMALL_PRIMES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'base: for a in BASES {
        let a = a % n;
        if a == 0 {
            continue;
        }
        let mut x = pow_mod_u64(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'base;
            }
        }
        return false;
    }
    true
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Pollardのρ法。合成数`n`の非自明な約数をひとつ返す。
fn pollard_rho(n: u64) -> u64 {
    if n % 2 == 0 {
        return 2;
    }
    let mut c = 1;
    loop {
        let f = |x: u64| ((x as u128 * x as u128 + c as u128) % n as u128) as u64;
        let (mut x, mut y, mut d) = (2, 2, 1);
        while d == 1 {
            x = f(x);
            y = f(f(y));
            d = gcd(x.abs_diff(y), n);
        }
        if d != n {
            return d;
        }
        c += 1;
    }
}

/// `n`の素因数を重複なく昇順に返す。
fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = vec![];
    for p in SMALL_PRIMES {
        if n % p == 0 {
            factors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
    }
    let mut rest = vec![n];
    while let Some(m) = rest.pop() {
        if m == 1 {
            continue;
        }
        if is_prime(m) {
            factors.push(m);
            continue;
        }
        let d = pollard_rho(m);
        rest.extend([d, m / d]);
    }
    factors.sort_unstable();
    factors.dedup();
    factors
}

/// 素数`m`を法とする最小の原始根
pub fn primitive_root(m: i64) -> Result<i64> {
    if m < 2 || !is_prime(m as u64) {
        return Err(Error::invalid_argument(format_args!(
            "modulus must be prime, got {m}"
        )));
    }
    if m == 2 {
        return Ok(1);
    }
    let m = m as u64;
    let factors = prime_factors(m - 1);
    log::trace!("primitive_root: factors of {} = {factors:?}", m - 1);
    let mut g = 2;
    while factors.iter().any(|&p| pow_mod_u64(g, (m - 1) / p, m) == 1) {
        g += 1;
    }
    Ok(g as i64)
}
