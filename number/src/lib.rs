pub mod prime;

pub use prime::{is_prime, primitive_root};
use util::{Error, Result};

/// `x mod m`を`[0, m)`で返す。`m >= 1`であること。
pub fn safe_mod(x: i64, m: i64) -> i64 {
    x.rem_euclid(m)
}

/// `(a * b) mod m`。`0 <= a, b < m`であること。
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (a as u128 * b as u128 % m as u128) as u64
}

pub(crate) fn pow_mod_u64(x: u64, mut n: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut r = 1;
    let mut y = x % m;
    while n > 0 {
        if n & 1 == 1 {
            r = mul_mod(r, y, m);
        }
        y = mul_mod(y, y, m);
        n >>= 1;
    }
    r
}

/// `g = gcd(a, b)`と、`a * x ≡ g (mod b)`かつ`0 <= x < b / g`となる`x`の組`(g, x)`を返す。
///
/// `b >= 1`であること。
pub fn inv_gcd(a: i64, b: i64) -> (i64, i64) {
    let a = safe_mod(a, b);
    if a == 0 {
        return (b, 0);
    }
    // s - m0 * a ≡ 0 (mod b), t - m1 * a ≡ 0 (mod b)
    let (mut s, mut t) = (b, a);
    let (mut m0, mut m1) = (0, 1);
    while t != 0 {
        let u = s / t;
        s -= t * u;
        m0 -= m1 * u;
        std::mem::swap(&mut s, &mut t);
        std::mem::swap(&mut m0, &mut m1);
    }
    if m0 < 0 {
        m0 += b / s;
    }
    (s, m0)
}

/// `x^n mod m`
pub fn pow_mod(x: i64, n: i64, m: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::invalid_argument(format_args!(
            "exponent must be non-negative, got {n}"
        )));
    }
    if m < 1 {
        return Err(Error::invalid_argument(format_args!(
            "modulus must be positive, got {m}"
        )));
    }
    Ok(pow_mod_u64(safe_mod(x, m) as u64, n as u64, m as u64) as i64)
}

/// `x * y ≡ 1 (mod m)`となる`y`を`[0, m)`で返す。
pub fn inv_mod(x: i64, m: i64) -> Result<i64> {
    if m < 1 {
        return Err(Error::invalid_argument(format_args!(
            "modulus must be positive, got {m}"
        )));
    }
    let (g, im) = inv_gcd(x, m);
    if g != 1 {
        return Err(Error::invalid_argument(format_args!(
            "{x} is not invertible modulo {m}"
        )));
    }
    Ok(im)
}

/// 中国剰余定理。すべての`i`で`y ≡ r[i] (mod m[i])`となる`y`と、`z = lcm(m)`の組`(y, z)`を返す。
///
/// 解が存在しなければ`(0, 0)`、入力が空なら`(0, 1)`を返す。
pub fn crt(r: &[i64], m: &[i64]) -> Result<(i64, i64)> {
    if r.len() != m.len() {
        return Err(Error::invalid_argument(format_args!(
            "length mismatch: {} remainders but {} moduli",
            r.len(),
            m.len()
        )));
    }
    if let Some(&bad) = m.iter().find(|&&m| m < 1) {
        return Err(Error::invalid_argument(format_args!(
            "modulus must be positive, got {bad}"
        )));
    }
    let (mut r0, mut m0) = (0, 1);
    for (&ri, &mi) in r.iter().zip(m) {
        let (mut r1, mut m1) = (safe_mod(ri, mi), mi);
        if m0 < m1 {
            std::mem::swap(&mut r0, &mut r1);
            std::mem::swap(&mut m0, &mut m1);
        }
        if m0 % m1 == 0 {
            if r0 % m1 != r1 {
                return Ok((0, 0));
            }
            continue;
        }
        // m0 * im ≡ g (mod m1)
        let (g, im) = inv_gcd(m0, m1);
        let u1 = m1 / g;
        if (r1 - r0) % g != 0 {
            return Ok((0, 0));
        }
        let x = (r1 - r0) / g % u1 * im % u1;
        r0 += x * m0;
        m0 *= u1;
        if r0 < 0 {
            r0 += m0;
        }
    }
    Ok((r0, m0))
}

/// `sum_{i=0}^{n-1} floor((a * i + b) / m)`
pub fn floor_sum(n: i64, m: i64, a: i64, b: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::invalid_argument(format_args!(
            "n must be non-negative, got {n}"
        )));
    }
    if m < 1 {
        return Err(Error::invalid_argument(format_args!(
            "m must be positive, got {m}"
        )));
    }
    let mut ans = 0i64;
    let (mut a, mut b) = (a, b);
    if a < 0 {
        let a2 = safe_mod(a, m);
        ans -= n * (n - 1) / 2 * ((a2 - a) / m);
        a = a2;
    }
    if b < 0 {
        let b2 = safe_mod(b, m);
        ans -= n * ((b2 - b) / m);
        b = b2;
    }
    Ok(ans + floor_sum_unsigned(n as u64, m as u64, a as u64, b as u64) as i64)
}

fn floor_sum_unsigned(mut n: u64, mut m: u64, mut a: u64, mut b: u64) -> u64 {
    let mut ans = 0;
    loop {
        if a >= m {
            ans += n * n.saturating_sub(1) / 2 * (a / m);
            a %= m;
        }
        if b >= m {
            ans += n * (b / m);
            b %= m;
        }
        let y_max = a * n + b;
        if y_max < m {
            break;
        }
        n = y_max / m;
        b = y_max % m;
        std::mem::swap(&mut m, &mut a);
    }
    ans
}
