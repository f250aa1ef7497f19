//! SA-IS
//!
//! Ge Nong, Sen Zhang, and Wai Hong Chan,
//! Two Efficient Algorithms for Linear Time Suffix Array Construction

use std::ops::Deref;

use util::{Error, Result};

/// この長さ未満では素朴なソートを使う。
const THRESHOLD_NAIVE: usize = 10;
/// この長さ未満ではダブリングを使う。
const THRESHOLD_DOUBLING: usize = 40;

/// `sa[i]`は辞書順で`i`番目の接尾辞の開始位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    sa: Vec<usize>,
}

impl Deref for SuffixArray {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.sa
    }
}

impl SuffixArray {
    /// 全要素が`upper`以下の整数列から構築する。
    pub fn from_ints(s: &[usize], upper: usize) -> Result<Self> {
        if let Some((i, &x)) = s.iter().enumerate().find(|(_, &x)| x > upper) {
            return Err(Error::invalid_argument(format_args!(
                "s[{i}] = {x} exceeds upper bound {upper}"
            )));
        }
        log::trace!("building suffix array: len = {}, upper = {upper}", s.len());
        Ok(Self {
            sa: sa_is(s, upper),
        })
    }

    /// 任意の全順序列から構築する。座標圧縮してから`from_ints`と同じ処理をする。
    pub fn new<T: Ord>(s: &[T]) -> Self {
        let n = s.len();
        let mut idx = (0..n).collect::<Vec<_>>();
        idx.sort_by(|&l, &r| s[l].cmp(&s[r]));
        let mut s2 = vec![0; n];
        let mut now = 0;
        for i in 0..n {
            if i > 0 && s[idx[i - 1]] != s[idx[i]] {
                now += 1;
            }
            s2[idx[i]] = now;
        }
        Self {
            sa: sa_is(&s2, now),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let s = s.bytes().map(usize::from).collect::<Vec<_>>();
        Self {
            sa: sa_is(&s, 255),
        }
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.sa
    }
}

impl From<SuffixArray> for Vec<usize> {
    fn from(sa: SuffixArray) -> Self {
        sa.into_vec()
    }
}

fn sa_naive<T: Ord>(s: &[T]) -> Vec<usize> {
    let mut sa = (0..s.len()).collect::<Vec<_>>();
    sa.sort_by(|&l, &r| s[l..].cmp(&s[r..]));
    sa
}

fn sa_doubling(s: &[usize]) -> Vec<usize> {
    let n = s.len();
    let mut sa = (0..n).collect::<Vec<_>>();
    let mut rnk = s.to_vec();
    let mut tmp = vec![0; n];
    let mut k = 1;
    while k < n {
        let key = |i: usize| (rnk[i], rnk.get(i + k).copied());
        sa.sort_by_key(|&i| key(i));
        tmp[sa[0]] = 0;
        for i in 1..n {
            tmp[sa[i]] = tmp[sa[i - 1]] + usize::from(key(sa[i - 1]) < key(sa[i]));
        }
        std::mem::swap(&mut tmp, &mut rnk);
        k *= 2;
    }
    sa
}

/// 内部では`sa`の値を1始まりで持ち、0を空きとして扱う。
fn sa_is(s: &[usize], upper: usize) -> Vec<usize> {
    let n = s.len();
    match n {
        0 => return vec![],
        1 => return vec![0],
        2 => return if s[0] < s[1] { vec![0, 1] } else { vec![1, 0] },
        _ if n < THRESHOLD_NAIVE => return sa_naive(s),
        _ if n < THRESHOLD_DOUBLING => return sa_doubling(s),
        _ => {}
    }

    // ls[i]: s[i..]がs[i + 1..]より小さい (S型)
    let mut ls = vec![false; n];
    for i in (0..n - 1).rev() {
        ls[i] = if s[i] == s[i + 1] {
            ls[i + 1]
        } else {
            s[i] < s[i + 1]
        };
    }
    let mut sum_l = vec![0; upper + 1];
    let mut sum_s = vec![0; upper + 1];
    for i in 0..n {
        if ls[i] {
            sum_l[s[i] + 1] += 1;
        } else {
            sum_s[s[i]] += 1;
        }
    }
    for i in 0..=upper {
        sum_s[i] += sum_l[i];
        if i < upper {
            sum_l[i + 1] += sum_s[i];
        }
    }

    let induce = |sa: &mut [usize], lms: &[usize]| {
        sa.fill(0);
        let mut buf = sum_s.clone();
        for &d in lms {
            if d == n {
                continue;
            }
            sa[buf[s[d]]] = d + 1;
            buf[s[d]] += 1;
        }
        buf.copy_from_slice(&sum_l);
        sa[buf[s[n - 1]]] = n;
        buf[s[n - 1]] += 1;
        for i in 0..n {
            let v = sa[i];
            if v >= 2 && !ls[v - 2] {
                sa[buf[s[v - 2]]] = v - 1;
                buf[s[v - 2]] += 1;
            }
        }
        buf.copy_from_slice(&sum_l);
        for i in (0..n).rev() {
            let v = sa[i];
            if v >= 2 && ls[v - 2] {
                buf[s[v - 2] + 1] -= 1;
                sa[buf[s[v - 2] + 1]] = v - 1;
            }
        }
    };

    let mut lms_map = vec![None; n + 1];
    let mut lms = vec![];
    for i in 1..n {
        if !ls[i - 1] && ls[i] {
            lms_map[i] = Some(lms.len());
            lms.push(i);
        }
    }
    let m = lms.len();
    let mut sa = vec![0; n];
    induce(&mut sa, &lms);

    if m > 0 {
        let sorted_lms = sa
            .iter()
            .map(|&v| v - 1)
            .filter(|&v| lms_map[v].is_some())
            .collect::<Vec<_>>();
        let lms_end = |v: usize| lms_map[v].and_then(|j| lms.get(j + 1)).copied().unwrap_or(n);
        let mut rec_s = vec![0; m];
        let mut rec_upper = 0;
        for i in 1..m {
            let (mut l, mut r) = (sorted_lms[i - 1], sorted_lms[i]);
            let (end_l, end_r) = (lms_end(l), lms_end(r));
            let same = if end_l - l != end_r - r {
                false
            } else {
                while l < end_l && s[l] == s[r] {
                    l += 1;
                    r += 1;
                }
                l != n && r != n && s[l] == s[r]
            };
            if !same {
                rec_upper += 1;
            }
            if let Some(j) = lms_map[sorted_lms[i]] {
                rec_s[j] = rec_upper;
            }
        }
        let rec_sa = sa_is(&rec_s, rec_upper);
        let sorted_lms = rec_sa.into_iter().map(|i| lms[i]).collect::<Vec<_>>();
        induce(&mut sa, &sorted_lms);
    }

    sa.into_iter().map(|v| v - 1).collect()
}

/// Kasaiのアルゴリズム。`lcp[i]`は`s[sa[i]..]`と`s[sa[i + 1]..]`の最長共通接頭辞の長さ。
pub fn lcp_array<T: Eq>(s: &[T], sa: &[usize]) -> Result<Vec<usize>> {
    let n = s.len();
    if sa.len() != n {
        return Err(Error::invalid_argument(format_args!(
            "suffix array length {} does not match sequence length {n}",
            sa.len()
        )));
    }
    if n == 0 {
        return Ok(vec![]);
    }
    let mut rnk = vec![None; n];
    for (i, &p) in sa.iter().enumerate() {
        match rnk.get_mut(p) {
            Some(slot) if slot.is_none() => *slot = Some(i),
            _ => {
                return Err(Error::invalid_argument(format_args!(
                    "sa[{i}] = {p} is out of range or duplicated"
                )))
            }
        }
    }
    let rnk = rnk.into_iter().flatten().collect::<Vec<_>>();
    let mut lcp = vec![0; n - 1];
    let mut h: usize = 0;
    for (i, &r) in rnk.iter().enumerate() {
        h = h.saturating_sub(1);
        if r == 0 {
            continue;
        }
        let j = sa[r - 1];
        while i.max(j) + h < n && s[j + h] == s[i + h] {
            h += 1;
        }
        lcp[r - 1] = h;
    }
    Ok(lcp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcp_naive<T: Eq>(s: &[T], sa: &[usize]) -> Vec<usize> {
        sa.windows(2)
            .map(|w| s[w[0]..].iter().zip(&s[w[1]..]).take_while(|(a, b)| a == b).count())
            .collect()
    }

    #[test]
    fn missisippi() {
        let s = "missisippi";
        let sa = SuffixArray::from_str(s);
        let answer = [
            "i",
            "ippi",
            "isippi",
            "issisippi",
            "missisippi",
            "pi",
            "ppi",
            "sippi",
            "sisippi",
            "ssisippi",
        ];
        assert_eq!(sa.len(), answer.len());
        for (&i, &expected) in sa.iter().zip(&answer) {
            assert_eq!(&s[i..], expected);
        }
        assert_eq!(&*sa, &[9, 6, 4, 1, 0, 8, 7, 5, 3, 2]);
    }

    #[test]
    fn banana() {
        let sa = SuffixArray::new(b"banana");
        assert_eq!(sa.into_vec(), vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn empty() {
        assert!(SuffixArray::from_str("").is_empty());
        assert!(SuffixArray::new::<i32>(&[]).is_empty());
        assert!(SuffixArray::from_ints(&[], 0).unwrap().is_empty());
        assert_eq!(lcp_array::<u8>(&[], &[]), Ok(vec![]));
    }

    #[test]
    fn lcp() {
        let sa = SuffixArray::from_str("aab");
        assert_eq!(&*sa, &[0, 1, 2]);
        let lcp = lcp_array(b"aab", &sa).unwrap();
        assert_eq!(lcp, vec![1, 0]);
        assert_eq!(lcp_array(&[0, 0, 1], &sa), Ok(lcp.clone()));
        assert_eq!(lcp_array(&[-100, -100, 100], &sa), Ok(lcp.clone()));
        assert_eq!(lcp_array(&[i32::MIN, i32::MIN, 100], &sa), Ok(lcp));
    }

    #[test]
    fn all_same_and_alternating() {
        for n in 1..=100 {
            let s = vec![10; n];
            let expected = sa_naive(&s);
            assert_eq!(SuffixArray::new(&s).into_vec(), expected);
            assert_eq!(SuffixArray::from_ints(&s, 10).unwrap().into_vec(), expected);
            assert_eq!(SuffixArray::from_ints(&s, 12).unwrap().into_vec(), expected);

            let s = (0..n).map(|i| i % 2).collect::<Vec<_>>();
            let expected = sa_naive(&s);
            assert_eq!(SuffixArray::new(&s).into_vec(), expected);
            assert_eq!(SuffixArray::from_ints(&s, 3).unwrap().into_vec(), expected);

            let s = (0..n).map(|i| 1 - i % 2).collect::<Vec<_>>();
            let expected = sa_naive(&s);
            assert_eq!(SuffixArray::new(&s).into_vec(), expected);
            assert_eq!(SuffixArray::from_ints(&s, 3).unwrap().into_vec(), expected);
        }
    }

    #[test]
    fn exhaustive() {
        for x in [4usize, 2] {
            for n in 1..=20 / x {
                for f in 0..x.pow(n as u32) {
                    let mut g = f;
                    let s = (0..n)
                        .map(|_| {
                            let c = g % x;
                            g /= x;
                            c
                        })
                        .collect::<Vec<_>>();
                    let max_c = s.iter().copied().max().unwrap_or(0);
                    let sa = sa_naive(&s);
                    assert_eq!(SuffixArray::new(&s).into_vec(), sa);
                    assert_eq!(SuffixArray::from_ints(&s, max_c).unwrap().into_vec(), sa);
                    assert_eq!(sa_doubling(&s), sa);
                    assert_eq!(lcp_array(&s, &sa), Ok(lcp_naive(&s, &sa)));
                }
            }
        }
    }

    #[test]
    fn invalid_arguments() {
        assert!(SuffixArray::from_ints(&[2, 2], 1).unwrap_err().is_invalid_argument());
        assert!(lcp_array::<u8>(&[], &[1, 2]).unwrap_err().is_invalid_argument());
        assert!(lcp_array(b"ab", &[0, 2]).unwrap_err().is_invalid_argument());
        assert!(lcp_array(b"ab", &[1, 1]).unwrap_err().is_invalid_argument());
    }
}
