use std::ops::{Bound, RangeBounds};

use crate::error::{Error, Result};

/// `range`を半開区間`[l, r)`に変換する。
///
/// 戻り値を`(l, r)`とすると以下が保証される。
///
/// * `l <= r <= len`
pub fn get_lr<R: RangeBounds<usize>>(len: usize, range: R) -> Result<(usize, usize)> {
    use Bound::*;
    let l = match range.start_bound() {
        Excluded(s) => s.checked_add(1).ok_or_else(|| {
            Error::invalid_argument("attempted to index slice from after maximum usize")
        })?,
        Included(s) => *s,
        Unbounded => 0,
    };
    let r = match range.end_bound() {
        Excluded(e) => *e,
        Included(e) => e.checked_add(1).ok_or_else(|| {
            Error::invalid_argument("attempted to index slice up to maximum usize")
        })?,
        Unbounded => len,
    };
    if l > r {
        Err(Error::invalid_argument(format_args!(
            "slice index starts at {l} but ends at {r}"
        )))
    } else if r > len {
        Err(Error::invalid_argument(format_args!(
            "range end index {r} out of range for slice of length {len}"
        )))
    } else {
        Ok((l, r))
    }
}

pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}
