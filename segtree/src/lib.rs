pub mod lazy;
pub mod operation;

use operation::Monoid;
use std::{
    iter,
    ops::{Deref, DerefMut, RangeBounds},
};
use util::{check_index, get_lr, Error, Result};

pub use lazy::LazySegtree;

/// 非可換でもよいモノイドを載せるセグメント木
///
/// 要素数`len`を2冪`size`に切り上げ、`data[size..size + len]`に葉を置く。
/// 残りの葉は単位元で埋める。頂点`i`の子は`2i`と`2i + 1`。
#[derive(Debug, Clone)]
pub struct Segtree<T, OP> {
    len: usize,
    size: usize,
    data: Box<[T]>,
    op: OP,
}

impl<T, OP> Segtree<T, OP> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len)?;
        Ok(&self.data[index + self.size])
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut data = self.data.into_vec();
        data.truncate(self.size + self.len);
        data.drain(..self.size);
        data
    }
}

impl<T, OP> Deref for Segtree<T, OP> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.data[self.size..self.size + self.len]
    }
}

impl<T: Clone, OP: Monoid<Element = T>> Segtree<T, OP> {
    /// すべての要素が単位元であるセグメント木を作る。
    pub fn new(len: usize, op: OP) -> Result<Self> {
        let ident = op.identity();
        Self::from_iter_op(iter::repeat(ident).take(len), op)
    }

    pub fn from_iter_op<I: IntoIterator<Item = T>>(iter: I, op: OP) -> Result<Self> {
        let values = iter.into_iter().collect::<Vec<_>>();
        let len = values.len();
        if len == 0 {
            return Err(Error::invalid_argument("segment tree size must be positive"));
        }
        let size = len.next_power_of_two();
        log::trace!("building segment tree: len = {len}, size = {size}");
        let data = iter::repeat_with(|| op.identity())
            .take(size)
            .chain(
                values
                    .into_iter()
                    .chain(iter::repeat_with(|| op.identity()))
                    .take(size),
            )
            .collect();
        let mut segtree = Self {
            len,
            size,
            data,
            op,
        };
        for i in (1..size).rev() {
            segtree.eval(i);
        }
        Ok(segtree)
    }

    fn eval(&mut self, i: usize) {
        self.data[i] = self.op.op(&self.data[i * 2], &self.data[i * 2 + 1]);
    }

    fn update_val(&mut self, mut i: usize) {
        while i > 1 {
            i >>= 1;
            self.eval(i);
        }
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        let i = index + self.size;
        self.data[i] = value;
        self.update_val(i);
        Ok(())
    }

    /// 書き換えた値は、戻り値がdropされたときに木へ反映される。
    ///
    /// 戻り値を`mem::forget`すると祖先の集約値が更新されないまま残る。
    /// その場合は同じ位置に`set`し直すまで`query`の結果は正しくない。
    pub fn get_mut(&mut self, index: usize) -> Result<ValMut<'_, T, OP>> {
        check_index(index, self.len)?;
        Ok(ValMut {
            index: index + self.size,
            segtree: self,
        })
    }

    /// `range`の要素を左から順に演算した結果を返す。空区間なら単位元。
    pub fn query<R: RangeBounds<usize>>(&self, range: R) -> Result<T> {
        let (l, r) = get_lr(self.len, range)?;
        let (mut l, mut r) = (l + self.size, r + self.size);
        let mut query_l = self.op.identity();
        let mut query_r = self.op.identity();
        while l < r {
            if r & 1 == 1 {
                r -= 1;
                self.op.op_assign_right(&self.data[r], &mut query_r);
            }
            if l & 1 == 1 {
                self.op.op_assign_left(&mut query_l, &self.data[l]);
                l += 1;
            }
            l >>= 1;
            r >>= 1;
        }
        self.op.op_assign_left(&mut query_l, &query_r);
        Ok(query_l)
    }

    pub fn query_all(&self) -> T {
        self.data[1].clone()
    }

    /// `pred(self.query(l..j))`が`true`となる最大の`j`をO(log(n))で求める。
    ///
    /// `pred`は単調である必要がある。`pred(単位元)`が`false`ならエラー。
    pub fn upper_bound<P>(&self, l: usize, mut pred: P) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        if l > self.len {
            return Err(Error::invalid_argument(format_args!(
                "index {l} out of range for slice of length {}",
                self.len
            )));
        }
        if !pred(&self.op.identity()) {
            return Err(Error::invalid_argument("predicate must hold for the identity"));
        }
        if l == self.len {
            return Ok(l);
        }
        let mut l = l + self.size;
        let mut l_query = self.op.identity();
        loop {
            while l & 1 == 0 {
                l >>= 1;
            }
            let next_query = self.op.op(&l_query, &self.data[l]);
            if !pred(&next_query) {
                while l < self.size {
                    l <<= 1;
                    let next_query = self.op.op(&l_query, &self.data[l]);
                    if pred(&next_query) {
                        l_query = next_query;
                        l += 1;
                    }
                }
                return Ok(l - self.size);
            }
            l_query = next_query;
            l += 1;
            if l.is_power_of_two() {
                return Ok(self.len);
            }
        }
    }

    /// `pred(self.query(j..r))`が`true`となる最小の`j`をO(log(n))で求める。
    ///
    /// `pred`は単調である必要がある。`pred(単位元)`が`false`ならエラー。
    pub fn lower_bound<P>(&self, r: usize, mut pred: P) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        if r > self.len {
            return Err(Error::invalid_argument(format_args!(
                "index {r} out of range for slice of length {}",
                self.len
            )));
        }
        if !pred(&self.op.identity()) {
            return Err(Error::invalid_argument("predicate must hold for the identity"));
        }
        if r == 0 {
            return Ok(0);
        }
        let mut r = r + self.size;
        let mut r_query = self.op.identity();
        loop {
            r -= 1;
            while r > 1 && r & 1 == 1 {
                r >>= 1;
            }
            let next_query = self.op.op(&self.data[r], &r_query);
            if !pred(&next_query) {
                while r < self.size {
                    r = (r << 1) + 1;
                    let next_query = self.op.op(&self.data[r], &r_query);
                    if pred(&next_query) {
                        r_query = next_query;
                        r -= 1;
                    }
                }
                return Ok(r + 1 - self.size);
            }
            r_query = next_query;
            if r.is_power_of_two() {
                return Ok(0);
            }
        }
    }
}

pub struct ValMut<'a, T: Clone, OP: Monoid<Element = T>> {
    segtree: &'a mut Segtree<T, OP>,
    index: usize,
}

impl<T: Clone, OP: Monoid<Element = T>> Deref for ValMut<'_, T, OP> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.segtree.data[self.index]
    }
}

impl<T: Clone, OP: Monoid<Element = T>> DerefMut for ValMut<'_, T, OP> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.segtree.data[self.index]
    }
}

impl<T: Clone, OP: Monoid<Element = T>> Drop for ValMut<'_, T, OP> {
    fn drop(&mut self) {
        self.segtree.update_val(self.index);
    }
}

impl<T, OP> From<Segtree<T, OP>> for Vec<T> {
    fn from(value: Segtree<T, OP>) -> Self {
        value.into_vec()
    }
}
