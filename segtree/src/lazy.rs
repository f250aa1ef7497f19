use std::{iter, mem, ops::RangeBounds};

use util::{check_index, get_lr, Error, Result};

use super::{
    operation::{Map, Monoid},
    Segtree,
};

/// 区間作用・区間取得ができる遅延セグメント木
///
/// `lazy[i]`は頂点`i`の部分木全体にまだ伝播していない作用を表す。
/// `data[i]`には`lazy[i]`を作用させた後の値が入っているが、子の`data`にはまだ作用していない。
/// 子を読み書きする前には必ず`push`して`lazy[i]`を恒等作用に戻す。
pub struct LazySegtree<T, F, OP, M> {
    len: usize,
    size: usize,
    log: u32,
    data: Box<[T]>,
    lazy: Box<[F]>,
    op: OP,
    map: M,
}

impl<T, F, OP, M> LazySegtree<T, F, OP, M> {
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, F, OP, M> LazySegtree<T, F, OP, M>
where
    T: Clone,
    OP: Monoid<Element = T>,
    M: Map<OP = OP, Elem = F>,
{
    /// すべての要素が単位元である遅延セグメント木を作る。
    pub fn new(len: usize, op: OP, map: M) -> Result<Self> {
        Ok(Self::from_segtree(Segtree::new(len, op)?, map))
    }

    pub fn from_iter_op<I>(iter: I, op: OP, map: M) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self::from_segtree(Segtree::from_iter_op(iter, op)?, map))
    }

    pub fn from_segtree(segtree: Segtree<T, OP>, map: M) -> Self {
        let Segtree {
            len,
            size,
            data,
            op,
        } = segtree;
        let lazy = iter::repeat_with(|| map.ident()).take(size).collect();
        Self {
            len,
            size,
            log: size.trailing_zeros(),
            data,
            lazy,
            op,
            map,
        }
    }

    fn eval(&mut self, i: usize) {
        self.data[i] = self.op.op(&self.data[i * 2], &self.data[i * 2 + 1]);
    }

    /// 頂点`i`の部分木全体に作用素`f`を作用させる。葉には`lazy`を持たせない。
    fn apply_all_tree(&mut self, i: usize, f: &F) {
        self.map.apply_assign(&mut self.data[i], f);
        if i < self.size {
            self.map.composite_assign(&mut self.lazy[i], f);
        }
    }

    fn push(&mut self, i: usize) {
        let f = mem::replace(&mut self.lazy[i], self.map.ident());
        self.apply_all_tree(i * 2, &f);
        self.apply_all_tree(i * 2 + 1, &f);
    }

    /// 葉`i`の祖先の作用を根から順にすべて伝播させる。
    fn push_path(&mut self, i: usize) {
        for j in (1..=self.log).rev() {
            self.push(i >> j);
        }
    }

    fn update_path(&mut self, mut i: usize) {
        while i > 1 {
            i >>= 1;
            self.eval(i);
        }
    }

    /// 区間`[l, r)`(葉の番号)の境界にかかる頂点の作用を伝播させる。
    fn push_boundary(&mut self, l: usize, r: usize) {
        for i in (1..=self.log).rev() {
            if (l >> i) << i != l {
                self.push(l >> i);
            }
            if (r >> i) << i != r {
                self.push((r - 1) >> i);
            }
        }
    }

    fn push_all(&mut self) {
        for i in 1..self.size {
            self.push(i);
        }
    }

    /// 作用素をすべて作用させた後の配列を返す。データ数をnとすると、O(n)時間かかることに注意。
    pub fn borrow_data(&mut self) -> &[T] {
        self.push_all();
        &self.data[self.size..self.size + self.len]
    }

    pub fn into_vec(mut self) -> Vec<T> {
        self.push_all();
        let mut data = self.data.into_vec();
        data.truncate(self.size + self.len);
        data.drain(..self.size);
        data
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        let i = index + self.size;
        self.push_path(i);
        self.data[i] = value;
        self.update_path(i);
        Ok(())
    }

    pub fn get(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        let i = index + self.size;
        self.push_path(i);
        Ok(self.data[i].clone())
    }

    pub fn query<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T> {
        let (l, r) = get_lr(self.len, range)?;
        if l == r {
            return Ok(self.op.identity());
        }
        let (mut l, mut r) = (l + self.size, r + self.size);
        self.push_boundary(l, r);
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

    pub fn apply_one(&mut self, index: usize, f: F) -> Result<()> {
        check_index(index, self.len)?;
        let i = index + self.size;
        self.push_path(i);
        self.map.apply_assign(&mut self.data[i], &f);
        self.update_path(i);
        Ok(())
    }

    pub fn apply_range<R: RangeBounds<usize>>(&mut self, range: R, f: F) -> Result<()> {
        let (l, r) = get_lr(self.len, range)?;
        if l == r {
            return Ok(());
        }
        let (l, r) = (l + self.size, r + self.size);
        self.push_boundary(l, r);
        {
            let (mut l, mut r) = (l, r);
            while l < r {
                if l & 1 == 1 {
                    self.apply_all_tree(l, &f);
                    l += 1;
                }
                if r & 1 == 1 {
                    r -= 1;
                    self.apply_all_tree(r, &f);
                }
                l >>= 1;
                r >>= 1;
            }
        }
        for i in 1..=self.log {
            if (l >> i) << i != l {
                self.eval(l >> i);
            }
            if (r >> i) << i != r {
                self.eval((r - 1) >> i);
            }
        }
        Ok(())
    }

    /// `pred(self.query(l..j))`が`true`となる最大の`j`をO(log(n))で求める。
    ///
    /// `pred`は単調である必要がある。`pred(単位元)`が`false`ならエラー。
    pub fn upper_bound<P>(&mut self, l: usize, mut pred: P) -> Result<usize>
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
        self.push_path(l);
        let mut l_query = self.op.identity();
        loop {
            while l & 1 == 0 {
                l >>= 1;
            }
            let next_query = self.op.op(&l_query, &self.data[l]);
            if !pred(&next_query) {
                while l < self.size {
                    self.push(l);
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
    pub fn lower_bound<P>(&mut self, r: usize, mut pred: P) -> Result<usize>
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
        self.push_path(r - 1);
        let mut r_query = self.op.identity();
        loop {
            r -= 1;
            while r > 1 && r & 1 == 1 {
                r >>= 1;
            }
            let next_query = self.op.op(&self.data[r], &r_query);
            if !pred(&next_query) {
                while r < self.size {
                    self.push(r);
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
