//! Union by size + path compression
//!
//! Zvi Galil and Giuseppe F. Italiano,
//! Data structures and algorithms for disjoint set union problems

use util::{Error, Result};

/// `parent_or_size[i]`が負なら`i`は根で、集合の大きさは`-parent_or_size[i]`。
/// そうでなければ`i`の親を表す。
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent_or_size: Vec<isize>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        log::trace!("building union-find: size = {size}");
        Self {
            parent_or_size: vec![-1; size],
        }
    }

    pub fn len(&self) -> usize {
        self.parent_or_size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self, i: usize) -> Result<()> {
        if i < self.len() {
            Ok(())
        } else {
            Err(Error::invalid_argument(format_args!(
                "element {i} out of range for union-find of size {}",
                self.len()
            )))
        }
    }

    /// `i`と`j`の属する集合を併合し、新しい代表元を返す。
    ///
    /// 大きさが等しい場合は`i`の代表元が根として残る。
    pub fn merge(&mut self, i: usize, j: usize) -> Result<usize> {
        self.check(i)?;
        self.check(j)?;
        let mut root_i = self.find_unchecked(i);
        let mut root_j = self.find_unchecked(j);
        if root_i == root_j {
            return Ok(root_i);
        }
        if self.parent_or_size[root_i] > self.parent_or_size[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent_or_size[root_i] += self.parent_or_size[root_j];
        self.parent_or_size[root_j] = root_i as isize;
        Ok(root_i)
    }

    /// 経路圧縮をしながら代表元を求める。`&mut self`を取るのはこのため。
    pub fn find(&mut self, i: usize) -> Result<usize> {
        self.check(i)?;
        Ok(self.find_unchecked(i))
    }

    fn find_unchecked(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent_or_size[root] >= 0 {
            root = self.parent_or_size[root] as usize;
        }
        let mut i = i;
        while self.parent_or_size[i] >= 0 {
            let parent = self.parent_or_size[i] as usize;
            self.parent_or_size[i] = root as isize;
            i = parent;
        }
        root
    }

    /// 経路圧縮をせずに代表元を求める。
    pub fn root(&self, i: usize) -> Result<usize> {
        self.check(i)?;
        let mut i = i;
        while self.parent_or_size[i] >= 0 {
            i = self.parent_or_size[i] as usize;
        }
        Ok(i)
    }

    pub fn is_connected(&mut self, i: usize, j: usize) -> Result<bool> {
        Ok(self.find(i)? == self.find(j)?)
    }

    pub fn size(&mut self, i: usize) -> Result<usize> {
        let root = self.find(i)?;
        Ok((-self.parent_or_size[root]) as usize)
    }

    /// 代表元の番号順に、各集合の要素を昇順に並べて返す。
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.len();
        let roots = (0..n).map(|i| self.find_unchecked(i)).collect::<Vec<_>>();
        let mut result = (0..n)
            .map(|i| {
                if roots[i] == i {
                    Vec::with_capacity((-self.parent_or_size[i]) as usize)
                } else {
                    Vec::new()
                }
            })
            .collect::<Vec<_>>();
        for (i, &root) in roots.iter().enumerate() {
            result[root].push(i);
        }
        result.retain(|group| !group.is_empty());
        result
    }
}
