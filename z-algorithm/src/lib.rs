use std::ops::Deref;

/// `z[i]`は`s`と`s[i..]`の最長共通接頭辞の長さ。`z[0] = s.len()`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZArray {
    data: Vec<usize>,
}

impl Deref for ZArray {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl ZArray {
    pub fn new<T: Eq>(slice: &[T]) -> Self {
        let n = slice.len();
        if n == 0 {
            return Self { data: vec![] };
        }
        let mut z = vec![0; n];
        // 右端 j + z[j] が最大となる j。s[j..j + z[j]] == s[..z[j]]
        let mut j = 0;
        for i in 1..n {
            let mut k = if j + z[j] <= i {
                0
            } else {
                (j + z[j] - i).min(z[i - j])
            };
            while i + k < n && slice[k] == slice[i + k] {
                k += 1;
            }
            z[i] = k;
            if j + z[j] < i + z[i] {
                j = i;
            }
        }
        z[0] = n;
        Self { data: z }
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.data
    }
}

impl From<ZArray> for Vec<usize> {
    fn from(z: ZArray) -> Self {
        z.into_vec()
    }
}
