use proconio::{fastout, input};
use union_find::UnionFind;

#[fastout]
fn main() {
    input! {
        n: usize,
        q: usize,
        queries: [(u8, usize, usize); q],
    }

    let mut uf = UnionFind::new(n);
    for (t, u, v) in queries {
        match t {
            0 => {
                uf.merge(u, v).unwrap();
            }
            1 => {
                if uf.is_connected(u, v).unwrap() {
                    println!("1");
                } else {
                    println!("0");
                }
            }
            _ => unreachable!(),
        }
    }
}
