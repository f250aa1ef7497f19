use proconio::{fastout, input, marker::Usize1};
use segtree::{
    lazy::LazySegtree,
    operation::{MapOp, MonoidOp},
};

/// (0の個数, 1の個数, 転倒数)
type Node = (u64, u64, u64);

#[fastout]
fn main() {
    input! {
        n: usize,
        q: usize,
        a: [u8; n],
        queries: [(u8, Usize1, usize); q],
    }

    let op = MonoidOp::new((0, 0, 0), |a: &Node, b: &Node| {
        (a.0 + b.0, a.1 + b.1, a.2 + b.2 + a.1 * b.0)
    });
    let flip = MapOp::new(
        false,
        |&f: &bool, x: &Node| if f { (x.1, x.0, x.0 * x.1 - x.2) } else { *x },
        |f: &bool, g: &bool| f ^ g,
    );
    let mut segtree = LazySegtree::from_iter_op(
        a.into_iter().map(|x| if x == 0 { (1, 0, 0) } else { (0, 1, 0) }),
        op,
        flip,
    )
    .unwrap();

    for (t, l, r) in queries {
        match t {
            1 => segtree.apply_range(l..r, true).unwrap(),
            2 => println!("{}", segtree.query(l..r).unwrap().2),
            _ => unreachable!(),
        }
    }
}
