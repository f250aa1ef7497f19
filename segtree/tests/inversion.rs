//! 0/1列の区間反転と区間転倒数

use segtree::{
    lazy::LazySegtree,
    operation::{Map, Monoid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Inversion {
    zero: u64,
    one: u64,
    inversion: u64,
}

impl Inversion {
    fn from_bit(b: u8) -> Self {
        if b == 0 {
            Self {
                zero: 1,
                one: 0,
                inversion: 0,
            }
        } else {
            Self {
                zero: 0,
                one: 1,
                inversion: 0,
            }
        }
    }
}

struct InversionOp;

impl Monoid for InversionOp {
    type Element = Inversion;
    fn identity(&self) -> Inversion {
        Inversion {
            zero: 0,
            one: 0,
            inversion: 0,
        }
    }
    fn op(&self, a: &Inversion, b: &Inversion) -> Inversion {
        Inversion {
            zero: a.zero + b.zero,
            one: a.one + b.one,
            inversion: a.inversion + b.inversion + a.one * b.zero,
        }
    }
}

struct Flip;

impl Map for Flip {
    type OP = InversionOp;
    type Elem = bool;

    fn ident(&self) -> bool {
        false
    }

    fn apply(&self, &f: &bool, x: &Inversion) -> Inversion {
        if f {
            Inversion {
                zero: x.one,
                one: x.zero,
                inversion: x.zero * x.one - x.inversion,
            }
        } else {
            *x
        }
    }

    fn composite(&self, f_new: &bool, f_old: &bool) -> bool {
        f_new ^ f_old
    }
}

fn naive_inversion(bits: &[u8]) -> u64 {
    let mut ones = 0;
    let mut inversion = 0;
    for &b in bits {
        if b == 1 {
            ones += 1;
        } else {
            inversion += ones;
        }
    }
    inversion
}

#[test]
fn small_example() {
    let bits = [0u8, 1, 0];
    let mut segtree =
        LazySegtree::from_iter_op(bits.map(Inversion::from_bit), InversionOp, Flip).unwrap();
    let before = segtree.query(0..3).unwrap();
    assert_eq!(before.inversion, 1);
    segtree.apply_range(0..3, true).unwrap();
    let after = segtree.query(0..3).unwrap();
    assert_eq!(after.inversion, before.zero * before.one - before.inversion);
    // [1, 0, 1]
    assert_eq!(after.inversion, 1);
    assert_eq!(segtree.query(0..2).unwrap().inversion, 1);
    assert_eq!(segtree.query(1..3).unwrap().inversion, 0);
}

#[test]
fn practice_sample() {
    // 手計算による例
    let bits = [0u8, 1, 0, 0, 1];
    let mut segtree =
        LazySegtree::from_iter_op(bits.map(Inversion::from_bit), InversionOp, Flip).unwrap();
    assert_eq!(segtree.query(0..5).unwrap().inversion, 2);
    segtree.apply_range(2..5, true).unwrap();
    // [0, 1, 1, 1, 0]
    assert_eq!(segtree.query(1..4).unwrap().inversion, 0);
    assert_eq!(segtree.query(0..5).unwrap().inversion, 3);
    segtree.apply_range(1..2, true).unwrap();
    // [0, 0, 1, 1, 0]
    assert_eq!(segtree.query(0..5).unwrap().inversion, 2);
}

#[test]
fn random_flip() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let n = rng.gen_range(1..=80);
        let mut bits = (0..n).map(|_| rng.gen_range(0..=1u8)).collect::<Vec<_>>();
        let mut segtree = LazySegtree::from_iter_op(
            bits.iter().map(|&b| Inversion::from_bit(b)),
            InversionOp,
            Flip,
        )
        .unwrap();
        for _ in 0..100 {
            let l = rng.gen_range(0..n);
            let r = rng.gen_range(l + 1..=n);
            if rng.gen_bool(0.5) {
                bits[l..r].iter_mut().for_each(|b| *b ^= 1);
                segtree.apply_range(l..r, true).unwrap();
            } else {
                assert_eq!(
                    segtree.query(l..r).unwrap().inversion,
                    naive_inversion(&bits[l..r])
                );
            }
        }
    }
}
