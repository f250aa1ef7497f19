use std::{marker::PhantomData, ops};

/// セグメント木に載せる二項演算
///
/// # モノイドであるための条件
/// * 任意の元`a,b,c`に対して、`(a * b) * c = a * (b * c)`が成り立つ。(結合則)
/// * `self.identity()`を`e`とすると、任意の元`a`に対して、`e * a = a * e = a`が成り立つ。(単位元)
///
/// これらは実行時に検査されない。満たさない場合、クエリの結果が黙って壊れる。
pub trait Monoid {
    type Element: Clone;
    fn identity(&self) -> Self::Element;
    fn op(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `*a = a * b`
    fn op_assign_left(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.op(a, b);
    }

    /// `*b = a * b`
    fn op_assign_right(&self, a: &Self::Element, b: &mut Self::Element) {
        *b = self.op(a, b);
    }
}

impl<M: Monoid> Monoid for &M {
    type Element = M::Element;

    fn identity(&self) -> Self::Element {
        (*self).identity()
    }

    fn op(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (*self).op(a, b)
    }
}

/// 遅延セグメント木に載せる作用
///
/// # 満たすべき条件
/// * `self.apply(&self.ident(), &x) == x`
/// * `self.apply(&self.composite(&g, &f), &x) == self.apply(&g, &self.apply(&f, &x))`
///   (`composite(g, f)`は`f`の後に`g`を作用させるものである)
/// * 同じ長さの区間を表す`a,b`に対して、
///   `self.apply(&f, &op(&a, &b)) == op(&self.apply(&f, &a), &self.apply(&f, &b))`
///
/// これらも実行時には検査されない。
pub trait Map {
    type OP: Monoid;
    type Elem: Clone;

    fn ident(&self) -> Self::Elem;
    fn apply(
        &self,
        f: &Self::Elem,
        x: &<Self::OP as Monoid>::Element,
    ) -> <Self::OP as Monoid>::Element;
    fn composite(&self, f_new: &Self::Elem, f_old: &Self::Elem) -> Self::Elem;

    fn apply_assign(&self, x: &mut <Self::OP as Monoid>::Element, f: &Self::Elem) {
        *x = self.apply(f, x);
    }

    /// `f_old`の後に`f_new`を作用させるものを`f_old`に書き込む。
    fn composite_assign(&self, f_old: &mut Self::Elem, f_new: &Self::Elem) {
        *f_old = self.composite(f_new, f_old);
    }
}

pub trait HasZero {
    const ZERO: Self;
}

pub trait HasMax {
    const MAX: Self;
}

pub trait HasMin {
    const MIN: Self;
}

macro_rules! impl_trait_integer {
    ($($t:ty),*) => {
        $(
            impl HasZero for $t {
                const ZERO: Self = 0;
            }
            impl HasMax for $t {
                const MAX: Self = <$t>::MAX;
            }
            impl HasMin for $t {
                const MIN: Self = <$t>::MIN;
            }
        )*
    };
}

impl_trait_integer!(i8, i16, i32, i64, i128, isize);
impl_trait_integer!(u8, u16, u32, u64, u128, usize);

macro_rules! marker_struct {
    ($($name:ident => $ctor:ident),*) => {
        $(
            pub struct $name<T>(PhantomData<fn() -> T>);

            impl<T> $name<T> {
                pub const fn new() -> Self {
                    Self(PhantomData)
                }
            }

            impl<T> Default for $name<T> {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<T> Clone for $name<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T> Copy for $name<T> {}

            impl<T> std::fmt::Debug for $name<T> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(stringify!($name))
                }
            }

            pub const fn $ctor<T>() -> $name<T> {
                $name::new()
            }
        )*
    };
}

marker_struct!(
    Add => add,
    Min => min,
    Max => max,
    RangeAdd => range_add,
    RangeAssign => range_assign
);

impl<T> Monoid for Add<T>
where
    T: ops::Add<Output = T> + Clone + HasZero,
{
    type Element = T;
    fn identity(&self) -> T {
        T::ZERO
    }
    fn op(&self, a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }
}

impl<T> Monoid for Max<T>
where
    T: Ord + Clone + HasMin,
{
    type Element = T;
    fn identity(&self) -> T {
        T::MIN
    }
    fn op(&self, a: &T, b: &T) -> T {
        if a > b {
            a.clone()
        } else {
            b.clone()
        }
    }
}

impl<T> Monoid for Min<T>
where
    T: Ord + Clone + HasMax,
{
    type Element = T;
    fn identity(&self) -> T {
        T::MAX
    }
    fn op(&self, a: &T, b: &T) -> T {
        if a < b {
            a.clone()
        } else {
            b.clone()
        }
    }
}

/// 区間最小値に対する区間加算
///
/// 木は実在する要素を覆う頂点にしか作用させないので、端の埋め草(`T::MAX`)は加算されない。
/// `LazySegtree::new`で作った要素は`T::MAX`から始まるため、正の値を足すとあふれる。
impl<T> Map for RangeAdd<T>
where
    T: ops::Add<Output = T> + Ord + Clone + HasZero + HasMax,
{
    type OP = Min<T>;
    type Elem = T;

    fn ident(&self) -> T {
        T::ZERO
    }

    fn apply(&self, f: &T, x: &T) -> T {
        x.clone() + f.clone()
    }

    fn composite(&self, f_new: &T, f_old: &T) -> T {
        f_new.clone() + f_old.clone()
    }
}

/// 区間最小値に対する区間代入。`None`は何もしない作用。
impl<T> Map for RangeAssign<T>
where
    T: Ord + Clone + HasMax,
{
    type OP = Min<T>;
    type Elem = Option<T>;

    fn ident(&self) -> Option<T> {
        None
    }

    fn apply(&self, f: &Option<T>, x: &T) -> T {
        f.as_ref().unwrap_or(x).clone()
    }

    fn composite(&self, f_new: &Option<T>, f_old: &Option<T>) -> Option<T> {
        f_new.as_ref().or(f_old.as_ref()).cloned()
    }
}

/// 単位元と関数から作るモノイド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MonoidOp<T, F> {
    identity: T,
    op: F,
}

impl<T: Clone, F: Fn(&T, &T) -> T> MonoidOp<T, F> {
    pub fn new(identity: T, op: F) -> Self {
        Self { identity, op }
    }
}

impl<T: Clone, F: Fn(&T, &T) -> T> Monoid for MonoidOp<T, F> {
    type Element = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn op(&self, a: &T, b: &T) -> T {
        (self.op)(a, b)
    }
}

/// 恒等作用と関数から作る作用。`OP`は作用先のモノイド。
pub struct MapOp<OP, F, A, C> {
    ident: F,
    apply: A,
    composite: C,
    _marker: PhantomData<fn() -> OP>,
}

impl<OP, F: Clone, A: Clone, C: Clone> Clone for MapOp<OP, F, A, C> {
    fn clone(&self) -> Self {
        Self {
            ident: self.ident.clone(),
            apply: self.apply.clone(),
            composite: self.composite.clone(),
            _marker: PhantomData,
        }
    }
}

impl<OP, F, A, C> MapOp<OP, F, A, C> {
    /// `apply(f, x)`は`f`を`x`に作用させ、`composite(f_new, f_old)`は`f_old`の後に`f_new`を作用させるものを返す。
    pub fn new(ident: F, apply: A, composite: C) -> Self {
        Self {
            ident,
            apply,
            composite,
            _marker: PhantomData,
        }
    }
}

impl<OP, F, A, C> Map for MapOp<OP, F, A, C>
where
    OP: Monoid,
    F: Clone,
    A: Fn(&F, &OP::Element) -> OP::Element,
    C: Fn(&F, &F) -> F,
{
    type OP = OP;
    type Elem = F;

    fn ident(&self) -> F {
        self.ident.clone()
    }

    fn apply(&self, f: &F, x: &OP::Element) -> OP::Element {
        (self.apply)(f, x)
    }

    fn composite(&self, f_new: &F, f_old: &F) -> F {
        (self.composite)(f_new, f_old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_test() {
        assert_eq!(add::<i64>().identity(), 0);
        assert_eq!(min::<u32>().identity(), u32::MAX);
        assert_eq!(max::<i8>().identity(), i8::MIN);
        assert_eq!(min::<i32>().op(&3, &-2), -2);
        assert_eq!(max::<i32>().op(&3, &-2), 3);
    }

    #[test]
    fn op_assign_test() {
        let op = MonoidOp::new(String::new(), |a: &String, b: &String| format!("{a}{b}"));
        let mut a = "ab".to_string();
        op.op_assign_left(&mut a, &"cd".to_string());
        assert_eq!(a, "abcd");
        let mut b = "ef".to_string();
        op.op_assign_right(&"xy".to_string(), &mut b);
        assert_eq!(b, "xyef");
    }

    #[test]
    fn range_add_test() {
        let map = range_add::<i32>();
        assert_eq!(map.apply(&5, &-2), 3);
        assert_eq!(map.apply(&-3, &i32::MAX), i32::MAX - 3);
        let mut f = 3;
        map.composite_assign(&mut f, &4);
        assert_eq!(f, 7);
    }

    #[test]
    fn range_assign_test() {
        let map = range_assign::<i32>();
        assert_eq!(map.apply(&None, &4), 4);
        assert_eq!(map.apply(&Some(9), &4), 9);
        assert_eq!(map.composite(&Some(1), &Some(2)), Some(1));
        assert_eq!(map.composite(&None, &Some(2)), Some(2));
    }

    type Pair = (i64, i64);
    type PairAdd = MonoidOp<Pair, fn(&Pair, &Pair) -> Pair>;

    #[test]
    fn map_op_test() {
        // (区間和, 区間長)に対するアフィン変換 x -> a * x + b
        let map = MapOp::<PairAdd, _, _, _>::new(
            (1i64, 0i64),
            |f: &Pair, x: &Pair| (f.0 * x.0 + f.1 * x.1, x.1),
            |g: &Pair, f: &Pair| (g.0 * f.0, g.0 * f.1 + g.1),
        );
        assert_eq!(map.apply(&map.ident(), &(10, 3)), (10, 3));
        let f = (2, 1);
        let g = (3, -4);
        let x = (10, 3);
        assert_eq!(
            map.apply(&map.composite(&g, &f), &x),
            map.apply(&g, &map.apply(&f, &x))
        );
    }
}
