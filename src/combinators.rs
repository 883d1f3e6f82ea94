//! Free functions over `Opt<T>`
//!
//! These are functions rather than methods so that inputs and outputs can
//! carry unrelated type parameters.

use crate::Opt;

/// Combines two options with `joinfn` if both are present.
///
/// If either is `None`, `joinfn` is never called and `None` is returned.
pub fn join<A, B, R, F>(a: Opt<A>, b: Opt<B>, joinfn: F) -> Opt<R>
where
    F: FnOnce(A, B) -> R,
{
    match (a, b) {
        (Opt::Some(a), Opt::Some(b)) => Opt::some(joinfn(a, b)),
        _ => Opt::none(),
    }
}

/// Runs `mapfn` on the present value, which may itself decide to return `None`.
pub fn map<I, O, F>(input: Opt<I>, mapfn: F) -> Opt<O>
where
    F: FnOnce(I) -> Opt<O>,
{
    match input {
        Opt::Some(value) => mapfn(value),
        Opt::None => Opt::none(),
    }
}

/// Returns the first present option, or `None` if there is none.
///
/// Iteration stops at the first present element.
pub fn coalesce<T, I>(os: I) -> Opt<T>
where
    I: IntoIterator<Item = Opt<T>>,
{
    os.into_iter().find(Opt::is_some).unwrap_or_default()
}

/// Compares two options. Two `None`s are equal.
pub fn equal<T: PartialEq>(a: &Opt<T>, b: &Opt<T>) -> bool {
    match (a, b) {
        (Opt::None, Opt::None) => true,
        (Opt::Some(a), Opt::Some(b)) => a == b,
        _ => false,
    }
}

/// Copies the referenced value into a `Some`, or returns `None` for a null reference.
pub fn from_ptr<T: Clone>(p: Option<&T>) -> Opt<T> {
    match p {
        Some(value) => Opt::some(value.clone()),
        None => Opt::none(),
    }
}

/// Converts a value plus its ok flag into an option. `value` is dropped when `ok` is false.
pub fn from_maybe<T>(value: T, ok: bool) -> Opt<T> {
    if ok { Opt::some(value) } else { Opt::none() }
}

/// Variadic form of [`coalesce`]: `coalesce!(a, b, c)`. `coalesce!()` is `None`.
#[macro_export]
macro_rules! coalesce {
    () => {
        $crate::coalesce(::std::iter::empty())
    };
    ($($o:expr),+ $(,)?) => {
        $crate::coalesce([$($o),+])
    };
}
