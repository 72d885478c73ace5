use std::fmt;
use ansi_term::Style;

macro_rules! each_fmt_trait {
    ($mac:ident!)
    => {
        $mac!(::std::fmt::Display);
        $mac!(::std::fmt::Debug);
        $mac!(::std::fmt::LowerExp);
        $mac!(::std::fmt::UpperExp);
    }
}

// hack for type inference issues
pub fn paint<T>(style: Style, value: T) -> Wrapper<T, T>
{ gpaint(style, value) }

pub fn gpaint<U, T>(style: Style, value: U) -> Wrapper<U, T>
{ Wrapper { style, value, _target: Default::default() } }

/// A wrapper for colorizing all formatting traits like `Display`.
///
/// It has two parameters so that it can `borrow()` `U` as `T` when it wants to.
/// (otherwise, it would have to store `&T`, making it virtually impossible to
///  return one of these from a function)
#[derive(Copy, Clone, PartialEq)]
pub struct Wrapper<U, T=U> {
    style: Style,
    value: U,
    _target: ::std::marker::PhantomData<T>,
}

macro_rules! derive_fmt_impl {
    ($Trait:path)
    => {
        impl<U, T> $Trait for Wrapper<U, T>
        where
            U: ::std::borrow::Borrow<T>,
            T: $Trait,
        {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.style.prefix())?;
                T::fmt(self.value.borrow(), f)?;
                write!(f, "{}", self.style.suffix())?;
                Ok(())
            }
        }
    };
}

each_fmt_trait!{derive_fmt_impl!}
