//! Macros for building continuation trees directly in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::goals::primitive::fail() };
    ($($g:expr);+ $(;)?) => { $crate::goals::combinators::disj(vec![$($g),+]) };
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::goals::primitive::succeed() };
    ($($g:expr),+ $(,)?) => { $crate::goals::combinators::conj(vec![$($g),+]) };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),+);+ $(;)? ) => {
        $crate::disj!($($crate::conj!( $($g),+ ));+)
    }
}

/// Define a relation.
///
/// A relation is a function that builds a goal from its argument cells.
/// The body is built eagerly each time the function is called, so a
/// relation that calls itself unconditionally never returns.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name($($args: impl Into<$crate::prelude::Cell>),*) -> $crate::prelude::Goal {
            $(
                let $args: $crate::prelude::Cell = $args.into();
            )*
            $crate::conj!($($g),*)
        }
    };
}

/// Bind fresh cells with scope inside the body of `fresh!`.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),* $(,)?) => {{
        $( let $x = $crate::prelude::Cell::named(stringify!($x)); )*
        $crate::conj!($($g),*)
    }}
}
