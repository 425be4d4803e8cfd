use std::fmt::Display;

/// Crate error types that can carry a rendered message.
///
/// Each crate implements this for its own `Error` and then calls
/// [`impl_context!`] to get `.context()` / `.with_context()`.
pub trait FromMessage: Sized {
    fn from_message(message: String) -> Self;

    /// `"{context}: {source}"`, the form every crate uses for wrapped failures.
    fn wrap(context: impl Display, source: impl Display) -> Self {
        Self::from_message(format!("{context}: {source}"))
    }
}

/// Define a crate-local `Context` trait for `Result<T, impl Display>` and
/// `Option<T>`, producing the given error type.
///
/// ```ignore
/// // crates/catalog/src/error.rs
/// agentdesk_common::impl_context!(Error);
/// ```
#[macro_export]
macro_rules! impl_context {
    ($err:ty) => {
        pub trait Context<T> {
            fn with_context<C, F>(self, f: F) -> ::std::result::Result<T, $err>
            where
                C: ::std::fmt::Display,
                F: FnOnce() -> C;

            fn context(self, context: &str) -> ::std::result::Result<T, $err>
            where
                Self: Sized,
            {
                self.with_context(|| context)
            }
        }

        impl<T, E: ::std::fmt::Display> Context<T> for ::std::result::Result<T, E> {
            fn with_context<C, F>(self, f: F) -> ::std::result::Result<T, $err>
            where
                C: ::std::fmt::Display,
                F: FnOnce() -> C,
            {
                self.map_err(|source| <$err as $crate::FromMessage>::wrap(f(), source))
            }
        }

        impl<T> Context<T> for Option<T> {
            fn with_context<C, F>(self, f: F) -> ::std::result::Result<T, $err>
            where
                C: ::std::fmt::Display,
                F: FnOnce() -> C,
            {
                self.ok_or_else(|| <$err as $crate::FromMessage>::from_message(f().to_string()))
            }
        }
    };
}
