pub use hadath_utils_derive::trace_instrument;

/// Version string reported by the cli and sent in the http user agent.
pub fn hadath_version() -> &'static str {
    match option_env!("HADATH_VERSION") {
        Some(version) => version,
        None => env!("CARGO_PKG_VERSION"),
    }
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    enum Outcome {
        Sent,
        Failed(u16),
    }

    #[test]
    fn matches_pattern() {
        assert_matches!(Outcome::Sent, Outcome::Sent);
        assert_matches!(Outcome::Failed(500), Outcome::Failed(code) if *code >= 500);
    }

    #[test]
    #[should_panic = "did not match pattern"]
    fn mismatch_panics() {
        assert_matches!(Outcome::Failed(400), Outcome::Sent);
    }

    #[test]
    #[should_panic = "does not match predicate"]
    fn predicate_mismatch_panics() {
        assert_matches!(Outcome::Failed(400), Outcome::Failed(code) if *code >= 500);
    }
}
