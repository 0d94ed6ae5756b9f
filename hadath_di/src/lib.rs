//! Compile-time dependency injection.
//!
//! A provider owns the leaf values of the dependency graph (configuration,
//! connections, stores). Every other service derives [`Build`] and is
//! assembled from its fields on demand. Built services are cached per
//! provider, so each service type is constructed at most once and then
//! cloned.

extern crate self as hadath_di;

pub use hadath_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of services already built by this provider.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct Endpoint(&'static str);

    #[derive(Debug, Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    #[derive(Debug, Clone, Build)]
    struct Client {
        endpoint: Endpoint,
        #[state]
        requests: Counter,
    }

    #[derive(Debug, Clone, Build)]
    struct Feature<C> {
        client: C,
        endpoint: Endpoint,
    }

    provider! {
        /// Test provider
        TestProvider { endpoint: Endpoint, }
    }

    #[test]
    fn builds_from_fields() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            endpoint: Endpoint("https://example.com"),
        };

        let feature: Feature<Client> = provider.provide();

        assert_eq!(feature.endpoint.0, "https://example.com");
        assert_eq!(feature.client.endpoint.0, "https://example.com");
    }

    #[test]
    fn caches_built_services() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            endpoint: Endpoint("https://example.com"),
        };

        let a: Client = provider.provide();
        a.requests.0.fetch_add(1, Ordering::Relaxed);
        let b: Client = provider.provide();

        assert_eq!(b.requests.0.load(Ordering::Relaxed), 1);
    }
}
