//! Generic create-configure-return primitives behind the builder API.

/// Instantiate a value via `factory`, hand it to `config`, return it.
///
/// [`Element::build`](crate::Element::build) is this with `Element::new`
/// as the factory; it is exposed for building arbitrary configuration
/// values the same way.
pub fn configured<T>(factory: impl FnOnce() -> T, config: impl FnOnce(&mut T)) -> T {
    let mut value = factory();
    config(&mut value);
    value
}

/// [`configured`] with `T::default` as the factory.
pub fn configure<T: Default>(config: impl FnOnce(&mut T)) -> T {
    configured(T::default, config)
}
