use crate::error::Result;
use crate::models::AreaOfUse;

/// Resolves a CRS identifier to the area of use defined by its authority.
///
/// Implementations must be read-only: resolving the same identifier twice
/// yields the same area.
pub trait AreaOfUseResolver {
    /// Resolve an identifier such as `EPSG:2193`.
    ///
    /// Fails with [`crate::RelateError::UnknownCrs`] when the identifier does
    /// not name a known CRS, and with [`crate::RelateError::AreaOfUseUndefined`]
    /// when the CRS exists but carries no area of use.
    fn resolve(&self, identifier: &str) -> Result<AreaOfUse>;
}

impl<R: AreaOfUseResolver + ?Sized> AreaOfUseResolver for &R {
    fn resolve(&self, identifier: &str) -> Result<AreaOfUse> {
        (**self).resolve(identifier)
    }
}

impl<R: AreaOfUseResolver + ?Sized> AreaOfUseResolver for Box<R> {
    fn resolve(&self, identifier: &str) -> Result<AreaOfUse> {
        (**self).resolve(identifier)
    }
}
