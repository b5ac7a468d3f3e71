//! Identifier classification policies.

use crate::server::{
    config::ClassifierPolicy, error::Error, upstream::esi::EsiClient,
    util::eve::IdentifierClass,
};

/// Classifies a location ID under the given policy.
///
/// Both policies reject IDs outside every known band before any network call. Structures
/// are classified by range under both policies; the names endpoint does not know them.
///
/// # Returns
/// - `Ok(IdentifierClass)` - The kind of location the ID refers to
/// - `Err(Error::LocationError)` - Invalid range or unsupported category
/// - `Err(Error::UpstreamError)` - The names lookup failed
pub async fn classify(
    esi_client: &EsiClient,
    policy: ClassifierPolicy,
    id: i64,
) -> Result<IdentifierClass, Error> {
    let by_range = IdentifierClass::from_range(id)?;

    if policy == ClassifierPolicy::Range || by_range == IdentifierClass::Structure {
        return Ok(by_range);
    }

    let category = esi_client
        .get_names(&[id])
        .await?
        .into_iter()
        .find(|name| name.id == id)
        .map(|name| name.category)
        .unwrap_or_default();

    Ok(IdentifierClass::from_category(id, &category)?)
}
