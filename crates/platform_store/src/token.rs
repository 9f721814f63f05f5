//! Auth-token resolution across the durable and session-scoped stores.

use crate::kv::KvStore;

/// Key under which the bearer token is stored in both candidate stores.
///
/// The value is the raw token string, not JSON.
pub const TOKEN_KEY: &str = "token";

/// Resolves the bearer token, probing the durable store first and the
/// session-scoped store second. The first non-empty value wins; absence is
/// not an error. Store read failures are treated as absence.
pub async fn resolve_token<L, S>(local: &L, session: &S) -> Option<String>
where
    L: KvStore + ?Sized,
    S: KvStore + ?Sized,
{
    if let Ok(Some(token)) = local.load(TOKEN_KEY).await {
        if !token.is_empty() {
            return Some(token);
        }
    }
    match session.load(TOKEN_KEY).await {
        Ok(Some(token)) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Removes the token from both stores.
///
/// Clearing is best-effort per store: a failure in one store does not
/// prevent clearing the other.
///
/// # Errors
///
/// Returns the first store error encountered after both deletes ran.
pub async fn clear_tokens<L, S>(local: &L, session: &S) -> Result<(), String>
where
    L: KvStore + ?Sized,
    S: KvStore + ?Sized,
{
    let local_result = local.delete(TOKEN_KEY).await;
    let session_result = session.delete(TOKEN_KEY).await;
    local_result.and(session_result)
}
