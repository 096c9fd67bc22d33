use std::collections::HashMap;

use serde_json::Value;

use crate::utils::error::LookupError;

/// Resolves message keys to localized, pluralized strings.
///
/// The formatter emits thirteen keys in the `"time"` domain:
/// `diff.in.<unit>` and `diff.ago.<unit>` for each of the six calendar
/// units, plus `diff.empty`. Implementations must cover all of them for
/// every locale they support. The pluralization count arrives in `params`
/// under the literal key `%count%`; a `None` locale selects the
/// implementation's default.
pub trait MessageLookup: Send + Sync {
    fn lookup(
        &self,
        key: &str,
        params: &HashMap<String, Value>,
        domain: &str,
        locale: Option<&str>,
    ) -> Result<String, LookupError>;
}
