/// Compute effective limit with precedence: global flag -> configured default.
///
/// Zero means unlimited and yields `None`.
pub fn effective_limit(global: Option<u32>, configured: u32) -> anyhow::Result<Option<usize>> {
    match global.unwrap_or(configured) {
        0 => Ok(None),
        limit => Ok(Some(usize::try_from(limit)?)),
    }
}
