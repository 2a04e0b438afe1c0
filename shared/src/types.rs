/// Workspace-wide result alias.
pub type Result<T> = anyhow::Result<T>;
