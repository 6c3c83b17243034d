pub type Result<T> = anyhow::Result<T>;

pub use anyhow::Context;
pub use anyhow::anyhow as error;
pub use anyhow::bail;
