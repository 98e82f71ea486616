pub(crate) mod bitmap;
pub(crate) mod entry;
pub(crate) mod memory;
