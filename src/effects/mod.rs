pub(crate) mod blur;
pub(crate) mod kernel;
