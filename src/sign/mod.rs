pub(crate) mod layout;
pub(crate) mod render;
pub(crate) mod spec;
