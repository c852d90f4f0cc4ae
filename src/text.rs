pub(crate) mod font;
pub(crate) mod layout;
pub(crate) mod mask;
pub(crate) mod measure;
