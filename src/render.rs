pub(crate) mod encode;
pub(crate) mod pipeline;
pub(crate) mod settings;
