//! CLI command implementations.

mod render;

pub(crate) use render::RenderArgs;
