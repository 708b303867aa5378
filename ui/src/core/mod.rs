//! Render-independent model behind the shared components.

pub mod nav;
pub mod search;
