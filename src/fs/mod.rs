//! Filesystem access used by the template store. The [`TemplateFs`] seam
//! lets hosts (and tests) supply their own storage.

pub mod interface;
pub mod local;

pub use interface::TemplateFs;
pub use local::LocalFs;
