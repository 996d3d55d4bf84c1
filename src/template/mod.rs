//! Template engine
//!
//! - `substitute`: `{name}` placeholder replacement
//! - `comment`: wrapping text in a filetype's comment syntax
//! - `kind` / `defaults`: the built-in templates and their default contents
//! - `store`: loading template files, creating defaults on first use
//! - `custom`: custom file templates in `templates/files/`
//! - `service`: the query API composing all of the above

pub mod comment;
pub mod custom;
pub mod defaults;
pub mod kind;
pub mod service;
pub mod store;
pub mod substitute;

pub use comment::{make_comment_block, CommentStyle, CommentSyntax};
pub use custom::{CustomTemplate, NewDocument};
pub use kind::TemplateKind;
pub use service::{TemplateDescriptor, TemplateService};
pub use store::{BootstrapContext, StoredTemplate, TemplateStore};
pub use substitute::{substitute, SubstitutionTable};
