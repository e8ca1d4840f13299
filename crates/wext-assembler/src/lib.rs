//! Build-plan assembly for the wext toolbox.
//!
//! Given [`BuildOptions`](wext_config::BuildOptions) this crate resolves
//! paths, reads the extension descriptor, discovers bundle entries and emits
//! an ordered, fully resolved [`BuildPlan`] for the external bundling
//! engine. The one place vendor- and flag-conditional logic compounds is the
//! declarative stage registry in [`stages`].

pub mod assemble;
pub mod entries;
pub mod error;
pub mod ignore;
pub mod metadata;
pub mod plan;
pub mod reload;
pub mod stages;

// Re-export main types
pub use assemble::{MAIN_ENTRY_GLOBS, assemble, discoverer};
pub use entries::{EntryDiscoverer, EntryMap};
pub use error::{AssembleError, Result};
pub use ignore::IgnoreRules;
pub use metadata::ExtensionInfo;
pub use plan::{BuildPlan, ManifestSpec, Stage, TransformRule};
pub use stages::archive_filename;
