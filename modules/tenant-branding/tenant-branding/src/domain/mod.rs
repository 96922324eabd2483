//! Domain layer of the tenant branding engine.

pub mod ambient;
pub mod applicator;
pub mod classifier;
pub mod color;
pub mod logo;
pub mod persistence;
pub mod recovery;
pub mod resolver;
pub mod selector;
pub mod service;

pub use ambient::AmbientTenant;
pub use resolver::{ResolvedSlug, SlugSource};
pub use selector::Selection;
pub use service::{BrandingEngine, ResolutionOutcome};
