//! Registry catalog of element kinds
//!
//! The catalog is the static list of kinds a palette offers. It is split into
//! two ordered groups, "basic" (primitive elements built locally) and
//! "advanced" (API-backed image elements resolved from a URL template). Order
//! inside each group is the display order.
//!
//! # Example
//!
//! ```toml
//! [[basic]]
//! kind = "table"
//! label = "Feature Table"
//! icon = "📊"
//!
//! [[advanced]]
//! kind = "github-trophy"
//! label = "GitHub Trophy"
//! icon = "🏆"
//! category = "stats"
//! template = "https://github-profile-trophy.vercel.app/?username={username}"
//! ```

mod kind;
mod registry;

pub use kind::{ElementKind, PrimitiveKind, UnknownPrimitive};
pub use registry::{Catalog, CatalogEntry, CatalogError, PaletteGroup, PaletteItem};
