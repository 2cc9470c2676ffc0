//! Entity structs for every Citivus content shape.
//!
//! `BlogPost` is the only document type here; `Author` and `Category` are
//! documents it references, and `BlogSection` is an embedded object owned by
//! its parent post. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema export.

mod author;
mod category;
mod image;
mod post;
mod reference;
mod section;

pub use author::Author;
pub use category::Category;
pub use image::{FeaturedImage, Hotspot, SectionImage};
pub use post::{BlogPost, Seo, TocEntry};
pub use reference::Reference;
pub use section::BlogSection;
