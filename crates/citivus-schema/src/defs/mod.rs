//! The concrete Citivus type definitions, one file per declared type.
//!
//! These are the studio's content model: built once at registry construction,
//! field order and titles exactly as the editor presents them.

mod author;
mod blog_post;
mod blog_section;
mod category;

pub use author::author;
pub use blog_post::blog_post;
pub use blog_section::blog_section;
pub use category::category;
