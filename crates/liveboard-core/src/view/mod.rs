// ── Host page model ──
//
// The fixed DOM contract the renderer writes into, modeled as an explicit
// binding (which ids) plus an in-memory document (what they contain).

mod binding;
mod document;
mod page;

pub use binding::ViewBinding;
pub use document::{Document, Element};
pub use page::render_page;
