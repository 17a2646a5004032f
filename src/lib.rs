//! Hello World demo page for DockerHoster, rendered server-side.
//!
//! The whole application is two components and the plumbing to render them:
//!
//! - [`app::HomePage`] produces the single route's body content with inline
//!   styling.
//! - [`app::RootLayout`] is the document shell: it embeds an opaque child
//!   tree inside `html[lang="en"] > body` and exposes the static
//!   [`app::METADATA`] record for the document head.
//! - [`ssr::SsrRenderer`] is the rendering host: it composes the two and
//!   merges the metadata record into the `<head>` independently of the body.
//!
//! ## Example
//!
//! ```
//! use dockerhoster_hello::app::{HomePage, METADATA, RootLayout};
//! use dockerhoster_hello::component::Component;
//! use dockerhoster_hello::ssr::SsrRenderer;
//!
//! let document = RootLayout::new(HomePage.render()).render();
//! let html = SsrRenderer::new().render_document(&document, &METADATA);
//! assert!(html.contains("<title>Next.js Hello World - DockerHoster</title>"));
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod component;
pub mod export;
pub mod page;
pub mod ssr;

pub use app::{HomePage, METADATA, RootLayout};
pub use component::Component;
pub use export::{ExportError, export_document};
pub use page::{Head, IntoPage, MetaTag, Metadata, Page, PageElement, Style};
pub use ssr::{SsrOptions, SsrRenderer};
