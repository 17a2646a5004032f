//! The application's components.
//!
//! One route, two components: [`HomePage`] produces the page body and
//! [`RootLayout`] wraps whatever page is active in the shared document
//! shell. The shell never inspects its children; it only embeds them at a
//! single slot inside `<body>`.

mod layout;
mod page;

pub use layout::{METADATA, RootLayout};
pub use page::HomePage;
