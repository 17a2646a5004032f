//! Root layout: the document shell shared by all page content.

use crate::component::Component;
use crate::page::{IntoPage, Metadata, Page, PageElement};

/// Document metadata consumed by the rendering host.
///
/// Exposed alongside the rendered tree, not inside it; the host merges the
/// title and description into the document head independently of the body.
pub static METADATA: Metadata = Metadata::new(
	"Next.js Hello World - DockerHoster",
	"A simple Next.js app deployed with DockerHoster",
);

/// The outer document shell.
///
/// Wraps an opaque child tree in `html[lang="en"] > body`. The children are
/// embedded unmodified and unwrapped as the sole child of the body element.
pub struct RootLayout {
	children: Page,
}

impl RootLayout {
	/// Creates the shell around the given page content.
	pub fn new(children: impl IntoPage) -> Self {
		Self {
			children: children.into_page(),
		}
	}

	/// Returns the embedded child tree.
	pub fn children(&self) -> &Page {
		&self.children
	}
}

impl Component for RootLayout {
	fn render(&self) -> Page {
		PageElement::new("html")
			.attr("lang", "en")
			.child(PageElement::new("body").child(self.children.clone()))
			.into_page()
	}

	fn name() -> &'static str {
		"RootLayout"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_metadata_literals() {
		assert_eq!(METADATA.title, "Next.js Hello World - DockerHoster");
		assert_eq!(
			METADATA.description,
			"A simple Next.js app deployed with DockerHoster"
		);
	}

	#[test]
	fn test_shell_structure() {
		let layout = RootLayout::new("content");
		let Page::Element(html) = layout.render() else {
			panic!("shell root must be an element");
		};
		assert_eq!(html.tag_name(), "html");
		assert_eq!(html.attrs().len(), 1);
		assert_eq!(html.attrs()[0].0, "lang");
		assert_eq!(html.attrs()[0].1, "en");

		let [Page::Element(body)] = html.child_views() else {
			panic!("html must contain exactly one body element");
		};
		assert_eq!(body.tag_name(), "body");
	}

	#[test]
	fn test_children_embedded_unmodified() {
		let content = PageElement::new("main").child("hello").into_page();
		let layout = RootLayout::new(content.clone());

		let Page::Element(html) = layout.render() else {
			panic!("shell root must be an element");
		};
		let [Page::Element(body)] = html.child_views() else {
			panic!("html must contain exactly one body element");
		};
		assert_eq!(body.child_views(), std::slice::from_ref(&content));
	}

	#[test]
	fn test_shell_contains_no_head_nodes() {
		let layout = RootLayout::new(Page::empty());
		let html = layout.render().render_to_string();
		assert!(!html.contains("<head"));
		assert!(!html.contains("<title"));
	}
}
