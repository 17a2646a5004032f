//! Page tree types for component rendering.
//!
//! The `Page` enum is the core abstraction for all renderable content: DOM
//! elements, text nodes, fragments, or a view with an attached head section.
//! Trees are plain immutable data with no event handlers, so they can be
//! cloned and compared structurally.
//!
//! ## Example
//!
//! ```
//! use dockerhoster_hello::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("div")
//! 	.attr("class", "container")
//! 	.child("Hello, World!")
//! 	.into_page();
//!
//! assert_eq!(view.render_to_string(), "<div class=\"container\">Hello, World!</div>");
//! ```

pub mod head;
pub mod style;
mod util;

pub use head::{Head, MetaTag, Metadata};
pub use style::Style;
pub(crate) use util::html_escape;

use std::borrow::Cow;

/// A unified representation of renderable content.
///
/// Page is the core abstraction for all UI elements in the component system.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty view (renders nothing).
	Empty,
	/// A view with associated head section.
	///
	/// This variant allows a view to declare its own `<head>` requirements
	/// (title, meta tags) that are collected during server-side rendering.
	WithHead {
		/// The head section for this view.
		head: Head,
		/// The actual view content.
		view: Box<Page>,
	},
}

/// Represents a DOM element in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Inline style declaration, rendered as a `style` attribute.
	style: Option<Style>,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			style: None,
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Attaches an inline style declaration.
	///
	/// The declaration is serialized as a single self-contained `style`
	/// attribute; no stylesheet or cascade is involved.
	pub fn style(mut self, style: Style) -> Self {
		self.style = Some(style);
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the inline style declaration, if any.
	pub fn inline_style(&self) -> Option<&Style> {
		self.style.as_ref()
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Consumes the element view and returns the children.
	pub fn into_children(self) -> Vec<Page> {
		self.children
	}
}

impl Page {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Attaches a head section to this view.
	pub fn with_head(self, head: Head) -> Self {
		Page::WithHead {
			head,
			view: Box::new(self),
		}
	}

	/// Finds the topmost head section in the view tree.
	///
	/// Searches from the root and returns the first head found, so an
	/// outer (page-level) head takes precedence over inner component heads.
	pub fn find_topmost_head(&self) -> Option<&Head> {
		match self {
			Page::WithHead { head, .. } => Some(head),
			Page::Fragment(children) => children.iter().find_map(|v| v.find_topmost_head()),
			_ => None,
		}
	}

	/// Renders the view to an HTML string.
	///
	/// This is the core SSR method that converts the view tree to HTML.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if let Some(style) = el.inline_style()
					&& !style.is_empty()
				{
					output.push_str(" style=\"");
					output.push_str(&html_escape(&style.to_string()));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
			Page::WithHead { view, .. } => {
				// The head is extracted separately during SSR; here we just
				// render the content.
				view.render_to_string_inner(output);
			}
		}
	}
}

/// Trait for types that can be converted into a Page.
///
/// This is the primary abstraction for renderable content.
/// Implementing this trait allows any type to be used in the view tree.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

// Core implementations

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

// Tuple implementations for fragments

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage, D: IntoPage> IntoPage for (A, B, C, D) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
			self.3.into_page(),
		])
	}
}
