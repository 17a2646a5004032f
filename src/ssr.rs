//! Server-side rendering of components and full documents.
//!
//! The renderer is the crate's rendering host: it asks a component for its
//! tree, embeds page content in the document shell, and merges the static
//! [`Metadata`](crate::page::Metadata) record into the document head
//! independently of the body tree.

use crate::component::Component;
use crate::page::{Head, Metadata, Page, html_escape};

/// Options for SSR rendering.
#[derive(Debug, Clone)]
pub struct SsrOptions {
	/// Language attribute used when the renderer has to supply its own
	/// `html` element (the document shell normally carries it).
	pub lang: String,
	/// Whether to collapse whitespace in the output.
	pub minify: bool,
}

impl Default for SsrOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			minify: false,
		}
	}
}

impl SsrOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fallback language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Enables minification.
	pub fn minify(mut self) -> Self {
		self.minify = true;
		self
	}
}

/// The main SSR renderer.
#[derive(Debug, Clone, Default)]
pub struct SsrRenderer {
	options: SsrOptions,
}

impl SsrRenderer {
	/// Creates a new renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: SsrOptions) -> Self {
		Self { options }
	}

	/// Renders a component to an HTML fragment.
	pub fn render<C: Component>(&self, component: &C) -> String {
		tracing::debug!(component = C::name(), "rendering component fragment");
		component.render().render_to_string()
	}

	/// Renders a document tree and metadata record to a full HTML document.
	///
	/// The tree is expected to be the document shell's output, an `html`
	/// element whose attributes are preserved on the root. The `<head>` is
	/// assembled from the metadata record plus any head section attached
	/// inside the tree, with the tree's title taking precedence, and is
	/// emitted before the body content. A tree without an `html` root is
	/// wrapped in a default shell using the configured language.
	pub fn render_document(&self, document: &Page, metadata: &Metadata) -> String {
		tracing::debug!(title = metadata.title, "rendering full document");

		let view_head = document.find_topmost_head();
		let mut html = String::with_capacity(1024);
		html.push_str("<!DOCTYPE html>\n");

		match Self::document_root(document) {
			Some(root) => {
				html.push('<');
				html.push_str(root.tag_name());
				for (name, value) in root.attrs() {
					html.push(' ');
					html.push_str(name);
					html.push_str("=\"");
					html.push_str(&html_escape(value));
					html.push('"');
				}
				if let Some(style) = root.inline_style()
					&& !style.is_empty()
				{
					html.push_str(" style=\"");
					html.push_str(&html_escape(&style.to_string()));
					html.push('"');
				}
				html.push_str(">\n");
				self.push_head(&mut html, metadata, view_head);
				for child in root.child_views() {
					html.push_str(&child.render_to_string());
				}
				html.push_str("\n</");
				html.push_str(root.tag_name());
				html.push('>');
			}
			None => {
				html.push_str(&format!(
					"<html lang=\"{}\">\n",
					html_escape(&self.options.lang)
				));
				self.push_head(&mut html, metadata, view_head);
				html.push_str("<body>");
				html.push_str(&document.render_to_string());
				html.push_str("</body>\n</html>");
			}
		}

		if self.options.minify {
			minify_html(&html)
		} else {
			html
		}
	}

	/// Returns the shell's root element if the tree is rooted at `html`,
	/// looking through an attached head section.
	fn document_root(document: &Page) -> Option<&crate::page::PageElement> {
		match document {
			Page::Element(el) if el.tag_name() == "html" => Some(el),
			Page::WithHead { view, .. } => Self::document_root(view),
			_ => None,
		}
	}

	/// Assembles the `<head>` section from the metadata record and an
	/// optional head attached to the view tree (additive, view title wins).
	fn push_head(&self, html: &mut String, metadata: &Metadata, view_head: Option<&Head>) {
		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);

		let record = metadata.to_head();
		let title = view_head
			.and_then(|head| head.title.as_deref())
			.or(record.title.as_deref());
		if let Some(title) = title {
			html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
		}

		for meta in &record.meta_tags {
			html.push_str(&meta.to_html());
		}
		if let Some(head) = view_head {
			for meta in &head.meta_tags {
				html.push_str(&meta.to_html());
			}
		}

		html.push_str("</head>\n");
	}
}

/// Maximum input size for HTML minification (1 MiB).
///
/// Inputs exceeding this limit are returned unmodified to prevent
/// denial-of-service via excessively large payloads.
const MINIFY_HTML_MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Simple HTML minification (removes extra whitespace).
///
/// Returns the input unmodified when its byte length exceeds
/// `MINIFY_HTML_MAX_INPUT_SIZE` (1MB).
///
/// Whitespace inside `<pre>` blocks is preserved.
fn minify_html(html: &str) -> String {
	if html.len() > MINIFY_HTML_MAX_INPUT_SIZE {
		return html.to_string();
	}

	let mut result = String::with_capacity(html.len());
	let mut prev_was_whitespace = false;
	let mut in_pre = false;
	let mut chars = html.char_indices().peekable();

	while let Some((byte_pos, c)) = chars.next() {
		let remaining = &html[byte_pos..];

		// Detect opening <pre tag (e.g. <pre>, <pre class="...">)
		if !in_pre
			&& c == '<'
			&& remaining.strip_prefix("<pre").is_some_and(|after| {
				after.starts_with(|ch: char| ch == '>' || ch.is_ascii_whitespace())
					|| after.is_empty()
			}) {
			in_pre = true;
		}

		// Detect closing </pre> tag
		if in_pre && c == '<' && remaining.starts_with("</pre>") {
			result.push_str("</pre>");
			// Skip the remaining 5 chars of "</pre>" (we already consumed '<')
			for _ in 0..5 {
				chars.next();
			}
			in_pre = false;
			prev_was_whitespace = false;
			continue;
		}

		if in_pre {
			result.push(c);
		} else if c.is_whitespace() {
			if !prev_was_whitespace {
				result.push(' ');
				prev_was_whitespace = true;
			}
		} else {
			result.push(c);
			prev_was_whitespace = false;
		}
	}

	result
}
