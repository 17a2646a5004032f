//! Head sections and the static document metadata record.

use super::html_escape;

/// A document head section: title and meta tags.
///
/// Built fluently and consumed by the SSR renderer when it assembles the
/// `<head>` element of the final document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Head {
	/// The document title.
	pub title: Option<String>,
	/// Meta tags to emit inside the head.
	pub meta_tags: Vec<MetaTag>,
}

impl Head {
	/// Creates an empty head section.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Adds a meta tag.
	pub fn meta(mut self, tag: MetaTag) -> Self {
		self.meta_tags.push(tag);
		self
	}
}

/// A named `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
	/// The `name` attribute.
	pub name: String,
	/// The `content` attribute.
	pub content: String,
}

impl MetaTag {
	/// Creates a meta tag with a name and content.
	pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			content: content.into(),
		}
	}

	/// Serializes the tag to HTML, newline-terminated.
	pub fn to_html(&self) -> String {
		format!(
			"<meta name=\"{}\" content=\"{}\">\n",
			html_escape(&self.name),
			html_escape(&self.content)
		)
	}
}

/// The static document metadata record.
///
/// Constructed once in const context and read by the rendering host on every
/// document render; it lives alongside the view tree, never inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
	/// Document title.
	pub title: &'static str,
	/// Document description, emitted as a `description` meta tag.
	pub description: &'static str,
}

impl Metadata {
	/// Creates a metadata record.
	pub const fn new(title: &'static str, description: &'static str) -> Self {
		Self { title, description }
	}

	/// Converts the record into a head section for the renderer.
	pub fn to_head(&self) -> Head {
		Head::new()
			.title(self.title)
			.meta(MetaTag::new("description", self.description))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_head_builder() {
		let head = Head::new()
			.title("My Page")
			.meta(MetaTag::new("description", "A page"));
		assert_eq!(head.title.as_deref(), Some("My Page"));
		assert_eq!(head.meta_tags.len(), 1);
	}

	#[test]
	fn test_meta_tag_to_html() {
		let tag = MetaTag::new("description", "A page");
		assert_eq!(
			tag.to_html(),
			"<meta name=\"description\" content=\"A page\">\n"
		);
	}

	#[test]
	fn test_meta_tag_to_html_escapes_content() {
		let tag = MetaTag::new("description", "a \"quoted\" <value>");
		assert_eq!(
			tag.to_html(),
			"<meta name=\"description\" content=\"a &quot;quoted&quot; &lt;value&gt;\">\n"
		);
	}

	#[test]
	fn test_metadata_to_head() {
		let meta = Metadata::new("Title", "Description");
		let head = meta.to_head();
		assert_eq!(head.title.as_deref(), Some("Title"));
		assert_eq!(
			head.meta_tags,
			vec![MetaTag::new("description", "Description")]
		);
	}

	#[test]
	fn test_metadata_is_const_constructible() {
		static META: Metadata = Metadata::new("T", "D");
		assert_eq!(META.title, "T");
		assert_eq!(META.description, "D");
	}
}
