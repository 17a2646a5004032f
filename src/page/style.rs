//! Inline style declarations.
//!
//! A `Style` is an ordered mapping from CSS property name to value that is
//! attached to a single element and rendered as its `style` attribute. Each
//! declaration is fully self-contained: there is no cascade and no external
//! stylesheet involved.

use std::borrow::Cow;
use std::fmt;

/// An inline CSS declaration block for a single element.
///
/// Properties render in insertion order, joined as `name: value` pairs.
///
/// ## Example
///
/// ```
/// use dockerhoster_hello::page::Style;
///
/// let style = Style::new().set("display", "flex").set("padding", "2rem");
/// assert_eq!(style.to_string(), "display: flex; padding: 2rem");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
	decls: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Style {
	/// Creates an empty declaration block.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a property, replacing any earlier declaration of the same name.
	pub fn set(
		mut self,
		property: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		let property = property.into();
		self.decls.retain(|(name, _)| *name != property);
		self.decls.push((property, value.into()));
		self
	}

	/// Returns the value declared for a property, if any.
	pub fn get(&self, property: &str) -> Option<&str> {
		self.decls
			.iter()
			.find(|(name, _)| name == property)
			.map(|(_, value)| value.as_ref())
	}

	/// Returns whether the block has no declarations.
	pub fn is_empty(&self) -> bool {
		self.decls.is_empty()
	}

	/// Returns the number of declarations.
	pub fn len(&self) -> usize {
		self.decls.len()
	}

	/// Iterates over the declarations in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.decls
			.iter()
			.map(|(name, value)| (name.as_ref(), value.as_ref()))
	}
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, (name, value)) in self.decls.iter().enumerate() {
			if i > 0 {
				f.write_str("; ")?;
			}
			write!(f, "{}: {}", name, value)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_style() {
		let style = Style::new();
		assert!(style.is_empty());
		assert_eq!(style.to_string(), "");
	}

	#[test]
	fn test_set_preserves_insertion_order() {
		let style = Style::new()
			.set("display", "flex")
			.set("flex-direction", "column")
			.set("min-height", "100vh");
		assert_eq!(
			style.to_string(),
			"display: flex; flex-direction: column; min-height: 100vh"
		);
	}

	#[test]
	fn test_set_replaces_existing_property() {
		let style = Style::new().set("color", "#666").set("color", "#999");
		assert_eq!(style.len(), 1);
		assert_eq!(style.get("color"), Some("#999"));
	}

	#[test]
	fn test_get_missing_property() {
		assert_eq!(Style::new().get("color"), None);
	}

	#[test]
	fn test_structural_equality() {
		let a = Style::new().set("padding", "2rem");
		let b = Style::new().set("padding", "2rem");
		assert_eq!(a, b);
		assert_ne!(a, Style::new().set("padding", "1rem"));
	}

	#[test]
	fn test_iter() {
		let style = Style::new().set("font-size", "3rem").set("margin-bottom", "1rem");
		let decls: Vec<_> = style.iter().collect();
		assert_eq!(
			decls,
			vec![("font-size", "3rem"), ("margin-bottom", "1rem")]
		);
	}
}
