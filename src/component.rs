//! Component trait definition.

use crate::page::Page;

/// Trait for reusable UI components.
///
/// Components encapsulate rendering logic into reusable units. Every
/// component in this crate is a pure, single-shot producer: `render` takes
/// no external state and must return an identical tree on every invocation.
///
/// # Example
///
/// ```
/// use dockerhoster_hello::component::Component;
/// use dockerhoster_hello::page::{IntoPage, Page, PageElement};
///
/// struct Greeting {
/// 	name: String,
/// }
///
/// impl Component for Greeting {
/// 	fn render(&self) -> Page {
/// 		PageElement::new("div")
/// 			.child(format!("Hello, {}!", self.name))
/// 			.into_page()
/// 	}
///
/// 	fn name() -> &'static str {
/// 		"Greeting"
/// 	}
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self) -> Page;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::page::{IntoPage, PageElement};

	struct TestComponent {
		message: String,
	}

	impl Component for TestComponent {
		fn render(&self) -> Page {
			PageElement::new("div")
				.child(self.message.clone())
				.into_page()
		}

		fn name() -> &'static str {
			"TestComponent"
		}
	}

	#[test]
	fn test_component_render() {
		let comp = TestComponent {
			message: "Hello".to_string(),
		};
		let view = comp.render();
		assert_eq!(view.render_to_string(), "<div>Hello</div>");
	}

	#[test]
	fn test_component_name() {
		assert_eq!(TestComponent::name(), "TestComponent");
	}
}
