//! The single route's page content.

use crate::component::Component;
use crate::page::{IntoPage, Page, PageElement, Style};

/// The hello-world page body.
///
/// Takes no input and renders the same tree on every invocation: a centered
/// column with a greeting heading and two descriptive paragraphs, all styled
/// inline.
pub struct HomePage;

impl Component for HomePage {
	fn render(&self) -> Page {
		PageElement::new("main")
			.style(
				Style::new()
					.set("display", "flex")
					.set("flex-direction", "column")
					.set("align-items", "center")
					.set("justify-content", "center")
					.set("min-height", "100vh")
					.set("padding", "2rem")
					.set("font-family", "system-ui, sans-serif"),
			)
			.child(
				PageElement::new("h1")
					.style(
						Style::new()
							.set("font-size", "3rem")
							.set("margin-bottom", "1rem"),
					)
					.child("🚀 Hello World!"),
			)
			.child(
				PageElement::new("p")
					.style(Style::new().set("font-size", "1.5rem").set("color", "#666"))
					.child("This Next.js app is running via DockerHoster"),
			)
			.child(
				PageElement::new("p")
					.style(Style::new().set("margin-top", "2rem").set("color", "#999"))
					.child("Deployed with DockerHoster + nginx-proxy"),
			)
			.into_page()
	}

	fn name() -> &'static str {
		"HomePage"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_root_container() {
		let Page::Element(main) = HomePage.render() else {
			panic!("page root must be an element");
		};
		assert_eq!(main.tag_name(), "main");
		let style = main.inline_style().expect("main carries layout styling");
		assert_eq!(style.get("display"), Some("flex"));
		assert_eq!(style.get("flex-direction"), Some("column"));
		assert_eq!(style.get("align-items"), Some("center"));
		assert_eq!(style.get("justify-content"), Some("center"));
		assert_eq!(style.get("min-height"), Some("100vh"));
		assert_eq!(style.get("padding"), Some("2rem"));
		assert_eq!(style.get("font-family"), Some("system-ui, sans-serif"));
	}

	#[test]
	fn test_heading_text() {
		let Page::Element(main) = HomePage.render() else {
			panic!("page root must be an element");
		};
		let Page::Element(h1) = &main.child_views()[0] else {
			panic!("first child must be the heading");
		};
		assert_eq!(h1.tag_name(), "h1");
		assert_eq!(h1.child_views(), &[Page::text("🚀 Hello World!")]);
	}

	#[test]
	fn test_render_is_deterministic() {
		assert_eq!(HomePage.render(), HomePage.render());
	}
}
