//! Static export integration tests

use dockerhoster_hello::app::{HomePage, METADATA, RootLayout};
use dockerhoster_hello::component::Component;
use dockerhoster_hello::export::export_document;
use dockerhoster_hello::ssr::SsrRenderer;
use rstest::*;

#[rstest]
fn test_export_round_trip() {
	let document = RootLayout::new(HomePage.render()).render();
	let html = SsrRenderer::new().render_document(&document, &METADATA);

	let dir = tempfile::tempdir().expect("create temp dir");
	let path = export_document(dir.path(), &html).expect("export succeeds");

	assert_eq!(path.file_name().unwrap(), "index.html");
	let written = std::fs::read_to_string(&path).expect("read back exported file");
	assert_eq!(written, html);
	assert!(written.contains("<title>Next.js Hello World - DockerHoster</title>"));
}

#[rstest]
fn test_export_overwrites_previous_document() {
	let dir = tempfile::tempdir().expect("create temp dir");
	export_document(dir.path(), "old").expect("first export");
	let path = export_document(dir.path(), "new").expect("second export");

	assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}
