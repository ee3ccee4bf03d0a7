//! Tests for image pages sized with `fit_in_rect` before paging
//!
//! Mirrors the image modal: each photo is fitted into the screen, centred in
//! a page view, and the pages go through the pager.

use tumble_testing::*;
use tumble_ui::*;

const SCREEN: Size = Size {
    width: 320.0,
    height: 480.0,
};

fn photo_page(source: &str, photo: Size) -> RenderNode {
    let fitted = fit_in_rect(SCREEN, photo);
    let frame = Rect::centered_in(fitted, SCREEN);
    View(
        Style::empty().background(Color::BLACK),
        vec![Image(
            Style::empty().width(frame.width).height(frame.height),
            source,
        )],
    )
}

fn photo_pages() -> PagerProps {
    PagerProps::new(SCREEN)
        .page(photo_page("landscape.jpg", Size::new(1024.0, 768.0)))
        .page(photo_page("portrait.jpg", Size::new(600.0, 1200.0)))
        .page(photo_page("square.jpg", Size::new(500.0, 500.0)))
}

#[test]
fn test_fitted_images_stay_inside_pages() {
    let tree = PagerOn(&Platform::Ios, photo_pages());

    let images = find_nodes_of_type(&tree, &NodeType::Image);
    assert_count(&images, 3, "images");
    for image in images {
        let size = image.style().resolve().size().expect("image size");
        assert!(size.fits_within(SCREEN), "{size:?} overflows the page");
    }
}

#[test]
fn test_fitted_sizes_match_expected_contain_fit() {
    let tree = PagerOn(&Platform::Android, photo_pages());

    let landscape = find_text(&tree, "landscape.jpg").expect("landscape");
    assert_node_size(landscape, Size::new(320.0, 240.0), "landscape");

    let portrait = find_text(&tree, "portrait.jpg").expect("portrait");
    assert_node_size(portrait, Size::new(240.0, 480.0), "portrait");

    let square = find_text(&tree, "square.jpg").expect("square");
    assert_size_approx_eq(
        square.style().resolve().size().expect("square size"),
        Size::new(320.0, 320.0),
        1.0,
        "square",
    );
}

#[test]
fn test_pages_keep_background_and_gain_screen_size() {
    let tree = PagerOn(&Platform::Ios, photo_pages());

    for page in tree.children() {
        let resolved = page.style().resolve();
        assert_eq!(resolved.background, Some(Color::BLACK));
        assert_eq!(resolved.size(), Some(SCREEN));
        assert!(!page.is_collapsable());
    }
}
