//! The image modal: every photo becomes one page of the pager.

use tumble_core::Platform;
use tumble_ui::{
    fit_in_rect, Color, Image, PagerOn, PagerProps, Rect, RenderNode, Size, Style, Text, View,
};

/// Page size of the modal, in logical units.
pub const SCREEN: Size = Size {
    width: 320.0,
    height: 568.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Photo {
    pub source: &'static str,
    pub size: Size,
}

pub const PHOTOS: [Photo; 4] = [
    Photo {
        source: "harbour.jpg",
        size: Size::new(1024.0, 683.0),
    },
    Photo {
        source: "lighthouse.jpg",
        size: Size::new(768.0, 1024.0),
    },
    Photo {
        source: "panorama.jpg",
        size: Size::new(4000.0, 1000.0),
    },
    Photo {
        source: "avatar.png",
        size: Size::new(128.0, 128.0),
    },
];

/// One page: the photo fitted into `page` and centred on a dark background.
pub fn photo_page(photo: &Photo, page: Size) -> RenderNode {
    let fitted = fit_in_rect(page, photo.size);
    let frame = Rect::centered_in(fitted, page);
    log::debug!(
        "{} {}x{} fitted to {}x{} at ({}, {})",
        photo.source,
        photo.size.width,
        photo.size.height,
        frame.width,
        frame.height,
        frame.x,
        frame.y
    );
    View(
        Style::empty().background(Color::from_hex(0x36465d)),
        vec![Image(
            Style::empty().width(frame.width).height(frame.height),
            photo.source,
        )],
    )
}

/// The modal pager for `platform`.
///
/// The trailing caption is a bare `Text` page, which the emulated pager
/// reports as a warning.
pub fn photo_modal(platform: &Platform, photos: &[Photo]) -> RenderNode {
    let props = PagerProps::new(SCREEN)
        .pages(photos.iter().map(|photo| Some(photo_page(photo, SCREEN))))
        .pages([None])
        .page(Text(Style::empty(), format!("{} photos", photos.len())));
    PagerOn(platform, props)
}
