use super::*;

#[test]
fn later_fragments_win_on_conflicts() {
    let style = Style::empty()
        .size(Size::new(10.0, 20.0))
        .background(Color::WHITE)
        .width(30.0);
    let resolved = style.resolve();
    assert_eq!(resolved.width, Some(30.0));
    assert_eq!(resolved.height, Some(20.0));
    assert_eq!(resolved.background, Some(Color::WHITE));
    assert_eq!(resolved.flex, None);
}

#[test]
fn then_keeps_existing_fragments_first() {
    let style = Style::empty()
        .padding(4.0)
        .then(StyleFragment::size(Size::new(320.0, 568.0)));
    assert_eq!(style.fragments().len(), 2);
    assert_eq!(
        style.last_fragment().map(StyleFragment::properties),
        Some(&[StyleProperty::Width(320.0), StyleProperty::Height(568.0)][..])
    );
}

#[test]
fn empty_fragments_are_dropped() {
    let style = Style::empty().then(StyleFragment::new());
    assert!(style.is_empty());
    assert_eq!(style.resolve(), ResolvedStyle::default());
}

#[test]
fn concat_preserves_order() {
    let base = Style::empty().width(1.0);
    let overrides = Style::empty().width(2.0).flex(1.0);
    let resolved = base.concat(overrides).resolve();
    assert_eq!(resolved.width, Some(2.0));
    assert_eq!(resolved.flex, Some(1.0));
}

#[test]
fn resolved_size_needs_both_dimensions() {
    assert_eq!(Style::empty().width(5.0).resolve().size(), None);
    assert_eq!(
        Style::empty().width(5.0).height(6.0).resolve().size(),
        Some(Size::new(5.0, 6.0))
    );
}

#[test]
fn resolved_style_display_lists_set_values() {
    let resolved = Style::empty()
        .size(Size::new(100.0, 25.0))
        .background(Color::from_hex(0x36465d))
        .resolve();
    assert_eq!(
        resolved.to_string(),
        "{width: 100, height: 25, background: #36465d}"
    );
}
