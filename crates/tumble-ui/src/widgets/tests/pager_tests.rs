use super::*;
use crate::widgets::{Text, View};
use log::Level;
use tumble_testing::capture_logs;

const PAGER_SIZE: Size = Size {
    width: 320.0,
    height: 568.0,
};

fn sample_props() -> PagerProps {
    PagerProps::new(PAGER_SIZE)
        .page(View(Style::empty().flex(1.0), vec![Text(Style::empty(), "one")]))
        .pages([None])
        .page(View(Style::empty(), Vec::new()))
}

#[test]
fn android_selects_native_strategy() {
    assert_eq!(
        PagerStrategy::for_platform(&Platform::Android),
        PagerStrategy::Native
    );
}

#[test]
fn ios_and_unknown_hosts_select_emulated_strategy() {
    assert_eq!(
        PagerStrategy::for_platform(&Platform::Ios),
        PagerStrategy::ScrollEmulated
    );
    let (strategy, logs) = capture_logs(|| {
        PagerStrategy::for_platform(&Platform::Other("windows".to_owned()))
    });
    assert_eq!(strategy, PagerStrategy::ScrollEmulated);
    assert_eq!(logs.count(Level::Debug), 1);
}

#[test]
fn pager_on_dispatches_by_platform() {
    let native = PagerOn(&Platform::Android, sample_props());
    assert_eq!(native.node_type(), &NodeType::ViewPager);

    let emulated = PagerOn(&Platform::Ios, sample_props());
    assert!(matches!(emulated.node_type(), NodeType::ScrollView(_)));

    let fallback = PagerOn(&Platform::from_identifier("web"), sample_props());
    assert!(matches!(fallback.node_type(), NodeType::ScrollView(_)));
}

#[test]
fn pager_uses_current_platform() {
    let expected = PagerStrategy::for_platform(&Platform::current()).render(sample_props());
    assert_eq!(Pager(sample_props()), expected);
}

#[test]
fn native_pager_sizes_container_and_passes_pages_through() {
    let props = sample_props();
    let pages: Vec<RenderNode> = props.children.iter().flatten().cloned().collect();

    let pager = NativeViewPager(props);

    assert_eq!(pager.style().resolve().size(), Some(PAGER_SIZE));
    assert_eq!(pager.children(), &pages[..]);
    assert!(pager.children().iter().all(RenderNode::is_collapsable));
}

#[test]
fn emulated_pager_is_horizontal_and_paging() {
    let pager = ScrollEmulatedPager(sample_props());
    assert_eq!(
        pager.node_type(),
        &NodeType::ScrollView(ScrollSpec {
            horizontal: true,
            paging_enabled: true,
        })
    );
}

#[test]
fn emulated_pager_skips_missing_pages() {
    let pager = ScrollEmulatedPager(sample_props());
    assert_eq!(pager.children().len(), 2);

    let empty = ScrollEmulatedPager(PagerProps::new(PAGER_SIZE).pages([None, None]));
    assert!(empty.children().is_empty());
}

#[test]
fn emulated_pages_are_stretched_after_their_own_style() {
    let pager = ScrollEmulatedPager(sample_props());

    for page in pager.children() {
        assert_eq!(
            page.style().last_fragment(),
            Some(&StyleFragment::size(PAGER_SIZE))
        );
        assert_eq!(page.style().resolve().size(), Some(PAGER_SIZE));
        assert!(!page.is_collapsable());
    }

    let first = &pager.children()[0];
    assert_eq!(first.style().fragments().len(), 2);
    assert_eq!(first.style().resolve().flex, Some(1.0));
    assert_eq!(first.node_type(), &NodeType::View);
    assert_eq!(first.children()[0].text(), Some("one"));
    assert!(first.children()[0].is_collapsable());
}

#[test]
fn container_size_overrides_page_size() {
    let props = PagerProps::new(PAGER_SIZE).page(View(
        Style::empty().size(Size::new(10.0, 10.0)),
        Vec::new(),
    ));
    let pager = ScrollEmulatedPager(props);
    assert_eq!(
        pager.children()[0].style().resolve().size(),
        Some(PAGER_SIZE)
    );
}

#[test]
fn caller_props_are_left_untouched() {
    let props = sample_props();
    let snapshot = props.clone();
    let _ = ScrollEmulatedPager(props.clone());
    assert_eq!(props, snapshot);
    assert!(props.children[0]
        .as_ref()
        .is_some_and(RenderNode::is_collapsable));
}

#[test]
fn view_pages_do_not_warn() {
    let props = PagerProps::new(PAGER_SIZE)
        .page(View(Style::empty(), Vec::new()))
        .page(RenderNode::new(NodeType::NativeView))
        .page(RenderNode::new(NodeType::anonymous()));
    let (_, logs) = capture_logs(|| ScrollEmulatedPager(props));
    assert_eq!(logs.count(Level::Warn), 0);
}

#[test]
fn components_named_view_do_not_warn() {
    let props = PagerProps::new(PAGER_SIZE)
        .page(RenderNode::new(NodeType::component("View")))
        .page(RenderNode::new(NodeType::component("RCTView")));
    let (pager, logs) = capture_logs(|| ScrollEmulatedPager(props));
    assert!(logs.warnings().is_empty());
    assert_eq!(pager.children().len(), 2);
}

#[test]
fn strategy_follows_native_pager_capability() {
    let platforms = [
        Platform::Ios,
        Platform::Android,
        Platform::Other("web".to_owned()),
    ];
    for platform in platforms {
        let expected = if platform.has_native_pager() {
            PagerStrategy::Native
        } else {
            PagerStrategy::ScrollEmulated
        };
        assert_eq!(PagerStrategy::for_platform(&platform), expected, "{platform}");
    }
}

#[test]
fn non_view_page_warns_once_and_still_renders() {
    let props = PagerProps::new(PAGER_SIZE)
        .page(View(Style::empty(), Vec::new()))
        .page(Text(Style::empty(), "not a view"));
    let (pager, logs) = capture_logs(|| ScrollEmulatedPager(props));

    assert_eq!(
        logs.warnings(),
        vec!["Each pager page must be a View. Was Text"]
    );
    assert_eq!(pager.children().len(), 2);
    let text_page = &pager.children()[1];
    assert_eq!(text_page.node_type(), &NodeType::Text);
    assert_eq!(text_page.style().resolve().size(), Some(PAGER_SIZE));
}

#[test]
fn native_pager_does_not_check_page_types() {
    let props = PagerProps::new(PAGER_SIZE).page(Text(Style::empty(), "text"));
    let (_, logs) = capture_logs(|| NativeViewPager(props));
    assert_eq!(logs.count(Level::Warn), 0);
}

#[test]
fn page_type_check_reports_display_name() {
    assert_eq!(check_page_type(&NodeType::View), None);
    assert_eq!(check_page_type(&NodeType::anonymous()), None);
    assert_eq!(check_page_type(&NodeType::component("RCTView")), None);
    let warning = check_page_type(&NodeType::component("PhotoCard")).expect("warning");
    assert_eq!(warning.display_name, "PhotoCard");
    assert_eq!(
        warning.to_string(),
        "Each pager page must be a View. Was PhotoCard"
    );
}
