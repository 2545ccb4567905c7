use super::*;
use crate::core::{Rect, Rgba};
use crate::layout::{Justification, Visibility};
use crate::render::{CommandRecorder, DrawCommand};

const EPS: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[derive(Default)]
struct RecordingHost {
    labels: Vec<(TabId, String, Rect, f32)>,
    content: Vec<(TabId, Rect, bool)>,
}

impl TabHost for RecordingHost {
    fn place_label(&mut self, id: TabId, label: &TabLabel<'_>) {
        self.labels.push((id, label.text.to_string(), label.rect, label.font_size));
    }

    fn place_content(&mut self, id: TabId, rect: Rect, visible: bool) {
        self.content.push((id, rect, visible));
    }
}

impl RecordingHost {
    fn label(&self, id: TabId) -> &(TabId, String, Rect, f32) {
        self.labels.iter().find(|l| l.0 == id).expect("label placed")
    }
}

fn bar_with_tabs(width: f32, height: f32, n: u64, config: NavBarConfig) -> NavBar {
    let mut bar = NavBar::new(config, ContainerMetrics::full(width, height));
    for i in 0..n {
        assert!(bar.add_tab(Tab::new(TabId(i), TabStyle::with_text(format!("Tab {i}")))));
    }
    bar
}

fn extended(width: f32, n: u64, active: u64) -> NavBar {
    let config = NavBarConfig {
        extend_past_bounds: true,
        ..NavBarConfig::default()
    };
    let mut bar = bar_with_tabs(width, 400.0, n, config);
    bar.switch_to(TabId(active));
    bar
}

fn count_polylines(rec: &CommandRecorder) -> usize {
    rec.commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokePolyline { .. }))
        .count()
}

fn fill_rects_with(rec: &CommandRecorder, color: Rgba) -> Vec<(f32, f32)> {
    rec.commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillRect { pos, size, color: c } if *c == color => Some((pos.x, size.w)),
            _ => None,
        })
        .collect()
}

// ── geometry through the pass ────────────────────────────────────────

#[test]
fn contained_five_tabs_in_600_wide_bar() {
    let mut bar = bar_with_tabs(600.0, 400.0, 5, NavBarConfig::default());
    let snap = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert_eq!(snap.tabs.len(), 5);
    assert_eq!(snap.justification, Justification::Left);
    for t in &snap.tabs {
        assert!(approx(t.rect.w, 107.142_86), "width {}", t.rect.w);
        assert_eq!(t.visibility, Visibility::Full);
    }
    let last = snap.tabs[4].rect;
    let gap = snap.tabs[0].rect.x;
    assert!(approx(last.right() + gap, 600.0));
}

#[test]
fn bar_and_content_heights_sum_to_container() {
    for fraction in [0.0, 0.1, 0.25, 0.5, 1.0] {
        for top in [true, false] {
            let config = NavBarConfig {
                bar_height: fraction,
                orient_to_top: top,
                ..NavBarConfig::default()
            };
            let mut bar = bar_with_tabs(320.0, 240.0, 3, config);
            let snap = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
            let g = snap.geometry;
            assert!(approx(g.bar.h + g.content.h, 240.0), "fraction={fraction} top={top}");
        }
    }
}

#[test]
fn orientation_places_bar_above_or_below_content() {
    let mut bar = bar_with_tabs(300.0, 200.0, 1, NavBarConfig::default());
    let top = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(approx(top.geometry.bar.y, 180.0));
    assert!(approx(top.geometry.content.y, 0.0));

    bar.set_orient_to_top(false);
    let bottom = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(approx(bottom.geometry.bar.y, 0.0));
    assert!(approx(bottom.geometry.content.y, 20.0));
}

#[test]
fn valign_positions_short_tabs_within_bar() {
    let mut bar = bar_with_tabs(300.0, 400.0, 2, NavBarConfig::default());
    bar.set_tab_size_hint(None, Some(0.5));

    let mut ys = Vec::new();
    for align in [BarAlign::Top, BarAlign::Center, BarAlign::Bottom] {
        bar.set_valign(align);
        let snap = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
        assert!(approx(snap.tabs[0].rect.h, 20.0));
        ys.push(snap.tabs[0].rect.y);
    }
    assert!(approx(ys[0], 380.0));
    assert!(approx(ys[1], 370.0));
    assert!(approx(ys[2], 360.0));
}

#[test]
fn container_size_hint_scales_before_split() {
    let mut bar = bar_with_tabs(0.0, 0.0, 1, NavBarConfig::default());
    bar.set_container(ContainerMetrics {
        parent_pos: crate::core::Point::new(10.0, 20.0),
        parent_size: crate::core::Size::new(1000.0, 500.0),
        size_hint: (0.5, 0.5),
    });
    let snap = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(approx(snap.geometry.bar.w, 500.0));
    assert!(approx(snap.geometry.bar.x, 10.0));
    assert!(approx(snap.geometry.bar.h + snap.geometry.content.h, 250.0));
}

// ── overflow and drawing ─────────────────────────────────────────────

#[test]
fn centered_row_cuts_tabs_at_both_edges() {
    let mut bar = extended(600.0, 8, 3);
    let mut rec = CommandRecorder::new();
    let snap = bar.layout(&mut rec, &mut NullHost).unwrap();

    assert_eq!(snap.justification, Justification::CenterOnActive);
    let vis: Vec<_> = snap.tabs.iter().map(|t| t.visibility).collect();
    assert_eq!(
        vis,
        vec![
            Visibility::Hidden,
            Visibility::HalfLeft,
            Visibility::Full,
            Visibility::Full,
            Visibility::Full,
            Visibility::HalfRight,
            Visibility::Hidden,
            Visibility::Hidden,
        ]
    );
    assert_eq!(count_polylines(&rec), 2);

    let left = snap.tabs[1].drawn.unwrap();
    assert!(approx(left.x, 6.666_67));
    assert!(approx(left.w, 66.666_67));
    let right = snap.tabs[5].drawn.unwrap();
    assert!(approx(right.x, 526.666_7));
    assert!(approx(right.w, 66.666_67));
    assert!(snap.tabs[0].drawn.is_none());
}

#[test]
fn remove_incomplete_tabs_hides_half_tabs() {
    let mut bar = extended(600.0, 8, 3);
    bar.set_remove_incomplete_tabs(true);
    let mut rec = CommandRecorder::new();
    let snap = bar.layout(&mut rec, &mut NullHost).unwrap();

    assert_eq!(snap.count(Visibility::HalfLeft), 0);
    assert_eq!(snap.count(Visibility::HalfRight), 0);
    assert_eq!(snap.count(Visibility::Hidden), 5);
    assert_eq!(count_polylines(&rec), 0);
}

#[test]
fn active_tab_uses_highlight_color() {
    let mut bar = extended(600.0, 8, 3);
    let colors = bar.config().colors;
    let mut rec = CommandRecorder::new();
    let snap = bar.layout(&mut rec, &mut NullHost).unwrap();

    let highlighted = fill_rects_with(&rec, colors.highlight);
    assert_eq!(highlighted.len(), 1);
    assert!(approx(highlighted[0].0, snap.tabs[3].rect.x));
    // Two full tabs and two half tabs in the base color.
    assert_eq!(fill_rects_with(&rec, colors.tab_fill).len(), 4);
}

#[test]
fn background_is_painted_before_tabs() {
    let mut bar = bar_with_tabs(200.0, 100.0, 2, NavBarConfig::default());
    let colors = bar.config().colors;
    let mut rec = CommandRecorder::new();
    bar.layout(&mut rec, &mut NullHost).unwrap();

    let cmds = rec.commands();
    assert_eq!(cmds[0].color(), colors.background);
    assert_eq!(cmds[1].color(), colors.tab_background);
    assert!(cmds[2..].iter().all(|c| c.color() != colors.background));
}

#[test]
fn rounded_shape_with_border_strokes_rounded_outline() {
    let config = NavBarConfig {
        tab_shape: "RoundedRectangle".to_string(),
        tab_border_enable: true,
        ..NavBarConfig::default()
    };
    let mut bar = bar_with_tabs(400.0, 400.0, 1, config);
    let mut rec = CommandRecorder::new();
    bar.layout(&mut rec, &mut NullHost).unwrap();

    let ellipses = rec
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillEllipse { .. }))
        .count();
    assert_eq!(ellipses, 4);
    assert!(
        rec.commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokeRoundedRect { .. }))
    );
}

#[test]
fn unsupported_shape_fails_without_drawing() {
    let mut bar = bar_with_tabs(300.0, 200.0, 3, NavBarConfig::default());
    let mut rec = CommandRecorder::new();
    bar.layout(&mut rec, &mut NullHost).unwrap();
    let before = rec.commands().to_vec();

    bar.set_tab_shape("Hexagon");
    let mut host = RecordingHost::default();
    let err = bar.update(&mut rec, &mut host).unwrap_err();
    assert!(matches!(err, NavBarError::UnsupportedShape(ref s) if s == "Hexagon"));
    assert!(err.is_configuration());
    assert_eq!(rec.commands(), before.as_slice());
    assert!(host.labels.is_empty());
    assert!(bar.is_dirty());
}

#[test]
fn zero_tabs_emit_only_finite_backgrounds() {
    let mut bar = NavBar::new(NavBarConfig::default(), ContainerMetrics::full(300.0, 200.0));
    let mut rec = CommandRecorder::new();
    let snap = bar.layout(&mut rec, &mut NullHost).unwrap();

    assert!(snap.tabs.is_empty());
    assert_eq!(snap.active, None);
    assert!(approx(snap.geometry.tab_size_hint.0, 1.0 / 1.2));
    assert_eq!(rec.len(), 2);
    assert!(rec.commands().iter().all(DrawCommand::is_finite));
}

#[test]
fn empty_contained_bar_is_reported_once_per_transition() {
    let mut bar = NavBar::new(NavBarConfig::default(), ContainerMetrics::full(300.0, 200.0));
    bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(bar.warned_empty);
    bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(bar.warned_empty);

    bar.add_tab(Tab::new(TabId(0), TabStyle::default()));
    bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(!bar.warned_empty);

    bar.remove_tab(TabId(0));
    bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(bar.warned_empty);

    bar.set_extend_past_bounds(true);
    bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert!(!bar.warned_empty);
}

#[test]
fn degenerate_inputs_never_reach_the_surface() {
    let config = NavBarConfig {
        tab_radius: f32::NAN,
        chevron_width: f32::INFINITY,
        tab_border_enable: true,
        tab_shape: "RoundedRectangle".to_string(),
        extend_past_bounds: true,
        ..NavBarConfig::default()
    };
    let mut bar = bar_with_tabs(600.0, 400.0, 8, config);
    bar.switch_to(TabId(3));
    let mut rec = CommandRecorder::new();
    bar.layout(&mut rec, &mut NullHost).unwrap();
    assert!(rec.commands().iter().all(DrawCommand::is_finite));

    bar.set_container(ContainerMetrics::full(f32::NAN, f32::INFINITY));
    bar.layout(&mut rec, &mut NullHost).unwrap();
    assert!(rec.commands().iter().all(DrawCommand::is_finite));
}

#[test]
fn repeated_passes_are_identical() {
    let mut bar = extended(640.0, 9, 5);
    let mut a = CommandRecorder::new();
    let mut b = CommandRecorder::new();
    let first = bar.layout(&mut a, &mut NullHost).unwrap();
    let second = bar.layout(&mut b, &mut NullHost).unwrap();
    assert_eq!(first, second);
    assert_eq!(a.commands(), b.commands());
}

// ── labels and content ───────────────────────────────────────────────

#[test]
fn labels_show_text_only_on_full_tabs() {
    let mut bar = extended(600.0, 8, 3);
    let mut host = RecordingHost::default();
    let snap = bar.layout(&mut CommandRecorder::new(), &mut host).unwrap();

    assert_eq!(host.labels.len(), 8);
    let full = host.label(TabId(3));
    assert_eq!(full.1, "Tab 3");
    assert_eq!(full.2, snap.tabs[3].rect);

    let half = host.label(TabId(5));
    assert!(half.1.is_empty());
    assert_eq!(Some(half.2), snap.tabs[5].drawn);

    let hidden = host.label(TabId(7));
    assert!(hidden.1.is_empty());
    assert_eq!(hidden.2, snap.tabs[7].rect);
}

#[test]
fn font_size_override_applies_to_every_label() {
    let mut bar = bar_with_tabs(400.0, 300.0, 3, NavBarConfig::default());
    let mut host = RecordingHost::default();
    bar.layout(&mut CommandRecorder::new(), &mut host).unwrap();
    assert!(host.labels.iter().all(|l| l.3 == 5.0));

    bar.set_tab_font_size(Some(12.0));
    let mut host = RecordingHost::default();
    bar.layout(&mut CommandRecorder::new(), &mut host).unwrap();
    assert!(host.labels.iter().all(|l| l.3 == 12.0));
}

#[test]
fn first_pass_activates_first_tab() {
    let mut bar = bar_with_tabs(400.0, 300.0, 3, NavBarConfig::default());
    assert!(!bar.registry().is_enabled(TabId(0)));

    let mut host = RecordingHost::default();
    let snap = bar.layout(&mut CommandRecorder::new(), &mut host).unwrap();
    assert_eq!(snap.active, Some(0));
    let visible: Vec<_> = host.content.iter().filter(|c| c.2).map(|c| c.0).collect();
    assert_eq!(visible, vec![TabId(0)]);
    assert!(host.content.iter().all(|c| c.1 == snap.geometry.content));
}

#[test]
fn explicit_navigation_before_first_pass_is_kept() {
    let mut bar = bar_with_tabs(400.0, 300.0, 3, NavBarConfig::default());
    bar.switch_to(TabId(2));
    let snap = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert_eq!(snap.active, Some(2));
    assert!(!bar.registry().is_enabled(TabId(0)));
}

#[test]
fn children_discovery_lists_tabs_in_declared_order() {
    let host_order = [
        Tab::new(TabId(3), TabStyle::with_text("C")),
        Tab::new(TabId(2), TabStyle::with_text("B")),
        Tab::new(TabId(1), TabStyle::with_text("A")),
    ];
    let mut bar = NavBar::new(NavBarConfig::default(), ContainerMetrics::full(300.0, 200.0));
    assert_eq!(bar.on_children_changed(host_order.iter().map(|t| t as &dyn NavChild)), 3);

    let mut host = RecordingHost::default();
    bar.layout(&mut CommandRecorder::new(), &mut host).unwrap();
    let texts: Vec<_> = host.labels.iter().map(|l| l.1.as_str()).collect();
    assert_eq!(texts, vec!["A", "B", "C"]);
    assert_eq!(bar.current().unwrap().id, TabId(1));
}

// ── dirty flag ───────────────────────────────────────────────────────

#[test]
fn update_runs_only_when_dirty() {
    let mut bar = bar_with_tabs(400.0, 300.0, 2, NavBarConfig::default());
    let mut rec = CommandRecorder::new();
    assert!(bar.update(&mut rec, &mut NullHost).unwrap().is_some());
    assert!(!bar.is_dirty());
    assert!(bar.update(&mut rec, &mut NullHost).unwrap().is_none());

    bar.set_bar_height(0.2);
    bar.set_tab_spacing(Some(0.05));
    bar.next();
    assert!(bar.is_dirty());
    let snap = bar.update(&mut rec, &mut NullHost).unwrap().unwrap();
    assert_eq!(snap.active, Some(1));
    assert!(bar.update(&mut rec, &mut NullHost).unwrap().is_none());
}

#[test]
fn unchanged_container_does_not_dirty() {
    let mut bar = bar_with_tabs(400.0, 300.0, 2, NavBarConfig::default());
    bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    bar.set_container(ContainerMetrics::full(400.0, 300.0));
    assert!(!bar.is_dirty());
    bar.set_container(ContainerMetrics::full(500.0, 300.0));
    assert!(bar.is_dirty());
}

#[test]
fn setters_clamp_fractions() {
    let mut bar = NavBar::new(NavBarConfig::default(), ContainerMetrics::full(100.0, 100.0));
    bar.set_tab_spacing(Some(3.0));
    bar.set_tab_size_hint(Some(-1.0), Some(2.0));
    bar.set_bar_height(1.5);
    let c = bar.config();
    assert_eq!(c.tab_spacing, Some(1.0));
    assert_eq!(c.tab_size_hint, (Some(0.0), Some(1.0)));
    assert_eq!(c.bar_height, 1.0);
}

#[test]
fn removing_active_tab_keeps_a_tab_active() {
    let mut bar = bar_with_tabs(400.0, 300.0, 3, NavBarConfig::default());
    bar.switch_to(TabId(2));
    bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();

    assert!(bar.remove_tab(TabId(2)).is_some());
    assert!(bar.is_dirty());
    let snap = bar.layout(&mut CommandRecorder::new(), &mut NullHost).unwrap();
    assert_eq!(snap.tabs.len(), 2);
    assert_eq!(snap.active, Some(1));
    assert!(bar.registry().is_enabled(TabId(1)));
}
