extern crate nalgebra as na;

use na::Vector2;
use plotters::style::colors::BLUE;

use normviz::Float;
use normviz::plot::{PdfPlot, Viewport};
use normviz::scene::{Scene, Element, Bound};
use normviz::animation::{Timeline, Animation, FrameSink, group_transform, smooth_step};

struct CountingSink {
    frames: usize
}

impl FrameSink for CountingSink {
    fn render_frame(&mut self, _scene: &Scene, frame_index: usize) -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(frame_index, self.frames);
        self.frames += 1;
        Ok(())
    }
}

fn test_scene() -> (Scene, usize, usize) {
    let mut scene = Scene::new();
    let pdf_plot = PdfPlot::new(100.0, 15.0);
    let lower = pdf_plot.lower_x();
    let plot = scene.insert(Element::PdfCurve{plot: pdf_plot, viewport: Viewport::new(100.0, 100.0, 800.0, 560.0)});
    let tracker = scene.add_tracker(lower);
    scene.insert(Element::Area{plot, x_start: Bound::Fixed(lower), x_end: Bound::Tracker(tracker), color: BLUE});
    (scene, plot, tracker)
}

#[test]
fn test_wait_and_play_frame_accounting() {
    let (scene, plot, tracker) = test_scene();
    let mut sink = CountingSink{frames: 0};
    let mut timeline = Timeline::new(scene, &mut sink, 24);

    timeline.add(plot);
    assert_eq!(timeline.frames_written(), 0);

    timeline.wait(2.0).unwrap();
    assert_eq!(timeline.frames_written(), 48);

    timeline.play(vec![Animation::Tracker{id: tracker, to: 115.0}], 1.0).unwrap();
    assert_eq!(timeline.frames_written(), 72);
}

#[test]
fn test_played_tracker_lands_on_target() {
    let (scene, _, tracker) = test_scene();
    let mut sink = CountingSink{frames: 0};
    let mut timeline = Timeline::new(scene, &mut sink, 24);

    timeline.play(vec![Animation::Tracker{id: tracker, to: 115.0}], 1.5).unwrap();
    assert!((timeline.scene.tracker(tracker) - 115.0).abs() < 1e-9);
}

#[test]
fn test_fade_in_ends_opaque_and_visible() {
    let (scene, plot, _) = test_scene();
    let mut sink = CountingSink{frames: 0};
    let mut timeline = Timeline::new(scene, &mut sink, 24);

    assert!(!timeline.scene.node(plot).visible);
    timeline.play(vec![Animation::FadeIn{node: plot}], 1.0).unwrap();
    assert!(timeline.scene.node(plot).visible);
    assert!((timeline.scene.node(plot).opacity - 1.0).abs() < 1e-12);

    timeline.play(vec![Animation::FadeOut{node: plot}], 1.0).unwrap();
    assert!(!timeline.scene.node(plot).visible);
}

#[test]
fn test_group_transform_composes_onto_current_transform() {
    let (scene, plot, _) = test_scene();
    let mut sink = CountingSink{frames: 0};
    let mut timeline = Timeline::new(scene, &mut sink, 24);

    let animations = group_transform(&timeline.scene, &[plot], 0.6, Vector2::new(-40.0, 100.0));
    timeline.play(animations, 1.0).unwrap();
    let transform = timeline.scene.node(plot).transform;
    assert!((transform.scale - 0.6).abs() < 1e-12);
    assert!((transform.shift.x - -40.0).abs() < 1e-9);
    assert!((transform.shift.y - 100.0).abs() < 1e-9);
}

#[test]
fn test_clone_nodes_remaps_plot_reference() {
    let (mut scene, plot, _) = test_scene();
    let area = plot + 1;
    let clones = scene.clone_nodes(&[plot, area]);
    match &scene.node(clones[1]).element {
        Element::Area{plot: referenced, ..} => assert_eq!(*referenced, clones[0]),
        _ => panic!("expected the cloned area")
    }
}

#[test]
fn test_area_range_is_idempotent() {
    let plot = PdfPlot::new(100.0, 15.0);
    let first = plot.area_range(55.0, 115.0);
    let second = plot.area_range(55.0, 115.0);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_area_range_degenerates_on_inverted_bounds() {
    let plot = PdfPlot::new(100.0, 15.0);
    assert!(plot.area_range(115.0, 55.0).is_empty());
    assert!(plot.area_range(115.0, 115.0).is_empty());
}

#[test]
fn test_c2p_is_monotonic_in_x() {
    let plot = PdfPlot::new(100.0, 15.0);
    let axes = plot.axes();
    let viewport = Viewport::new(100.0, 100.0, 800.0, 560.0);
    let mut previous = axes.c2p(plot.lower_x(), 0.0, &viewport).x;
    let mut x = plot.lower_x() + 1.0;
    while x <= plot.upper_x() {
        let pixel = axes.c2p(x, 0.0, &viewport).x;
        assert!(pixel > previous);
        previous = pixel;
        x += 1.0;
    }
}

#[test]
fn test_smooth_step_endpoints_and_monotonicity() {
    assert_eq!(smooth_step(0.0), 0.0);
    assert_eq!(smooth_step(1.0), 1.0);
    let mut previous: Float = 0.0;
    for i in 1..=100 {
        let value = smooth_step((i as Float)/100.0);
        assert!(value >= previous);
        previous = value;
    }
}
