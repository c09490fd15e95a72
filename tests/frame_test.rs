use cgmath::Point2;
use proptest::prelude::*;
use std::time::Duration;
use tern::backend::memory::MemoryBackend;
use tern::{
    Color, Config, Frame, Host, InputEvent, InteractionId, KeyCode, Rect, RectStyle, RegionStyle,
    TextStyle,
};

fn host() -> (Host<MemoryBackend>, MemoryBackend) {
    let backend = MemoryBackend::new();
    let root = backend.root();
    (Host::new(backend.clone(), root, Config::default()), backend)
}

fn at(frame: u64) -> Duration {
    Duration::from_millis(frame * 16)
}

#[test]
fn scenario_region_with_rect() {
    let (mut host, backend) = host();
    let stats = host
        .frame(at(0), |frame| {
            let region = frame.begin_region(Rect::new(0., 0., 100., 100.), RegionStyle::default());
            frame.fill(Rect::new(10., 10., 30., 30.), Color::BLUE);
            frame.end_region(region);
        })
        .unwrap();

    assert_eq!(stats.reconcile.created, 2);
    let region = backend.visible_children(backend.root());
    assert_eq!(region.len(), 1);
    let rects = backend.visible_children(region[0]);
    assert_eq!(rects.len(), 1);
    let rect = backend.node(rects[0]).unwrap();
    assert_eq!(rect.style("left"), Some("10px"));
    assert_eq!(rect.style("top"), Some("10px"));
}

#[test]
fn scenario_click_on_hovered() {
    let (mut host, _) = host();
    let input = host.input_sender();
    let rect = Rect::new(0., 0., 20., 20.);
    let id = InteractionId(5);

    input.send(InputEvent::PointerMove { x: 3., y: 3. });
    host.frame(at(0), |frame| {
        frame.hover(id, rect);
    })
    .unwrap();
    assert_eq!(host.registry().hover_id(), id);

    input.send(InputEvent::PointerDown);
    let mut clicked = false;
    host.frame(at(1), |frame| clicked = frame.click(id, rect))
        .unwrap();
    assert!(clicked);
    assert_eq!(host.registry().focus_id(), id);
}

#[test]
fn hover_is_visible_one_frame_later() {
    let (mut host, _) = host();
    let input = host.input_sender();
    let rect = Rect::new(50., 50., 80., 70.);
    let mut seen = Vec::new();

    for n in 0..3 {
        if n == 1 {
            input.send(InputEvent::PointerMove { x: 60., y: 60. });
        }
        host.frame(at(n), |frame| {
            let id = frame.unique_id(rect, 3);
            seen.push(frame.hover(id, rect));
        })
        .unwrap();
    }
    assert_eq!(seen, vec![false, false, true]);
}

#[test]
fn identical_frames_cost_nothing() {
    fn draw(frame: &mut Frame<'_>) {
        frame.clear(Color::RED);
        let outer = frame.begin_clipping_region(Rect::new(20., 20., 300., 200.));
        frame.rect(
            Rect::new(20., 20., 300., 40.),
            RectStyle {
                border: Some((1., Color::WHITE)),
                ..RectStyle::filled(Color::BLACK)
            },
        );
        frame.text(Rect::new(20., 20., 300., 40.), "title", TextStyle::centered(None));
        frame.end_region(outer);
    }

    let (mut host, backend) = host();
    host.frame(at(0), draw).unwrap();
    backend.reset_counts();
    let stats = host.frame(at(1), draw).unwrap();
    assert_eq!(backend.counts().total(), 0);
    assert_eq!(stats.reconcile.reused, 3);
}

#[test]
fn conditional_content_hides_and_returns() {
    let (mut host, backend) = host();
    let input = host.input_sender();
    let mut show_banner = false;

    for n in 0..4 {
        if n == 1 || n == 3 {
            input.send(InputEvent::KeyDown {
                code: KeyCode::SPACE,
                repeat: false,
            });
        }
        host.frame(at(n), |frame| {
            if frame.key_pressed(KeyCode::SPACE) {
                show_banner = !show_banner;
            }
            frame.fill(Rect::new(0., 0., 10., 10.), Color::WHITE);
            if show_banner {
                frame.text(Rect::new(0., 20., 100., 40.), "banner", TextStyle::default());
            }
        })
        .unwrap();

        let expected = if show_banner { 2 } else { 1 };
        assert_eq!(backend.visible_children(backend.root()).len(), expected, "frame {}", n);
    }
    assert_eq!(host.tree().len(), 2);
}

#[test]
fn hosts_are_independent() {
    let (mut a, backend_a) = host();
    let (mut b, backend_b) = host();
    a.input_sender().send(InputEvent::PointerMove { x: 6., y: 6. });

    let rect = Rect::new(5., 5., 10., 10.);
    for n in 0..2 {
        a.frame(at(n), |frame| {
            let id = frame.unique_id(rect, 1);
            frame.hover(id, rect);
            frame.fill(rect, Color::WHITE);
        })
        .unwrap();
        b.frame(at(n), |frame| {
            let id = frame.unique_id(rect, 1);
            frame.hover(id, rect);
        })
        .unwrap();
    }

    assert!(!a.registry().hover_id().is_none());
    assert!(b.registry().hover_id().is_none());
    assert_eq!(backend_a.node_count(), 2);
    assert_eq!(backend_b.node_count(), 1);
}

#[test]
fn input_from_another_thread() {
    let (mut host, _) = host();
    let input = host.input_sender();
    std::thread::spawn(move || {
        input.send(InputEvent::PointerMove { x: 7., y: 8. });
        input.send(InputEvent::KeyDown {
            code: KeyCode::N,
            repeat: false,
        });
    })
    .join()
    .unwrap();

    let mut pressed = false;
    let stats = host
        .frame(at(0), |frame| pressed = frame.key_pressed(KeyCode::N))
        .unwrap();
    assert!(pressed);
    assert_eq!(stats.events, 2);
    assert_eq!(host.input().pointer_position(), Point2::new(7., 8.));
    assert!(host.input().key_down(KeyCode::N));
    assert!(!host.input().key_pressed(KeyCode::N));
}

proptest! {
    /// Each offset is a region's origin relative to the region around it.
    #[test]
    fn nested_rect_is_relative_to_innermost_region(
        offsets in prop::collection::vec((0i32..100, 0i32..100), 1..5),
        x in 0i32..100,
        y in 0i32..100,
    ) {
        let (mut host, backend) = host();
        let mut origin = Point2::new(0., 0.);
        host.frame(at(0), |frame| {
            let mut regions = Vec::new();
            for (dx, dy) in &offsets {
                origin = Point2::new(origin.x + f64::from(*dx), origin.y + f64::from(*dy));
                let rect = Rect::new(origin.x, origin.y, origin.x + 500., origin.y + 500.);
                regions.push(frame.begin_region(rect, RegionStyle::default()));
            }
            let (x, y) = (origin.x + f64::from(x), origin.y + f64::from(y));
            frame.fill(Rect::new(x, y, x + 5., y + 5.), Color::RED);
            while let Some(region) = regions.pop() {
                frame.end_region(region);
            }
        })
        .unwrap();

        let rect = *host.tree().node(offsets.len()).unwrap();
        let node = backend.node(rect).unwrap();
        let left = format!("{}px", x);
        let top = format!("{}px", y);
        prop_assert_eq!(node.style("left"), Some(left.as_str()));
        prop_assert_eq!(node.style("top"), Some(top.as_str()));
        prop_assert_eq!(node.parent, host.tree().node(offsets.len() - 1).copied());
    }
}
