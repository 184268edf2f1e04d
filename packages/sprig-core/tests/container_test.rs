use sprig_core::{
    Buzzer, Circle, Color, Container, DisplayList, DrawCommand, Drawable, Key, KeyEvent,
    Rectangle, Text, Vec2,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings<F: FnOnce()>(f: F) -> usize {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
    tracing::subscriber::with_default(subscriber, f);
    warnings.load(Ordering::SeqCst)
}

fn three_shapes() -> Container {
    let mut container = Container::new();
    container.push(Circle::new((30, 40)).unwrap());
    container.push(Rectangle::new((10, 20)).unwrap());
    container.push(Text::new((50, 60)).unwrap().with_text("Hello, world!"));
    container
}

#[test]
fn test_add_object() {
    let mut container = Container::new();
    let id = container.push(Circle::new((10, 20)).unwrap());
    assert!(container.contains(id));
    assert_eq!(container.len(), 1);
    assert_eq!(container.get(id).unwrap().position(), Vec2::new(10.0, 20.0));
}

#[test]
fn test_add_then_remove_restores_container() {
    let mut container = three_shapes();
    let before: Vec<_> = container.ids().to_vec();

    let id = container.push(Buzzer::new((0, 0)).unwrap());
    assert_eq!(container.len(), 4);

    let removed = container.remove(id).unwrap();
    assert!(removed.as_any().is::<Buzzer>());
    assert_eq!(container.len(), 3);
    assert_eq!(container.ids(), before.as_slice());
    assert!(!container.contains(id));
}

#[test]
fn test_remove_absent_logs_warning() {
    let mut container = three_shapes();
    let id = container.ids()[0];
    container.remove(id).unwrap();
    let before: Vec<_> = container.ids().to_vec();

    let warnings = count_warnings(|| {
        assert!(container.remove(id).is_none());
    });

    assert_eq!(warnings, 1);
    assert_eq!(container.len(), 2);
    assert_eq!(container.ids(), before.as_slice());
}

#[test]
fn test_ids_from_another_container_are_absent() {
    let mut inner = Container::new();
    let leaf = inner.push(Circle::new((0, 0)).unwrap());

    let mut root = Container::new();
    root.push(Text::new((9, 9)).unwrap());
    let nested = root.push(inner);
    let before: Vec<_> = root.ids().to_vec();

    assert!(!root.contains(leaf));
    assert!(root.get(leaf).is_none());
    assert!(root.downcast_ref::<Text>(leaf).is_none());

    let warnings = count_warnings(|| {
        assert!(root.remove(leaf).is_none());
    });

    assert_eq!(warnings, 1);
    assert_eq!(root.len(), 2);
    assert_eq!(root.ids(), before.as_slice());
    let inner = root.downcast_ref::<Container>(nested).unwrap();
    assert!(inner.contains(leaf));
}

#[test]
fn test_sibling_containers_issue_distinct_ids() {
    let mut left = Container::new();
    let mut right = Container::new();
    let a = left.push(Circle::new((1, 1)).unwrap());
    let b = right.push(Circle::new((2, 2)).unwrap());

    assert_ne!(a, b);
    assert!(right.get_mut(a).is_none());
    assert_eq!(right.get(b).unwrap().position(), Vec2::new(2.0, 2.0));
}

#[test]
fn test_remove_keeps_order_of_remaining() {
    let mut container = three_shapes();
    let ids = container.ids().to_vec();
    container.remove(ids[1]);
    assert_eq!(container.ids(), &[ids[0], ids[2]]);
}

#[test]
fn test_clear_objects() {
    let mut container = three_shapes();
    assert_eq!(container.len(), 3);

    container.clear();
    assert_eq!(container.len(), 0);
    assert!(container.is_empty());
    assert_eq!(container.children().count(), 0);
}

#[test]
fn test_visibility_cascades_to_current_children_only() {
    let mut container = three_shapes();
    container.set_visible(false);
    assert!(!container.is_visible());
    assert!(container.children().all(|child| !child.is_visible()));

    let late = container.push(Circle::new((0, 0)).unwrap());
    assert!(container.get(late).unwrap().is_visible());

    container.set_visible(true);
    assert!(container.children().all(|child| child.is_visible()));
}

#[test]
fn test_visibility_cascades_into_nested_containers() {
    let mut inner = Container::new();
    let leaf = inner.push(Circle::new((0, 0)).unwrap());
    let mut root = Container::new();
    let nested = root.push(inner);

    root.set_visible(false);

    let inner = root.downcast_ref::<Container>(nested).unwrap();
    assert!(!inner.is_visible());
    assert!(!inner.get(leaf).unwrap().is_visible());

    root.set_visible(true);
    let inner = root.downcast_ref::<Container>(nested).unwrap();
    assert!(inner.get(leaf).unwrap().is_visible());
}

#[test]
fn test_toggle_flips_only_the_container() {
    let mut container = three_shapes();

    container.toggle_visibility();
    assert!(!container.is_visible());
    assert!(container.children().all(|child| child.is_visible()));

    container.toggle_visibility();
    assert!(container.is_visible());
}

#[test]
fn test_draw_follows_insertion_order_and_recurses() {
    let mut nested = Container::new();
    nested.push(Text::new((380, 280)).unwrap().with_text("Nested 1"));

    let mut root = Container::new();
    root.push(Circle::new((150, 150)).unwrap().with_radius(50).unwrap());
    root.push(nested);
    root.push(Rectangle::new((1, 2)).unwrap());

    let mut list = DisplayList::new();
    root.draw(&mut list);

    assert_eq!(list.len(), 3);
    assert!(matches!(
        list.as_slice()[0],
        DrawCommand::FillCircle { radius, .. } if radius == 50.0
    ));
    assert!(matches!(
        &list.as_slice()[1],
        DrawCommand::Text { content, .. } if content == "Nested 1"
    ));
    assert!(matches!(list.as_slice()[2], DrawCommand::FillRect { .. }));
}

#[test]
fn test_hidden_children_are_skipped() {
    let mut root = Container::new();
    root.push(Circle::new((0, 0)).unwrap().hidden());
    root.push(Circle::new((5, 5)).unwrap());

    let mut list = DisplayList::new();
    root.draw(&mut list);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_hidden_container_still_draws_visible_children() {
    let mut root = Container::new();
    root.push(Circle::new((5, 5)).unwrap());
    root.set_visible(false);
    root.push(Circle::new((9, 9)).unwrap());

    let mut list = DisplayList::new();
    root.draw(&mut list);

    assert_eq!(list.len(), 1);
    assert!(matches!(
        list.as_slice()[0],
        DrawCommand::FillCircle { center, .. } if center == Vec2::new(9.0, 9.0)
    ));
}

#[test]
fn test_key_events_reach_nested_children() {
    let mut inner = Container::new();
    let circle = inner.push(Circle::new((0, 0)).unwrap());
    let buzzer = inner.push(Buzzer::new((0, 0)).unwrap());

    let mut root = Container::new();
    let nested = root.push(inner);
    let text = root.push(Text::new((0, 0)).unwrap());

    root.handle_key_event(&KeyEvent::pressed(Key::Digit(1)));

    let inner = root.downcast_ref::<Container>(nested).unwrap();
    assert_eq!(inner.downcast_ref::<Circle>(circle).unwrap().color(), Color::RED);
    assert!(inner.downcast_ref::<Buzzer>(buzzer).unwrap().is_active());
    assert_eq!(root.downcast_ref::<Text>(text).unwrap().color(), Color::RED);

    root.handle_key_event(&KeyEvent::released(Key::Digit(1)));
    let inner = root.downcast_ref::<Container>(nested).unwrap();
    assert!(!inner.downcast_ref::<Buzzer>(buzzer).unwrap().is_active());
    assert_eq!(inner.downcast_ref::<Circle>(circle).unwrap().color(), Color::RED);
}

#[test]
fn test_downcast_mut_and_children_mut() {
    let mut container = three_shapes();
    let ids = container.ids().to_vec();

    container
        .downcast_mut::<Circle>(ids[0])
        .unwrap()
        .set_radius(42)
        .unwrap();
    assert_eq!(container.downcast_ref::<Circle>(ids[0]).unwrap().radius(), 42);
    assert!(container.downcast_ref::<Text>(ids[0]).is_none());

    for child in container.children_mut() {
        child.set_position(Vec2::new(7.0, 7.0)).unwrap();
    }
    assert!(
        container
            .children()
            .all(|child| child.position() == Vec2::new(7.0, 7.0))
    );
}

#[test]
fn test_children_mut_follows_insertion_order() {
    let mut container = three_shapes();
    let first = container.ids()[0];
    container.remove(first).unwrap();
    container.push(Circle::new((70, 80)).unwrap());

    let positions: Vec<_> = container
        .children_mut()
        .map(|child| child.position())
        .collect();

    assert_eq!(
        positions,
        vec![
            Vec2::new(10.0, 20.0),
            Vec2::new(50.0, 60.0),
            Vec2::new(70.0, 80.0),
        ]
    );
}
