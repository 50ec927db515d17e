use std::sync::Arc;

use rstest::rstest;
use tokio::sync::mpsc::error::TryRecvError;
use vitrine_primitives::{Position, Rect};

use super::*;

fn setup() -> (Arc<PointerDocument>, DismissController, tokio::sync::mpsc::UnboundedReceiver<CloseReason>) {
	let document = Arc::new(PointerDocument::new());
	let (controller, rx) = DismissController::new(Arc::clone(&document), Rect::new(100, 0, 200, 400));
	(document, controller, rx)
}

fn at(kind: PointerKind, x: u32, y: u32) -> PointerEvent {
	PointerEvent::new(kind, Position::new(x, y))
}

#[rstest]
#[case(PointerKind::PointerDown)]
#[case(PointerKind::TouchStart)]
fn outside_interaction_signals_once(#[case] kind: PointerKind) {
	let (document, mut controller, mut rx) = setup();
	controller.open();

	document.dispatch(&at(kind, 20, 20));
	document.dispatch(&at(kind, 30, 30));

	assert_eq!(rx.try_recv(), Ok(CloseReason::Outside));
	assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn inside_interaction_is_ignored() {
	let (document, mut controller, mut rx) = setup();
	controller.open();

	document.dispatch(&at(PointerKind::PointerDown, 150, 200));
	document.dispatch(&at(PointerKind::TouchStart, 100, 0));

	assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn closed_controller_detaches_listeners() {
	let (document, mut controller, mut rx) = setup();
	controller.open();
	assert_eq!(document.listener_count(), 2);

	controller.close();
	assert_eq!(document.listener_count(), 0);

	document.dispatch(&at(PointerKind::PointerDown, 5, 5));
	assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn repeated_open_never_duplicates_listeners() {
	let (document, mut controller, mut rx) = setup();
	controller.open();
	controller.open();
	controller.open();
	assert_eq!(document.listener_count(), 2);

	document.dispatch(&at(PointerKind::PointerDown, 5, 5));
	assert_eq!(rx.try_recv(), Ok(CloseReason::Outside));
	assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn reopen_rearms() {
	let (document, mut controller, mut rx) = setup();
	controller.open();
	document.dispatch(&at(PointerKind::PointerDown, 5, 5));
	controller.close();
	controller.open();
	document.dispatch(&at(PointerKind::PointerDown, 5, 5));

	assert_eq!(rx.try_recv(), Ok(CloseReason::Outside));
	assert_eq!(rx.try_recv(), Ok(CloseReason::Outside));
}

#[test]
fn surface_moves_are_respected() {
	let (document, mut controller, mut rx) = setup();
	controller.open();
	controller.set_surface(Rect::new(0, 0, 50, 50));

	document.dispatch(&at(PointerKind::PointerDown, 10, 10));
	assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
	document.dispatch(&at(PointerKind::PointerDown, 150, 10));
	assert_eq!(rx.try_recv(), Ok(CloseReason::Outside));
}

#[test]
fn dropping_controller_detaches() {
	let (document, mut controller, _rx) = setup();
	controller.open();
	drop(controller);
	assert_eq!(document.listener_count(), 0);
}

#[test]
fn document_removes_unknown_listener_gracefully() {
	let document = PointerDocument::new();
	let id = document.add_listener(PointerKind::PointerDown, |_| {});
	assert!(document.remove_listener(id));
	assert!(!document.remove_listener(id));
}
