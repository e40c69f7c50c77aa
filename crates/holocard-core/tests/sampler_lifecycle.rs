//! Input sampler lifecycle tests
//!
//! Drives the sampler through mount, permission and teardown against a
//! recording platform that counts live listeners per source.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use holocard_core::sampler::{
    InputEvent, InputPlatform, InputSampler, OrientationSupport, PermissionResponse,
    PermissionState, SourceKind, Subscription,
};
use holocard_core::{HoloError, HoloResult, TiltSignal};

// ============================================================================
// Test Utilities
// ============================================================================

#[derive(Clone, Copy)]
enum Answer {
    Grant,
    Deny,
    Fail,
}

#[derive(Clone)]
struct RecordingPlatform {
    support: OrientationSupport,
    answer: Answer,
    live: Rc<RefCell<HashMap<SourceKind, i32>>>,
    requests: Rc<RefCell<u32>>,
}

impl RecordingPlatform {
    fn new(support: OrientationSupport, answer: Answer) -> Self {
        Self {
            support,
            answer,
            live: Rc::new(RefCell::new(HashMap::new())),
            requests: Rc::new(RefCell::new(0)),
        }
    }

    fn live(&self, kind: SourceKind) -> i32 {
        self.live.borrow().get(&kind).copied().unwrap_or(0)
    }

    fn requests(&self) -> u32 {
        *self.requests.borrow()
    }
}

impl InputPlatform for RecordingPlatform {
    fn orientation_support(&self) -> OrientationSupport {
        self.support
    }

    fn listen(&self, kind: SourceKind) -> HoloResult<Subscription> {
        *self.live.borrow_mut().entry(kind).or_insert(0) += 1;
        let live = self.live.clone();
        Ok(Subscription::new(kind, move || {
            *live.borrow_mut().entry(kind).or_insert(0) -= 1;
        }))
    }

    async fn request_orientation_permission(&self) -> HoloResult<PermissionResponse> {
        *self.requests.borrow_mut() += 1;
        tokio::task::yield_now().await;
        match self.answer {
            Answer::Grant => Ok(PermissionResponse::Granted),
            Answer::Deny => Ok(PermissionResponse::Denied),
            Answer::Fail => Err(HoloError::Permission("NotAllowedError".to_string())),
        }
    }
}

fn orientation(beta: f64, gamma: f64) -> InputEvent {
    InputEvent::Orientation {
        beta: Some(beta),
        gamma: Some(gamma),
    }
}

fn pointer_at(x: f64, y: f64) -> InputEvent {
    InputEvent::Pointer {
        client_x: x,
        client_y: y,
        width: 1280.0,
        height: 720.0,
    }
}

// ============================================================================
// Permission Flow Tests
// ============================================================================

#[tokio::test]
async fn test_grant_attaches_single_orientation_listener() {
    let platform = RecordingPlatform::new(OrientationSupport::RequiresPermission, Answer::Grant);
    let mut sampler = InputSampler::mount(platform.clone());

    assert!(sampler.needs_permission());
    assert!(!sampler.handle(&orientation(10.0, 5.0)));

    let state = sampler.request_permission().await;
    assert_eq!(state, PermissionState::Granted);
    assert_eq!(platform.live(SourceKind::Orientation), 1);
    assert_eq!(platform.live(SourceKind::Pointer), 1);

    // A second request is a no-op and cannot stack another listener
    assert_eq!(sampler.request_permission().await, PermissionState::Granted);
    assert_eq!(platform.requests(), 1);
    assert_eq!(platform.live(SourceKind::Orientation), 1);

    assert!(sampler.handle(&orientation(10.0, 5.0)));
    assert_eq!(sampler.signal(), TiltSignal::new(10.0, 5.0));

    sampler.teardown();
    assert_eq!(platform.live(SourceKind::Orientation), 0);
    assert_eq!(platform.live(SourceKind::Pointer), 0);
}

#[tokio::test]
async fn test_denial_stays_on_pointer_without_retry() {
    let platform = RecordingPlatform::new(OrientationSupport::RequiresPermission, Answer::Deny);
    let mut sampler = InputSampler::mount(platform.clone());

    assert_eq!(sampler.request_permission().await, PermissionState::Denied);
    assert!(!sampler.needs_permission());
    assert_eq!(platform.live(SourceKind::Orientation), 0);

    assert_eq!(sampler.request_permission().await, PermissionState::Denied);
    assert_eq!(platform.requests(), 1);

    assert!(sampler.handle(&pointer_at(0.0, 0.0)));
    assert_eq!(sampler.signal(), TiltSignal::new(-30.0, -30.0));
}

#[tokio::test]
async fn test_failed_request_is_not_fatal() {
    let platform = RecordingPlatform::new(OrientationSupport::RequiresPermission, Answer::Fail);
    let mut sampler = InputSampler::mount(platform.clone());

    assert_eq!(sampler.request_permission().await, PermissionState::Denied);
    assert!(sampler.is_listening(SourceKind::Pointer));
    assert!(!sampler.is_listening(SourceKind::Orientation));
}

#[tokio::test]
async fn test_request_without_gate_does_nothing() {
    let platform = RecordingPlatform::new(OrientationSupport::Available, Answer::Grant);
    let mut sampler = InputSampler::mount(platform.clone());

    assert_eq!(sampler.request_permission().await, PermissionState::NotRequired);
    assert_eq!(platform.requests(), 0);
    assert_eq!(platform.live(SourceKind::Orientation), 1);
}

#[test]
fn test_split_request_after_teardown() {
    let platform = RecordingPlatform::new(OrientationSupport::RequiresPermission, Answer::Grant);
    let mut sampler = InputSampler::mount(platform.clone());

    assert!(sampler.begin_permission_request());
    sampler.teardown();
    sampler.finish_permission_request(Ok(PermissionResponse::Granted));

    // The grant arrived after the view went away: nothing may be attached
    assert_eq!(platform.live(SourceKind::Orientation), 0);
    assert_eq!(platform.live(SourceKind::Pointer), 0);
}

// ============================================================================
// Signal Tests
// ============================================================================

#[test]
fn test_pointer_center_and_corner() {
    let platform = RecordingPlatform::new(OrientationSupport::Unavailable, Answer::Deny);
    let mut sampler = InputSampler::mount(platform);

    sampler.handle(&pointer_at(640.0, 360.0));
    assert_eq!(sampler.signal(), TiltSignal::new(0.0, 0.0));

    sampler.handle(&pointer_at(0.0, 0.0));
    assert_eq!(sampler.signal().roll, -30.0);
    assert_eq!(sampler.signal().pitch, -30.0);
}

#[test]
fn test_raw_orientation_kept_and_tilt_clamped() {
    let platform = RecordingPlatform::new(OrientationSupport::Available, Answer::Grant);
    let mut sampler = InputSampler::mount(platform);

    sampler.handle(&orientation(150.0, -70.0));
    assert_eq!(sampler.signal(), TiltSignal::new(150.0, -70.0));
    let tilt = sampler.tilt();
    assert_eq!((tilt.x, tilt.y), (-45.0, 45.0));
}

#[test]
fn test_no_updates_after_teardown() {
    let platform = RecordingPlatform::new(OrientationSupport::Available, Answer::Grant);
    let mut sampler = InputSampler::mount(platform);
    sampler.handle(&pointer_at(100.0, 100.0));
    let before = sampler.signal();

    sampler.teardown();
    for i in 0..10 {
        let f = i as f64 * 10.0;
        assert!(!sampler.handle(&pointer_at(f, f)));
        assert!(!sampler.handle(&orientation(f, -f)));
    }
    assert_eq!(sampler.signal(), before);
}
