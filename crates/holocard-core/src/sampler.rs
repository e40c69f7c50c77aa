//! Input sampler: turns orientation and pointer events into one tilt signal.
//!
//! Two alternate sources write into the same [`TiltSignal`]:
//!
//! - **orientation** - `deviceorientation` readings, available immediately on
//!   most platforms but gated behind an explicit user grant on some
//! - **pointer** - pointer position across the viewport, always registered as
//!   the fallback
//!
//! Every listener registration is held in a named slot as a [`Subscription`]
//! guard, so each subscribe has exactly one matching release. A permission
//! grant fills the orientation slot; it never stacks a second listener.
//!
//! The platform itself (a browser, a webview, a test double) sits behind the
//! [`InputPlatform`] trait.

use std::fmt;
use std::future::Future;

use crate::error::{HoloError, HoloResult};
use crate::tilt::{Tilt, TiltSignal};

/// Which input stream a listener is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Orientation,
    Pointer,
}

impl SourceKind {
    /// DOM event name for this source
    pub fn event_name(&self) -> &'static str {
        match self {
            SourceKind::Orientation => "deviceorientation",
            SourceKind::Pointer => "mousemove",
        }
    }
}

/// Result of the platform capability probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationSupport {
    /// No orientation sensor API
    #[default]
    Unavailable,
    /// Orientation events flow without asking
    Available,
    /// Orientation events flow only after the user grants access
    RequiresPermission,
}

/// Answer to an orientation permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionResponse {
    Granted,
    Denied,
}

/// Orientation permission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// Platform does not gate orientation (or has none)
    #[default]
    NotRequired,
    /// Waiting for the user to ask for access
    Needed,
    /// Request in flight
    Requesting,
    Granted,
    /// Denied or failed; no further requests this session
    Denied,
}

/// A raw input event as delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Orientation {
        beta: Option<f64>,
        gamma: Option<f64>,
    },
    Pointer {
        client_x: f64,
        client_y: f64,
        width: f64,
        height: f64,
    },
}

impl InputEvent {
    pub fn kind(&self) -> SourceKind {
        match self {
            InputEvent::Orientation { .. } => SourceKind::Orientation,
            InputEvent::Pointer { .. } => SourceKind::Pointer,
        }
    }

    /// Tilt this event implies, if any
    pub fn to_signal(&self) -> Option<TiltSignal> {
        match *self {
            InputEvent::Orientation { beta, gamma } => Some(TiltSignal::from_orientation(beta, gamma)),
            InputEvent::Pointer {
                client_x,
                client_y,
                width,
                height,
            } => TiltSignal::from_pointer(client_x, client_y, width, height),
        }
    }
}

/// Guard for one listener registration.
///
/// The release callback runs exactly once: on [`Subscription::release`] or
/// when the guard is dropped.
pub struct Subscription {
    kind: SourceKind,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(kind: SourceKind, release: impl FnOnce() + 'static) -> Self {
        Self {
            kind,
            release: Some(Box::new(release)),
        }
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Release the listener now
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!(source = ?self.kind, "Releasing input listener");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("live", &self.release.is_some())
            .finish()
    }
}

/// Host environment the sampler listens to
pub trait InputPlatform {
    /// Probe orientation capability
    fn orientation_support(&self) -> OrientationSupport;

    /// Attach a listener for `kind`; dropping the guard detaches it
    fn listen(&self, kind: SourceKind) -> HoloResult<Subscription>;

    /// Ask the user for orientation access
    fn request_orientation_permission(&self) -> impl Future<Output = HoloResult<PermissionResponse>>;
}

/// Tilt state for one mounted view.
pub struct InputSampler<P: InputPlatform> {
    platform: P,
    signal: TiltSignal,
    permission: PermissionState,
    orientation: Option<Subscription>,
    pointer: Option<Subscription>,
    torn_down: bool,
}

impl<P: InputPlatform> InputSampler<P> {
    /// Probe the platform and register listeners for a freshly mounted view.
    pub fn mount(platform: P) -> Self {
        let support = platform.orientation_support();
        let mut sampler = Self {
            platform,
            signal: TiltSignal::default(),
            permission: PermissionState::NotRequired,
            orientation: None,
            pointer: None,
            torn_down: false,
        };

        match support {
            OrientationSupport::RequiresPermission => {
                tracing::info!("Orientation requires a user grant; using pointer until then");
                sampler.permission = PermissionState::Needed;
            }
            OrientationSupport::Available => sampler.attach(SourceKind::Orientation),
            OrientationSupport::Unavailable => {
                tracing::debug!("No orientation sensor; pointer only");
            }
        }
        sampler.attach(SourceKind::Pointer);

        sampler
    }

    fn slot(&mut self, kind: SourceKind) -> &mut Option<Subscription> {
        match kind {
            SourceKind::Orientation => &mut self.orientation,
            SourceKind::Pointer => &mut self.pointer,
        }
    }

    /// Fill the slot for `kind`. An occupied slot is left as is.
    fn attach(&mut self, kind: SourceKind) {
        if self.torn_down {
            return;
        }
        if self.slot(kind).is_some() {
            tracing::debug!(source = ?kind, "Listener already attached");
            return;
        }
        match self.platform.listen(kind) {
            Ok(subscription) if subscription.kind() != kind => {
                // Dropping the guard releases the stray listener
                tracing::warn!(
                    requested = ?kind,
                    got = ?subscription.kind(),
                    "Platform attached the wrong input source"
                );
            }
            Ok(subscription) => {
                tracing::debug!(source = ?kind, "Attached input listener");
                *self.slot(kind) = Some(subscription);
            }
            Err(e) => {
                tracing::warn!(source = ?kind, "Failed to attach input listener: {}", e);
            }
        }
    }

    /// Apply an event. Returns `true` if the stored signal changed.
    ///
    /// Events for a source without a live listener are ignored.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        if self.slot(event.kind()).is_none() {
            return false;
        }
        match event.to_signal() {
            Some(signal) if signal != self.signal => {
                self.signal = signal;
                true
            }
            _ => false,
        }
    }

    /// Raw stored signal
    pub fn signal(&self) -> TiltSignal {
        self.signal
    }

    /// Clamped tilt for the compositor
    pub fn tilt(&self) -> Tilt {
        self.signal.clamped()
    }

    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Whether the view should offer the "enable motion" action
    pub fn needs_permission(&self) -> bool {
        self.permission == PermissionState::Needed && !self.torn_down
    }

    pub fn is_listening(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Orientation => self.orientation.is_some(),
            SourceKind::Pointer => self.pointer.is_some(),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mark a permission request as started.
    ///
    /// Returns `false` if no request should be made: nothing to ask for, a
    /// request already in flight, an earlier denial, or a torn-down view.
    pub fn begin_permission_request(&mut self) -> bool {
        if !self.needs_permission() {
            return false;
        }
        self.permission = PermissionState::Requesting;
        true
    }

    /// Record the outcome of a permission request.
    ///
    /// A grant attaches the orientation listener; anything else leaves the
    /// sampler on the pointer for the rest of the session.
    pub fn finish_permission_request(&mut self, outcome: HoloResult<PermissionResponse>) {
        if self.permission != PermissionState::Requesting {
            tracing::debug!(state = ?self.permission, "Ignoring stale permission outcome");
            return;
        }
        match outcome {
            Ok(PermissionResponse::Granted) => {
                tracing::info!("Orientation permission granted");
                self.permission = PermissionState::Granted;
                self.attach(SourceKind::Orientation);
            }
            Ok(PermissionResponse::Denied) => {
                tracing::warn!("Orientation permission denied; staying on pointer input");
                self.permission = PermissionState::Denied;
            }
            Err(e) => {
                tracing::warn!("Orientation permission request failed: {}", e);
                self.permission = PermissionState::Denied;
            }
        }
    }

    /// Ask the platform for orientation access and apply the answer.
    pub async fn request_permission(&mut self) -> PermissionState {
        if !self.begin_permission_request() {
            return self.permission;
        }
        let outcome = self.platform.request_orientation_permission().await;
        self.finish_permission_request(outcome);
        self.permission
    }

    /// Release every listener. Later events are ignored. Safe to repeat.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(subscription) = self.orientation.take() {
            subscription.release();
        }
        if let Some(subscription) = self.pointer.take() {
            subscription.release();
        }
        tracing::debug!("Input sampler torn down");
    }
}

impl<P: InputPlatform> fmt::Debug for InputSampler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSampler")
            .field("signal", &self.signal)
            .field("permission", &self.permission)
            .field("orientation", &self.orientation)
            .field("pointer", &self.pointer)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

/// Error for a platform with no permission API to call
pub fn permission_unsupported() -> HoloError {
    HoloError::Permission("orientation permission API unavailable".to_string())
}
