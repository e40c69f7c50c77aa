//! Webview input bridge.
//!
//! Implements [`InputPlatform`] on top of `document::eval`. Each listener is
//! one script: it adds a window listener, forwards events back through
//! `dioxus.send`, and removes the listener when it receives `detach`.

use dioxus::prelude::*;
use holocard_core::sampler::{
    permission_unsupported, InputEvent, InputPlatform, OrientationSupport, PermissionResponse,
    SourceKind, Subscription,
};
use holocard_core::{HoloError, HoloResult};
use serde::Deserialize;

const PROBE_SCRIPT: &str = r#"
const DOE = window.DeviceOrientationEvent;
if (DOE && typeof DOE.requestPermission === "function") {
    return "permission";
}
return DOE ? "available" : "unavailable";
"#;

const PERMISSION_SCRIPT: &str = r#"
const DOE = window.DeviceOrientationEvent;
if (!DOE || typeof DOE.requestPermission !== "function") {
    return "unsupported";
}
try {
    return await DOE.requestPermission();
} catch (err) {
    return "error:" + err;
}
"#;

/// Event forwarded by a listener script
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum BridgeEvent {
    Pointer {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Orientation {
        beta: Option<f64>,
        gamma: Option<f64>,
    },
}

impl From<BridgeEvent> for InputEvent {
    fn from(event: BridgeEvent) -> Self {
        match event {
            BridgeEvent::Pointer {
                x,
                y,
                width,
                height,
            } => InputEvent::Pointer {
                client_x: x,
                client_y: y,
                width,
                height,
            },
            BridgeEvent::Orientation { beta, gamma } => InputEvent::Orientation { beta, gamma },
        }
    }
}

fn listener_script(kind: SourceKind) -> String {
    let payload = match kind {
        SourceKind::Pointer => {
            "{ kind: \"pointer\", x: e.clientX, y: e.clientY, width: window.innerWidth, height: window.innerHeight }"
        }
        SourceKind::Orientation => "{ kind: \"orientation\", beta: e.beta, gamma: e.gamma }",
    };
    format!(
        r#"
const handler = (e) => dioxus.send({payload});
window.addEventListener("{event}", handler);
await dioxus.recv();
window.removeEventListener("{event}", handler);
"#,
        payload = payload,
        event = kind.event_name(),
    )
}

fn parse_support(answer: &str) -> OrientationSupport {
    match answer {
        "permission" => OrientationSupport::RequiresPermission,
        "available" => OrientationSupport::Available,
        _ => OrientationSupport::Unavailable,
    }
}

fn parse_permission(answer: &str) -> HoloResult<PermissionResponse> {
    match answer {
        "granted" => Ok(PermissionResponse::Granted),
        "unsupported" => Err(permission_unsupported()),
        other => match other.strip_prefix("error:") {
            Some(reason) => Err(HoloError::Permission(reason.to_string())),
            None => Ok(PermissionResponse::Denied),
        },
    }
}

/// Ask the webview which orientation API it exposes
pub async fn probe_orientation_support() -> OrientationSupport {
    match document::eval(PROBE_SCRIPT).join::<String>().await {
        Ok(answer) => parse_support(&answer),
        Err(e) => {
            tracing::warn!("Orientation probe failed: {:?}", e);
            OrientationSupport::Unavailable
        }
    }
}

/// Input platform backed by the application webview.
///
/// Events are delivered to `sink` from tasks owned by the current component.
#[derive(Clone, Copy)]
pub struct WebviewPlatform {
    support: OrientationSupport,
    sink: EventHandler<InputEvent>,
}

impl WebviewPlatform {
    pub fn new(support: OrientationSupport, sink: EventHandler<InputEvent>) -> Self {
        Self { support, sink }
    }
}

impl InputPlatform for WebviewPlatform {
    fn orientation_support(&self) -> OrientationSupport {
        self.support
    }

    fn listen(&self, kind: SourceKind) -> HoloResult<Subscription> {
        let mut eval = document::eval(&listener_script(kind));
        let sink = self.sink;

        let task = spawn(async move {
            loop {
                match eval.recv::<BridgeEvent>().await {
                    Ok(event) => sink.call(event.into()),
                    Err(e) => {
                        tracing::debug!(source = ?kind, "Listener script ended: {:?}", e);
                        break;
                    }
                }
            }
        });

        Ok(Subscription::new(kind, move || {
            if let Err(e) = eval.send("detach") {
                tracing::debug!(source = ?kind, "Listener script already gone: {:?}", e);
            }
            task.cancel();
        }))
    }

    async fn request_orientation_permission(&self) -> HoloResult<PermissionResponse> {
        let answer = document::eval(PERMISSION_SCRIPT)
            .join::<String>()
            .await
            .map_err(|e| HoloError::Bridge(format!("{:?}", e)))?;
        parse_permission(&answer)
    }
}
