//! Camera Capture
//!
//! Takes one still frame from the default camera and encodes it as JPEG.
//! The stream is owned by [`StreamGuard`], so every track is stopped however
//! the capture ends.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use super::describe_js;
use crate::error::CaptureError;
use crate::models::PhotoData;

const SNAPSHOT_MIME: &str = "image/jpeg";

impl CaptureError {
    fn from_js(err: JsValue) -> Self {
        match err.dyn_ref::<web_sys::DomException>() {
            Some(exception) => Self::from_dom_exception(&exception.name(), &exception.message()),
            None => Self::Device(describe_js(&err)),
        }
    }
}

/// Acquired camera stream; stops all tracks on drop
struct StreamGuard(MediaStream);

impl StreamGuard {
    fn stream(&self) -> &MediaStream {
        &self.0
    }
}

impl Drop for StreamGuard {
    fn drop(&mut self) {
        let tracks = self.0.get_tracks();
        for track in tracks.iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        log::debug!("[Camera] Released {} track(s)", tracks.length());
    }
}

pub async fn capture_still() -> Result<PhotoData, CaptureError> {
    let window = web_sys::window().ok_or(CaptureError::Unavailable)?;
    let document = window.document().ok_or(CaptureError::Unavailable)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CaptureError::Unavailable)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(CaptureError::from_js)?;
    let stream = JsFuture::from(request)
        .await
        .map_err(CaptureError::from_js)?
        .dyn_into::<MediaStream>()
        .map_err(|_| CaptureError::Device("getUserMedia returned no stream".to_string()))?;
    let guard = StreamGuard(stream);

    let data_url = snapshot(&document, guard.stream()).await?;
    PhotoData::parse(data_url).map_err(|e| CaptureError::Encode(e.to_string()))
}

async fn snapshot(document: &Document, stream: &MediaStream) -> Result<String, CaptureError> {
    let video = document
        .create_element("video")
        .map_err(CaptureError::from_js)?
        .dyn_into::<HtmlVideoElement>()
        .map_err(|_| CaptureError::Unavailable)?;
    video.set_muted(true);
    video.set_src_object(Some(stream));

    let playing = video.play().map_err(CaptureError::from_js)?;
    let started = JsFuture::from(playing).await.map_err(CaptureError::from_js);
    let frame = started.and_then(|_| draw_frame(document, &video));

    let _ = video.pause();
    video.set_src_object(None);
    frame
}

fn draw_frame(document: &Document, video: &HtmlVideoElement) -> Result<String, CaptureError> {
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return Err(CaptureError::EmptyFrame);
    }

    let canvas = document
        .create_element("canvas")
        .map_err(CaptureError::from_js)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| CaptureError::Unavailable)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .map_err(CaptureError::from_js)?
        .ok_or(CaptureError::Unavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CaptureError::Unavailable)?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(CaptureError::from_js)?;

    canvas
        .to_data_url_with_type(SNAPSHOT_MIME)
        .map_err(|e| CaptureError::Encode(describe_js(&e)))
}
