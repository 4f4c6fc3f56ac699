use crate::editor::{EditorSession, SessionEvent};
use crate::model::{Color, ColorGrid, GridPos, Region};
use crate::protocol::{ColorEntry, GridPayload, PayloadError, write_payload};
use crate::render::RenderOptions;

use super::{AppContext, AppError};

fn color(hex: &str) -> Color {
    hex.parse().expect("valid hex")
}

fn sample_grid() -> ColorGrid {
    let cells = vec![
        vec![color("ff0000"), color("00ff00")],
        vec![color("0000ff"), color("ffff00")],
    ];
    ColorGrid::new(2, 2, cells).expect("valid grid")
}

#[test]
fn receive_installs_translated_grid() {
    let context = AppContext::new();
    let mut session = EditorSession::new();
    let payload = GridPayload::from_grid(&sample_grid());
    let update = context
        .session_service()
        .receive(&mut session, payload)
        .expect("payload accepted");
    assert_eq!(update.events, vec![SessionEvent::GridReplaced]);
    let grid = session.grid().expect("grid installed");
    assert_eq!((grid.rows(), grid.cols()), (2, 2));
}

#[test]
fn rejected_payload_preserves_session_state() {
    let context = AppContext::new();
    let mut session = EditorSession::new();
    session.install_grid(sample_grid());
    session.click(GridPos::new(0, 0));
    let result = context
        .session_service()
        .receive(&mut session, GridPayload::failure("unsupported extension"));
    assert!(matches!(
        result,
        Err(AppError::Payload(PayloadError::Rejected(_)))
    ));
    assert_eq!(session.grid(), Some(&sample_grid()));
    assert_eq!(session.selection(), Some(color("ff0000")));
}

#[test]
fn corrupt_stats_preserve_session_state() {
    let context = AppContext::new();
    let mut session = EditorSession::new();
    session.install_grid(sample_grid());
    let mut payload = GridPayload::from_grid(&sample_grid());
    let entry = ColorEntry {
        rgb: "RGB(255,0,0)".to_string(),
        count: 7,
    };
    payload.color_stats.insert(color("ff0000"), entry);
    assert!(
        context
            .session_service()
            .receive(&mut session, payload)
            .is_err()
    );
    assert_eq!(session.grid(), Some(&sample_grid()));
}

#[test]
fn load_file_installs_payload_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("grid.json");
    write_payload(&path, &GridPayload::from_grid(&sample_grid())).expect("write payload");
    let context = AppContext::new();
    let mut session = EditorSession::new();
    context
        .session_service()
        .load_file(&mut session, &path)
        .expect("payload loads");
    assert_eq!(session.grid(), Some(&sample_grid()));
}

#[test]
fn unreadable_file_preserves_session_state() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").expect("write file");
    let context = AppContext::new();
    let mut session = EditorSession::new();
    session.install_grid(sample_grid());
    assert!(
        context
            .session_service()
            .load_file(&mut session, &path)
            .is_err()
    );
    assert_eq!(session.grid(), Some(&sample_grid()));
}

#[test]
fn render_session_requires_a_grid() {
    let context = AppContext::new();
    let session = EditorSession::new();
    let image = context
        .render_service()
        .render_session(&session, RenderOptions::default())
        .expect("render succeeds");
    assert!(image.is_none());
}

#[test]
fn render_session_covers_the_surface() {
    let context = AppContext::new();
    let mut session = EditorSession::new();
    session.install_grid(sample_grid());
    let image = context
        .render_service()
        .render_session(&session, RenderOptions::new(10))
        .expect("render succeeds")
        .expect("grid installed");
    assert_eq!((image.width(), image.height()), (20, 20));
}

#[test]
fn render_session_after_crop_commit_drops_the_overlay() {
    let context = AppContext::new();
    let mut session = EditorSession::new();
    session.install_grid(sample_grid());
    session.toggle_crop_mode();
    session.pointer_down(Some(GridPos::new(1, 1)));
    session
        .apply_crop(Region::from_corners(GridPos::new(0, 0), GridPos::new(0, 0)))
        .expect("crop applies");
    let image = context
        .render_service()
        .render_session(&session, RenderOptions::new(12))
        .expect("render succeeds")
        .expect("grid installed");
    assert_eq!((image.width(), image.height()), (12, 12));
}
