use super::{DEFAULT_SERVER_URL, MultipartBody, ServiceClient, content_type_for};

#[test]
fn multipart_body_frames_file_field() {
    let part = MultipartBody::with_boundary(
        "test-boundary".to_string(),
        "file",
        "art.png",
        "image/png",
        b"PNGDATA",
    );
    let expected = "--test-boundary\r\n\
        Content-Disposition: form-data; name=\"file\"; filename=\"art.png\"\r\n\
        Content-Type: image/png\r\n\
        \r\n\
        PNGDATA\r\n\
        --test-boundary--\r\n";
    assert_eq!(part.bytes(), expected.as_bytes());
    assert_eq!(
        part.content_type(),
        "multipart/form-data; boundary=test-boundary"
    );
}

#[test]
fn generated_boundary_spans_body() {
    let part = MultipartBody::file("file", "art.png", "image/png", b"data");
    let content_type = part.content_type();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("boundary parameter");
    let body = String::from_utf8(part.bytes().to_vec()).expect("utf8 body");
    assert!(body.starts_with(&format!("--{boundary}\r\n")));
    assert!(body.ends_with(&format!("\r\n--{boundary}--\r\n")));
}

#[test]
fn content_types_follow_upload_extensions() {
    assert_eq!(content_type_for("pixel.png"), "image/png");
    assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
    assert_eq!(content_type_for("photo.jpeg"), "image/jpeg");
    assert_eq!(content_type_for("anim.gif"), "image/gif");
    assert_eq!(content_type_for("art.svg"), "image/svg+xml");
    assert_eq!(content_type_for("blob.bin"), "application/octet-stream");
    assert_eq!(content_type_for("no-extension"), "application/octet-stream");
}

#[test]
fn client_normalizes_base_url() {
    let client = ServiceClient::new("http://localhost:5000/");
    assert_eq!(client.base_url(), "http://localhost:5000");
    assert_eq!(ServiceClient::default().base_url(), DEFAULT_SERVER_URL);
}
