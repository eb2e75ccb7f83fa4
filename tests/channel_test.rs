//! Tests for the anonymous pipe channel factory.

#![cfg(unix)]

use std::fs::File;
use std::io::Read;

use kafkacat_hk::channel::secure_channel;

#[tokio::test]
async fn channel_delivers_complete_bytes_then_eof() {
    let payload = b"-----BEGIN CERTIFICATE-----\nabc\n-----END CERTIFICATE-----\n".to_vec();
    let fd = secure_channel(payload.clone()).expect("pipe allocation must succeed");

    let mut contents = Vec::new();
    File::from(fd)
        .read_to_end(&mut contents)
        .expect("read must succeed");

    assert_eq!(contents, payload);
}

#[tokio::test]
async fn channel_returns_before_a_large_payload_is_drained() {
    // 1 MiB is far beyond the kernel pipe buffer, so the factory must
    // not wait for the copy task before handing back the read end.
    let payload = vec![0x41_u8; 1_048_576];
    let fd = secure_channel(payload.clone()).expect("pipe allocation must succeed");

    let contents = tokio::task::spawn_blocking(move || {
        let mut contents = Vec::new();
        File::from(fd)
            .read_to_end(&mut contents)
            .expect("read must succeed");
        contents
    })
    .await
    .expect("reader task must not panic");

    assert_eq!(contents.len(), payload.len());
    assert_eq!(contents, payload);
}

#[tokio::test]
async fn empty_payload_yields_immediate_eof() {
    let fd = secure_channel(Vec::new()).expect("pipe allocation must succeed");

    let mut contents = Vec::new();
    File::from(fd)
        .read_to_end(&mut contents)
        .expect("read must succeed");

    assert!(contents.is_empty());
}
