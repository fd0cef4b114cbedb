use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use uuid::Uuid;
use waymark_core::share;
use waymark_core::{Note, PositionSample};

fn sample_note(heading: Option<f64>, created_at: i64) -> Note {
    Note::with_id(
        Uuid::new_v4(),
        "meet me here",
        PositionSample::new(41.3870, 2.1700),
        heading,
        created_at,
    )
    .unwrap()
}

#[test]
fn round_trip_reproduces_every_field() {
    let note = sample_note(Some(123.0), 1_700_000_000_000);
    let token = share::encode(&note, 7.5, 20.0);

    let shared = share::decode(&token, 1_800_000_000_000).unwrap();
    assert_eq!(shared.text, "meet me here");
    assert_eq!(shared.lat, 41.3870);
    assert_eq!(shared.lon, 2.1700);
    assert_eq!(shared.heading, Some(123.0));
    assert_eq!(shared.created_at, 1_700_000_000_000);
    assert_eq!(shared.unlock_radius_m, 7.5);
    assert_eq!(shared.unlock_tolerance_deg, 20.0);
    // Token carries createdAt, so the decode clock is not consulted.
    assert_eq!(shared.id, "shared-1700000000000");
}

#[test]
fn encoding_is_deterministic_and_url_safe() {
    let note = sample_note(None, 42);
    let first = share::encode(&note, 10.0, 35.0);
    let second = share::encode(&note, 10.0, 35.0);
    assert_eq!(first, second);
    assert!(first
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn unknown_heading_survives_the_round_trip() {
    let note = sample_note(None, 42);
    let shared = share::decode(&share::encode(&note, 10.0, 35.0), 0).unwrap();
    assert_eq!(shared.heading, None);
}

#[test]
fn legacy_standard_base64_tokens_still_decode() {
    // Older clients minted tokens with the standard padded alphabet.
    let json = r#"{"text":"old link","lat":1.5,"lon":2.5,"heading":90,"createdAt":777}"#;
    let token = STANDARD.encode(json);

    let shared = share::decode(&token, 0).unwrap();
    assert_eq!(shared.text, "old link");
    assert_eq!(shared.created_at, 777);
    assert_eq!(shared.heading, Some(90.0));
}

#[test]
fn missing_radius_tolerance_and_created_at_use_defaults() {
    let json = r#"{"text":"bare","lat":1.0,"lon":2.0,"heading":null}"#;
    let token = URL_SAFE_NO_PAD.encode(json);

    let shared = share::decode(&token, 555).unwrap();
    assert_eq!(shared.unlock_radius_m, 10.0);
    assert_eq!(shared.unlock_tolerance_deg, 35.0);
    assert_eq!(shared.created_at, 555);
    assert_eq!(shared.id, "shared-555");
}

#[test]
fn garbage_token_is_an_encoding_error() {
    let err = share::decode("not a token!!", 0).unwrap_err();
    assert!(matches!(err, share::ShareDecodeError::InvalidEncoding(_)));
}

#[test]
fn non_json_payload_is_a_json_error() {
    let token = URL_SAFE_NO_PAD.encode("hello world");
    let err = share::decode(&token, 0).unwrap_err();
    assert!(matches!(err, share::ShareDecodeError::InvalidJson(_)));
}

#[test]
fn payload_missing_required_fields_is_rejected() {
    for json in [
        r#"{"lat":1.0,"lon":2.0}"#,
        r#"{"text":"x","lon":2.0}"#,
        r#"{"text":"x","lat":1.0}"#,
    ] {
        let token = URL_SAFE_NO_PAD.encode(json);
        let err = share::decode(&token, 0).unwrap_err();
        assert!(
            matches!(err, share::ShareDecodeError::InvalidPayload(_)),
            "expected payload rejection for {json}"
        );
    }
}

#[test]
fn shared_note_from_fragment_degrades_silently_on_bad_tokens() {
    assert!(share::shared_note_from_fragment("#share=%%%", 0).is_none());
    assert!(share::shared_note_from_fragment("#nothing=here", 0).is_none());

    let note = sample_note(Some(10.0), 99);
    let url = format!(
        "https://example.test/app{}",
        share::share_fragment(&share::encode(&note, 10.0, 35.0))
    );
    let shared = share::shared_note_from_fragment(&url, 0).unwrap();
    assert_eq!(shared.created_at, 99);
}
