//! Compact token decoding

use jwtclaims::utils::base64url;
use jwtclaims::*;

fn compact(header: &str, payload: &str) -> String {
    format!(
        "{}.{}.{}",
        base64url::encode(header),
        base64url::encode(payload),
        base64url::encode("not-a-real-signature")
    )
}

#[test]
fn decode_and_read() {
    let token = JsonWebToken::from_compact(&compact(
        r#"{"alg":"RS256","kid":"key-1","typ":"JWT"}"#,
        r#"{"iss":"https://issuer.example","sub":"user123","aud":["api","web"],"exp":1893456000,"iat":946684800,"roles":["admin","reader"],"tid":7}"#,
    ))
    .unwrap();

    assert_eq!(token.algorithm(), Some("RS256"));
    assert_eq!(token.key_id(), Some("key-1"));

    let payload = token.payload();
    assert_eq!(payload.issuer(), Some("https://issuer.example"));
    assert_eq!(payload.audiences(), vec!["api", "web"]);
    assert_eq!(
        payload.valid_to().unwrap().map(|t| t.timestamp()),
        Some(1_893_456_000)
    );
    assert_eq!(
        payload.issued_at_time().unwrap().map(|t| t.timestamp()),
        Some(946_684_800)
    );
    assert_eq!(payload.valid_from(), Ok(None));

    assert_eq!(
        token.get_payload_value::<Vec<String>>("roles"),
        Ok(vec!["admin".to_string(), "reader".to_string()])
    );
    assert_eq!(token.get_payload_value::<u16>("tid"), Ok(7));
    assert_eq!(token.try_get_header_value::<String>("alg"), (true, "RS256".to_string()));

    let claims = token.claims();
    assert_eq!(claims.len(), 7);
    assert!(claims.iter().all(|c| c.issuer() == "https://issuer.example"));
    let aud = claims.iter().find(|c| c.name() == "aud").unwrap();
    assert_eq!(aud.value(), r#"["api","web"]"#);
    assert_eq!(aud.value_type(), ClaimValueType::JsonArray);
}

#[test]
fn expiration_beyond_bounds() {
    let token =
        JsonWebToken::from_sections(r#"{"alg":"none"}"#, r#"{"exp":99999999999}"#).unwrap();
    assert!(matches!(
        token.payload().valid_to(),
        Err(Error::TimestampOutOfBounds { value: 99_999_999_999, .. })
    ));
}

#[test]
fn invalid_segments() {
    assert!(matches!(
        JsonWebToken::from_compact("abc"),
        Err(Error::FormatInvalid)
    ));
    assert!(matches!(
        JsonWebToken::from_compact("!!!.abc.def"),
        Err(Error::FormatInvalidBase64(_))
    ));

    let token = format!(
        "{}.{}.",
        base64url::encode("{}"),
        base64url::encode("{not json")
    );
    assert!(matches!(
        JsonWebToken::from_compact(&token),
        Err(Error::FormatInvalidJson(msg)) if msg.contains("payload")
    ));
}
