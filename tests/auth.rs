// Session-token and password-hash behavior, exercised without a
// database: token round-trips, claim contents and bcrypt verification.

use portfolio_api::auth::{
    generate_jwt_with_secret, validate_jwt_with_secret, Claims, JwtError, Role,
};

const SECRET: &str = "integration-test-secret";

#[test]
fn issued_token_carries_identity_and_role() {
    let claims = Claims::new(
        "manager@portfolio.local".to_string(),
        "João Silva".to_string(),
        Role::Manager,
        42,
    );
    let token = generate_jwt_with_secret(claims, SECRET).unwrap();
    let decoded = validate_jwt_with_secret(&token, SECRET).unwrap();

    assert_eq!(decoded.sub, "manager@portfolio.local");
    assert_eq!(decoded.name, "João Silva");
    assert_eq!(decoded.role, Role::Manager);
    assert_eq!(decoded.user_id, 42);
    assert!(decoded.exp > decoded.iat);
}

#[test]
fn tampered_token_is_rejected() {
    let claims = Claims::new(
        "owner@portfolio.local".to_string(),
        "Maria Santos".to_string(),
        Role::Owner,
        7,
    );
    let token = generate_jwt_with_secret(claims, SECRET).unwrap();

    // Flip a character in the payload segment
    let mut tampered: Vec<String> = token.split('.').map(String::from).collect();
    tampered[1] = format!("x{}", &tampered[1][1..]);
    let tampered = tampered.join(".");

    assert!(matches!(
        validate_jwt_with_secret(&tampered, SECRET),
        Err(JwtError::InvalidToken(_))
    ));
}

#[test]
fn bcrypt_hash_verifies_and_mismatches() {
    // Minimum cost keeps the test fast; production cost comes from config.
    let hash = bcrypt::hash("changeme", 4).unwrap();

    assert!(bcrypt::verify("changeme", &hash).unwrap());
    assert!(!bcrypt::verify("wrong-password", &hash).unwrap());
}

#[test]
fn role_claim_uses_lowercase_wire_form() {
    let claims = Claims::new("a@b.c".to_string(), "A".to_string(), Role::Admin, 1);
    let token = generate_jwt_with_secret(claims, SECRET).unwrap();

    // Decode the payload segment directly and inspect the raw claim
    use base64::Engine as _;
    let payload = token.split('.').nth(1).unwrap();
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["role"], "admin");
}
