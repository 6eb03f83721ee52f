use chrono::{Duration, Utc};

use wgedu::middleware::auth::AuthUser;
use wgedu_auth::{Role, create_access_token_at, verify_token, verify_token_at};
use wgedu_config::JwtConfig;

fn config(expiry: i64) -> JwtConfig {
    JwtConfig {
        secret: "unit-jwt-secret".to_string(),
        token_expiry: expiry,
    }
}

#[test]
fn test_claims_map_to_auth_user_for_every_role() {
    let config = config(86_400);
    for role in Role::ALL {
        let token = create_access_token_at(11, role, Utc::now(), &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        let user = AuthUser::from_claims(&claims).unwrap();

        assert_eq!(user.user_id, 11);
        assert_eq!(user.role, role);
    }
}

#[test]
fn test_expiry_follows_config() {
    let issued = Utc::now() - Duration::hours(2);
    let short = config(3_600);
    let token = create_access_token_at(5, Role::Student, issued, &short).unwrap();
    assert!(verify_token(&token, &short).is_err());

    let long = config(86_400);
    let token = create_access_token_at(5, Role::Student, issued, &long).unwrap();
    assert!(verify_token(&token, &long).is_ok());
}

#[test]
fn test_one_day_boundary() {
    let config = config(86_400);
    let issued = Utc::now();
    let token = create_access_token_at(8, Role::Teacher, issued, &config).unwrap();

    assert!(verify_token_at(&token, issued + Duration::minutes(23 * 60 + 59), &config).is_ok());
    assert!(verify_token_at(&token, issued + Duration::minutes(24 * 60 + 1), &config).is_err());
}
