use crate::models::{Claims, TokenType};
use jsonwebtoken::{DecodingKey, Validation, decode};

/// Verifies signature and expiry. Only access tokens are accepted.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())?;

    if claims.token_type != TokenType::Access {
        return Err("refresh tokens cannot be used for API access".to_string());
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{JWT_SECRET, token};

    #[test]
    fn accepts_access_token() {
        let claims = verify_token(&token(2, TokenType::Access), JWT_SECRET).unwrap();
        assert_eq!(claims.sub, "hr.lead");
        assert_eq!(claims.role, 2);
    }

    #[test]
    fn rejects_refresh_token() {
        let err = verify_token(&token(2, TokenType::Refresh), JWT_SECRET).unwrap_err();
        assert!(err.contains("refresh"));
    }

    #[test]
    fn rejects_wrong_secret() {
        assert!(verify_token(&token(1, TokenType::Access), "other-secret").is_err());
    }
}
