use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

#[derive(Clone)]
pub struct InboxAuthConfig {
    pub token: String,
    /// Some deployments run the inbox webhook without a token.
    pub required: bool,
}

/// `Authorization: Bearer <token>` sent by the inbox with every outgoing message.
/// A missing or non-bearer header is rejected with 401 before the handler runs.
#[derive(SecurityScheme)]
#[oai(ty = "bearer")]
pub struct InboxBearer(pub Bearer);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidToken;

impl InvalidToken {
    pub fn message(&self) -> &'static str {
        "Invalid token"
    }
}

impl InboxBearer {
    pub fn verify(&self, config: &InboxAuthConfig) -> Result<(), InvalidToken> {
        if self.0.token.trim() == config.token {
            Ok(())
        } else {
            Err(InvalidToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> InboxAuthConfig {
        InboxAuthConfig {
            token: "respond-token".to_string(),
            required: true,
        }
    }

    fn bearer(token: &str) -> InboxBearer {
        InboxBearer(Bearer {
            token: token.to_string(),
        })
    }

    #[test]
    fn accepts_matching_bearer() {
        assert_eq!(bearer("respond-token").verify(&config()), Ok(()));
        assert_eq!(bearer(" respond-token ").verify(&config()), Ok(()));
    }

    #[test]
    fn rejects_wrong_token() {
        assert_eq!(bearer("other").verify(&config()), Err(InvalidToken));
        assert_eq!(bearer("").verify(&config()), Err(InvalidToken));
    }
}
