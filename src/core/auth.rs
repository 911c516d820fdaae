//! Two-step authentication flow
//!
//! A small state machine gating access to the ledger:
//! `Anonymous -> EmailSubmitted -> Authenticated`. Submitting an identifier
//! issues the (fixed, publicly known) demo one-time code; verifying it
//! unlocks the session. A failed verification stays in `EmailSubmitted` so
//! the client can retry; nothing ever falls back to `Anonymous`. Sessions
//! may sit in `EmailSubmitted` indefinitely; abandoning the flow means
//! dropping the session.

use crate::types::WalletError;

/// Where a session stands in the login flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStage {
    /// No identifier submitted yet
    Anonymous,
    /// Identifier accepted, one-time code issued, not yet verified
    EmailSubmitted {
        /// The submitted identifier
        email: String,
    },
    /// Code verified; ledger access unlocked
    Authenticated {
        /// The identifier the session logged in with
        email: String,
    },
}

/// Authentication state machine for one session
pub struct AuthFlow {
    stage: AuthStage,
    demo_code: String,
}

impl AuthFlow {
    /// Create a flow in `Anonymous` accepting the given one-time code
    pub fn new(demo_code: impl Into<String>) -> Self {
        AuthFlow {
            stage: AuthStage::Anonymous,
            demo_code: demo_code.into(),
        }
    }

    /// Submit a login identifier and issue the one-time code
    ///
    /// The format check is the demo placeholder: the identifier must
    /// contain an `@`. On success the flow moves to `EmailSubmitted` and
    /// the (fixed) code counts as issued; no code is actually delivered.
    /// Re-requesting from `EmailSubmitted` re-issues for the new
    /// identifier; an already-authenticated session stays authenticated.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` when the identifier contains no `@`.
    pub fn request_code(&mut self, identifier: &str) -> Result<&'static str, WalletError> {
        if !identifier.contains('@') {
            return Err(WalletError::invalid_format(identifier));
        }

        if !matches!(self.stage, AuthStage::Authenticated { .. }) {
            self.stage = AuthStage::EmailSubmitted {
                email: identifier.to_string(),
            };
        }
        Ok("OTP sent to your email")
    }

    /// Verify the one-time code and unlock the session
    ///
    /// Success is the only event that makes the ledger visible to callers.
    ///
    /// # Errors
    ///
    /// `InvalidCode` when the code does not match the demo code, and also
    /// when no code was requested yet (the flow stays in `Anonymous`).
    pub fn verify_code(&mut self, code: &str) -> Result<&'static str, WalletError> {
        let email = match &self.stage {
            AuthStage::Anonymous => return Err(WalletError::InvalidCode),
            AuthStage::EmailSubmitted { email } | AuthStage::Authenticated { email } => {
                email.clone()
            }
        };

        if code != self.demo_code {
            return Err(WalletError::InvalidCode);
        }

        self.stage = AuthStage::Authenticated { email };
        Ok("Login successful")
    }

    /// Whether the session has completed the flow
    pub fn is_authenticated(&self) -> bool {
        matches!(self.stage, AuthStage::Authenticated { .. })
    }

    /// Current flow stage
    pub fn stage(&self) -> &AuthStage {
        &self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CODE: &str = "123456";

    #[test]
    fn test_happy_path() {
        let mut flow = AuthFlow::new(CODE);
        assert_eq!(*flow.stage(), AuthStage::Anonymous);

        let message = flow.request_code("demo@example.com").expect("request");
        assert_eq!(message, "OTP sent to your email");
        assert_eq!(
            *flow.stage(),
            AuthStage::EmailSubmitted {
                email: "demo@example.com".to_string()
            }
        );

        let message = flow.verify_code(CODE).expect("verify");
        assert_eq!(message, "Login successful");
        assert!(flow.is_authenticated());
    }

    #[rstest]
    #[case::no_at_sign("demoexample.com")]
    #[case::empty("")]
    #[case::plain_word("demo")]
    fn test_request_code_rejects_malformed_identifiers(#[case] identifier: &str) {
        let mut flow = AuthFlow::new(CODE);

        let result = flow.request_code(identifier);

        assert!(matches!(result, Err(WalletError::InvalidFormat { .. })));
        assert_eq!(*flow.stage(), AuthStage::Anonymous);
    }

    #[test]
    fn test_wrong_code_stays_in_email_submitted() {
        let mut flow = AuthFlow::new(CODE);
        flow.request_code("demo@example.com").expect("request");

        let result = flow.verify_code("000000");

        assert_eq!(result, Err(WalletError::InvalidCode));
        assert_eq!(
            *flow.stage(),
            AuthStage::EmailSubmitted {
                email: "demo@example.com".to_string()
            }
        );

        // The client may retry with the right code
        flow.verify_code(CODE).expect("verify");
        assert!(flow.is_authenticated());
    }

    #[test]
    fn test_verify_without_request_fails() {
        let mut flow = AuthFlow::new(CODE);

        // Even the correct code is rejected before an identifier exists
        let result = flow.verify_code(CODE);

        assert_eq!(result, Err(WalletError::InvalidCode));
        assert_eq!(*flow.stage(), AuthStage::Anonymous);
    }

    #[test]
    fn test_re_request_replaces_identifier() {
        let mut flow = AuthFlow::new(CODE);
        flow.request_code("first@example.com").expect("request");
        flow.request_code("second@example.com").expect("request");

        assert_eq!(
            *flow.stage(),
            AuthStage::EmailSubmitted {
                email: "second@example.com".to_string()
            }
        );
    }

    #[test]
    fn test_authenticated_session_is_not_demoted() {
        let mut flow = AuthFlow::new(CODE);
        flow.request_code("demo@example.com").expect("request");
        flow.verify_code(CODE).expect("verify");

        // A stray resend or failed re-verify leaves the session unlocked
        flow.request_code("other@example.com").expect("request");
        assert!(flow.is_authenticated());

        let result = flow.verify_code("000000");
        assert_eq!(result, Err(WalletError::InvalidCode));
        assert!(flow.is_authenticated());
    }
}
