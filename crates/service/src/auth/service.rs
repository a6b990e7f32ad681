use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{AuthSession, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;
use super::token;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub password_algorithm: String,
    pub token_ttl_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "dev-secret-change-me".into(),
            password_algorithm: "argon2".into(),
            token_ttl_minutes: 30,
        }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Register a new user and issue a token bound to the new account.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::default());
    /// let input = RegisterInput { email: "user@example.com".into(), password: "secret1".into() };
    /// let session = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(session.user.email, "user@example.com");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AuthError> {
        if !input.email.contains('@') {
            return Err(AuthError::Validation("invalid email".into()));
        }
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!(
                "password too short (>={})",
                MIN_PASSWORD_LEN
            )));
        }
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let user = self
            .repo
            .create_user(&input.email, &hash, &self.cfg.password_algorithm)
            .await?;
        let token = token::issue(&self.cfg.jwt_secret, user.id, self.cfg.token_ttl_minutes)?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(AuthSession { user, token })
    }

    /// Authenticate a user and issue a fresh token.
    ///
    /// Unknown email and wrong password produce the same `Unauthorized`
    /// error so callers cannot enumerate accounts.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::default());
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { email: "u@e.com".into(), password: "passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.email, "u@e.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = self
            .repo
            .find_user_by_email(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let cred = self
            .repo
            .get_credentials(user.id)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed =
            PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::Unauthorized);
        }

        let token = token::issue(&self.cfg.jwt_secret, user.id, self.cfg.token_ttl_minutes)?;
        info!(user_id = %user.id, "user_logged_in");
        Ok(AuthSession { user, token })
    }

    /// Resolve a bearer token back to the owning user id.
    pub fn resolve_token(&self, token: &str) -> Result<Uuid, AuthError> {
        token::resolve(&self.cfg.jwt_secret, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{LoginInput, RegisterInput};
    use crate::auth::repository::mock::MockAuthRepository;

    fn svc() -> AuthService<MockAuthRepository> {
        AuthService::new(Arc::new(MockAuthRepository::default()), AuthConfig::default())
    }

    fn register_input(email: &str, password: &str) -> RegisterInput {
        RegisterInput { email: email.into(), password: password.into() }
    }

    #[tokio::test]
    async fn register_then_login() {
        let svc = svc();
        let session = svc.register(register_input("a@b.com", "secret1")).await.unwrap();
        assert_eq!(svc.resolve_token(&session.token).unwrap(), session.user.id);

        let login = svc
            .login(LoginInput { email: "a@b.com".into(), password: "secret1".into() })
            .await
            .unwrap();
        assert_eq!(login.user.id, session.user.id);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = svc();
        svc.register(register_input("a@b.com", "secret1")).await.unwrap();
        let err = svc.register(register_input("a@b.com", "secret2")).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
    }

    #[tokio::test]
    async fn short_password_rejected() {
        let err = svc().register(register_input("a@b.com", "short")).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn bad_email_rejected() {
        let err = svc().register(register_input("nope", "secret1")).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let svc = svc();
        svc.register(register_input("a@b.com", "secret1")).await.unwrap();

        let unknown = svc
            .login(LoginInput { email: "ghost@b.com".into(), password: "secret1".into() })
            .await
            .unwrap_err();
        let wrong = svc
            .login(LoginInput { email: "a@b.com".into(), password: "wrong-pass".into() })
            .await
            .unwrap_err();
        assert!(matches!(unknown, AuthError::Unauthorized));
        assert!(matches!(wrong, AuthError::Unauthorized));
        assert_eq!(unknown.code(), wrong.code());
    }

    #[tokio::test]
    async fn plaintext_is_never_stored() {
        let repo = Arc::new(MockAuthRepository::default());
        let svc = AuthService::new(Arc::clone(&repo), AuthConfig::default());
        let session = svc.register(register_input("a@b.com", "secret1")).await.unwrap();

        use crate::auth::repository::AuthRepository;
        let cred = repo.get_credentials(session.user.id).await.unwrap().unwrap();
        assert_ne!(cred.password_hash, "secret1");
        assert!(cred.password_hash.starts_with("$argon2"));
    }
}
