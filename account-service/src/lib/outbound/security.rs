use crate::domain::account::errors::PasswordError;
use crate::domain::account::models::SessionToken;
use crate::domain::account::ports::HashValidator;
use crate::domain::account::ports::TokenGenerator;

impl HashValidator for auth::PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        auth::PasswordHasher::hash(self, plaintext).map_err(PasswordError::from)
    }

    fn compare(&self, plaintext: &str, hash: &str) -> bool {
        self.verify(plaintext, hash)
    }
}

impl TokenGenerator for auth::SessionTokenGenerator {
    fn generate(&self) -> SessionToken {
        SessionToken::new(auth::SessionTokenGenerator::generate(self))
    }
}
