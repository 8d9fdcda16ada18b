//! Admin gate for editing commands.
//!
//! This is a placeholder, not authentication: the secret is compared as a
//! plain string and anyone able to read the config file or environment can
//! edit content. Do not rely on it outside a single-user machine.

use tracing::warn;

use crate::config::AuthConfig;
use crate::error::{CliError, Result};

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(config: &AuthConfig) -> Self {
        if config.admin_password == DEFAULT_ADMIN_PASSWORD {
            warn!("Admin password is the built-in default; set SYLLABUS__AUTH__ADMIN_PASSWORD");
        }
        Self {
            password: config.admin_password.clone(),
        }
    }

    pub fn verify(&self, attempt: &str) -> Result<()> {
        if attempt == self.password {
            Ok(())
        } else {
            warn!("Rejected admin password");
            Err(CliError::InvalidCredentials)
        }
    }

    /// Verify `supplied`, or prompt for the password when none was given.
    pub fn authorize(&self, supplied: Option<&str>) -> Result<()> {
        match supplied {
            Some(attempt) => self.verify(attempt),
            None => {
                let attempt = dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .interact()?;
                self.verify(&attempt)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(password: &str) -> AdminGate {
        AdminGate::new(&AuthConfig {
            admin_password: password.into(),
        })
    }

    #[test]
    fn exact_match_only() {
        let gate = gate("s3cret");
        assert!(gate.verify("s3cret").is_ok());
        assert!(matches!(
            gate.verify("S3cret"),
            Err(CliError::InvalidCredentials)
        ));
        assert!(gate.verify("").is_err());
    }

    #[test]
    fn supplied_password_skips_prompt() {
        let gate = gate(DEFAULT_ADMIN_PASSWORD);
        assert!(gate.authorize(Some("admin123")).is_ok());
        assert!(gate.authorize(Some("guess")).is_err());
    }
}
