use std::fmt;

/// Counted in Unicode scalar values, so `"a😀"` is two characters long.
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols accepted as the "special character" of a strong password.
pub const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{0085}', '\u{2028}', '\u{2029}'];

/// Username/password pair as received from a caller.
///
/// Fields are optional because callers may omit them; an absent field fails every check.
/// The plaintext password is never persisted and is redacted from `Debug` output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Check the input against the registration policy.
    ///
    /// Both fields present and non-blank, username at least 3 characters, password
    /// satisfying [`is_strong_password`].
    pub fn is_valid_for_registration(&self) -> bool {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => {
                is_valid_username(username) && is_strong_password(password)
            }
            _ => false,
        }
    }

    /// Check the input against the login policy.
    ///
    /// Weaker than registration: the password only needs to be present and non-blank, so
    /// login neither reveals the strength policy nor locks out passwords set under an
    /// older one.
    pub fn is_valid_for_login(&self) -> bool {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => {
                is_valid_username(username) && !is_blank(password)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Password strength policy shared by registration and password change.
///
/// At least 8 characters with an ASCII digit, an ASCII lowercase letter, an ASCII uppercase
/// letter and one of `!@#$%^&*`. Blank passwords and passwords spanning several lines are
/// rejected.
pub fn is_strong_password(password: &str) -> bool {
    !is_blank(password)
        && password.chars().count() >= MIN_PASSWORD_LENGTH
        && !password.contains(LINE_TERMINATORS)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.contains(PASSWORD_SYMBOLS)
}

fn is_valid_username(username: &str) -> bool {
    !is_blank(username) && username.chars().count() >= MIN_USERNAME_LENGTH
}

/// Any Unicode whitespace counts, including U+00A0.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
