//! Pure field validators
//!
//! Stateless predicates over raw input strings. These encode the format
//! rules only; required-ness and cross-field checks (password confirmation)
//! live on the form controller.

/// The fixed set of states offered by the signup form
pub const STATES: [&str; 15] = [
    "Andhra Pradesh",
    "Bihar",
    "Goa",
    "Gujarat",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
];

/// Symbols that count toward the password special-character requirement
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Username: 4-20 characters, letters and digits only
pub fn valid_username(s: &str) -> bool {
    let len = s.chars().count();
    (4..=20).contains(&len) && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Email: one `@` with a non-empty local part, a dot after the `@` with
/// non-empty segments around it, and no whitespace anywhere
pub fn valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs at least one dot with something on both sides
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Phone: exactly 10 decimal digits
pub fn valid_phone(s: &str) -> bool {
    s.len() == 10 && s.chars().all(|c| c.is_ascii_digit())
}

/// Pincode: exactly 6 decimal digits
pub fn valid_pincode(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_digit())
}

/// State: member of the fixed state list
pub fn valid_state(s: &str) -> bool {
    STATES.contains(&s)
}

/// District: any non-blank value
pub fn valid_district(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Password: at least 8 characters with at least one lowercase letter, one
/// uppercase letter, one digit, and one symbol from [`PASSWORD_SYMBOLS`]
pub fn valid_password(s: &str) -> bool {
    s.chars().count() >= 8
        && s.chars().any(|c| c.is_ascii_lowercase())
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Password strength score, 0-5: one point each for length >= 8, an
/// uppercase letter, a lowercase letter, a digit, and a non-alphanumeric
/// character.
///
/// This counts satisfied format categories; it is not an entropy estimate,
/// and a score of 5 must not be read as cryptographically strong.
pub fn password_strength(s: &str) -> u8 {
    if s.is_empty() {
        return 0;
    }
    let mut strength = 0;
    if s.chars().count() >= 8 {
        strength += 1;
    }
    if s.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if s.chars().any(|c| c.is_ascii_lowercase()) {
        strength += 1;
    }
    if s.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if s.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 1;
    }
    strength
}
