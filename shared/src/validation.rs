//! Input validation functions
//!
//! Validators for the inputs the API accepts: account credentials and
//! chirp bodies, plus the profanity cleaning applied before a chirp is
//! stored.

use validator::ValidateEmail;

/// Maximum chirp length in bytes
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words replaced with **** regardless of capitalization
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a chirp body before cleaning
pub fn validate_chirp_body(body: &str) -> Result<(), String> {
    if body.is_empty() {
        return Err("Chirp body cannot be empty".to_string());
    }
    if body.len() > MAX_CHIRP_LENGTH {
        return Err("Chirp is too long".to_string());
    }
    Ok(())
}

/// Replace profane words with ****
///
/// Matching is per whitespace-separated word and case-insensitive; words
/// with trailing punctuation attached are left alone.
pub fn clean_chirp_body(body: &str) -> String {
    body.split_whitespace()
        .map(|word| {
            if PROFANE_WORDS.contains(&word.to_lowercase().as_str()) {
                "****"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
