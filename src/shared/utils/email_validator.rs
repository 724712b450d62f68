/// Checks the address shape and normalizes it for submission.
pub fn validate_and_normalize_email(email: &str) -> Result<String, String> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err("Invalid email format. Must be in format user@domain.tld".to_string());
    }

    // Require a TLD (dot after @)
    if let Some(at_pos) = trimmed.find('@') {
        let domain_part = &trimmed[at_pos + 1..];
        if !domain_part.contains('.') {
            return Err(
                "Invalid email format. Domain must include a TLD (e.g., .com, .org)".to_string(),
            );
        }
    }

    Ok(trimmed.to_lowercase())
}
