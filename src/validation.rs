use regex::Regex;

use crate::errors::AppError;

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    // Must contain 10 to 15 digits
    // Spaces, hyphens, parentheses, plus signs, and periods are ignored
    // Original formatting is kept for display, never rewritten here
    let re = Regex::new(r"[\s\-\(\)\+\.]")?;
    let cleaned = re.replace_all(phone, "");

    if cleaned.chars().all(|c| c.is_ascii_digit()) && (10..=15).contains(&cleaned.len()) {
        return Ok(());
    }

    Err(AppError::Validation(format!(
        "Phone '{}' is not matching valid format. Should be digits only, 10 to 15 length.",
        phone
    )))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn accepts_plain_and_punctuated_phones() -> Result<(), AppError> {
        validate_phone("1234567890")?;
        validate_phone("123-456-7890")?;
        validate_phone("+38 (050) 123.45.67")?;
        validate_phone("123456789012345")?; // 15 digits, upper bound

        Ok(())
    }

    #[test]
    fn rejects_short_long_and_lettered_phones() {
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("1234567890123456").is_err()); // 16 digits
        assert!(validate_phone("12345abcde").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn error_message_embeds_the_original_input() {
        let err = validate_phone("12-34").unwrap_err();

        assert!(format!("{}", err).contains("'12-34'"));
    }
}
