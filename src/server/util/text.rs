//! Normalization applied to user-supplied text before it is stored.

/// Trims and lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Reduces a phone number to its digits, `None` when nothing remains.
pub fn normalize_phone(phone: Option<&str>) -> Option<String> {
    let digits: String = phone?.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Capitalizes the first letter of every whitespace-separated word and lowercases the rest.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("  honda   PCX 125 "), "Honda Pcx 125");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn strips_phone_formatting() {
        assert_eq!(
            normalize_phone(Some("+90 (532) 000-11-22")).as_deref(),
            Some("905320001122")
        );
        assert_eq!(normalize_phone(Some("n/a")), None);
        assert_eq!(normalize_phone(None), None);
    }

    #[test]
    fn lowercases_email() {
        assert_eq!(normalize_email(" Me@Example.Com "), "me@example.com");
    }
}
