/// Prefixes `+` unless the number already carries one.
pub fn to_e164(raw: &str) -> String {
    if raw.starts_with('+') {
        raw.to_string()
    } else {
        format!("+{raw}")
    }
}

/// Strips a single leading `+`. Digit content is not validated.
pub fn to_bare_digits(raw: &str) -> String {
    raw.strip_prefix('+').unwrap_or(raw).to_string()
}

/// A phone number in the two representations the relay needs: E.164 toward the
/// inbox, bare digits toward the WhatsApp provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPhone {
    pub e164: String,
    pub bare: String,
}

impl NormalizedPhone {
    /// `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "+" {
            return None;
        }

        Some(Self {
            e164: to_e164(trimmed),
            bare: to_bare_digits(trimmed),
        })
    }
}
