use std::fmt;

/// Review tags attached to policy rule rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    SectionHeader,
    Disabled,
    ZeroHits,
    AnyEndpoint,
    WeakProtocol,
    Normal,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::SectionHeader => "Section Header",
            RuleCategory::Disabled => "Disabled",
            RuleCategory::ZeroHits => "Zero Hits",
            RuleCategory::AnyEndpoint => "Any in Source/Destination",
            RuleCategory::WeakProtocol => "Weak Protocol",
            RuleCategory::Normal => "Normal",
        }
    }

    /// Join tags into the display/export form.
    pub fn join(categories: &[RuleCategory]) -> String {
        categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
