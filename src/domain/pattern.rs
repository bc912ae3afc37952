//! Named string-pattern constraints carried by schema fields.

/// A named pattern constraint on a String field.
///
/// Patterns are matched by name identity, not by regular-expression
/// semantics: a field declaring `regEx: "Email"` gets an email-shaped value
/// from the provider, whatever the underlying expression looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringPattern {
    Email,
    EmailWithTld,
    Domain,
    WeakDomain,
    Ip,
    Ipv4,
    Ipv6,
    Url,
    Id,
    ZipCode,
    Phone,
}

impl StringPattern {
    /// Look up a pattern by its canonical name as written in schema
    /// definitions. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Email" => Some(Self::Email),
            "EmailWithTLD" => Some(Self::EmailWithTld),
            "Domain" => Some(Self::Domain),
            "WeakDomain" => Some(Self::WeakDomain),
            "IP" => Some(Self::Ip),
            "IPv4" => Some(Self::Ipv4),
            "IPv6" => Some(Self::Ipv6),
            "Url" => Some(Self::Url),
            "Id" => Some(Self::Id),
            "ZipCode" => Some(Self::ZipCode),
            "Phone" => Some(Self::Phone),
            _ => None,
        }
    }

    /// The canonical name used in schema definitions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::EmailWithTld => "EmailWithTLD",
            Self::Domain => "Domain",
            Self::WeakDomain => "WeakDomain",
            Self::Ip => "IP",
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
            Self::Url => "Url",
            Self::Id => "Id",
            Self::ZipCode => "ZipCode",
            Self::Phone => "Phone",
        }
    }
}
