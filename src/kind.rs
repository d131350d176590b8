/// Textual codes sent by the remote service and the kind each one maps to.
///
/// Lookup is exact and case-sensitive. Any code not listed here classifies as
/// [`ErrorKind::Unknown`].
pub const CODE_TABLE: &[(&str, ErrorKind)] = &[
    ("internal error", ErrorKind::Internal),
    ("not found", ErrorKind::NotFound),
    ("invalid", ErrorKind::Invalid),
    ("unavailable", ErrorKind::Unavailable),
    ("forbidden", ErrorKind::PermissionDenied),
    ("unauthorized", ErrorKind::Unauthenticated),
];

/// Wire code emitted for [`ErrorKind::Unknown`]. Not in [`CODE_TABLE`], so it
/// classifies back to `Unknown` through the default branch.
pub const UNKNOWN_CODE: &str = "unknown";

/// Classification of a structured remote error.
///
/// `Display`/`AsRef<str>`/`FromStr` use the snake_case identifier
/// (`"permission_denied"`), not the wire code. Use [`ErrorKind::code`] for the
/// latter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Internal,
    NotFound,
    Invalid,
    Unavailable,
    PermissionDenied,
    Unauthenticated,
    #[default]
    Unknown,
}

impl ErrorKind {
    /// Classify a textual wire code. Total: unrecognised codes are `Unknown`.
    pub fn from_code(code: &str) -> Self {
        CODE_TABLE
            .iter()
            .find(|(known, _)| *known == code)
            .map_or(Self::Unknown, |(_, kind)| *kind)
    }

    /// The wire code for this kind.
    pub fn code(self) -> &'static str {
        CODE_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or(UNKNOWN_CODE, |(code, _)| *code)
    }

    /// Only a temporarily unavailable service is worth retrying.
    pub fn is_retriable(self) -> bool {
        matches!(self, Self::Unavailable)
    }

    pub fn http_status_code(self) -> u16 {
        match self {
            Self::Invalid => 400,
            Self::Unauthenticated => 401,
            Self::PermissionDenied => 403,
            Self::NotFound => 404,
            Self::Unavailable => 503,
            Self::Internal | Self::Unknown => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CODE_TABLE, ErrorKind, UNKNOWN_CODE};
    use strum::IntoEnumIterator;

    #[test]
    fn known_codes_classify_exactly() {
        assert_eq!(ErrorKind::from_code("internal error"), ErrorKind::Internal);
        assert_eq!(ErrorKind::from_code("not found"), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_code("invalid"), ErrorKind::Invalid);
        assert_eq!(ErrorKind::from_code("unavailable"), ErrorKind::Unavailable);
        assert_eq!(
            ErrorKind::from_code("forbidden"),
            ErrorKind::PermissionDenied
        );
        assert_eq!(
            ErrorKind::from_code("unauthorized"),
            ErrorKind::Unauthenticated
        );
    }

    #[test]
    fn lookup_is_case_sensitive_and_not_prefix_based() {
        for code in [
            "",
            "Not Found",
            "NOT FOUND",
            "not found ",
            " not found",
            "not",
            "internal",
            "internal error: disk",
            "unauthenticated",
            "permission denied",
            UNKNOWN_CODE,
        ] {
            assert_eq!(ErrorKind::from_code(code), ErrorKind::Unknown, "{code:?}");
        }
    }

    #[test]
    fn every_kind_but_unknown_has_exactly_one_row() {
        for kind in ErrorKind::iter() {
            let rows = CODE_TABLE.iter().filter(|(_, k)| *k == kind).count();
            let expected = usize::from(kind != ErrorKind::Unknown);
            assert_eq!(rows, expected, "{kind:?}");
        }
    }

    #[test]
    fn code_is_inverse_of_from_code() {
        for kind in ErrorKind::iter() {
            assert_eq!(ErrorKind::from_code(kind.code()), kind);
        }
        assert_eq!(ErrorKind::Unknown.code(), "unknown");
        assert_eq!(ErrorKind::PermissionDenied.code(), "forbidden");
    }

    #[test]
    fn identifiers_roundtrip_through_strum() {
        assert_eq!(ErrorKind::PermissionDenied.to_string(), "permission_denied");
        let id: &str = ErrorKind::NotFound.as_ref();
        assert_eq!(id, "not_found");
        assert_eq!(
            "unauthenticated".parse::<ErrorKind>().ok(),
            Some(ErrorKind::Unauthenticated)
        );
        assert_eq!("not found".parse::<ErrorKind>().ok(), None);
        for kind in ErrorKind::iter() {
            assert_eq!(kind.to_string().parse::<ErrorKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn default_kind_is_unknown() {
        assert_eq!(ErrorKind::default(), ErrorKind::Unknown);
    }

    #[test]
    fn retry_and_status_mapping() {
        let retriable: Vec<ErrorKind> = ErrorKind::iter().filter(|k| k.is_retriable()).collect();
        assert_eq!(retriable, vec![ErrorKind::Unavailable]);

        assert_eq!(ErrorKind::Internal.http_status_code(), 500);
        assert_eq!(ErrorKind::NotFound.http_status_code(), 404);
        assert_eq!(ErrorKind::Invalid.http_status_code(), 400);
        assert_eq!(ErrorKind::Unavailable.http_status_code(), 503);
        assert_eq!(ErrorKind::PermissionDenied.http_status_code(), 403);
        assert_eq!(ErrorKind::Unauthenticated.http_status_code(), 401);
        assert_eq!(ErrorKind::Unknown.http_status_code(), 500);
    }
}
