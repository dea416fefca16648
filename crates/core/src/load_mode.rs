//! Load mode selection for the stored-procedure runner.

use std::fmt;

/// Which server-side load procedure to trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Full,
    Incremental,
}

impl LoadMode {
    /// Resolve the command-line argument. Only `full` (any case) selects a
    /// full load; a missing or unrecognised value falls back to incremental.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(value) if value.eq_ignore_ascii_case("full") => Self::Full,
            _ => Self::Incremental,
        }
    }

    /// Name of the stored procedure implementing this mode.
    pub fn procedure_name(self) -> &'static str {
        match self {
            Self::Full => "sp_load_ventas_diarias_full",
            Self::Incremental => "sp_load_ventas_diarias_incremental",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Incremental => "incremental",
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_is_case_insensitive() {
        assert_eq!(LoadMode::from_arg(Some("full")), LoadMode::Full);
        assert_eq!(LoadMode::from_arg(Some("FULL")), LoadMode::Full);
        assert_eq!(LoadMode::from_arg(Some("Full")), LoadMode::Full);
    }

    #[test]
    fn anything_else_is_incremental() {
        assert_eq!(LoadMode::from_arg(None), LoadMode::Incremental);
        assert_eq!(LoadMode::from_arg(Some("incremental")), LoadMode::Incremental);
        assert_eq!(LoadMode::from_arg(Some("fullish")), LoadMode::Incremental);
        assert_eq!(LoadMode::from_arg(Some("")), LoadMode::Incremental);
    }

    #[test]
    fn procedure_names() {
        assert_eq!(LoadMode::Full.procedure_name(), "sp_load_ventas_diarias_full");
        assert_eq!(
            LoadMode::Incremental.procedure_name(),
            "sp_load_ventas_diarias_incremental"
        );
    }
}
