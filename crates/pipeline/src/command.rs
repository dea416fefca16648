//! Command-line surface of the `ventas-incremental` binary.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("Unknown command {0:?} (expected demo, incremental or full)")]
pub struct UnknownCommand(pub String);

/// What a pipeline run does after ensuring the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineCommand {
    /// One incremental pass, three simulated days, summary.
    #[default]
    Demo,
    /// A single incremental pass.
    Incremental,
    /// A single full refresh.
    Full,
}

impl PipelineCommand {
    /// Parse the optional positional argument. Absent means [`Self::Demo`].
    pub fn from_arg(arg: Option<&str>) -> Result<Self, UnknownCommand> {
        arg.map_or(Ok(Self::default()), |s| s.parse())
    }
}

impl FromStr for PipelineCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "incremental" => Ok(Self::Incremental),
            "full" => Ok(Self::Full),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for PipelineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Demo => "demo",
            Self::Incremental => "incremental",
            Self::Full => "full",
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn absent_argument_runs_demo() {
        assert_eq!(PipelineCommand::from_arg(None).unwrap(), PipelineCommand::Demo);
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(
            PipelineCommand::from_arg(Some("INCREMENTAL")).unwrap(),
            PipelineCommand::Incremental
        );
        assert_eq!(PipelineCommand::from_arg(Some("Full")).unwrap(), PipelineCommand::Full);
        assert_eq!(PipelineCommand::from_arg(Some("demo")).unwrap(), PipelineCommand::Demo);
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert_matches!(
            PipelineCommand::from_arg(Some("backfill")),
            Err(UnknownCommand(ref s)) if s == "backfill"
        );
    }
}
