use clap::{ArgAction, Parser};

use passform::pass::OverflowPolicy;

/// Generate a password from a length and a set of character classes.
///
/// Run without arguments on a terminal to open the interactive form.
#[derive(Debug, Default, Parser)]
#[command(name = "passform", version)]
pub struct CliFlags {
    /// Password length, 4 to 15
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Leave out lowercase letters (included by default)
    #[arg(long)]
    pub no_lower: bool,

    /// Include uppercase letters
    #[arg(short = 'u', long = "upper")]
    pub upper: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short, long)]
    pub symbols: bool,

    /// What to do when a draw rounds past the end of the pool: clamp, faithful or strict
    #[arg(long, value_name = "POLICY", env = "PASSFORM_OVERFLOW")]
    pub overflow: Option<OverflowPolicy>,

    /// Seed the generator for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start from saved defaults instead of built-in ones
    #[arg(long)]
    pub saved: bool,

    /// Store the resulting length, classes and policy as defaults
    #[arg(long)]
    pub save: bool,

    /// Open the interactive form even when arguments are given
    #[arg(short, long)]
    pub interactive: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug log output on stderr
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliFlags {
    /// Any flag that asks for a one-shot run instead of the form.
    ///
    /// The overflow policy also applies to the form, so it does not count;
    /// it may come from `PASSFORM_OVERFLOW` rather than the command line.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.no_lower
            || self.upper
            || self.digits
            || self.symbols
            || self.seed.is_some()
            || self.saved
            || self.save
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passform").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn short_flags() {
        let flags = parse(&["-l", "12", "-u", "-s"]);
        assert_eq!(flags.length.as_deref(), Some("12"));
        assert!(flags.upper && flags.symbols);
        assert!(!flags.digits && !flags.no_lower);
        assert!(flags.has_explicit_args());
    }

    #[test]
    fn negative_length_reaches_validation() {
        let flags = parse(&["--length", "-3"]);
        assert_eq!(flags.length.as_deref(), Some("-3"));
    }

    #[test]
    fn overflow_policy_parses() {
        let flags = parse(&["--overflow", "faithful"]);
        assert_eq!(flags.overflow, Some(OverflowPolicy::Faithful));
        assert!(
            CliFlags::try_parse_from(["passform", "--overflow", "never"]).is_err()
        );
    }

    #[test]
    fn overflow_alone_keeps_the_form() {
        assert!(!parse(&["--overflow", "strict"]).has_explicit_args());
    }

    #[test]
    fn overflow_from_environment_keeps_the_form() {
        // a variable no other test reads, so parallel tests are unaffected
        const VAR: &str = "PASSFORM_OVERFLOW_FLAGS_TEST";
        let cmd = CliFlags::command().mut_arg("overflow", |arg| arg.env(VAR));

        unsafe { std::env::set_var(VAR, "strict") };
        let matches = cmd.try_get_matches_from(["passform"]);
        unsafe { std::env::remove_var(VAR) };

        let flags = CliFlags::from_arg_matches(&matches.unwrap()).unwrap();
        assert_eq!(flags.overflow, Some(OverflowPolicy::Strict));
        assert!(!flags.has_explicit_args());
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
        assert!(!parse(&["-q"]).has_explicit_args());
    }
}
