//! Parsing of `!lolprofile name:region` chat messages.

use crate::error::InputError;
use crate::profile::normalize;
use crate::riot::Platform;

pub const PROFILE_VERB: &str = "lolprofile";

/// A validated profile lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileQuery {
    /// The name as typed by the user.
    pub raw_name: String,
    /// Lowercase, whitespace-free name used upstream and in the cache key.
    pub name: String,
    pub platform: Platform,
}

impl ProfileQuery {
    /// Validate the `name:region` argument of the command.
    pub fn parse(argument: Option<&str>) -> Result<Self, InputError> {
        let argument = argument
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .ok_or(InputError::MissingArgument)?;

        let (raw_name, code) = argument.rsplit_once(':').ok_or(InputError::MissingInfo)?;
        let name = normalize(raw_name);
        let code = code.trim();
        if name.is_empty() || code.is_empty() {
            return Err(InputError::MissingInfo);
        }

        let platform: Platform = code.parse()?;

        Ok(Self {
            raw_name: raw_name.trim().to_string(),
            name,
            platform,
        })
    }
}

/// A recognised command found in a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `!lolprofile [argument]`
    Profile { argument: Option<&'a str> },
}

/// Extract the command from `text`.
///
/// `None` for anything that is not a prefixed, known verb: those messages are
/// ignored without any reply.
pub fn parse(text: &str, prefix: char) -> Option<Command<'_>> {
    let body = text.strip_prefix(prefix)?;
    let (verb, rest) = match body.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (body, None),
    };

    match verb {
        PROFILE_VERB => Some(Command::Profile {
            argument: rest.map(str::trim).filter(|arg| !arg.is_empty()),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_unprefixed_and_unknown_commands() {
        assert_eq!(parse("lolprofile Faker:kr", '!'), None);
        assert_eq!(parse("hello there", '!'), None);
        assert_eq!(parse("!help", '!'), None);
        assert_eq!(parse("!LOLPROFILE Faker:kr", '!'), None);
        assert_eq!(parse("!lolprofiles Faker:kr", '!'), None);
        assert_eq!(parse("", '!'), None);
    }

    #[test]
    fn parse_extracts_argument() {
        assert_eq!(
            parse("!lolprofile Faker:kr", '!'),
            Some(Command::Profile {
                argument: Some("Faker:kr")
            })
        );
        assert_eq!(
            parse("!lolprofile   Hide on Bush:kr  ", '!'),
            Some(Command::Profile {
                argument: Some("Hide on Bush:kr")
            })
        );
        assert_eq!(
            parse("!lolprofile", '!'),
            Some(Command::Profile { argument: None })
        );
        assert_eq!(
            parse("?lolprofile   ", '?'),
            Some(Command::Profile { argument: None })
        );
    }

    #[test]
    fn query_requires_argument() {
        assert_eq!(ProfileQuery::parse(None), Err(InputError::MissingArgument));
        assert_eq!(
            ProfileQuery::parse(Some("   ")),
            Err(InputError::MissingArgument)
        );
    }

    #[test]
    fn query_requires_name_and_region() {
        for arg in ["Faker", "Faker kr", ":kr", "Faker:", "  :  "] {
            assert_eq!(
                ProfileQuery::parse(Some(arg)),
                Err(InputError::MissingInfo),
                "argument: {arg:?}"
            );
        }
    }

    #[test]
    fn query_rejects_unknown_region() {
        assert_eq!(
            ProfileQuery::parse(Some("Faker:mars")),
            Err(InputError::InvalidRegion("mars".into()))
        );
    }

    #[test]
    fn query_normalizes_name_and_region() {
        let query = ProfileQuery::parse(Some("Hide On Bush:KR")).unwrap();

        assert_eq!(query.raw_name, "Hide On Bush");
        assert_eq!(query.name, "hideonbush");
        assert_eq!(query.platform, Platform::KR);
    }
}
