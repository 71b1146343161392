//! POSIX locale identifiers, e.g. `de_DE.UTF-8@euro`.

use super::types::{LocaleTags, TemplateError, TemplateResult};
use nom::{
    branch::alt,
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::{preceded, tuple},
    IResult,
};

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn language(input: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 3, is_alpha)(input)
}

fn territory(input: &str) -> IResult<&str, &str> {
    preceded(alt((char('_'), char('-'))), take_while_m_n(2, 2, is_alpha))(input)
}

fn codeset(input: &str) -> IResult<&str, &str> {
    preceded(char('.'), take_while1(|c: char| c != '@'))(input)
}

fn modifier(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_while1(|_: char| true))(input)
}

fn locale_id(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, (lang, country, _, _)) =
        tuple((language, opt(territory), opt(codeset), opt(modifier)))(input)?;
    Ok((input, (lang, country)))
}

/// Locale variables in the order the C library consults them for `LC_CTYPE`.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

impl LocaleTags {
    /// First non-empty value of [`LOCALE_VARS`] as reported by `lookup`.
    pub fn env_locale<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_VARS
            .iter()
            .filter_map(|var| lookup(*var))
            .find(|value| !value.is_empty())
    }

    pub fn parse(value: &str) -> TemplateResult<Self> {
        let (_, (lang, country)) = all_consuming(locale_id)(value.trim())
            .map_err(|_| TemplateError::InvalidLocale(value.to_string()))?;

        Ok(Self {
            language: lang.to_ascii_lowercase(),
            country: country.map(|c| c.to_ascii_uppercase()),
        })
    }

    /// Parses `value`, falling back to the default tags for `C`, `POSIX`,
    /// missing or malformed identifiers.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self::parse(v).unwrap_or_else(|e| {
                log::warn!("{}, using {}", e, Self::default());
                Self::default()
            }),
            None => {
                log::warn!("No locale configured, using {}", Self::default());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn tags(language: &str, country: Option<&str>) -> LocaleTags {
        LocaleTags {
            language: language.to_string(),
            country: country.map(str::to_string),
        }
    }

    #[test]
    fn parses_full_posix_identifier() {
        assert_eq!(LocaleTags::parse("de_DE.UTF-8").unwrap(), tags("de", Some("DE")));
        assert_eq!(LocaleTags::parse("fr_BE.UTF-8@euro").unwrap(), tags("fr", Some("BE")));
    }

    #[test]
    fn accepts_bare_language_and_dash_separator() {
        assert_eq!(LocaleTags::parse("nl").unwrap(), tags("nl", None));
        assert_eq!(LocaleTags::parse("pt-br").unwrap(), tags("pt", Some("BR")));
        assert_eq!(LocaleTags::parse("fil_PH").unwrap(), tags("fil", Some("PH")));
    }

    #[test]
    fn rejects_c_and_garbage() {
        assert!(LocaleTags::parse("C").is_err());
        assert!(LocaleTags::parse("POSIX").is_err());
        assert!(LocaleTags::parse("english").is_err());
        assert!(LocaleTags::parse("").is_err());
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(LocaleTags::parse_or_default(Some("C.UTF-8")), LocaleTags::default());
        assert_eq!(LocaleTags::parse_or_default(None), LocaleTags::default());
        assert_eq!(LocaleTags::parse_or_default(Some("sv_SE")), tags("sv", Some("SE")));
    }

    #[test]
    fn lc_all_wins_over_lc_ctype_and_lang() {
        let vars: HashMap<&str, &str> = [
            ("LC_ALL", "de_DE.UTF-8"),
            ("LC_CTYPE", "fr_FR.UTF-8"),
            ("LANG", "en_US.UTF-8"),
        ]
        .into_iter()
        .collect();
        let lookup = |var: &str| vars.get(var).map(|v| v.to_string());

        assert_eq!(LocaleTags::env_locale(lookup).as_deref(), Some("de_DE.UTF-8"));
    }

    #[test]
    fn empty_variables_are_skipped() {
        let vars: HashMap<&str, &str> = [("LC_ALL", ""), ("LANG", "es_MX.UTF-8")]
            .into_iter()
            .collect();
        let lookup = |var: &str| vars.get(var).map(|v| v.to_string());

        assert_eq!(LocaleTags::env_locale(lookup).as_deref(), Some("es_MX.UTF-8"));
        assert_eq!(LocaleTags::env_locale(|_: &str| None), None);
    }
}
