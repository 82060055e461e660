use crate::QueryError;
use regex::Regex;

type Result<T> = std::result::Result<T, QueryError>;

/// Matches definition names against an optional glob and an optional
/// regular expression. When both are set, both must match.
///
/// Globs must match the whole name and support `*`, `?`, bracketed
/// character classes (`[abc]`, `[a-z]`, `[^a-z]`) and `\` escapes. Regular
/// expressions match anywhere in the name unless anchored.
#[derive(Clone, Debug, Default)]
pub struct NameMatcher {
    glob: Option<Regex>,
    regex: Option<Regex>,
}
impl NameMatcher {
    pub fn new(glob: Option<&str>, regex: Option<&str>) -> Result<Self> {
        let glob = glob
            .map(|pattern| {
                let translated = glob_to_regex(pattern)?;
                Regex::new(translated.as_str()).map_err(|err| {
                    QueryError::Configuration(format!(
                        "invalid glob pattern for --name: {err}",
                    ))
                })
            })
            .transpose()?;

        let regex = regex
            .map(|pattern| {
                Regex::new(pattern).map_err(|err| {
                    QueryError::Configuration(format!(
                        "invalid regex pattern for --name-regex: {err}",
                    ))
                })
            })
            .transpose()?;

        Ok(Self { glob, regex })
    }

    pub fn is_active(&self) -> bool {
        self.glob.is_some() || self.regex.is_some()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.glob.as_ref().is_none_or(|glob| glob.is_match(name))
            && self.regex.as_ref().is_none_or(|regex| regex.is_match(name))
    }
}

/// Translates a glob into an anchored regular expression.
pub(crate) fn glob_to_regex(pattern: &str) -> Result<String> {
    let malformed = |reason: &str| QueryError::Configuration(format!(
        "invalid glob pattern for --name: '{pattern}' ({reason})",
    ));

    let mut regex_pattern = String::from("^");
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            '\\' => {
                let escaped = chars.next()
                    .ok_or_else(|| malformed("trailing escape"))?;
                regex_pattern.push_str(&regex::escape(&escaped.to_string()));
            },
            '[' => {
                regex_pattern.push('[');
                if chars.as_str().starts_with('^') {
                    chars.next();
                    regex_pattern.push('^');
                }

                let mut class_len = 0;
                loop {
                    match chars.next() {
                        None => return Err(malformed("unterminated character class")),
                        Some(']') if class_len > 0 => break,
                        Some(']') => return Err(malformed("empty character class")),
                        Some('-') if class_len > 0 => regex_pattern.push('-'),
                        Some('\\') => {
                            let escaped = chars.next()
                                .ok_or_else(|| malformed("trailing escape"))?;
                            regex_pattern.push_str(&regex::escape(&escaped.to_string()));
                        },
                        Some(class_ch) => {
                            regex_pattern.push_str(&regex::escape(&class_ch.to_string()));
                        },
                    }
                    class_len += 1;
                }
                regex_pattern.push(']');
            },
            _ => regex_pattern.push_str(&regex::escape(&ch.to_string())),
        }
    }
    regex_pattern.push('$');

    Ok(regex_pattern)
}
