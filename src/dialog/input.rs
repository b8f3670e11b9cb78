//! Field parsing for the dialog flows. The `Display` text of [`InputError`] is
//! shown to the user as the retry hint.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please send a whole number.")]
    NotANumber,

    #[error("The value must be greater than zero.")]
    NotPositive,

    #[error("Please send seconds or a time like 25:30 or 1:05:00.")]
    BadDuration,

    #[error("The value can't be larger than {limit}.")]
    TooLarge { limit: u32 },

    #[error("Please pick a number from 1 to {max}.")]
    NoSuchChoice { max: usize },

    #[error("The name can't be empty.")]
    EmptyName,

    #[error("The name is too long (at most {max} characters).")]
    NameTooLong { max: usize },

    #[error("I couldn't find any sets there. Use a format like 12x3@50, 15x2.")]
    NoSets,

    #[error("That's too many sets; send at most {max} at once.")]
    TooManySets { max: u32 },
}

/// A strictly positive whole number.
pub fn positive(text: &str) -> Result<u32, InputError> {
    let value = whole_number(text)?;
    if value == 0 {
        return Err(InputError::NotPositive);
    }
    Ok(value)
}

/// A non-negative whole number where 0 means "not applicable".
pub fn optional(text: &str) -> Result<Option<u32>, InputError> {
    let value = whole_number(text)?;
    Ok((value > 0).then_some(value))
}

fn whole_number(text: &str) -> Result<u32, InputError> {
    let value: i64 = text.trim().parse().map_err(|_| InputError::NotANumber)?;
    if value < 0 {
        return Err(InputError::NotPositive);
    }
    u32::try_from(value).map_err(|_| InputError::TooLarge { limit: u32::MAX })
}

/// A positive duration in seconds, given as plain seconds, `mm:ss` or
/// `h:mm:ss`.
pub fn duration(text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    if !text.contains(':') {
        return positive(text);
    }

    let parts = text
        .split(':')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| InputError::BadDuration)?;

    let seconds = match parts.as_slice() {
        [m, s] if *s < 60 => m.checked_mul(60).and_then(|v| v.checked_add(*s)),
        [h, m, s] if *m < 60 && *s < 60 => h
            .checked_mul(3600)
            .and_then(|v| v.checked_add(m * 60 + s)),
        _ => None,
    }
    .ok_or(InputError::BadDuration)?;

    if seconds == 0 {
        return Err(InputError::NotPositive);
    }
    Ok(seconds)
}

/// Like [`optional`], but also accepts a duration and caps it at `limit`.
pub fn optional_duration(text: &str, limit: u32) -> Result<Option<u32>, InputError> {
    let value = if text.contains(':') {
        Some(duration(text)?)
    } else {
        optional(text)?
    };
    at_most(value, limit)
}

pub fn at_most(value: Option<u32>, limit: u32) -> Result<Option<u32>, InputError> {
    match value {
        Some(v) if v > limit => Err(InputError::TooLarge { limit }),
        other => Ok(other),
    }
}

/// A 1-based position in a list of `len` entries, returned 0-based.
pub fn choice(text: &str, len: usize) -> Result<usize, InputError> {
    let picked: usize = text
        .trim()
        .trim_end_matches('.')
        .parse()
        .map_err(|_| InputError::NoSuchChoice { max: len })?;
    if picked == 0 || picked > len {
        return Err(InputError::NoSuchChoice { max: len });
    }
    Ok(picked - 1)
}

pub fn exercise_name(text: &str, max: usize) -> Result<String, InputError> {
    let name = text.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    if name.chars().count() > max {
        return Err(InputError::NameTooLong { max });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(positive(" 1500 "), Ok(1500));
        assert_eq!(positive("0"), Err(InputError::NotPositive));
        assert_eq!(positive("-100"), Err(InputError::NotPositive));
        assert_eq!(positive("lots"), Err(InputError::NotANumber));
        assert_eq!(positive("12.5"), Err(InputError::NotANumber));
    }

    #[test]
    fn test_optional_zero_means_none() {
        assert_eq!(optional("0"), Ok(None));
        assert_eq!(optional("200"), Ok(Some(200)));
        assert_eq!(optional("-1"), Err(InputError::NotPositive));
    }

    #[test]
    fn test_duration_formats() {
        assert_eq!(duration("1800"), Ok(1800));
        assert_eq!(duration("25:30"), Ok(1530));
        assert_eq!(duration("1:05:00"), Ok(3900));
        assert_eq!(duration("0:00"), Err(InputError::NotPositive));
        assert_eq!(duration("25:75"), Err(InputError::BadDuration));
        assert_eq!(duration("a:b"), Err(InputError::BadDuration));
        assert_eq!(duration("-30"), Err(InputError::NotPositive));
    }

    #[test]
    fn test_optional_duration_respects_limit() {
        assert_eq!(optional_duration("0", 100), Ok(None));
        assert_eq!(optional_duration("0:45", 100), Ok(Some(45)));
        assert_eq!(
            optional_duration("120", 100),
            Err(InputError::TooLarge { limit: 100 })
        );
    }

    #[test]
    fn test_choice_is_one_based() {
        assert_eq!(choice("1", 3), Ok(0));
        assert_eq!(choice("3.", 3), Ok(2));
        assert_eq!(choice("0", 3), Err(InputError::NoSuchChoice { max: 3 }));
        assert_eq!(choice("4", 3), Err(InputError::NoSuchChoice { max: 3 }));
        assert_eq!(
            choice("bench", 3),
            Err(InputError::NoSuchChoice { max: 3 })
        );
    }

    #[test]
    fn test_exercise_name() {
        assert_eq!(exercise_name("  Squat ", 100), Ok("Squat".to_string()));
        assert_eq!(exercise_name("   ", 100), Err(InputError::EmptyName));
        assert_eq!(
            exercise_name("abcdef", 5),
            Err(InputError::NameTooLong { max: 5 })
        );
    }
}
