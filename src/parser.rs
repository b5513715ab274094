//! Reads `word, tag` lines into the `(word, tag)` pairs the core pipeline
//! expects (out-of-core collaborator, see `SPEC_FULL.md` §6).
//!
//! A line is `<word>, <hex-digit>` where the digit is one of `0-9, A-F`.
//! Lines between a pair of `%%` sentinels form the dictionary; if the input
//! carries no `%%` sentinel at all, every non-blank line is taken to be
//! dictionary content, so a bare word list is also valid input.

use crate::Error;

/// Parses dictionary text into `(word, tag)` pairs.
///
/// Does not check for an empty result -- an empty word list is the core's
/// concern ([`crate::Error::EmptyInput`] is raised by `dafsa::compile`).
pub fn parse(input: &str) -> Result<Vec<(Vec<u8>, u8)>, Error> {
    let lines: Vec<&str> = input.lines().collect();
    let sentinels: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == "%%")
        .map(|(i, _)| i)
        .collect();

    let dictionary: &[&str] = if sentinels.len() >= 2 {
        &lines[sentinels[0] + 1..sentinels[1]]
    } else {
        &lines
    };

    let mut words = Vec::new();
    for line in dictionary {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        words.push(parse_line(trimmed)?);
    }
    Ok(words)
}

fn parse_line(line: &str) -> Result<(Vec<u8>, u8), Error> {
    let (word, tag) = line
        .rsplit_once(',')
        .ok_or_else(|| Error::BadInputLine(line.to_string()))?;
    let word = word.trim();
    let tag = tag.trim();
    if word.is_empty() || tag.len() != 1 {
        return Err(Error::BadInputLine(line.to_string()));
    }
    let digit = tag.chars().next().expect("len checked above");
    let value = match digit {
        '0'..='9' => digit as u8 - b'0',
        'A'..='F' => digit as u8 - b'A' + 10,
        _ => return Err(Error::BadTag(tag.to_string())),
    };
    Ok((word.as_bytes().to_vec(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_word_list_with_no_sentinels() {
        let words = parse("aa, 1\na, 2\n").unwrap();
        assert_eq!(words, vec![(b"aa".to_vec(), 1), (b"a".to_vec(), 2)]);
    }

    #[test]
    fn only_lines_between_the_first_two_sentinels_are_dictionary_content() {
        let input = "%% ignored header\n%%\naa, 1\na, 2\n%%\ntrailing junk, 9\n";
        let words = parse(input).unwrap();
        assert_eq!(words, vec![(b"aa".to_vec(), 1), (b"a".to_vec(), 2)]);
    }

    #[test]
    fn blank_lines_in_the_dictionary_are_skipped() {
        let words = parse("aa, 1\n\n  \na, 2\n").unwrap();
        assert_eq!(words, vec![(b"aa".to_vec(), 1), (b"a".to_vec(), 2)]);
    }

    #[test]
    fn hex_digits_above_nine_are_accepted() {
        let words = parse("ff, F\n").unwrap();
        assert_eq!(words, vec![(b"ff".to_vec(), 15)]);
    }

    #[test]
    fn a_line_with_no_comma_is_a_bad_input_line() {
        let err = parse("noseparator\n").unwrap_err();
        assert!(matches!(err, Error::BadInputLine(_)));
    }

    #[test]
    fn a_multi_character_tag_is_a_bad_input_line() {
        let err = parse("aa, 12\n").unwrap_err();
        assert!(matches!(err, Error::BadInputLine(_)));
    }

    #[test]
    fn a_digit_outside_the_hex_alphabet_is_a_bad_tag() {
        let err = parse("aa, G\n").unwrap_err();
        assert!(matches!(err, Error::BadTag(_)));
    }

    #[test]
    fn lowercase_hex_letters_are_rejected_not_silently_accepted() {
        let err = parse("aa, f\n").unwrap_err();
        assert!(matches!(err, Error::BadTag(_)));
    }
}
