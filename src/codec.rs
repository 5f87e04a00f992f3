use crate::profile::Profile;

/// Field name for the display name line
const NAME_FIELD: &str = "name";
/// Field name for the email line
const EMAIL_FIELD: &str = "email";

/// A block being accumulated while scanning the file
struct PendingBlock {
    key: String,
    name: Option<String>,
    email: Option<String>,
}

impl PendingBlock {
    fn new(key: String) -> Self {
        Self { key, name: None, email: None }
    }

    /// Commits the block only when both fields were seen; incomplete
    /// blocks are dropped without error
    fn commit(self, profiles: &mut Vec<Profile>) {
        if let (Some(name), Some(email)) = (self.name, self.email) {
            profiles.push(Profile { key: self.key, name, email });
        }
    }
}

/// Parses the profiles file text into a first-seen-order profile list.
///
/// A block starts at any non-blank line with zero indentation; a trailing
/// `:` on the key line is optional. Indented `name:` and `email:` lines
/// fill the block, other indented lines are ignored. Malformed input never
/// errors, the worst case is an empty list.
pub fn parse(text: &str) -> Vec<Profile> {
    let mut profiles: Vec<Profile> = Vec::new();
    let mut current: Option<PendingBlock> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if !line.starts_with(char::is_whitespace) {
            if let Some(block) = current.take() {
                block.commit(&mut profiles);
            }
            let key = line.trim().trim_end_matches(':').to_string();
            current = Some(PendingBlock::new(key));
            continue;
        }

        let Some(block) = current.as_mut() else {
            // Indented line before any block header
            continue;
        };
        if let Some((field, value)) = line.split_once(':') {
            match field.trim() {
                NAME_FIELD => block.name = Some(value.trim().to_string()),
                EMAIL_FIELD => block.email = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    if let Some(block) = current.take() {
        block.commit(&mut profiles);
    }

    profiles
}

/// Serializes profiles back to the file format, one block per profile in
/// iteration order. The key line always carries the trailing `:`; this is
/// the single canonical writer form even though `parse` also accepts the
/// bare-key header.
pub fn serialize(profiles: &[Profile]) -> String {
    profiles
        .iter()
        .map(|profile| {
            format!(
                "{}:\n  {}: {}\n  {}: {}\n",
                profile.key, NAME_FIELD, profile.name, EMAIL_FIELD, profile.email
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_delimited_and_bare_headers() {
        let text = "work:\n  name: W\n  email: w@x.com\n\nhome\n  name: H\n  email: h@x.com\n";
        let profiles = parse(text);
        assert_eq!(
            profiles,
            vec![Profile::new("work", "W", "w@x.com"), Profile::new("home", "H", "h@x.com")]
        );
    }

    #[test]
    fn blocks_split_without_blank_separator() {
        let text = "a:\n  name: A\n  email: a@x.com\nb:\n  name: B\n  email: b@x.com";
        let profiles = parse(text);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].key, "b");
    }

    #[test]
    fn incomplete_block_is_dropped() {
        let text = "nameless:\n  email: n@x.com\n\nok:\n  name: O\n  email: o@x.com\n";
        let profiles = parse(text);
        assert_eq!(profiles, vec![Profile::new("ok", "O", "o@x.com")]);
    }

    #[test]
    fn final_block_missing_email_is_dropped() {
        let text = "ok:\n  name: O\n  email: o@x.com\n\ntail:\n  name: T\n";
        let profiles = parse(text);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].key, "ok");
    }

    #[test]
    fn unknown_indented_lines_are_ignored() {
        let text = "work:\n  name: W\n  signingkey: ABC123\n  email: w@x.com\n  note - no delimiter\n";
        let profiles = parse(text);
        assert_eq!(profiles, vec![Profile::new("work", "W", "w@x.com")]);
    }

    #[test]
    fn value_keeps_text_after_first_delimiter() {
        let text = "x:\n  name: Dr. Who: The First\n  email: d@x.com\n";
        let profiles = parse(text);
        assert_eq!(profiles[0].name, "Dr. Who: The First");
    }

    #[test]
    fn indented_lines_before_any_header_are_ignored() {
        let text = "  name: stray\n  email: s@x.com\nreal:\n  name: R\n  email: r@x.com\n";
        let profiles = parse(text);
        assert_eq!(profiles, vec![Profile::new("real", "R", "r@x.com")]);
    }

    #[test]
    fn empty_and_garbage_input_parse_to_empty() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n").is_empty());
        assert!(parse("just a key line").is_empty());
    }

    #[test]
    fn serialize_then_parse_round_trips() {
        let profiles = vec![
            Profile::new("work", "Work Me", "work@example.com"),
            Profile::new("personal", "Home Me", "home@example.com"),
        ];
        assert_eq!(parse(&serialize(&profiles)), profiles);
    }

    #[test]
    fn serialize_emits_delimited_header_blocks() {
        let profiles = vec![Profile::new("work", "W", "w@x.com")];
        assert_eq!(serialize(&profiles), "work:\n  name: W\n  email: w@x.com\n");
    }
}
