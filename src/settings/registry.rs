#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegSection {
    entries: Vec<(String, String)>,
}

impl RegSection {
    pub fn parse(content: &str, name: &str) -> Option<Self> {
        let mut lines = content.lines();
        lines.find(|line| header_name(line) == Some(name))?;

        let entries = lines
            .take_while(|line| !line.trim_start().starts_with('['))
            .filter_map(parse_entry)
            .collect();

        Some(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Wine appends a modification timestamp after the closing bracket.
fn header_name(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('[')?;
    let end = rest.rfind(']')?;
    Some(&rest[..end])
}

fn parse_entry(line: &str) -> Option<(String, String)> {
    let rest = line.trim().strip_prefix('"')?;
    let (name, rest) = split_quoted(rest)?;
    let value = rest.trim_start().strip_prefix('=')?.trim();

    let raw = match value.split_once(':') {
        Some((_, raw)) => raw.trim(),
        None => value,
    };

    Some((name, raw.to_string()))
}

// Splits `name"rest` at the closing quote, honoring backslash escapes.
fn split_quoted(input: &str) -> Option<(String, &str)> {
    let mut name = String::new();
    let mut chars = input.char_indices();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => {
                let (_, escaped) = chars.next()?;
                name.push(escaped);
            }
            '"' => return Some((name, &input[index + 1..])),
            _ => name.push(ch),
        }
    }

    None
}
