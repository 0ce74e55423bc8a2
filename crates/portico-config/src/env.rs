use std::sync::OnceLock;

use regex::Regex;

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` with an optional `| default("fallback")` clause
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// Runs before deserialization so config structs hold plain values. A
/// missing variable is an error unless the placeholder declares a default.
/// Comment lines pass through untouched.
pub fn expand_env(raw: &str) -> anyhow::Result<String> {
    let mut output = String::with_capacity(raw.len());

    for (index, line) in raw.lines().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut cursor = 0;
        for captures in placeholder().captures_iter(line) {
            let matched = captures.get(0).expect("capture 0 always present");
            let name = &captures[1];

            output.push_str(&line[cursor..matched.start()]);
            match std::env::var(name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match captures.get(2) {
                    Some(default) => output.push_str(default.as_str()),
                    None => anyhow::bail!("environment variable not found: `{name}`"),
                },
            }
            cursor = matched.end();
        }
        output.push_str(&line[cursor..]);
    }

    if raw.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
