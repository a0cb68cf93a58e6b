//! Prompt template for code explanation

const EXPLANATION_HEADER: &str = "\
Please explain this code at a high level. Include:
1. What the code does
2. Key components and their purposes
3. Any notable features or patterns
4. Potential use cases
";

/// Build the explanation prompt for `code`, fenced with the `language` tag.
///
/// The code is embedded verbatim: nothing is truncated or chunked, so an
/// arbitrarily large file produces an arbitrarily large prompt and is left
/// to the model API to accept or reject.
pub fn explanation_prompt(code: &str, language: &str) -> String {
    let mut prompt = String::with_capacity(EXPLANATION_HEADER.len() + language.len() + code.len() + 16);

    prompt.push_str(EXPLANATION_HEADER);
    prompt.push_str("\nCode:\n```");
    prompt.push_str(language);
    prompt.push('\n');
    prompt.push_str(code);
    prompt.push_str("\n```\n");

    prompt
}
