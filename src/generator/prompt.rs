use super::schema::OutputSchema;
use crate::core::Language;

/// Bumped whenever the wording of [`FLASHCARD_TEMPLATE`] changes.
pub const PROMPT_VERSION: u32 = 1;

const FLASHCARD_TEMPLATE: &str = "\
For the following expression, extract the following information:

input_expression: Original expression entered by the user, but refined to create translated_expression (for flashcard for language learning). If the expression is too long (more than 10 words), it should be shortened while keeping the sense.

input_language: Language of the input expression

output_expression: Refined input expression translated to {output_language} language. Provide 2 alternatives, separated with 'slash' sign (and space before & after the sign).

example_usage: Example usage of input expression, used to give the user some example context where it could be used. Limited to one sentence.

input_expression: {input_expression}
input_language: {input_language}

{format_instructions}
";

pub fn flashcard_prompt(
    expression: &str,
    input_language: Language,
    output_language: Language,
    schema: &OutputSchema,
) -> String {
    let format_instructions = schema.format_instructions();

    render(
        FLASHCARD_TEMPLATE,
        &[
            ("input_expression", expression),
            ("input_language", input_language.name()),
            ("output_language", output_language.name()),
            ("format_instructions", &format_instructions),
        ],
    )
}

/// Substitutes `{name}` placeholders in a single pass.
///
/// Substituted text is never scanned again, so braces inside user input stay
/// literal. Unknown placeholders are left untouched.
fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];

        let substitution = after_brace.find('}').and_then(|end| {
            let name = &after_brace[..end];
            variables
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });

        match substitution {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after_brace[end + 1..];
            }
            None => {
                output.push('{');
                rest = after_brace;
            }
        }
    }

    output.push_str(rest);
    output
}
