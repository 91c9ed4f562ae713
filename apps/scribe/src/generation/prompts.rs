// All LLM prompt templates for the generation module.
// Placeholders are filled with `.replace` in generator.rs before sending.

/// Diagram generation template. Replace `{imports}` and `{prompt}`.
pub const DIAGRAM_PROMPT_TEMPLATE: &str = r#"You are an expert at writing diagrams-as-code.

You may use ONLY the following component imports:
{imports}

Create a diagram for the following request:
{prompt}

Rules:
- Respond with exactly one fenced code block and nothing else.
- Use only components from the imports listed above.
- Save the finished diagram in a variable named `diagram_output`.
"#;

/// Generic code generation template. Replace `{prompt}`.
pub const CODE_PROMPT_TEMPLATE: &str = r#"You are an expert software engineer.

Write code for the following request:
{prompt}

Respond with exactly one fenced code block and nothing else.
"#;

/// Free-text generation template. Replace `{prompt}`.
pub const TEXT_PROMPT_TEMPLATE: &str = r#"Answer the following request in plain prose.

{prompt}
"#;
