//! HTML rendering for the single page. Purely presentational: everything here
//! reads a [`PageState`] and writes markup, nothing more. Field values inside
//! a `PageState` are already sanitized by the processor and are embedded
//! verbatim.

use crate::core::{PageState, ProfileCard, SanitizedInput, ValidationErrors};

const STYLE: &str = "\
:root { --bg: #fff5f7; --text: #2d1b2e; --muted: #8b6f8e; --border: #f3d4e5; \
--danger: #d63384; --ok: #198754; --primary: #d63384; }\n\
* { box-sizing: border-box; }\n\
body { margin: 0; padding: 32px 24px; background: var(--bg); color: var(--text); \
font-family: 'Segoe UI', system-ui, sans-serif; line-height: 1.6; }\n\
header, footer, .card { background: #fff; border: 2px solid var(--border); \
border-radius: 20px; padding: 28px; }\n\
h1 { margin: 0 0 12px; color: var(--primary); }\n\
h2 { margin: 0 0 20px; color: var(--primary); border-bottom: 3px solid var(--border); \
padding-bottom: 10px; }\n\
.lead, .muted { color: var(--muted); margin: 0; }\n\
.grid { display: grid; gap: 24px; grid-template-columns: 1fr 1fr; margin-top: 28px; }\n\
label { display: block; margin-bottom: 18px; font-weight: 600; }\n\
input { width: 100%; padding: 12px 16px; margin-top: 6px; border: 2px solid var(--border); \
border-radius: 12px; font: inherit; }\n\
button { padding: 12px 24px; border: 0; border-radius: 12px; background: var(--primary); \
color: #fff; font-weight: 700; cursor: pointer; }\n\
.error { color: var(--danger); font-size: 0.85em; display: block; margin-top: 6px; }\n\
.badge { display: inline-block; margin-left: 12px; font-size: 0.8em; padding: 6px 14px; \
border: 2px solid var(--border); border-radius: 20px; color: var(--primary); }\n\
.profile { border-left: 5px solid var(--primary); padding: 8px 0 8px 16px; margin-bottom: 16px; }\n\
.ok { color: var(--ok); background: #f0fdf4; padding: 12px; border-radius: 10px; \
border-left: 4px solid var(--ok); }\n\
.list { list-style: none; margin: 0 0 16px; padding: 0; }\n\
.list li { padding: 8px 0; border-bottom: 1px solid var(--border); }\n\
@media (max-width: 900px) { .grid { grid-template-columns: 1fr; } }\n";

/// Renders the complete document for the given page state.
pub fn page(state: &PageState) -> String {
    let (input, errors) = match state {
        PageState::Initial => (None, None),
        PageState::Result { input, .. } => (Some(input), None),
        PageState::ResultWithErrors { input, errors } => (Some(input), Some(errors)),
    };

    let mut html = String::with_capacity(4096);
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Profile Card</title>\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<header>\n<h1>Profile Card</h1>\n");
    html.push_str(
        "<p class=\"lead\">Fill in the form to generate your personalized profile card.</p>\n",
    );
    html.push_str("</header>\n<main class=\"grid\">\n");

    html.push_str(&form_section(input, errors));
    html.push_str(&result_section(state));

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn form_section(input: Option<&SanitizedInput>, errors: Option<&ValidationErrors>) -> String {
    let empty = SanitizedInput::default();
    let values = input.unwrap_or(&empty);
    let no_errors = ValidationErrors::default();
    let errors = errors.unwrap_or(&no_errors);

    let mut s = String::new();
    s.push_str("<section class=\"card\">\n<h2>Form</h2>\n");
    s.push_str("<form action=\"/\" method=\"post\" novalidate>\n");

    s.push_str(&field(
        "Name",
        "name",
        "text",
        &values.name,
        " minlength=\"2\" autocomplete=\"name\"",
        errors.name.as_deref(),
    ));
    s.push_str(&field(
        "Age",
        "age",
        "number",
        &values.age,
        " min=\"0\" max=\"120\" step=\"1\"",
        errors.age.as_deref(),
    ));
    s.push_str(&field(
        "Hobby",
        "hobby",
        "text",
        &values.hobby,
        " minlength=\"3\" autocomplete=\"off\"",
        errors.hobby.as_deref(),
    ));

    s.push_str("<div class=\"actions\">\n<button type=\"submit\">Generate Card</button>\n</div>\n");
    s.push_str("</form>\n</section>\n");
    s
}

fn field(
    label: &str,
    field_name: &str,
    input_type: &str,
    value: &str,
    extra_attrs: &str,
    error: Option<&str>,
) -> String {
    let mut s = format!(
        "<label>{label}\n<input type=\"{input_type}\" name=\"{field_name}\" value=\"{value}\" required{extra_attrs}>\n"
    );
    if let Some(message) = error {
        s.push_str(&format!("<small class=\"error\">{message}</small>\n"));
    }
    s.push_str("</label>\n");
    s
}

fn result_section(state: &PageState) -> String {
    let mut s = String::new();
    s.push_str("<section class=\"card\">\n<h2>Result</h2>\n");

    match state {
        PageState::Result { card, .. } => s.push_str(&profile_card(card)),
        _ => {
            s.push_str(
                "<p class=\"muted\">Fill in the form and press <strong>Generate Card</strong> \
                 to see your personalized profile.</p>\n",
            );
        }
    }

    s.push_str("</section>\n");
    s
}

fn profile_card(card: &ProfileCard) -> String {
    format!(
        "<div class=\"profile\">\n\
         <h3>{name} <span class=\"badge\">{label}</span></h3>\n\
         </div>\n\
         <ul class=\"list\">\n\
         <li><strong>Age:</strong> {age}</li>\n\
         <li><strong>Hobby:</strong> {hobby}</li>\n\
         </ul>\n\
         <p class=\"ok\"><strong>Message:</strong> {message}</p>\n\
         <p class=\"muted\">Content rendered server-side.</p>\n",
        name = card.name,
        label = card.bracket.label(),
        age = card.age,
        hobby = card.hobby,
        message = card.bracket.message(),
    )
}
