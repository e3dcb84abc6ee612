//! HTML rendering for the single form page.
//!
//! All user-supplied text and the result are escaped before insertion.

use std::fmt::Write;

use refinery::{Mode, PromptInputs, Tone};

/// What the page shows: empty form, or echoed inputs plus a result.
pub(crate) struct PageView<'a> {
    pub(crate) inputs: Option<&'a PromptInputs>,
    pub(crate) result: Option<&'a str>,
    pub(crate) timestamp: Option<String>,
}

impl PageView<'_> {
    pub(crate) fn empty() -> Self {
        Self {
            inputs: None,
            result: None,
            timestamp: None,
        }
    }
}

/// Escapes `& < > " '` for text and attribute contexts.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}

fn tone_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "Neutral",
        Tone::Friendly => "Friendly",
        Tone::Professional => "Professional",
        Tone::Playful => "Playful",
    }
}

pub(crate) fn render_page(view: &PageView<'_>) -> String {
    let mode = view.inputs.map(|i| i.mode).unwrap_or_default();
    let tone = view.inputs.map(|i| i.tone).unwrap_or_default();
    let echo = |value: Option<&String>| value.map(|v| escape_html(v)).unwrap_or_default();
    let original_prompt = echo(view.inputs.map(|i| &i.original_prompt));
    let goal = echo(view.inputs.map(|i| &i.goal));
    let audience = echo(view.inputs.map(|i| &i.audience));
    let constraints = echo(view.inputs.map(|i| &i.constraints));

    let mut tone_options = String::new();
    for t in Tone::ALL {
        let _ = write!(
            tone_options,
            "<option value=\"{}\"{}>{}</option>",
            t.as_str(),
            selected(t == tone),
            tone_label(t)
        );
    }

    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Prompt Refinery</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n<body>\n<main>\n\
         <h1>Prompt Refinery</h1>\n\
         <p class=\"lede\">Refine an existing prompt or generate a new one from a goal.</p>\n",
    );
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/refine\">\n\
         <label for=\"mode\">Mode</label>\n\
         <select id=\"mode\" name=\"mode\">\
         <option value=\"refine\"{refine_sel}>Refine a prompt</option>\
         <option value=\"generate\"{generate_sel}>Generate from a goal</option>\
         </select>\n\
         <label for=\"original_prompt\">Original prompt</label>\n\
         <textarea id=\"original_prompt\" name=\"original_prompt\" rows=\"6\">{original_prompt}</textarea>\n\
         <label for=\"goal\">Goal</label>\n\
         <input id=\"goal\" name=\"goal\" type=\"text\" value=\"{goal}\">\n\
         <label for=\"audience\">Audience</label>\n\
         <input id=\"audience\" name=\"audience\" type=\"text\" placeholder=\"general\" value=\"{audience}\">\n\
         <label for=\"tone\">Tone</label>\n\
         <select id=\"tone\" name=\"tone\">{tone_options}</select>\n\
         <label for=\"constraints\">Constraints</label>\n\
         <textarea id=\"constraints\" name=\"constraints\" rows=\"3\">{constraints}</textarea>\n\
         <button type=\"submit\">Refine</button>\n\
         </form>\n",
        refine_sel = selected(mode == Mode::Refine),
        generate_sel = selected(mode == Mode::Generate),
    );

    if let Some(result) = view.result {
        let _ = write!(
            html,
            "<section class=\"result\">\n\
             <h2>Result</h2>\n\
             <p class=\"timestamp\">{}</p>\n\
             <pre>{}</pre>\n\
             </section>\n",
            escape_html(view.timestamp.as_deref().unwrap_or_default()),
            escape_html(result)
        );
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}
