//! HTML rendering for the attendance page.
//!
//! Every user-supplied value passes through [`escape_html`].

use std::fmt::Write;

use vahter_core::Record;

pub fn escape_html(s: &str) -> String {
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

const STYLE: &str = r#"
        body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
        form { display: grid; grid-template-columns: 8rem 1fr; gap: .5rem; margin-bottom: 2rem; }
        form button { grid-column: 2; justify-self: start; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ccc; padding: .4rem .6rem; text-align: left; }
        th { background: #f4f4f4; }
        .empty { color: #777; }"#;

/// Render the full page: the entry form followed by `records` in the given order.
pub fn render(title: &str, records: &[Record]) -> String {
    let title = escape_html(title);
    let mut out = String::with_capacity(2048 + records.len() * 160);

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <title>{title}</title>
    <style>{STYLE}
    </style>
</head>
<body>
    <h1>{title}</h1>

    <form method="post" action="/">
        <label for="name">Name</label>
        <input type="text" id="name" name="name" required />
        <label for="role">Role</label>
        <input type="text" id="role" name="role" required />
        <label for="note">Note</label>
        <input type="text" id="note" name="note" />
        <button type="submit">Register</button>
    </form>
"#
    );

    if records.is_empty() {
        out.push_str("    <p class=\"empty\">No records yet.</p>\n");
    } else {
        out.push_str(
            "    <table>\n        <thead><tr><th>Time</th><th>Name</th><th>Role</th><th>Note</th></tr></thead>\n        <tbody>\n",
        );
        for r in records {
            let _ = writeln!(
                out,
                "            <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(r.timestamp.as_str()),
                escape_html(&r.name),
                escape_html(&r.role),
                escape_html(&r.note),
            );
        }
        out.push_str("        </tbody>\n    </table>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
