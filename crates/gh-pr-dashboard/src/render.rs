//! HTML dashboard rendering
//!
//! Produces one self-contained page: download stats on top, then the table
//! of open pull requests with their CI counts.

use crate::domain_models::{DashboardPullRequest, PlatformStats, StatusCounts};
use crate::state::DashboardSnapshot;
use std::fmt::{self, Write};

/// Render the dashboard page for a snapshot
pub fn render_dashboard(snapshot: &DashboardSnapshot) -> Result<String, fmt::Error> {
    let mut rows = String::new();
    for pr in &snapshot.pull_requests {
        render_row(&mut rows, pr)?;
    }

    let mut page = String::new();
    write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pull requests dashboard</title>
    <style>{css}</style>
</head>
<body>
    {stats}
    <h2>Open pull requests ({count} in {repos} repositories)</h2>
    <table>
        <thead>
            <tr><th>Repository</th><th>#</th><th>Title</th><th>Author</th><th>Created</th><th>CI</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
</body>
</html>
"#,
        css = inline_css(),
        stats = render_stats(snapshot.stats.as_ref()),
        count = snapshot.pull_requests.len(),
        repos = snapshot.repository_count,
        rows = rows,
    )?;

    Ok(page)
}

fn render_stats(stats: Option<&PlatformStats>) -> String {
    let Some(stats) = stats else {
        return r#"<section class="stats"><p>No download statistics yet.</p></section>"#
            .to_string();
    };

    let mut cells = String::new();
    for (label, value) in PlatformStats::PLATFORMS
        .iter()
        .copied()
        .chain(std::iter::once("total"))
        .zip(stats.as_array())
    {
        cells.push_str(&format!(
            r#"<div class="stat"><span class="label">{}</span><span class="value">{:.0}</span></div>"#,
            label, value
        ));
    }

    format!(r#"<section class="stats">{}</section>"#, cells)
}

fn render_row(out: &mut String, pr: &DashboardPullRequest) -> fmt::Result {
    let p = &pr.pull_request;
    writeln!(
        out,
        r#"            <tr{draft}><td>{repo}</td><td>{number}</td><td><a href="{url}">{title}</a></td><td>{author}</td><td>{created}</td><td>{ci}</td></tr>"#,
        draft = if p.draft { r#" class="draft""# } else { "" },
        repo = escape_html(&p.repository),
        number = p.number,
        url = escape_html(&p.html_url),
        title = escape_html(&p.title),
        author = escape_html(&p.author),
        created = p.created_at.format("%Y-%m-%d %H:%M"),
        ci = render_status(&pr.status),
    )
}

fn render_status(status: &StatusCounts) -> String {
    if status.total == 0 {
        return r#"<span class="badge none">no checks</span>"#.to_string();
    }

    let class = if status.failures > 0 {
        "failure"
    } else if status.pending > 0 {
        "pending"
    } else {
        "success"
    };

    format!(
        r#"<span class="badge {}" title="{} failing, {} pending, {} passing">{}/{}/{}</span>"#,
        class,
        status.failures,
        status.pending,
        status.settled(),
        status.failures,
        status.pending,
        status.total
    )
}

/// Escape text for use in HTML content and attribute values
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 2rem; color: #24292f; }
.stats { display: flex; gap: 1.5rem; margin-bottom: 2rem; }
.stat { display: flex; flex-direction: column; padding: 0.75rem 1.25rem; border: 1px solid #d0d7de; border-radius: 6px; }
.stat .label { font-size: 0.8rem; text-transform: uppercase; color: #57606a; }
.stat .value { font-size: 1.5rem; font-weight: 600; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #d0d7de; }
tr.draft td { color: #8c959f; }
.badge { padding: 0.1rem 0.5rem; border-radius: 1rem; font-size: 0.85rem; color: #fff; }
.badge.success { background: #1a7f37; }
.badge.pending { background: #bf8700; }
.badge.failure { background: #cf222e; }
.badge.none { background: #8c959f; }
"#
}
