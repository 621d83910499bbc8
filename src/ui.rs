use crate::models::{BrainDumpNote, DashboardSummary};
use crate::progress::{MENTAL_GOAL, NUTRITION_GOAL, READING_GOAL, RELATIONSHIP_GOAL, SPORT_GOAL, UNI_WEEKLY_GOAL};

/// A widget button: label, form target, JSON endpoint, and the step it sends
/// as `delta`. A zero step is a toggle whose direction the page cannot know.
type Action = (&'static str, &'static str, &'static str, i64);

pub fn render_index(summary: &DashboardSummary, notes: &[BrainDumpNote]) -> String {
    let widgets = [
        widget(
            "sport",
            "Sport",
            summary.sport,
            SPORT_GOAL,
            &[("+1", "/sport/quick-add", "/api/sport/quick-add", 1), ("Undo", "/sport/undo", "/api/sport/undo", -1)],
        ),
        widget(
            "reading",
            "Reading",
            summary.reading,
            READING_GOAL,
            &[
                ("+1", "/reading/quick-add", "/api/reading/quick-add", 1),
                ("Undo", "/reading/undo", "/api/reading/undo", -1),
            ],
        ),
        widget(
            "nutrition",
            "Nutrition",
            summary.nutrition,
            NUTRITION_GOAL,
            &[
                ("+1", "/nutrition/quick-add", "/api/nutrition/quick-add", 1),
                ("Undo", "/nutrition/undo", "/api/nutrition/undo", -1),
            ],
        ),
        widget(
            "relationship",
            "Relationship",
            summary.relationship,
            RELATIONSHIP_GOAL,
            &[("Together", "/relationship/together", "/api/relationship/together", 0)],
        ),
        widget(
            "mental",
            "Me time",
            summary.mental,
            MENTAL_GOAL,
            &[("+1h", "/mental/add", "/api/mental/adjust", 1), ("-1h", "/mental/sub", "/api/mental/adjust", -1)],
        ),
        widget("uni", "Deep work", summary.uni, UNI_WEEKLY_GOAL, &[]),
    ]
    .join("\n");

    let days = summary
        .last_7_days
        .iter()
        .map(|day| {
            format!(
                r#"<li><span class="label">{}</span><span>{}% nutrition</span><span>{} min</span><span>{}</span></li>"#,
                escape(&day.date[5..]),
                day.nutrition,
                day.deep_work_minutes,
                if day.together { "together" } else { "-" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let note_items = if notes.is_empty() {
        r#"<li class="hint">Inbox zero.</li>"#.to_string()
    } else {
        notes
            .iter()
            .map(|note| {
                format!(
                    r#"<li><span>{}</span><form method="post" action="/notes/{}/process"><button class="btn-small" type="submit">Done</button></form></li>"#,
                    escape(&note.content),
                    note.id
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    INDEX_HTML
        .replace("{{DATE}}", &escape(&summary.date))
        .replace("{{WEEK}}", &escape(&summary.week))
        .replace("{{OVERALL}}", &summary.overall.to_string())
        .replace("{{JOURNAL}}", &summary.journal_today.to_string())
        .replace("{{TASKS}}", &summary.open_tasks.to_string())
        .replace("{{WIDGETS}}", &widgets)
        .replace("{{DAYS}}", &days)
        .replace("{{NOTES}}", &note_items)
}

/// `goal` is the number of steps that make 100%, so one step moves the
/// displayed value by `100 / goal` before the server answers.
fn widget(id: &str, title: &str, percent: u8, goal: u32, actions: &[Action]) -> String {
    let buttons = actions
        .iter()
        .map(|(label, form, api, step)| {
            let class = if *step < 0 { "btn-sub" } else { "btn-add" };
            format!(
                r#"<form method="post" action="{form}" data-widget="{id}" data-api="{api}" data-step="{step}"><button class="{class}" type="submit">{label}</button></form>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");
    format!(
        r#"<div class="stat" id="widget-{id}" data-goal="{goal}">
        <span class="label">{title}</span>
        <span class="value" data-percent="{percent}">{percent}%</span>
        <div class="bar"><div class="fill" style="width: {percent}%"></div></div>
        <div class="actions">{buttons}</div>
      </div>"#
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Life Dashboard</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .subtitle, .hint {
      margin: 0;
      color: #5f5c57;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .fill {
      height: 100%;
      background: var(--accent);
    }

    .actions {
      display: flex;
      gap: 8px;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent-2);
    }

    .btn-add {
      background: var(--accent);
    }

    ul {
      list-style: none;
      padding: 0;
      margin: 0;
      display: grid;
      gap: 8px;
    }

    li {
      display: flex;
      gap: 16px;
      align-items: center;
      justify-content: space-between;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Life Dashboard</h1>
      <p class="subtitle">{{DATE}} &middot; {{WEEK}}</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Overall</span>
        <span class="value">{{OVERALL}}%</span>
      </div>
      <div class="stat">
        <span class="label">Journal today</span>
        <span class="value">{{JOURNAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Open tasks</span>
        <span class="value">{{TASKS}}</span>
      </div>
    </section>

    <section class="panel">
{{WIDGETS}}
    </section>

    <section>
      <h2>Last 7 days</h2>
      <ul>
{{DAYS}}
      </ul>
    </section>

    <section>
      <h2>Brain dump</h2>
      <form method="post" action="/notes" class="actions">
        <input name="content" placeholder="Get it out of your head" required />
        <button type="submit">Add</button>
      </form>
      <ul>
{{NOTES}}
      </ul>
    </section>
  </main>

  <script>
    // Optimistic update: the widget moves by one step of its goal (toggles
    // only show a pending marker), then the page is reloaded from the server
    // whatever the outcome, so failures roll back.
    document.querySelectorAll('form[data-widget]').forEach((form) => {
      form.addEventListener('submit', async (event) => {
        event.preventDefault();
        const widget = document.getElementById(`widget-${form.dataset.widget}`);
        const valueEl = widget.querySelector('.value');
        const fillEl = widget.querySelector('.fill');
        const before = valueEl.textContent;
        const step = Number(form.dataset.step);
        if (step === 0) {
          valueEl.textContent = '...';
        } else {
          const current = Number(valueEl.dataset.percent);
          const next = Math.min(100, Math.max(0, Math.round(current + (step * 100) / Number(widget.dataset.goal))));
          valueEl.textContent = `${next}%`;
          fillEl.style.width = `${next}%`;
        }
        try {
          const res = await fetch(form.dataset.api, {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({ delta: step })
          });
          const body = res.ok ? await res.json() : { success: false };
          if (!body.success) {
            valueEl.textContent = before;
          }
        } catch (err) {
          valueEl.textContent = before;
        }
        window.location.reload();
      });
    });
  </script>
</body>
</html>
"#;
