pub const REPORT_PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Report for {{ organization }}</title>
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <link rel="stylesheet" href="./report.css" type="text/css" />
  <link rel="icon" href="./favicon.svg" type="image/svg+xml" />
</head>
<body>
  <main class="container">
    <header>
      <div class="scantitle">Summary for {{ organization }}</div>
      <div class="stamp">Report generated at: {{ generated_at }}</div>
    </header>

    <section class="section issues">
      <div class="page-header">Issues detected</div>
      {% if issues|length == 0 %}
        <div class="empty">No issues were detected.</div>
      {% else %}
        <ul class="paperlist">
          {% for issue in issues %}
            <li class="paper" id="{{ issue.id }}">
              <div class="papertitle">{{ issue.severity_html|safe }} {{ issue.name }}</div>
              {% if issue.cwes_html %}
                <div class="cwes"><b>Related CWEs:</b> {{ issue.cwes_html|safe }}</div>
              {% endif %}
              <div class="description"><b>Description:</b> {{ issue.description_html|safe }}</div>
              <div class="remediation"><b>Remediation:</b> {{ issue.remediation_html|safe }}</div>
              {% if issue.resources %}
                <details class="resources">
                  <summary>[vulnerable resources]</summary>
                  <ul>
                    {% for resource in issue.resources %}
                      <li>{{ resource }}</li>
                    {% endfor %}
                  </ul>
                </details>
              {% endif %}
            </li>
          {% endfor %}
        </ul>
      {% endif %}
    </section>

    <section class="section passed">
      <div class="page-header">Checks Passed</div>
      <ul class="paperlist">
        {% for check in passed_checks %}
          <li class="paper">
            <div class="papertitle" title="{{ check.id }}">
              {{ check.name }}
              <svg class="checkmark" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 40"><path class="checkmark__check" fill="none" d="M14.1 27.2l7.1 7.2 16.7-16.8"/></svg>
            </div>
          </li>
        {% endfor %}
      </ul>
    </section>

    {{ app_section|safe }}
    {{ permission_section|safe }}
  </main>
</body>
</html>
"#;
