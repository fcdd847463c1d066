pub const OAUTH_APPS_TEMPLATE: &str = r#"
<section class="section apps">
  <div class="page-header">OAuth App Statistics</div>
  {% if apps|length == 0 %}
    <div class="empty">No OAuth applications were found.</div>
  {% else %}
    <ul class="paperlist">
      {% for app in apps %}
        <li class="paper">
          <div class="papertitle">{{ app.name }} (ID: {{ app.id }})</div>
          {% if app.description %}
            <div class="description"><b>Description:</b> {{ app.description }}</div>
          {% endif %}
          <div class="state state-{{ app.state|lower }}"><b>Status:</b> {{ app.state }}</div>
          {% if app.requested_by %}
            <div class="requester"><b>Requested By:</b> {{ app.requested_by }}</div>
          {% endif %}
        </li>
      {% endfor %}
    </ul>
  {% endif %}
</section>
"#;
