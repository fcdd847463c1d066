pub const PERMISSIONS_TEMPLATE: &str = r#"
<section class="section permissions">
  <div class="page-header">User Permission Statistics</div>
  <table class="table">
    <thead>
      <tr>
        <th scope="col">User</th>
        {% for permission in matrix.permissions %}
          <th scope="col">{{ permission }}</th>
        {% endfor %}
      </tr>
    </thead>
    <tbody>
      {% for row in matrix.rows %}
        <tr>
          <th scope="row">{{ row.user }}</th>
          {% for cell in row.cells %}
            <td>{{ cell }}</td>
          {% endfor %}
        </tr>
      {% endfor %}
    </tbody>
  </table>
</section>
"#;
