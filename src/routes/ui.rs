use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Finsight - AI Financial Document Analyzer</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }
    h1 { margin-bottom: 0.5rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    .uploads { display: flex; gap: 1rem; flex-wrap: wrap; }
    .uploads .slot { flex: 1; min-width: 200px; }
    label { display: block; margin-bottom: 0.5rem; font-weight: 600; }
    input[type="file"] { width: 100%; }
    button { margin-top: 1rem; padding: 0.6rem 1.2rem; }
    .notice { color: #555; }
    .notice.warning { color: #b45309; }
    .summary { white-space: pre-wrap; background: #f6f8fa; padding: 1rem; border-radius: 6px; }
    table { border-collapse: collapse; margin: 0.75rem 0; }
    th, td { border: 1px solid #ccc; padding: 0.35rem 0.6rem; text-align: left; }
    #status { margin-left: 0.75rem; }
  </style>
</head>
<body>
  <h1>Finsight</h1>
  <p>Upload your financial files and get AI-powered insights.</p>

  <div class="card">
    <h2>Upload Files</h2>
    <div class="uploads">
      <div class="slot">
        <label for="balance_sheet">Balance Sheet</label>
        <input id="balance_sheet" type="file" accept=".csv,.xlsx" />
      </div>
      <div class="slot">
        <label for="profit_loss">Profit &amp; Loss</label>
        <input id="profit_loss" type="file" accept=".csv,.xlsx" />
      </div>
      <div class="slot">
        <label for="cash_flow">Cash Flow</label>
        <input id="cash_flow" type="file" accept=".csv,.xlsx" />
      </div>
    </div>
    <button id="generateBtn">Generate Report</button>
    <span id="status"></span>
  </div>

  <div id="results"></div>

  <script>
    const generateBtn = document.getElementById('generateBtn');
    const statusEl = document.getElementById('status');
    const results = document.getElementById('results');
    const slots = ['balance_sheet', 'profit_loss', 'cash_flow'];

    generateBtn.addEventListener('click', async () => {
      const formData = new FormData();
      for (const slot of slots) {
        const input = document.getElementById(slot);
        if (input.files.length) {
          formData.append(slot, input.files[0]);
        }
      }

      generateBtn.disabled = true;
      statusEl.textContent = 'Analyzing financial data...';
      results.innerHTML = '';

      try {
        const res = await fetch('/api/report', { method: 'POST', body: formData });
        if (!res.ok) {
          statusEl.textContent = 'Request failed (' + res.status + ').';
          return;
        }
        const json = await res.json();
        statusEl.textContent = 'Analysis completed.';
        renderReport(json);
      } catch (err) {
        statusEl.textContent = 'Request failed: ' + err;
      } finally {
        generateBtn.disabled = false;
      }
    });

    function renderReport(report) {
      const summaries = document.createElement('div');
      summaries.className = 'card';
      summaries.innerHTML = '<h2>AI Summaries</h2>';
      for (const doc of report.documents) {
        const heading = document.createElement('h3');
        heading.textContent = doc.label;
        const body = document.createElement('div');
        body.className = 'summary';
        body.textContent = doc.summary;
        summaries.appendChild(heading);
        summaries.appendChild(body);
      }
      results.appendChild(summaries);

      const panels = document.createElement('div');
      panels.className = 'card';
      panels.innerHTML = '<h2>Visualizations</h2>';
      for (const doc of report.documents) {
        const panel = document.createElement('div');
        // panel_html is produced and escaped server-side
        panel.innerHTML = doc.panel_html;
        panels.appendChild(panel);
      }
      results.appendChild(panels);
    }
  </script>
</body>
</html>"#)
}
