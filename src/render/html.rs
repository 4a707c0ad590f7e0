use crate::view::ViewerData;

/// Render a self-contained HTML viewer (view models embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_viewer(data: &ViewerData) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as JS object literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LogLens</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; background: #fff; color: #222; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  header h1 { margin: 0; font-size: 18px; }

  .report-tabs { display: flex; align-items: center; gap: 4px; padding: 6px 12px; border-bottom: 1px solid #ddd; background: #fafafa; flex-wrap: wrap; }
  .tab-item { display: inline-flex; align-items: center; gap: 6px; padding: 4px 8px; border: 1px solid #ddd; border-radius: 6px 6px 0 0; cursor: pointer; user-select: none; font-size: 13px; background: #f3f3f3; }
  .tab-item.active { background: #fff; border-bottom-color: #fff; font-weight: 600; }
  .tab-item:hover { background: #e9f2ff; }
  .close-tab { border: none; background: none; cursor: pointer; font-size: 14px; color: #777; padding: 0 2px; }
  .close-tab:hover { color: #b00; }
  .clear-all-tabs { margin-left: auto; border: 1px solid #ddd; border-radius: 6px; background: #fff; padding: 3px 10px; cursor: pointer; font-size: 12px; }

  #display { padding: 12px 16px; overflow: auto; height: calc(100vh - 110px); }

  .welcome-message { max-width: 560px; margin: 48px auto; text-align: center; color: #555; }
  .welcome-message code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
  .error-title { color: #b00020; }
  .empty-state { color: #777; font-style: italic; }

  .general-view { margin: 0; font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; line-height: 1.5; white-space: pre-wrap; }
  .log-line { padding: 1px 0; }
  .level-info { color: #1565c0; }
  .level-warn { color: #ef6c00; }
  .level-error { color: #b00020; }
  .level-debug { color: #6a1b9a; }
  .level-trace { color: #00695c; }
  .level-performance { color: #2e7d32; }
  .level-event { color: #283593; }
  .level-unknown { color: #777; }
  .log-extra { color: #555; }
  .log-extra.color-green { color: #2e7d32; }
  .log-extra.color-yellow { color: #f9a825; }
  .log-extra.color-orange { color: #ef6c00; }
  .log-extra.color-red { color: #b00020; }

  .summary-header h2, .hotspot-table-container h2 { font-size: 16px; margin: 12px 0 8px; }
  .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px; }
  .stat-card { border: 1px solid #ddd; border-radius: 8px; padding: 10px 12px; cursor: pointer; user-select: none; background: #fafafa; }
  .stat-card-header { font-size: 13px; color: #666; }
  .stat-card-value { font-size: 22px; font-weight: 600; margin: 4px 0; font-variant-numeric: tabular-nums; }
  .stat-details { max-height: 0; overflow: hidden; transition: max-height 0.2s ease; }
  .detail-item { display: flex; justify-content: space-between; font-size: 13px; padding: 2px 0; color: #444; }

  .hotspot-table { margin-top: 4px; }
  .hotspot-row { display: grid; grid-template-columns: 2fr 1fr 1fr 80px; gap: 12px; align-items: center; padding: 6px 4px; border-bottom: 1px solid #eee; font-size: 13px; }
  .hotspot-source { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; overflow-wrap: anywhere; }
  .hotspot-count { text-align: right; font-variant-numeric: tabular-nums; }
  .progress-bar-container { background: #eee; border-radius: 4px; height: 8px; margin-top: 2px; overflow: hidden; }
  .progress-bar-fill { height: 100%; border-radius: 4px; }
  .progress-bar-fill.color-green { background: #2e7d32; }
  .progress-bar-fill.color-yellow { background: #f9a825; }
  .progress-bar-fill.color-orange { background: #ef6c00; }
  .progress-bar-fill.color-red { background: #b00020; }
</style>
</head>
<body>
<header>
  <h1>LogLens</h1>
</header>

<div id="tabs" class="report-tabs" style="display:none;"></div>
<div id="display"></div>

<script>
// Embedded viewer data (JSON object literal)
const DATA = __DATA__;

const state = {
  tabs: DATA.tabs.tabs.slice(),
  activeId: DATA.active
};

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function renderTabs() {
  // Full destroy-and-recreate; tab elements carry no state worth keeping.
  const strip = document.getElementById("tabs");
  strip.innerHTML = "";

  if (state.tabs.length === 0) {
    strip.style.display = "none";
    return;
  }
  strip.style.display = "flex";

  for (const tab of state.tabs) {
    const el = document.createElement("div");
    el.className = "tab-item" + (tab.id === state.activeId ? " active" : "");

    const label = document.createElement("span");
    label.textContent = tab.name;
    label.onclick = () => displayReport(tab.id);
    el.appendChild(label);

    const close = document.createElement("button");
    close.className = "close-tab";
    close.innerHTML = "&times;";
    close.onclick = (e) => {
      e.stopPropagation();
      closeReport(tab.id);
    };
    el.appendChild(close);

    strip.appendChild(el);
  }

  if (state.tabs.length > 1) {
    const clearAll = document.createElement("button");
    clearAll.className = "clear-all-tabs";
    clearAll.textContent = "Clear All";
    clearAll.onclick = clearAllReports;
    strip.appendChild(clearAll);
  }
}

function displayReport(id) {
  state.activeId = id;
  renderBody(DATA.bodies[id]);
  renderTabs();
}

function closeReport(id) {
  state.tabs = state.tabs.filter(t => t.id !== id);
  renderTabs();
  if (state.tabs.length > 0) {
    if (state.activeId === id) displayReport(state.tabs[0].id);
  } else {
    state.activeId = null;
    showWelcome();
  }
}

function clearAllReports() {
  state.tabs = [];
  state.activeId = null;
  renderTabs();
  showWelcome();
}

function renderBody(body) {
  const display = document.getElementById("display");
  display.innerHTML = "";

  if (!body) {
    showWelcome();
  } else if (body.kind === "general") {
    renderGeneralView(body);
  } else if (body.kind === "performance") {
    renderPerformanceView(body);
  } else {
    showError(body.message);
  }
}

function renderGeneralView(body) {
  const display = document.getElementById("display");

  if (body.lines.length === 0) {
    display.innerHTML = '<p class="empty-state">No log entries found.</p>';
    return;
  }

  const container = document.createElement("pre");
  container.className = "general-view";

  for (const line of body.lines) {
    const div = document.createElement("div");
    div.className = "log-line";

    const level = document.createElement("span");
    level.className = line.level_class;
    level.textContent = `[${line.level_tag}] `;
    div.appendChild(level);

    const ts = new Date(line.timestamp_ms).toLocaleString();
    div.appendChild(document.createTextNode(`${ts} [${line.module}] ${line.message}`));

    for (const extra of line.extras) {
      const span = document.createElement("span");
      span.className = "log-extra" + (extra.band ? " " + extra.band : "");
      span.textContent = ` - ${extra.text}`;
      div.appendChild(span);
    }

    container.appendChild(div);
  }

  display.appendChild(container);
}

function renderPerformanceView(body) {
  const display = document.getElementById("display");

  const summary = document.createElement("div");
  summary.innerHTML = `
    <div class="summary-header"><h2>Performance Summary</h2></div>
    <div class="summary-grid"></div>
  `;
  const grid = summary.querySelector(".summary-grid");
  for (const card of body.cards) grid.appendChild(createStatCard(card));
  display.appendChild(summary);

  if (body.hotspots.length > 0) {
    const container = document.createElement("div");
    container.className = "hotspot-table-container";
    container.innerHTML = `<h2>Hotspots</h2><div class="hotspot-table"></div>`;
    const table = container.querySelector(".hotspot-table");
    for (const row of body.hotspots) table.appendChild(createHotspotRow(row));
    display.appendChild(container);
  }
}

function createStatCard(card) {
  const el = document.createElement("div");
  el.className = "stat-card";

  const details = card.details
    .map(d => `<div class="detail-item"><span>${escapeHtml(d.label)}</span><strong>${escapeHtml(d.value)}</strong></div>`)
    .join("");

  el.innerHTML = `
    <div class="stat-card-header"><span>${escapeHtml(card.title)}</span></div>
    <div class="stat-card-value">${escapeHtml(card.value)}</div>
    <div class="stat-details">${details}</div>
  `;

  const detailsEl = el.querySelector(".stat-details");
  el.addEventListener("click", () => {
    el.classList.toggle("expanded");
    detailsEl.style.maxHeight = el.classList.contains("expanded")
      ? detailsEl.scrollHeight + "px"
      : "0";
  });

  return el;
}

function createHotspotRow(row) {
  const el = document.createElement("div");
  el.className = "hotspot-row";
  el.innerHTML = `
    <div class="hotspot-source">${escapeHtml(row.source)}</div>
    <div>
      <span>${escapeHtml(row.self_time.text)}</span>
      <div class="progress-bar-container">
        <div class="progress-bar-fill ${row.self_time.band}" style="width: ${row.self_time.width}%;"></div>
      </div>
    </div>
    <div>
      <span>${escapeHtml(row.total_time.text)}</span>
      <div class="progress-bar-container">
        <div class="progress-bar-fill ${row.total_time.band}" style="width: ${row.total_time.width}%;"></div>
      </div>
    </div>
    <div class="hotspot-count">${row.count}</div>
  `;
  return el;
}

function showError(message) {
  const display = document.getElementById("display");
  display.innerHTML = `
    <div class="welcome-message">
      <h2 class="error-title">Error</h2>
      <p>${escapeHtml(message)}</p>
    </div>
  `;
}

function showWelcome() {
  const display = document.getElementById("display");
  display.innerHTML = `
    <div class="welcome-message">
      <h2>Waiting for data...</h2>
      <p>The viewer supports two log types: <strong>GENERAL</strong> for plain
      text logs, and <strong>PERFORMANCE_REPORT</strong> for detailed
      performance metrics with progress bars and color codes. The
      <code>logType</code> key in the JSON root determines the view.</p>
    </div>
  `;
}

renderTabs();
if (state.activeId) {
  renderBody(DATA.bodies[state.activeId]);
} else if (DATA.notices.length > 0) {
  showError(DATA.notices[DATA.notices.length - 1]);
} else {
  showWelcome();
}
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
