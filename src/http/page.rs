//! The single dashboard page served at `/`.
//!
//! The page only wires controls to the JSON API; every figure and label comes
//! from the server.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>SpaceX Launch Records Dashboard</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { font-family: sans-serif; margin: 0 2rem; }
    h1 { text-align: center; color: #503D36; font-size: 40px; }
    .slider { display: flex; gap: 1rem; align-items: center; }
    .marks { display: flex; justify-content: space-between; font-size: 0.8rem; max-width: 40rem; }
  </style>
</head>
<body>
  <h1 id="title"></h1>

  <input id="site-search" placeholder="Select a Launch Site">
  <select id="site-dropdown"></select>
  <br>

  <div id="success-pie-chart"></div>
  <br>

  <p id="slider-caption"></p>
  <div id="range-slider" class="slider">
    <input id="range-low" type="range">
    <input id="range-high" type="range">
  </div>
  <div id="range-marks" class="marks"></div>
  <p id="output-container-range-slider"></p>

  <div id="success-payload-scatter-chart"></div>

<script>
const $ = (id) => document.getElementById(id);
let options = [];

async function fetchJson(url) {
  const response = await fetch(url);
  const body = await response.json();
  if (!response.ok) throw new Error(body.message);
  return body;
}

function renderOptions(query) {
  const q = query.trim().toLowerCase();
  const dropdown = $("site-dropdown");
  const current = dropdown.value;
  dropdown.innerHTML = "";
  for (const opt of options) {
    if (q && opt.value !== "ALL" && !opt.label.toLowerCase().includes(q)) continue;
    const el = document.createElement("option");
    el.value = opt.value;
    el.textContent = opt.label;
    dropdown.appendChild(el);
  }
  if ([...dropdown.options].some((o) => o.value === current)) dropdown.value = current;
}

function range() {
  let low = Number($("range-low").value);
  let high = Number($("range-high").value);
  if (low > high) [low, high] = [high, low];
  return { low, high };
}

async function onSiteChange() {
  const site = encodeURIComponent($("site-dropdown").value);
  const pie = await fetchJson(`/api/pie?site=${site}`);
  Plotly.react("success-pie-chart", pie.data, pie.layout);
  await onScatterInputs();
}

async function onRangeChange() {
  const { low, high } = range();
  const label = await fetchJson(`/api/range-label?low=${low}&high=${high}`);
  $(label.target).textContent = label.text;
  await onScatterInputs();
}

async function onScatterInputs() {
  const site = encodeURIComponent($("site-dropdown").value);
  const { low, high } = range();
  const fig = await fetchJson(`/api/scatter?site=${site}&low=${low}&high=${high}`);
  Plotly.react("success-payload-scatter-chart", fig.data, fig.layout);
}

async function init() {
  const layout = await fetchJson("/api/layout");
  $("title").textContent = layout.title;
  $("slider-caption").textContent = layout.slider_caption;

  options = layout.dropdown.options;
  $("site-search").placeholder = layout.dropdown.placeholder;
  renderOptions("");
  $("site-dropdown").value = layout.dropdown.initial;

  const s = layout.slider;
  for (const id of ["range-low", "range-high"]) {
    Object.assign($(id), { min: s.min, max: s.max, step: s.step });
  }
  // Initial values are the payload extent, which need not sit on a step.
  $("range-low").step = "any";
  $("range-high").step = "any";
  $("range-low").value = s.initial.low;
  $("range-high").value = s.initial.high;
  $("range-marks").innerHTML = s.marks.map((m) => `<span>${m.label}</span>`).join("");

  $("site-search").addEventListener("input", (e) => renderOptions(e.target.value));
  $("site-dropdown").addEventListener("change", onSiteChange);
  $("range-low").addEventListener("change", onRangeChange);
  $("range-high").addEventListener("change", onRangeChange);

  await onSiteChange();
  await onRangeChange();
}

init().catch((err) => { document.body.insertAdjacentText("beforeend", String(err)); });
</script>
</body>
</html>
"##;
