pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Market Scout</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
  form { display: flex; gap: .5rem; flex-wrap: wrap; }
  input { flex: 1; padding: .4rem; }
  .warn { color: #8a6d00; } .error { color: #b00020; }
  pre { background: #f4f4f4; padding: .75rem; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Market Scout</h1>
<p>Enter a location and a business type to get nearby businesses from OpenStreetMap and a short market analysis.</p>
<form id="f">
  <input name="location" placeholder="Banjara Hills, Hyderabad" value="Banjara Hills, Hyderabad">
  <input name="category" placeholder="cafe" value="cafe">
  <button type="submit">Analyze Market</button>
</form>
<div id="out"></div>
<script>
const out = document.getElementById('out');
document.getElementById('f').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const params = new URLSearchParams(new FormData(ev.target));
  out.textContent = 'Analyzing...';
  const res = await fetch('/api/analyze?' + params);
  const body = await res.json();
  out.innerHTML = '';
  const h = document.createElement('h2');
  h.textContent = `Analysis for '${body.category ?? ''}' in '${body.location ?? ''}'`;
  out.appendChild(h);
  const p = document.createElement('pre');
  if (body.status === 'success') {
    p.textContent = (body.analysis ?? '') + `\n\nFound ${body.data.length} businesses:\n` + JSON.stringify(body.data, null, 2);
  } else if (body.status === 'no_results') {
    p.className = 'warn';
    p.textContent = 'No businesses of that type were found for this area. Try a broader location or a different business type.';
  } else {
    p.className = 'error';
    p.textContent = 'An error occurred: ' + (body.analysis ?? body.error);
  }
  out.appendChild(p);
});
</script>
</body>
</html>
"#;
