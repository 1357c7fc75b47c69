//! HTML bootstrap page for the preview client.
//!
//! The server never renders Markdown. This page is a client-side shell: it
//! fetches the raw file text from `/raw`, converts it with `marked`, and
//! sanitizes the result with `DOMPurify` before injecting it into the DOM.
//! The server-selected default file is embedded URL-encoded and is
//! overridable through the page's own `file` query parameter.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left intact by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Placeholder substituted with the URL-encoded default filename.
const DEFAULT_FILE_SLOT: &str = "__DEFAULT_FILE__";

const PAGE: &str = r#"<!doctype html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>Markdown 预览</title>
  <style>
    body { margin: 0; font-family: -apple-system,BlinkMacSystemFont,Segoe UI,Roboto,Helvetica,Arial; line-height: 1.6; color: #1f2328; }
    header { padding: 12px 16px; background: #0d1117; color: #c9d1d9; display: flex; align-items: center; gap: 12px; }
    header input { flex: 1; padding: 8px 10px; border-radius: 6px; border: 1px solid #30363d; background: #161b22; color: #c9d1d9; }
    main { max-width: 860px; padding: 24px; margin: 0 auto; }
    main img { max-width: 100%; }
    pre, code { background: #f6f8fa; }
    pre { padding: 12px; overflow: auto; }
    h1,h2,h3 { border-bottom: 1px solid #d0d7de; padding-bottom: .3em; }
    table { border-collapse: collapse; }
    table, th, td { border: 1px solid #d0d7de; }
    th, td { padding: 6px 10px; }
    .error { color: #cf222e; }
  </style>
  <script src="https://cdn.jsdelivr.net/npm/marked/marked.min.js"></script>
  <script src="https://cdn.jsdelivr.net/npm/dompurify@3.1.6/dist/purify.min.js"></script>
  <script>
    async function load() {
      const params = new URLSearchParams(window.location.search);
      const file = params.get('file') || decodeURIComponent('__DEFAULT_FILE__');
      const input = document.getElementById('file');
      input.value = file;
      if (!file) return;
      try {
        const res = await fetch('/raw?file=' + encodeURIComponent(file));
        if (!res.ok) throw new Error('无法读取文件: ' + res.status);
        const text = await res.text();
        const html = DOMPurify.sanitize(marked.parse(text));
        document.getElementById('app').innerHTML = html;
      } catch (e) {
        document.getElementById('app').innerHTML = '<p class="error">' + e.message + '</p>';
      }
    }
    function go() {
      const v = document.getElementById('file').value.trim();
      const url = new URL(window.location.href);
      url.searchParams.set('file', v);
      window.location.href = url.toString();
    }
    window.addEventListener('DOMContentLoaded', load);
  </script>
  </head>
<body>
  <header>
    <div>Markdown 预览</div>
    <input id="file" placeholder="相对项目根目录的 .md 文件路径，如 背景介绍.md" />
    <button onclick="go()">打开</button>
  </header>
  <main id="app">加载中...</main>
</body>
</html>"#;

/// Percent-encode a value with the `encodeURIComponent` character set.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Render the bootstrap page with the default file embedded.
///
/// The default arrives in the page URL-encoded, so arbitrary filenames
/// cannot break out of the surrounding script string.
pub(crate) fn bootstrap_page(default_file: &str) -> String {
    PAGE.replace(DEFAULT_FILE_SLOT, &encode_component(default_file))
}
