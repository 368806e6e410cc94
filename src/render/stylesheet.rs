//! Embedded stylesheet for HTML digests.
//!
//! Tuned for A4 print-to-PDF: one paper per page, tables and Q&A blocks kept
//! on a single page where possible.

/// CSS inlined into the `<style>` element of every HTML digest.
pub const STYLESHEET: &str = r#":root {
  --color-primary: #2563eb;
  --color-success: #10b981;
  --color-bg: #ffffff;
  --color-bg-alt: #f8fafc;
  --color-border: #d1d5db;
  --color-text: #1f2937;
  --color-text-light: #6b7280;
}

@page { size: A4; margin: 20mm 16mm; }

* { box-sizing: border-box; -webkit-print-color-adjust: exact; print-color-adjust: exact; }

body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Noto Sans SC", "Microsoft YaHei", sans-serif;
  font-size: 11pt;
  line-height: 1.8;
  color: var(--color-text);
  background: var(--color-bg);
  margin: 0;
}

/* Document header */
.doc-header {
  text-align: center;
  padding: 48px 0;
  border-bottom: 4px solid var(--color-primary);
  margin-bottom: 48px;
  page-break-after: always;
}
.doc-header h1 { font-size: 30pt; color: var(--color-primary); margin: 0 0 12px; font-weight: 800; }
.doc-header .subtitle { font-size: 16pt; color: var(--color-text-light); margin: 0 0 16px; }
.doc-header .meta-info { font-size: 11pt; color: var(--color-text-light); margin: 0; }

/* Table of contents */
.toc {
  background: var(--color-bg-alt);
  border: 2px solid var(--color-border);
  border-radius: 12px;
  padding: 32px;
  margin-bottom: 48px;
}
.toc h2 { font-size: 18pt; margin: 0 0 24px; }
.toc ul { list-style: none; padding: 0; margin: 0; }
.toc li { padding: 8px 0; border-bottom: 1px dashed var(--color-border); }
.toc li:last-child { border-bottom: none; }
.toc a { color: var(--color-primary); text-decoration: none; font-weight: 600; }

/* Paper */
.paper { margin-bottom: 48px; }
.paper__head {
  background: linear-gradient(135deg, #eff6ff 0%, #dbeafe 100%);
  border-left: 6px solid var(--color-primary);
  border-radius: 12px;
  padding: 32px;
  margin-bottom: 32px;
}
.paper__title { font-size: 20pt; font-weight: 800; margin: 0 0 16px; line-height: 1.3; }
.paper__meta { font-size: 10.5pt; color: var(--color-text-light); margin: 12px 0; word-break: break-all; }
.paper__meta a { color: var(--color-primary); text-decoration: none; border-bottom: 1px dotted var(--color-primary); }
.paper__score {
  display: inline-block;
  background: var(--color-success);
  color: white;
  padding: 4px 14px;
  border-radius: 16px;
  font-weight: 700;
  font-size: 10pt;
  margin-left: 12px;
}
.paper__takeaway {
  background: white;
  border: 2px solid var(--color-border);
  border-radius: 8px;
  padding: 20px;
  margin-top: 24px;
}
.paper__takeaway-title {
  font-size: 10pt;
  font-weight: 700;
  color: var(--color-text-light);
  margin: 0 0 8px;
  text-transform: uppercase;
  letter-spacing: 1px;
}
.paper__takeaway-content { margin: 0; line-height: 1.7; font-style: italic; }

/* Q&A */
.qa { margin-bottom: 32px; page-break-inside: avoid; }
.qa__q {
  font-size: 14pt;
  font-weight: 700;
  color: var(--color-primary);
  background: linear-gradient(90deg, #eff6ff 0%, #f8fafc 100%);
  border-left: 5px solid var(--color-primary);
  padding: 16px 20px;
  margin: 0 0 20px;
  border-radius: 0 8px 8px 0;
}
.qa__a { padding: 0 8px; }
.qa__a p { margin: 14px 0; text-align: justify; line-height: 1.9; }
.qa__a ul { margin: 14px 0; padding-left: 32px; }
.qa__a li { margin: 10px 0; }

/* Tables */
.table-wrapper { margin: 24px 0; overflow-x: auto; border-radius: 8px; }
table { width: 100%; border-collapse: collapse; font-size: 10pt; }
tr { page-break-inside: avoid; }
th, td { border: 1px solid var(--color-border); padding: 14px 16px; text-align: left; vertical-align: top; }
th { background: #f1f5f9; font-weight: 700; }
tr:nth-child(even) td { background: var(--color-bg-alt); }

/* Inline */
p { margin: 14px 0; }
strong { font-weight: 700; color: #111827; }
code {
  background: #fef3c7;
  padding: 3px 8px;
  border-radius: 4px;
  font-family: "Courier New", Consolas, monospace;
  font-size: 10pt;
  color: #92400e;
}
.formula {
  display: inline-block;
  background: #f3f4f6;
  padding: 4px 10px;
  border-radius: 6px;
  font-family: "Courier New", Consolas, monospace;
  font-size: 10pt;
  border: 1px solid var(--color-border);
}

.page-break { page-break-before: always; margin-top: 48px; border-top: 3px dashed var(--color-border); }

@media print {
  body { font-size: 10.5pt; }
  .paper, .table-wrapper { page-break-inside: avoid; }
  th, td { padding: 10px 12px; }
  a { text-decoration: none; color: var(--color-text); }
}
"#;
